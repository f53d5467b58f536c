use crate::ports::FetchClient;
use crate::swapi::{decode, encode_query_value, parse_uid, CharacterProperties, ListResponse};
use holocron_domain::{CharacterSummary, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ListCharactersUseCase {
    client: Arc<dyn FetchClient>,
}

impl ListCharactersUseCase {
    pub fn new(client: Arc<dyn FetchClient>) -> Self {
        Self { client }
    }

    /// List characters, optionally filtered server-side by name.
    ///
    /// The unfiltered endpoint returns plain `{uid, name}` entries while a
    /// search returns full resource envelopes; both normalize to the same
    /// summary shape in server order. An absent result is an empty list,
    /// never an error.
    #[instrument(skip(self))]
    pub async fn execute(&self, search: Option<&str>) -> Result<Vec<CharacterSummary>, DomainError> {
        let (path, cache_key) = match search {
            Some(term) => (
                format!("/people?name={}", encode_query_value(term)),
                format!("people:list:{term}"),
            ),
            None => ("/people".to_string(), "people:list".to_string()),
        };

        let body = self.client.get_json(&path, Some(&cache_key), None).await?;
        let list: ListResponse<CharacterProperties> = decode(body)?;

        let summaries = if let Some(envelopes) = list.result {
            envelopes
                .into_iter()
                .map(|env| {
                    Ok(CharacterSummary {
                        id: parse_uid(&env.uid)?,
                        name: env.properties.name,
                    })
                })
                .collect::<Result<Vec<_>, DomainError>>()?
        } else {
            list.results
                .unwrap_or_default()
                .into_iter()
                .map(|entry| {
                    Ok(CharacterSummary {
                        id: parse_uid(&entry.uid)?,
                        name: entry.name.unwrap_or_default(),
                    })
                })
                .collect::<Result<Vec<_>, DomainError>>()?
        };

        debug!(count = summaries.len(), "Character list normalized");
        Ok(summaries)
    }
}
