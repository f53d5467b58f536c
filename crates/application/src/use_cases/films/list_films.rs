use crate::ports::FetchClient;
use crate::swapi::{decode, encode_query_value, parse_uid, FilmProperties, ListResponse};
use holocron_domain::{DomainError, FilmSummary};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct ListFilmsUseCase {
    client: Arc<dyn FetchClient>,
}

impl ListFilmsUseCase {
    pub fn new(client: Arc<dyn FetchClient>) -> Self {
        Self { client }
    }

    /// List films, optionally filtered server-side by title. Normalizes
    /// both raw list shapes to `{id, title}` summaries in server order.
    #[instrument(skip(self))]
    pub async fn execute(&self, search: Option<&str>) -> Result<Vec<FilmSummary>, DomainError> {
        let (path, cache_key) = match search {
            Some(term) => (
                format!("/films?title={}", encode_query_value(term)),
                format!("films:list:{term}"),
            ),
            None => ("/films".to_string(), "films:list".to_string()),
        };

        let body = self.client.get_json(&path, Some(&cache_key), None).await?;
        let list: ListResponse<FilmProperties> = decode(body)?;

        let summaries = if let Some(envelopes) = list.result {
            envelopes
                .into_iter()
                .map(|env| {
                    Ok(FilmSummary {
                        id: parse_uid(&env.uid)?,
                        title: env.properties.title,
                    })
                })
                .collect::<Result<Vec<_>, DomainError>>()?
        } else {
            list.results
                .unwrap_or_default()
                .into_iter()
                .map(|entry| {
                    Ok(FilmSummary {
                        id: parse_uid(&entry.uid)?,
                        title: entry.title.unwrap_or_default(),
                    })
                })
                .collect::<Result<Vec<_>, DomainError>>()?
        };

        debug!(count = summaries.len(), "Film list normalized");
        Ok(summaries)
    }
}
