use crate::ports::FetchClient;
use crate::swapi::{decode, parse_uid, CharacterProperties, DetailResponse, FilmProperties};
use crate::use_cases::resolve::{join_error, resolve_references, spawn_fetch};
use holocron_domain::{CharacterSummary, DomainError, FilmDetail};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GetFilmUseCase {
    client: Arc<dyn FetchClient>,
}

impl GetFilmUseCase {
    pub fn new(client: Arc<dyn FetchClient>) -> Self {
        Self { client }
    }

    /// Fetch one film and resolve every referenced character to a summary
    /// before returning. Character order follows the upstream reference
    /// list; any sub-fetch failure fails the whole operation. Fetches run
    /// detached, so a cancelled caller still warms the cache.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: u32) -> Result<FilmDetail, DomainError> {
        let body = spawn_fetch(&self.client, format!("/films/{id}"), format!("films:{id}"))
            .await
            .map_err(join_error)??;

        let detail: DetailResponse<FilmProperties> = decode(body)?;
        let envelope = detail
            .result
            .ok_or_else(|| DomainError::NotFound(format!("film {id} not found")))?;

        let film_id = parse_uid(&envelope.uid)?;
        let props = envelope.properties;

        let characters = resolve_references::<CharacterProperties, CharacterSummary, _>(
            &self.client,
            &props.characters,
            |character| {
                Ok(CharacterSummary {
                    id: parse_uid(&character.uid)?,
                    name: character.properties.name,
                })
            },
        )
        .await?;

        debug!(id = film_id, characters = characters.len(), "Film enriched");

        Ok(FilmDetail {
            id: film_id,
            title: props.title,
            opening_crawl: props.opening_crawl,
            characters,
        })
    }
}
