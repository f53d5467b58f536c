use crate::ports::FetchClient;
use crate::swapi::{decode, parse_uid, CharacterProperties, DetailResponse, FilmProperties};
use crate::use_cases::resolve::{join_error, resolve_references, spawn_fetch};
use holocron_domain::{CharacterDetail, DomainError, FilmSummary};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct GetCharacterUseCase {
    client: Arc<dyn FetchClient>,
}

impl GetCharacterUseCase {
    pub fn new(client: Arc<dyn FetchClient>) -> Self {
        Self { client }
    }

    /// Fetch one character and resolve every referenced film to a summary
    /// before returning. Film order follows the upstream reference list.
    /// Fetches run detached, so a cancelled caller still warms the cache.
    #[instrument(skip(self))]
    pub async fn execute(&self, id: u32) -> Result<CharacterDetail, DomainError> {
        let body = spawn_fetch(&self.client, format!("/people/{id}"), format!("people:{id}"))
            .await
            .map_err(join_error)??;

        let detail: DetailResponse<CharacterProperties> = decode(body)?;
        let envelope = detail
            .result
            .ok_or_else(|| DomainError::NotFound(format!("character {id} not found")))?;

        let character_id = parse_uid(&envelope.uid)?;
        let props = envelope.properties;

        let movies = resolve_references::<FilmProperties, FilmSummary, _>(
            &self.client,
            &props.films,
            |film| {
                Ok(FilmSummary {
                    id: parse_uid(&film.uid)?,
                    title: film.properties.title,
                })
            },
        )
        .await?;

        debug!(id = character_id, films = movies.len(), "Character enriched");

        Ok(CharacterDetail {
            id: character_id,
            name: props.name,
            gender: props.gender,
            height: props.height,
            mass: props.mass,
            birth_year: props.birth_year,
            eye_color: props.eye_color,
            hair_color: props.hair_color,
            movies,
        })
    }
}
