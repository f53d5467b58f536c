use crate::dto::{ApiResponse, SearchQuery};
use crate::errors::ApiError;
use crate::handlers::success;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use holocron_domain::{CharacterDetail, CharacterSummary, DomainError};

pub async fn list_characters(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<CharacterSummary>>>, ApiError> {
    let characters = state.list_characters.execute(query.search.as_deref()).await?;
    Ok(success(characters))
}

pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CharacterDetail>>, ApiError> {
    let id: u32 = id
        .parse()
        .map_err(|_| DomainError::Validation(format!("invalid character id: {id}")))?;
    let character = state.get_character.execute(id).await?;
    Ok(success(character))
}
