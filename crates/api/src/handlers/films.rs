use crate::dto::{ApiResponse, SearchQuery};
use crate::errors::ApiError;
use crate::handlers::success;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use holocron_domain::{DomainError, FilmDetail, FilmSummary};

pub async fn list_films(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<FilmSummary>>>, ApiError> {
    let films = state.list_films.execute(query.search.as_deref()).await?;
    Ok(success(films))
}

pub async fn get_film(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FilmDetail>>, ApiError> {
    let id: u32 = id
        .parse()
        .map_err(|_| DomainError::Validation(format!("invalid movie id: {id}")))?;
    let film = state.get_film.execute(id).await?;
    Ok(success(film))
}
