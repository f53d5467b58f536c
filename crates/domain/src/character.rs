use crate::film::FilmSummary;
use serde::{Deserialize, Serialize};

/// Flattened list projection of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: u32,
    pub name: String,
}

/// Fully resolved character view.
///
/// `movies` contains every film the upstream record references, already
/// resolved to summaries. A detail is never returned with unresolved
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub id: u32,
    pub name: String,
    pub gender: String,
    pub height: String,
    pub mass: String,
    pub birth_year: String,
    pub eye_color: String,
    pub hair_color: String,
    pub movies: Vec<FilmSummary>,
}
