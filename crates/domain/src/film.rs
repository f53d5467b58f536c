use crate::character::CharacterSummary;
use serde::{Deserialize, Serialize};

/// Flattened list projection of a film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmSummary {
    pub id: u32,
    pub title: String,
}

/// Fully resolved film view, `characters` ordered as the upstream
/// reference list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmDetail {
    pub id: u32,
    pub title: String,
    pub opening_crawl: String,
    pub characters: Vec<CharacterSummary>,
}
