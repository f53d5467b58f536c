use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClearQuery {
    pub pattern: Option<String>,
}
