mod envelope;
mod health;
mod query;

pub use envelope::ApiResponse;
pub use health::HealthData;
pub use query::{ClearQuery, SearchQuery};
