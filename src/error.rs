use thiserror::Error;

/// Errors that can occur while searching or fetching recipes
#[derive(Error, Debug)]
pub enum FoodiesError {
    /// Transport failure or non-success HTTP status. The application layer
    /// does not distinguish the two; both end the fetch cycle the same way.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<reqwest::Error> for FoodiesError {
    fn from(err: reqwest::Error) -> Self {
        FoodiesError::RequestFailed(err.to_string())
    }
}
