//! Recipe search and detail viewing backed by the Spoonacular API.
//!
//! The crate splits into a thin HTTP client ([`client`]), two view state
//! machines ([`search`] and [`detail`]) driven through explicit dispatch,
//! and pure text presentation ([`render`]). The `foodies` binary wires them
//! into an interactive shell with a list route and a detail route.

pub mod client;
pub mod config;
pub mod cuisines;
pub mod detail;
pub mod error;
pub mod model;
pub mod render;
pub mod search;

pub use client::{RecipeApi, SpoonacularClient};
pub use config::AppConfig;
pub use detail::DetailView;
pub use error::FoodiesError;
pub use model::{RecipeDetail, RecipeSummary, SearchCriteria, SearchResults, PAGE_SIZE};
pub use search::{FetchTicket, SearchEvent, SearchView};
