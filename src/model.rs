use serde::Deserialize;

/// Number of results requested per page of search results.
pub const PAGE_SIZE: u32 = 5;

/// Parameters for a recipe search request.
///
/// An empty `query` or `cuisine` is sent to the API as-is and treated
/// upstream as "unfiltered".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub query: String,
    pub cuisine: String,
    /// 1-based page number.
    pub page: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        SearchCriteria {
            query: String::new(),
            cuisine: String::new(),
            page: 1,
        }
    }
}

impl SearchCriteria {
    /// Number of leading results the API should skip for the current page.
    pub fn offset(&self) -> u32 {
        (self.page - 1) * PAGE_SIZE
    }
}

/// Lightweight recipe entry as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
}

/// One page of search results plus the total match count the API reports
/// for the full result set, independent of the pagination window.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
}

/// Full recipe document fetched by identifier, distinct from the
/// lightweight [`RecipeSummary`] shown in search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub dish_types: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
    /// Raw HTML fragment from the API. Kept untouched here; stripping the
    /// markup is the presentation layer's concern.
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ingredient {
    pub original: String,
}

/// The API splits instructions into groups (e.g. one per sub-recipe),
/// each carrying its own ordered steps.
#[derive(Debug, Clone, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

impl RecipeDetail {
    /// All instruction steps flattened into one sequence, preserving group
    /// order first and within-group order second. Step numbers restart per
    /// group and are displayed as returned.
    pub fn flattened_steps(&self) -> impl Iterator<Item = &InstructionStep> {
        self.analyzed_instructions
            .iter()
            .flat_map(|group| group.steps.iter())
    }
}
