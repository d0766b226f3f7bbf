use log::error;

use crate::error::FoodiesError;
use crate::model::{RecipeSummary, SearchCriteria, SearchResults, PAGE_SIZE};

/// User interactions the search view responds to.
///
/// `EditQuery` is the per-keystroke change path and `CommitQuery` the
/// Enter-key path; both write the same committed value into the query so the
/// two input paths converge regardless of event timing.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    EditQuery(String),
    CommitQuery(String),
    SubmitSearch,
    SelectCuisine(String),
    PreviousPage,
    NextPage,
}

/// Handle for one fetch cycle issued by [`SearchView::dispatch`].
///
/// The driver performs the request described by `criteria` and feeds the
/// outcome back through [`SearchView::complete`]. Each ticket carries a
/// monotonically increasing sequence number; a completion whose ticket has
/// been superseded by a newer dispatch is discarded, so a slow response for
/// an old page can never overwrite the state of a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub criteria: SearchCriteria,
}

/// State machine behind the recipe list page: committed query, cuisine
/// filter, page number, loading flag and the current result set. All
/// transitions go through [`dispatch`](Self::dispatch).
#[derive(Debug)]
pub struct SearchView {
    query: String,
    cuisine: String,
    page: u32,
    loading: bool,
    recipes: Vec<RecipeSummary>,
    total_results: u64,
    seq: u64,
}

impl Default for SearchView {
    fn default() -> Self {
        SearchView {
            query: String::new(),
            cuisine: String::new(),
            page: 1,
            loading: false,
            recipes: Vec::new(),
            total_results: 0,
            seq: 0,
        }
    }
}

impl SearchView {
    pub fn new() -> Self {
        SearchView::default()
    }

    /// Apply one event. Returns a ticket when the transition requires a
    /// fetch cycle; the caller performs the request and reports back via
    /// [`complete`](Self::complete).
    pub fn dispatch(&mut self, event: SearchEvent) -> Option<FetchTicket> {
        match event {
            SearchEvent::EditQuery(text) | SearchEvent::CommitQuery(text) => {
                self.query = text;
                None
            }
            SearchEvent::SubmitSearch => {
                // Whitespace-only queries are a no-op: no request, no page reset.
                if self.query.trim().is_empty() {
                    return None;
                }
                self.page = 1;
                Some(self.issue())
            }
            SearchEvent::SelectCuisine(cuisine) => {
                // A cuisine change always searches, even with an empty query.
                self.cuisine = cuisine;
                Some(self.issue())
            }
            SearchEvent::PreviousPage => {
                if !self.has_previous() {
                    return None;
                }
                self.page -= 1;
                Some(self.issue())
            }
            SearchEvent::NextPage => {
                if !self.has_next() {
                    return None;
                }
                self.page += 1;
                Some(self.issue())
            }
        }
    }

    /// Finish the fetch cycle for `ticket`. Success replaces the result set
    /// and total count; failure is logged and leaves the previous (possibly
    /// stale) results on display. Completions for superseded tickets are
    /// ignored entirely.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<SearchResults, FoodiesError>) {
        if ticket.seq != self.seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(results) => {
                self.recipes = results.results;
                self.total_results = results.total_results;
            }
            Err(err) => error!("recipe search failed: {}", err),
        }
    }

    fn issue(&mut self) -> FetchTicket {
        self.seq += 1;
        self.loading = true;
        FetchTicket {
            seq: self.seq,
            criteria: self.criteria(),
        }
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            query: self.query.clone(),
            cuisine: self.cuisine.clone(),
            page: self.page,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        (self.page as u64) * (PAGE_SIZE as u64) < self.total_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(titles: &[&str], total: u64) -> SearchResults {
        SearchResults {
            results: titles
                .iter()
                .enumerate()
                .map(|(i, t)| RecipeSummary {
                    id: i as u64 + 1,
                    title: t.to_string(),
                    image: String::new(),
                })
                .collect(),
            total_results: total,
        }
    }

    fn searched(view: &mut SearchView, query: &str, total: u64) {
        view.dispatch(SearchEvent::CommitQuery(query.to_string()));
        let ticket = view.dispatch(SearchEvent::SubmitSearch).unwrap();
        view.complete(ticket, Ok(results(&["a", "b", "c", "d", "e"], total)));
    }

    #[test]
    fn test_empty_query_submit_is_a_noop() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 20);
        let ticket = view.dispatch(SearchEvent::NextPage).unwrap();
        view.complete(ticket, Ok(results(&["f"], 20)));
        assert_eq!(view.page(), 2);

        view.dispatch(SearchEvent::CommitQuery("   ".to_string()));
        assert!(view.dispatch(SearchEvent::SubmitSearch).is_none());
        // No request, no page reset.
        assert_eq!(view.page(), 2);
        assert!(!view.loading());
    }

    #[test]
    fn test_submit_resets_to_first_page() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 20);
        let ticket = view.dispatch(SearchEvent::NextPage).unwrap();
        view.complete(ticket, Ok(results(&["f"], 20)));
        assert_eq!(view.page(), 2);

        let ticket = view.dispatch(SearchEvent::SubmitSearch).unwrap();
        assert_eq!(ticket.criteria.page, 1);
        assert_eq!(view.page(), 1);
        assert!(view.loading());
    }

    #[test]
    fn test_edit_and_commit_paths_converge() {
        let mut view = SearchView::new();
        view.dispatch(SearchEvent::EditQuery("past".to_string()));
        assert_eq!(view.query(), "past");
        view.dispatch(SearchEvent::CommitQuery("pasta".to_string()));
        assert_eq!(view.query(), "pasta");
    }

    #[test]
    fn test_cuisine_change_searches_with_empty_query() {
        let mut view = SearchView::new();
        let ticket = view
            .dispatch(SearchEvent::SelectCuisine("Italian".to_string()))
            .expect("cuisine change must always fetch");
        assert_eq!(ticket.criteria.cuisine, "Italian");
        assert_eq!(ticket.criteria.query, "");
        assert!(view.loading());
    }

    #[test]
    fn test_cuisine_change_replaces_only_the_result_set() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 20);
        let page_ticket = view.dispatch(SearchEvent::NextPage).unwrap();
        view.complete(page_ticket, Ok(results(&["f"], 20)));

        let ticket = view
            .dispatch(SearchEvent::SelectCuisine("Thai".to_string()))
            .unwrap();
        // Query and page are untouched by the cuisine transition itself.
        assert_eq!(view.query(), "soup");
        assert_eq!(view.page(), 2);

        view.complete(ticket, Ok(results(&["g", "h"], 7)));
        assert_eq!(view.recipes().len(), 2);
        assert_eq!(view.total_results(), 7);
    }

    #[test]
    fn test_previous_disabled_on_first_page() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 20);
        assert!(!view.has_previous());
        assert!(view.dispatch(SearchEvent::PreviousPage).is_none());
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_next_enablement_against_total_results() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 12);
        // totalResults = 12, page 1: 1*5 < 12.
        assert!(view.has_next());

        let ticket = view.dispatch(SearchEvent::NextPage).unwrap();
        assert_eq!(ticket.criteria.page, 2);
        view.complete(ticket, Ok(results(&["f"], 12)));

        let ticket = view.dispatch(SearchEvent::NextPage).unwrap();
        view.complete(ticket, Ok(results(&["g", "h"], 12)));

        // Page 3: 3*5 = 15 >= 12.
        assert_eq!(view.page(), 3);
        assert!(!view.has_next());
        assert!(view.dispatch(SearchEvent::NextPage).is_none());
        assert_eq!(view.page(), 3);
    }

    #[test]
    fn test_result_order_is_preserved() {
        let mut view = SearchView::new();
        view.dispatch(SearchEvent::CommitQuery("cake".to_string()));
        let ticket = view.dispatch(SearchEvent::SubmitSearch).unwrap();
        view.complete(ticket, Ok(results(&["Carrot", "Apple", "Banana"], 3)));

        let titles: Vec<&str> = view.recipes().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Carrot", "Apple", "Banana"]);
    }

    #[test]
    fn test_failed_fetch_keeps_stale_results() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 20);
        assert_eq!(view.recipes().len(), 5);

        let ticket = view.dispatch(SearchEvent::NextPage).unwrap();
        view.complete(
            ticket,
            Err(FoodiesError::RequestFailed("status 500".to_string())),
        );

        assert!(!view.loading());
        assert_eq!(view.recipes().len(), 5);
        assert_eq!(view.total_results(), 20);
    }

    #[test]
    fn test_superseded_ticket_is_discarded() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 40);

        let old = view.dispatch(SearchEvent::NextPage).unwrap();
        let new = view.dispatch(SearchEvent::NextPage).unwrap();
        assert_eq!(view.page(), 3);

        // The page-2 response arrives after the page-3 dispatch: discarded.
        view.complete(old, Ok(results(&["stale"], 40)));
        assert!(view.loading());
        assert_eq!(view.recipes()[0].title, "a");

        view.complete(new, Ok(results(&["fresh"], 40)));
        assert!(!view.loading());
        assert_eq!(view.recipes()[0].title, "fresh");
    }

    #[test]
    fn test_old_failure_does_not_clear_loading_of_newer_fetch() {
        let mut view = SearchView::new();
        searched(&mut view, "soup", 40);

        let old = view.dispatch(SearchEvent::NextPage).unwrap();
        let new = view.dispatch(SearchEvent::NextPage).unwrap();

        view.complete(
            old,
            Err(FoodiesError::RequestFailed("timed out".to_string())),
        );
        // The loading flag tracks the latest ticket, which is still pending.
        assert!(view.loading());

        view.complete(new, Ok(results(&["fresh"], 40)));
        assert!(!view.loading());
    }
}
