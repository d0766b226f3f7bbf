use log::error;

use crate::error::FoodiesError;
use crate::model::RecipeDetail;

/// Handle for one detail fetch, sequence-tagged like the search view's
/// [`FetchTicket`](crate::search::FetchTicket).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    seq: u64,
    pub id: u64,
}

/// State behind the per-recipe detail page: the loaded record and a loading
/// flag. Owns no multi-step state beyond that.
#[derive(Debug, Default)]
pub struct DetailView {
    recipe: Option<RecipeDetail>,
    loading: bool,
    seq: u64,
}

impl DetailView {
    pub fn new() -> Self {
        DetailView::default()
    }

    /// Navigate to a recipe identifier, starting a fetch cycle. The caller
    /// performs the request and reports back via [`complete`](Self::complete).
    pub fn show(&mut self, id: u64) -> DetailTicket {
        self.seq += 1;
        self.loading = true;
        DetailTicket { seq: self.seq, id }
    }

    /// Finish the fetch cycle for `ticket`. Failure is logged and the
    /// previously displayed record, if any, stays in place. Completions for
    /// superseded tickets are ignored.
    pub fn complete(&mut self, ticket: DetailTicket, result: Result<RecipeDetail, FoodiesError>) {
        if ticket.seq != self.seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(detail) => self.recipe = Some(detail),
            Err(err) => error!("recipe detail fetch failed: {}", err),
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn recipe(&self) -> Option<&RecipeDetail> {
        self.recipe.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: u64, title: &str) -> RecipeDetail {
        serde_json::from_str(&format!(r#"{{"id": {}, "title": "{}"}}"#, id, title)).unwrap()
    }

    #[test]
    fn test_successful_fetch_stores_the_record() {
        let mut view = DetailView::new();
        let ticket = view.show(7);
        assert!(view.loading());
        assert_eq!(ticket.id, 7);

        view.complete(ticket, Ok(detail(7, "Ramen")));
        assert!(!view.loading());
        assert_eq!(view.recipe().unwrap().title, "Ramen");
    }

    #[test]
    fn test_failed_fetch_keeps_previous_record() {
        let mut view = DetailView::new();
        let ticket = view.show(1);
        view.complete(ticket, Ok(detail(1, "Yakitori")));

        let ticket = view.show(2);
        view.complete(
            ticket,
            Err(FoodiesError::RequestFailed("status 404".to_string())),
        );

        assert!(!view.loading());
        // The prior recipe stays on display rather than resetting to empty.
        assert_eq!(view.recipe().unwrap().title, "Yakitori");
        assert_eq!(view.recipe().unwrap().id, 1);
    }

    #[test]
    fn test_failed_fetch_with_no_prior_record_leaves_none() {
        let mut view = DetailView::new();
        let ticket = view.show(9);
        view.complete(
            ticket,
            Err(FoodiesError::RequestFailed("unreachable".to_string())),
        );
        assert!(view.recipe().is_none());
        assert!(!view.loading());
    }

    #[test]
    fn test_superseded_ticket_is_discarded() {
        let mut view = DetailView::new();
        let old = view.show(1);
        let new = view.show(2);

        view.complete(old, Ok(detail(1, "Old")));
        assert!(view.loading());
        assert!(view.recipe().is_none());

        view.complete(new, Ok(detail(2, "New")));
        assert!(!view.loading());
        assert_eq!(view.recipe().unwrap().title, "New");
    }
}
