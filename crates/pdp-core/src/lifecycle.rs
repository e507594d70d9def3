//! Fetch lifecycle for the product detail page.
//!
//! Three phases: `Loading -> {Loaded, NotFound}`. One fetch is outstanding
//! at a time; re-entering `Loading` happens only when the identifier
//! changes, which restarts the sequence and discards prior product state.
//!
//! Each `begin` hands out a generation ticket. A resolve carrying a
//! superseded ticket is dropped, so a late response from an earlier
//! request can never overwrite the state of a newer one.

use crate::error::CatalogError;
use crate::product::Product;

/// Where the fetch currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPhase {
    /// Request in flight; render the loading skeleton.
    Loading,
    /// Product loaded; render the full detail view.
    Loaded(Product),
    /// Request failed in any way; render the not-found fallback.
    NotFound,
}

/// Ticket identifying one initiated fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// The fetch state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFetch {
    phase: FetchPhase,
    generation: u64,
}

impl ProductFetch {
    /// Start in `Loading`, before any fetch has been initiated.
    pub fn new() -> Self {
        Self {
            phase: FetchPhase::Loading,
            generation: 0,
        }
    }

    /// Begin a fetch: enter `Loading` and invalidate outstanding tickets.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = FetchPhase::Loading;
        FetchTicket(self.generation)
    }

    /// Settle the fetch identified by `ticket`.
    ///
    /// Returns `true` if the result was applied, `false` if the ticket was
    /// superseded by a later `begin` and the result discarded.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Product, CatalogError>,
    ) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.phase = match result {
            Ok(product) => FetchPhase::Loaded(product),
            Err(CatalogError::NotFound(_)) => FetchPhase::NotFound,
        };
        true
    }

    /// Current phase.
    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    /// Whether the fetch is still in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }

    /// The loaded product, if any.
    pub fn product(&self) -> Option<&Product> {
        match &self.phase {
            FetchPhase::Loaded(product) => Some(product),
            _ => None,
        }
    }
}

impl Default for ProductFetch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: 10.0,
            old_price: None,
            images: Vec::new(),
            description: None,
            brand: None,
            rating: None,
        }
    }

    #[test]
    fn test_starts_loading() {
        let fetch = ProductFetch::new();
        assert!(fetch.is_loading());
        assert_eq!(fetch.product(), None);
    }

    #[test]
    fn test_success_transitions_loading_to_loaded_once() {
        let mut fetch = ProductFetch::new();
        let ticket = fetch.begin();
        assert!(fetch.is_loading());

        assert!(fetch.resolve(ticket, Ok(product("a"))));
        assert!(!fetch.is_loading());
        assert_eq!(fetch.product().unwrap().id.as_str(), "a");

        // The same ticket cannot flip the state a second time after a new
        // fetch begins.
        let _later = fetch.begin();
        assert!(!fetch.resolve(ticket, Ok(product("zombie"))));
        assert!(fetch.is_loading());
    }

    #[test]
    fn test_failure_transitions_to_not_found() {
        let mut fetch = ProductFetch::new();
        let ticket = fetch.begin();
        assert!(fetch.resolve(
            ticket,
            Err(CatalogError::NotFound("prod-9".to_string()))
        ));
        assert_eq!(*fetch.phase(), FetchPhase::NotFound);
        assert_eq!(fetch.product(), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut fetch = ProductFetch::new();
        let first = fetch.begin();
        // Identifier changes before the first response arrives.
        let second = fetch.begin();

        assert!(!fetch.resolve(first, Ok(product("old"))));
        assert!(fetch.is_loading());

        assert!(fetch.resolve(second, Ok(product("new"))));
        assert_eq!(fetch.product().unwrap().id.as_str(), "new");
    }

    #[test]
    fn test_identifier_change_discards_prior_product() {
        let mut fetch = ProductFetch::new();
        let ticket = fetch.begin();
        fetch.resolve(ticket, Ok(product("a")));
        assert!(fetch.product().is_some());

        fetch.begin();
        assert!(fetch.is_loading());
        assert_eq!(fetch.product(), None);
    }
}
