use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::state::{create_state, ColisListState};
use crate::domain::colis::api;
use crate::domain::colis::filters::FilterState;
use crate::domain::colis::query::{ListQuery, SortColumn, SortState};

/// Orchestrates the server-paginated shipments listing.
///
/// Every state-mutating action is an explicit method that ends by calling
/// `load` — there is no reactive re-fetch, so the trigger graph is visible
/// in the call sites. Responses are tagged with a request sequence number;
/// a resolution that is no longer the latest issued request is discarded
/// before it can touch state.
#[derive(Clone, Copy)]
pub struct ColisListController {
    pub state: RwSignal<ColisListState>,
    pub filters: RwSignal<FilterState>,
    pub sort: RwSignal<SortState>,
    request_seq: StoredValue<u64>,
    client_id: i64,
}

impl ColisListController {
    pub fn new(client_id: i64) -> Self {
        Self {
            state: create_state(),
            filters: RwSignal::new(FilterState::default()),
            sort: RwSignal::new(SortState::default()),
            request_seq: StoredValue::new(0),
            client_id,
        }
    }

    fn next_request(&self) -> u64 {
        let seq = self.request_seq.get_value() + 1;
        self.request_seq.set_value(seq);
        seq
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.request_seq.get_value() == seq
    }

    /// Fetch the current page. Uses the filtered endpoint only when asked
    /// to and at least one filter is set.
    pub fn load(&self, use_filters: bool) {
        let controller = *self;
        let seq = self.next_request();

        let query = self.state.with_untracked(|s| ListQuery {
            page: s.page,
            size: s.size,
            sort: self.sort.get_untracked(),
        });
        let filters = self.filters.get_untracked();
        let filtered = use_filters && filters.has_active();

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        spawn_local(async move {
            let result = if filtered {
                api::fetch_colis_filtered(controller.client_id, &query, &filters).await
            } else {
                api::fetch_colis(controller.client_id, &query).await
            };

            // A newer request was issued while this one was in flight.
            if !controller.is_latest(seq) {
                log::debug!("Discarding stale listing response (seq {})", seq);
                return;
            }

            match result {
                Ok(page) => controller.state.update(|s| s.apply_page(page)),
                Err(e) => {
                    log::error!("Failed to load colis: {}", e);
                    controller.state.update(|s| {
                        s.apply_error("Erreur lors du chargement des colis".to_string())
                    });
                }
            }
        });
    }

    pub fn change_page(&self, new_page: usize) {
        self.state.update(|s| s.page = new_page);
        self.load(true);
    }

    /// A new page size restarts from the first page.
    pub fn change_size(&self, new_size: usize) {
        self.state.update(|s| {
            s.size = new_size;
            s.page = 0;
        });
        self.load(true);
    }

    pub fn toggle_sort(&self, column: SortColumn) {
        self.sort.update(|s| s.toggle(column));
        self.load(true);
    }

    pub fn apply_filters(&self) {
        self.state.update(|s| s.page = 0);
        self.load(true);
    }

    pub fn reset_filters(&self) {
        self.filters.update(|f| f.reset());
        self.state.update(|s| s.page = 0);
        self.load(false);
    }
}
