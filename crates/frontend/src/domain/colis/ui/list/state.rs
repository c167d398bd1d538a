use contracts::domain::colis::Colis;
use contracts::domain::page::Page;
use leptos::prelude::*;

/// Listing state: the displayed records plus the pagination descriptor
/// they arrived with. The two always change together.
#[derive(Clone, Debug)]
pub struct ColisListState {
    pub items: Vec<Colis>,
    pub page: usize,
    pub size: usize,
    pub total_elements: u64,
    pub total_pages: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ColisListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            size: 10,
            total_elements: 0,
            total_pages: 0,
            loading: false,
            error: None,
        }
    }
}

impl ColisListState {
    /// Reconcile a successful response: record list and pagination fields
    /// are replaced in one step, server values overwriting the local
    /// proposal. Clears any previous error.
    pub fn apply_page(&mut self, page: Page<Colis>) {
        self.items = page.content;
        self.page = page.number;
        self.size = page.size;
        self.total_elements = page.total_elements;
        self.total_pages = page.total_pages;
        self.loading = false;
        self.error = None;
    }

    /// Reconcile a failed load: previous records and pagination stay
    /// visible, only the error message and loading flag change.
    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }
}

pub fn create_state() -> RwSignal<ColisListState> {
    RwSignal::new(ColisListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::colis::ColisStatus;

    fn sample_colis(id: i64) -> Colis {
        Colis {
            id,
            code_envoi: format!("AM{:06}", id),
            date_depot: Some("2024-03-02".to_string()),
            destination: "RABAT".to_string(),
            status: ColisStatus::EnTransit,
            date_statut: None,
            crbt: Some(120.0),
            poids: Some(0.8),
            destinataire: "Client".to_string(),
            tel_destinataire: "0600000000".to_string(),
            date_paiement: None,
            is_payed: false,
        }
    }

    #[test]
    fn test_apply_page_replaces_everything_atomically() {
        let mut state = ColisListState::default();
        state.loading = true;
        state.apply_page(Page {
            content: vec![sample_colis(1), sample_colis(2)],
            number: 3,
            size: 25,
            total_elements: 90,
            total_pages: 4,
        });
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.page, 3);
        assert_eq!(state.size, 25);
        assert_eq!(state.total_elements, 90);
        assert_eq!(state.total_pages, 4);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_empty_content_is_rendered_not_errored() {
        let mut state = ColisListState::default();
        state.items = vec![sample_colis(1)];
        state.apply_page(Page::default());
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_apply_error_keeps_previous_data() {
        let mut state = ColisListState::default();
        state.apply_page(Page {
            content: vec![sample_colis(1)],
            number: 2,
            size: 10,
            total_elements: 21,
            total_pages: 3,
        });
        state.loading = true;
        state.apply_error("Erreur lors du chargement des colis".to_string());
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.page, 2);
        assert_eq!(state.total_pages, 3);
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Erreur lors du chargement des colis")
        );
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = ColisListState::default();
        state.apply_error("boom".to_string());
        state.apply_page(Page::default());
        assert!(state.error.is_none());
    }
}
