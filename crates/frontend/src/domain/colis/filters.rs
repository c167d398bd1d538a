//! Filter state for the shipments table and the statistics dashboard.
//!
//! All values are strings; the empty string uniformly means "unset". The
//! wire names double as the query-parameter keys of the filtered endpoints.

/// Names of the recognized filter fields, in display order.
pub const FILTER_FIELDS: [&str; 11] = [
    "codeEnvoi",
    "telDestinataire",
    "status",
    "destination",
    "isPayed",
    "dateDepotStart",
    "dateDepotEnd",
    "dateStatutStart",
    "dateStatutEnd",
    "datePaiementStart",
    "datePaiementEnd",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub code_envoi: String,
    pub tel_destinataire: String,
    pub status: String,
    pub destination: String,
    pub is_payed: String,
    pub date_depot_start: String,
    pub date_depot_end: String,
    pub date_statut_start: String,
    pub date_statut_end: String,
    pub date_paiement_start: String,
    pub date_paiement_end: String,
    /// Filter panel open/closed. Not a filter value: untouched by `reset`.
    pub show_panel: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            code_envoi: String::new(),
            tel_destinataire: String::new(),
            status: String::new(),
            destination: String::new(),
            is_payed: String::new(),
            date_depot_start: String::new(),
            date_depot_end: String::new(),
            date_statut_start: String::new(),
            date_statut_end: String::new(),
            date_paiement_start: String::new(),
            date_paiement_end: String::new(),
            show_panel: true,
        }
    }
}

impl FilterState {
    fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("codeEnvoi", self.code_envoi.as_str()),
            ("telDestinataire", self.tel_destinataire.as_str()),
            ("status", self.status.as_str()),
            ("destination", self.destination.as_str()),
            ("isPayed", self.is_payed.as_str()),
            ("dateDepotStart", self.date_depot_start.as_str()),
            ("dateDepotEnd", self.date_depot_end.as_str()),
            ("dateStatutStart", self.date_statut_start.as_str()),
            ("dateStatutEnd", self.date_statut_end.as_str()),
            ("datePaiementStart", self.date_paiement_start.as_str()),
            ("datePaiementEnd", self.date_paiement_end.as_str()),
        ]
    }

    /// Set one field by wire name. Unknown names are ignored; no local
    /// validation is performed.
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "codeEnvoi" => self.code_envoi = value,
            "telDestinataire" => self.tel_destinataire = value,
            "status" => self.status = value,
            "destination" => self.destination = value,
            "isPayed" => self.is_payed = value,
            "dateDepotStart" => self.date_depot_start = value,
            "dateDepotEnd" => self.date_depot_end = value,
            "dateStatutStart" => self.date_statut_start = value,
            "dateStatutEnd" => self.date_statut_end = value,
            "datePaiementStart" => self.date_paiement_start = value,
            "datePaiementEnd" => self.date_paiement_end = value,
            _ => {}
        }
    }

    pub fn get(&self, name: &str) -> String {
        self.entries()
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
            .unwrap_or_default()
    }

    /// Restore every filter field to empty; panel visibility is kept.
    pub fn reset(&mut self) {
        let show_panel = self.show_panel;
        *self = FilterState {
            show_panel,
            ..FilterState::default()
        };
    }

    pub fn has_active(&self) -> bool {
        self.entries().iter().any(|(_, value)| !value.is_empty())
    }

    pub fn active_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .count()
    }

    /// Query parameters for the filtered endpoints: non-empty fields only.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        self.entries()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    /// Deposit-date range for the unfiltered statistics call.
    pub fn date_range(&self) -> (Option<String>, Option<String>) {
        let pick = |s: &str| (!s.is_empty()).then(|| s.to_string());
        (pick(&self.date_depot_start), pick(&self.date_depot_end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let filters = FilterState::default();
        assert!(!filters.has_active());
        assert!(filters.to_params().is_empty());
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_has_active_iff_params_non_empty() {
        let mut filters = FilterState::default();
        for field in FILTER_FIELDS {
            filters.set(field, "x".to_string());
            assert!(filters.has_active());
            assert!(!filters.to_params().is_empty());
            filters.set(field, String::new());
            assert!(!filters.has_active());
            assert!(filters.to_params().is_empty());
        }
    }

    #[test]
    fn test_to_params_keeps_only_set_fields() {
        let mut filters = FilterState::default();
        filters.set("status", "EN_TRANSIT".to_string());
        filters.set("destination", "Casablanca".to_string());
        let params = filters.to_params();
        assert_eq!(
            params,
            vec![
                ("status", "EN_TRANSIT".to_string()),
                ("destination", "Casablanca".to_string()),
            ]
        );
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut filters = FilterState::default();
        filters.set("poids", "3".to_string());
        assert!(!filters.has_active());
        assert_eq!(filters.get("poids"), "");
    }

    #[test]
    fn test_reset_clears_fields_but_not_panel_flag() {
        let mut filters = FilterState::default();
        filters.set("codeEnvoi", "AM42".to_string());
        filters.show_panel = false;
        filters.reset();
        assert!(!filters.has_active());
        assert!(!filters.show_panel);
    }

    #[test]
    fn test_date_range() {
        let mut filters = FilterState::default();
        assert_eq!(filters.date_range(), (None, None));
        filters.set("dateDepotStart", "2024-01-01".to_string());
        assert_eq!(
            filters.date_range(),
            (Some("2024-01-01".to_string()), None)
        );
    }
}
