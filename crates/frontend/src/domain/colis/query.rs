//! Sort state and query-string assembly for the listing endpoints.

use super::filters::FilterState;

/// Sortable columns of the shipments table, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    Id,
    CodeEnvoi,
    DateDepot,
    Destination,
    Status,
    DateStatut,
    Crbt,
    Poids,
    Destinataire,
    TelDestinataire,
    DatePaiement,
    IsPayed,
}

impl SortColumn {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::CodeEnvoi => "codeEnvoi",
            SortColumn::DateDepot => "dateDepot",
            SortColumn::Destination => "destination",
            SortColumn::Status => "status",
            SortColumn::DateStatut => "dateStatut",
            SortColumn::Crbt => "crbt",
            SortColumn::Poids => "poids",
            SortColumn::Destinataire => "destinataire",
            SortColumn::TelDestinataire => "telDestinataire",
            SortColumn::DatePaiement => "datePaiement",
            SortColumn::IsPayed => "isPayed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    fn flipped(&self) -> SortDir {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// Single active sort column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDir,
}

impl SortState {
    /// Toggling the current column flips direction; a new column starts
    /// ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDir::Asc;
        }
    }

    /// "↑" / "↓" next to the sorted column header, empty elsewhere.
    pub fn indicator(&self, column: SortColumn) -> &'static str {
        if self.column != column {
            return "";
        }
        match self.direction {
            SortDir::Asc => " ↑",
            SortDir::Desc => " ↓",
        }
    }
}

/// Pagination and sort parameters of a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    pub sort: SortState,
}

impl ListQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort.column.as_param().to_string()),
            ("sortDir", self.sort.direction.as_param().to_string()),
        ]
    }

    /// Pagination pairs followed by the active filter fields. Field
    /// namespaces are disjoint, so order is only cosmetic.
    pub fn to_filtered_pairs(&self, filters: &FilterState) -> Vec<(&'static str, String)> {
        let mut pairs = self.to_pairs();
        pairs.extend(filters.to_params());
        pairs
    }
}

/// Percent-encode values and join into a `?`-prefixed query string.
/// Empty input yields an empty string.
pub fn encode_query(pairs: &[(&'static str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let mut sort = SortState::default();
        assert_eq!(sort.direction, SortDir::Asc);
        sort.toggle(SortColumn::Id);
        assert_eq!(sort.direction, SortDir::Desc);
        sort.toggle(SortColumn::Id);
        assert_eq!(sort.direction, SortDir::Asc);
    }

    #[test]
    fn test_toggle_new_column_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.toggle(SortColumn::Id);
        assert_eq!(sort.direction, SortDir::Desc);
        sort.toggle(SortColumn::DateDepot);
        assert_eq!(sort.column, SortColumn::DateDepot);
        assert_eq!(sort.direction, SortDir::Asc);
    }

    #[test]
    fn test_indicator_only_on_sorted_column() {
        let mut sort = SortState::default();
        sort.toggle(SortColumn::Crbt);
        assert_eq!(sort.indicator(SortColumn::Crbt), " ↑");
        assert_eq!(sort.indicator(SortColumn::Id), "");
    }

    #[test]
    fn test_plain_pairs() {
        let query = ListQuery {
            page: 2,
            size: 25,
            sort: SortState {
                column: SortColumn::DateDepot,
                direction: SortDir::Desc,
            },
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "2".to_string()),
                ("size", "25".to_string()),
                ("sortBy", "dateDepot".to_string()),
                ("sortDir", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_filtered_pairs_append_active_filters() {
        let query = ListQuery {
            page: 0,
            size: 10,
            sort: SortState::default(),
        };
        let mut filters = FilterState::default();
        filters.set("destination", "Casablanca".to_string());
        let pairs = query.to_filtered_pairs(&filters);
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[4], ("destination", "Casablanca".to_string()));
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let pairs = vec![("destination", "El Jadida".to_string())];
        assert_eq!(encode_query(&pairs), "?destination=El%20Jadida");
        assert_eq!(encode_query(&[]), "");
    }
}
