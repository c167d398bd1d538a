use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One month of aggregated shipment activity for the trends chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub total_colis: u64,
    #[serde(default)]
    pub total_crbt: f64,
}

impl MonthlyStat {
    /// Sortable "YYYY-MM" key.
    pub fn period_key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Statistics payload returned by `/colis/client/{id}/statistics` and its
/// `/filtered` variant. Map keys are the French status / payment / city
/// labels the backend aggregates by.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    #[serde(default)]
    pub total_colis: u64,
    #[serde(default)]
    pub total_envois_periode: u64,
    #[serde(default)]
    pub total_crbt: f64,
    #[serde(default)]
    pub status_stats: HashMap<String, u64>,
    #[serde(default)]
    pub payment_stats: HashMap<String, u64>,
    #[serde(default)]
    pub monthly_stats: Vec<MonthlyStat>,
    #[serde(default)]
    pub city_stats: HashMap<String, u64>,
}

impl StatisticsResponse {
    /// Delivered share in whole percent, for the "Taux de Livraison" card.
    /// An empty dataset reads as 0%, not a division error.
    pub fn delivery_rate(&self) -> u32 {
        if self.total_colis == 0 {
            return 0;
        }
        let delivered = self
            .status_stats
            .get("Envoi livré")
            .copied()
            .unwrap_or_default();
        ((delivered as f64 / self.total_colis as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_yields_defaults() {
        let stats: StatisticsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_colis, 0);
        assert_eq!(stats.total_crbt, 0.0);
        assert!(stats.status_stats.is_empty());
        assert!(stats.monthly_stats.is_empty());
        assert_eq!(stats.delivery_rate(), 0);
    }

    #[test]
    fn test_delivery_rate() {
        let json = r#"{
            "totalColis": 200,
            "statusStats": {"Envoi livré": 150, "En transit": 50}
        }"#;
        let stats: StatisticsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.delivery_rate(), 75);
    }

    #[test]
    fn test_monthly_stats_parse() {
        let json = r#"{
            "monthlyStats": [
                {"year": 2024, "month": 3, "totalColis": 12, "totalCrbt": 340.0},
                {"year": 2024, "month": 4}
            ]
        }"#;
        let stats: StatisticsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.monthly_stats.len(), 2);
        assert_eq!(stats.monthly_stats[0].period_key(), "2024-03");
        assert_eq!(stats.monthly_stats[1].total_colis, 0);
    }
}
