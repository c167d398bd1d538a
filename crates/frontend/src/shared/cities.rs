//! Moroccan city reference table for the geographic distribution chart.
//!
//! Backend `cityStats` keys are not normalized (uppercase, accented and
//! underscore variants coexist), so each city lists the aliases it may
//! appear under.

use std::collections::HashMap;

pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub data_keys: &'static [&'static str],
}

pub const MOROCCAN_CITIES: &[City] = &[
    City { name: "Casablanca", latitude: 33.5731, longitude: -7.5898, data_keys: &["CASABLANCA", "Casablanca"] },
    City { name: "Rabat", latitude: 34.0209, longitude: -6.8416, data_keys: &["RABAT", "Rabat"] },
    City { name: "Fès", latitude: 34.0181, longitude: -5.0078, data_keys: &["FES", "FÈS", "Fes", "Fès"] },
    City { name: "Marrakech", latitude: 31.6295, longitude: -7.9811, data_keys: &["MARRAKECH", "Marrakech"] },
    City { name: "Tanger", latitude: 35.7595, longitude: -5.8340, data_keys: &["TANGER", "Tanger"] },
    City { name: "Agadir", latitude: 30.4278, longitude: -9.5981, data_keys: &["AGADIR", "Agadir"] },
    City { name: "Oujda", latitude: 34.6814, longitude: -1.9086, data_keys: &["OUJDA", "Oujda"] },
    City { name: "Kenitra", latitude: 34.2610, longitude: -6.5802, data_keys: &["KENITRA", "Kenitra"] },
    City { name: "Tetouan", latitude: 35.5889, longitude: -5.3626, data_keys: &["TETOUAN", "Tetouan"] },
    City { name: "Salé", latitude: 34.0531, longitude: -6.7985, data_keys: &["SALE", "SALÉ", "Sale", "Salé"] },
    City { name: "Meknès", latitude: 33.8935, longitude: -5.5473, data_keys: &["MEKNES", "MEKNÈS", "Meknes", "Meknès"] },
    City { name: "Safi", latitude: 32.2994, longitude: -9.2372, data_keys: &["SAFI", "Safi"] },
    City { name: "El Jadida", latitude: 33.2316, longitude: -8.5007, data_keys: &["EL_JADIDA", "EL JADIDA", "El Jadida"] },
    City { name: "Nador", latitude: 35.1681, longitude: -2.9287, data_keys: &["NADOR", "Nador"] },
    City { name: "Settat", latitude: 33.0013, longitude: -7.6164, data_keys: &["SETTAT", "Settat"] },
    City { name: "Khouribga", latitude: 32.8811, longitude: -6.9063, data_keys: &["KHOURIBGA", "Khouribga"] },
    City { name: "Beni Mellal", latitude: 32.3373, longitude: -6.3498, data_keys: &["BENI_MELLAL", "BENI MELLAL", "Beni Mellal"] },
    City { name: "Larache", latitude: 35.1933, longitude: -6.1467, data_keys: &["LARACHE", "Larache"] },
    City { name: "Ksar El Kebir", latitude: 35.0017, longitude: -5.9081, data_keys: &["KSAR_EL_KEBIR", "KSAR EL KEBIR", "Ksar El Kebir"] },
    City { name: "Mohammedia", latitude: 33.6863, longitude: -7.3829, data_keys: &["MOHAMMEDIA", "Mohammedia"] },
];

/// Collapse raw `cityStats` keys onto canonical city names, summing alias
/// duplicates. Keys matching no known city are kept under their raw name.
/// Result is sorted by count descending, then name for a stable order.
pub fn normalize_city_counts(raw: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut alias_to_city: HashMap<&str, &str> = HashMap::new();
    for city in MOROCCAN_CITIES {
        for key in city.data_keys {
            alias_to_city.insert(key, city.name);
        }
    }

    for (key, count) in raw {
        let name = alias_to_city
            .get(key.as_str())
            .copied()
            .unwrap_or(key.as_str());
        *counts.entry(name.to_string()).or_insert(0) += count;
    }

    let mut result: Vec<(String, u64)> = counts.into_iter().collect();
    result.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_are_summed() {
        let mut raw = HashMap::new();
        raw.insert("CASABLANCA".to_string(), 10);
        raw.insert("Casablanca".to_string(), 5);
        raw.insert("RABAT".to_string(), 3);
        let result = normalize_city_counts(&raw);
        assert_eq!(result[0], ("Casablanca".to_string(), 15));
        assert_eq!(result[1], ("Rabat".to_string(), 3));
    }

    #[test]
    fn test_unknown_city_kept_verbatim() {
        let mut raw = HashMap::new();
        raw.insert("OUARZAZATE".to_string(), 2);
        let result = normalize_city_counts(&raw);
        assert_eq!(result, vec![("OUARZAZATE".to_string(), 2)]);
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let mut raw = HashMap::new();
        raw.insert("RABAT".to_string(), 4);
        raw.insert("AGADIR".to_string(), 4);
        let result = normalize_city_counts(&raw);
        assert_eq!(result[0].0, "Agadir");
        assert_eq!(result[1].0, "Rabat");
    }
}
