use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Shipment status enumeration as the backend emits it.
///
/// `Inconnu` absorbs wire values added server-side after this build, so a
/// single new status cannot fail deserialization of a whole page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColisStatus {
    EnTransit,
    EchecLivraisonARecuperer,
    EnvoiLivre,
    EnvoiRetourne,
    Depose,
    DeuxiemePresentation,
    #[serde(other)]
    Inconnu,
}

impl ColisStatus {
    /// Every known status, in the order the filter select shows them.
    pub const ALL: [ColisStatus; 6] = [
        ColisStatus::EnTransit,
        ColisStatus::EchecLivraisonARecuperer,
        ColisStatus::EnvoiLivre,
        ColisStatus::EnvoiRetourne,
        ColisStatus::Depose,
        ColisStatus::DeuxiemePresentation,
    ];

    /// Wire value (what the API sends and what filter params carry).
    pub fn as_wire(&self) -> &'static str {
        match self {
            ColisStatus::EnTransit => "EN_TRANSIT",
            ColisStatus::EchecLivraisonARecuperer => "ECHEC_LIVRAISON_A_RECUPERER",
            ColisStatus::EnvoiLivre => "ENVOI_LIVRE",
            ColisStatus::EnvoiRetourne => "ENVOI_RETOURNE",
            ColisStatus::Depose => "DEPOSE",
            ColisStatus::DeuxiemePresentation => "DEUXIEME_PRESENTATION",
            ColisStatus::Inconnu => "INCONNU",
        }
    }

    /// French label shown in the table and filter select.
    pub fn display_name(&self) -> &'static str {
        match self {
            ColisStatus::EnTransit => "En transit",
            ColisStatus::EchecLivraisonARecuperer => "Echec livraison, à récupérer",
            ColisStatus::EnvoiLivre => "Envoi livré",
            ColisStatus::EnvoiRetourne => "Envoi retourné",
            ColisStatus::Depose => "Déposé",
            ColisStatus::DeuxiemePresentation => "2ème présentation",
            ColisStatus::Inconnu => "Inconnu",
        }
    }

    /// CSS badge class for the table cell.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ColisStatus::EnTransit => "status-badge status-en-transit",
            ColisStatus::EchecLivraisonARecuperer => "status-badge status-echec",
            ColisStatus::EnvoiLivre => "status-badge status-livre",
            ColisStatus::EnvoiRetourne => "status-badge status-retourne",
            ColisStatus::Depose => "status-badge status-depose",
            ColisStatus::DeuxiemePresentation => "status-badge status-presentation",
            ColisStatus::Inconnu => "status-badge",
        }
    }
}

impl fmt::Display for ColisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl FromStr for ColisStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for status in ColisStatus::ALL {
            if status.as_wire() == s {
                return Ok(status);
            }
        }
        bail!("unknown colis status: {s}")
    }
}

/// One shipment row as the listing endpoints return it.
///
/// Dates are kept as the ISO strings the wire carries; formatting is a
/// presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colis {
    pub id: i64,
    #[serde(default)]
    pub code_envoi: String,
    #[serde(default)]
    pub date_depot: Option<String>,
    #[serde(default)]
    pub destination: String,
    #[serde(default = "default_status")]
    pub status: ColisStatus,
    #[serde(default)]
    pub date_statut: Option<String>,
    #[serde(default)]
    pub crbt: Option<f64>,
    #[serde(default)]
    pub poids: Option<f64>,
    #[serde(default)]
    pub destinataire: String,
    #[serde(default)]
    pub tel_destinataire: String,
    #[serde(default)]
    pub date_paiement: Option<String>,
    #[serde(default)]
    pub is_payed: bool,
}

fn default_status() -> ColisStatus {
    ColisStatus::Inconnu
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_round_trip() {
        for status in ColisStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_wire()));
            let back: ColisStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
            assert_eq!(status.as_wire().parse::<ColisStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let status: ColisStatus = serde_json::from_str("\"PERDU_EN_MER\"").unwrap();
        assert_eq!(status, ColisStatus::Inconnu);
        assert!("PERDU_EN_MER".parse::<ColisStatus>().is_err());
    }

    #[test]
    fn test_colis_deserializes_with_missing_fields() {
        let colis: Colis = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(colis.id, 42);
        assert_eq!(colis.code_envoi, "");
        assert_eq!(colis.status, ColisStatus::Inconnu);
        assert!(colis.crbt.is_none());
        assert!(!colis.is_payed);
    }

    #[test]
    fn test_colis_full_record() {
        let json = r#"{
            "id": 1,
            "codeEnvoi": "AM123456",
            "dateDepot": "2024-03-02",
            "destination": "CASABLANCA",
            "status": "ENVOI_LIVRE",
            "dateStatut": "2024-03-05",
            "crbt": 250.5,
            "poids": 1.2,
            "destinataire": "A. Benali",
            "telDestinataire": "0612345678",
            "datePaiement": "2024-03-10",
            "isPayed": true
        }"#;
        let colis: Colis = serde_json::from_str(json).unwrap();
        assert_eq!(colis.status, ColisStatus::EnvoiLivre);
        assert_eq!(colis.crbt, Some(250.5));
        assert!(colis.is_payed);
    }
}
