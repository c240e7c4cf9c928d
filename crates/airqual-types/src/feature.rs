use crate::date::DateValue;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Top-level response body of a feature query.
///
/// The service reports failures through an `error` object in an otherwise
/// well-formed body, independent of the HTTP status code, so the field is
/// part of the normal response shape.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// One record returned by the feature service.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub attributes: Attributes,
}

/// Flat attribute mapping of a feature.
///
/// Wire names are the service's Portuguese field names. Every field is
/// optional at the deserialization boundary; each report validates the
/// attributes it actually renders through [`required`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attributes {
    #[serde(rename = "data")]
    pub date: Option<DateValue>,

    #[serde(rename = "estacao_id")]
    pub station_id: Option<StationId>,

    #[serde(rename = "estacao_nome")]
    pub station_name: Option<String>,

    #[serde(rename = "concelho_nome")]
    pub municipality: Option<String>,

    #[serde(rename = "poluente_abv")]
    pub pollutant_abv: Option<String>,

    #[serde(rename = "poluente_agr")]
    pub pollutant_agr: Option<String>,

    #[serde(rename = "avg_display")]
    pub avg_display: Option<String>,

    #[serde(rename = "indice_nome")]
    pub index_name: Option<String>,

    #[serde(rename = "hora_display")]
    pub hour_display: Option<String>,

    #[serde(rename = "alerta")]
    pub alert: Option<i64>,
}

impl Attributes {
    /// The alert flag is 1 when the measured value exceeded a threshold.
    /// Absent or zero means no alert.
    pub fn alert_active(&self) -> bool {
        self.alert == Some(1)
    }
}

/// Station identifier, numeric on some layers and string-typed on others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::Number(id) => write!(f, "{}", id),
            StationId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Validates that an attribute the report needs is present, naming the wire
/// field in the error instead of faulting deep inside formatting.
pub fn required<'a, T>(value: &'a Option<T>, name: &'static str) -> Result<&'a T> {
    value.as_ref().ok_or(Error::MissingAttribute(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feature_payload() {
        let body = r#"{
            "features": [
                {
                    "attributes": {
                        "data": 1586908800000,
                        "estacao_id": 3072,
                        "estacao_nome": "Entrecampos",
                        "concelho_nome": "Lisboa",
                        "poluente_abv": "NO2",
                        "poluente_agr": "base horária",
                        "avg_display": "21",
                        "indice_nome": "Bom",
                        "hora_display": "N.h",
                        "alerta": 0
                    }
                }
            ]
        }"#;

        let collection: FeatureCollection = serde_json::from_str(body).unwrap();
        assert!(collection.error.is_none());
        assert_eq!(collection.features.len(), 1);

        let attr = &collection.features[0].attributes;
        assert_eq!(attr.date, Some(DateValue::EpochMillis(1586908800000)));
        assert_eq!(attr.station_id, Some(StationId::Number(3072)));
        assert_eq!(attr.station_name.as_deref(), Some("Entrecampos"));
        assert!(!attr.alert_active());
    }

    #[test]
    fn parses_error_payload() {
        let body = r#"{"error": {"code": 400, "message": "Invalid query"}}"#;
        let collection: FeatureCollection = serde_json::from_str(body).unwrap();
        assert!(collection.error.is_some());
        assert!(collection.features.is_empty());
    }

    #[test]
    fn missing_features_key_yields_empty_list() {
        let collection: FeatureCollection = serde_json::from_str("{}").unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn required_reports_wire_field_name() {
        let attr = Attributes::default();
        let err = required(&attr.station_name, "estacao_nome").unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed response: missing attribute 'estacao_nome'"
        );
    }
}
