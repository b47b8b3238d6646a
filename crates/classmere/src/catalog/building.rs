//! Campus buildings, as shown on the section map.

use super::fields::{opt_float, opt_string};
use serde::Serialize;
use serde_json::Value;

/// A campus building record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    #[serde(skip_serializing_if = "Option::is_none")]
    abbr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
}

impl Building {
    /// Decodes a building from a JSON record. Coordinates may arrive as
    /// numbers or numeric strings.
    pub fn from_json(record: &Value) -> Self {
        Self {
            abbr: opt_string(record, "abbr"),
            name: opt_string(record, "name"),
            address: opt_string(record, "address"),
            latitude: opt_float(record, "latitude"),
            longitude: opt_float(record, "longitude"),
        }
    }

    pub fn abbr(&self) -> Option<&str> {
        self.abbr.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// `(latitude, longitude)` when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_building_coordinates() {
        let building = Building::from_json(&json!({
            "abbr": "KEC",
            "name": "Kelley Engineering Center",
            "latitude": "44.5672",
            "longitude": -123.2786,
        }));

        assert_eq!(building.abbr(), Some("KEC"));
        assert_eq!(building.coordinates(), Some((44.5672, -123.2786)));
        assert_eq!(building.address(), None);
    }

    #[test]
    fn test_building_partial_coordinates() {
        let building = Building::from_json(&json!({ "abbr": "LINC", "latitude": 44.56 }));
        assert_eq!(building.coordinates(), None);
    }
}
