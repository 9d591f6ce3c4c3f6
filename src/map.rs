//! @ai:module:intent Load client stops and warehouse locations for map plots
//! @ai:module:layer infrastructure
//! @ai:module:public_api ClientStop, Warehouse, load_stops, load_warehouses
//! @ai:module:stateless true

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// @ai:intent A client stop drawn as a small marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientStop {
    pub idx: u64,
    pub latitude: f64,
    pub longitude: f64,
}

/// @ai:intent A named warehouse drawn as a large marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub latitude: f64,
    pub longitude: f64,
}

/// @ai:intent Read stops from a headerless `idx,latitude,longitude` CSV file
/// @ai:effects fs:read
pub fn load_stops(path: &Path) -> Result<Vec<ClientStop>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let stops = reader
        .deserialize()
        .collect::<std::result::Result<Vec<ClientStop>, _>>()?;

    tracing::debug!("Loaded {} stops from {}", stops.len(), path.display());
    Ok(stops)
}

/// @ai:intent Read warehouses from a JSON object keyed by warehouse name
/// @ai:effects fs:read
pub fn load_warehouses(path: &Path) -> Result<BTreeMap<String, Warehouse>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_stops() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stops.csv");
        std::fs::write(&path, "0,41.95,-87.70\n1, 41.90 , -87.65\n").unwrap();

        let stops = load_stops(&path).unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].idx, 1);
        assert!((stops[1].latitude - 41.90).abs() < 1e-9);
    }

    #[test]
    fn test_load_stops_rejects_bad_row() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stops.csv");
        std::fs::write(&path, "0,north,-87.70\n").unwrap();

        assert!(matches!(load_stops(&path), Err(Error::Csv(_))));
    }

    #[test]
    fn test_load_warehouses_ignores_extra_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stores.json");
        std::fs::write(
            &path,
            r#"{
                "Lincoln Park": {"latitude": 41.92, "longitude": -87.65, "address": "x"},
                "Wicker Park": {"latitude": 41.91, "longitude": -87.68}
            }"#,
        )
        .unwrap();

        let warehouses = load_warehouses(&path).unwrap();
        assert_eq!(warehouses.len(), 2);
        assert!((warehouses["Wicker Park"].longitude + 87.68).abs() < 1e-9);
    }
}
