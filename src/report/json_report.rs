//! @ai:module:intent JSON rendering of the result table
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::report::{TableRendererTrait, TableReport};

/// @ai:intent Generates JSON documents from aggregated results
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRendererTrait for JsonReporter {
    /// @ai:intent Serialize the report with raw integer cells and null for missing ones
    /// @ai:effects pure
    fn render(&self, report: &TableReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_generate_json_report() {
        let output = JsonReporter::new().render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["file_count"], 3);
        assert_eq!(value["table"]["columns"][1], "0.50");
        assert_eq!(value["table"]["rows"][0]["cells"][0], 12345);
        assert_eq!(value["table"]["rows"][1]["scenario"], "Low demand");
        assert!(value["table"]["rows"][1]["cells"][0].is_null());
    }

    #[test]
    fn test_json_round_trips_into_report() {
        let output = JsonReporter::new().render(&sample_report()).unwrap();
        let parsed: TableReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.table, sample_report().table);
    }
}
