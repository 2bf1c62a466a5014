//! Spreadsheet import report

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A data row that could not be imported
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RowError {
    /// 1-based row number as shown in the spreadsheet
    pub row: u32,
    pub message: String,
}

/// Outcome of a bulk book import
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    pub file_name: String,
    pub inserted: u32,
    /// Data rows whose first cell was empty
    pub skipped: u32,
    pub failed: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<RowError>,
}

impl ImportReport {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    pub fn record_failure(&mut self, row: u32, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(RowError {
            row,
            message: message.into(),
        });
    }
}
