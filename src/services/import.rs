//! Bulk book import from spreadsheet uploads
//!
//! The upload is kept under the configured uploads directory, the first
//! worksheet is read, and every data row below the header contributes the
//! value of its first column as a book title. All inserts share one
//! transaction.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::{
    config::UploadsConfig,
    error::{AppError, AppResult},
    models::import_report::{ImportReport, RowError},
    repository::Repository,
};

static UNSAFE_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("valid filename regex"));

/// Name used when nothing of the client filename survives sanitizing
const FALLBACK_FILENAME: &str = "upload";

/// Reduce a client-supplied filename to a safe, ASCII-only file name.
///
/// Unicode is decomposed (NFKD) and non-ASCII dropped, path separators and
/// whitespace runs become `_`, anything outside `[A-Za-z0-9_.-]` is removed,
/// and leading/trailing `.`/`_` are trimmed.
pub fn sanitize_filename(name: &str) -> String {
    let ascii: String = name.nfkd().filter(char::is_ascii).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Titles found in a worksheet, with the rows that were left out
#[derive(Debug, Default, PartialEq)]
pub struct SheetTitles {
    /// `(row, title)` with 1-based row numbers
    pub titles: Vec<(u32, String)>,
    pub skipped: u32,
    pub errors: Vec<RowError>,
}

enum CellOutcome {
    Title(String),
    Skip,
    Invalid(String),
}

/// Empty cells and falsy values (`""`, `0`, `false`) are not titles
fn classify_cell(cell: Option<&Data>) -> CellOutcome {
    match cell {
        None | Some(Data::Empty) => CellOutcome::Skip,
        Some(Data::String(s)) if s.is_empty() => CellOutcome::Skip,
        Some(Data::Bool(false)) | Some(Data::Int(0)) => CellOutcome::Skip,
        Some(Data::Float(f)) if *f == 0.0 => CellOutcome::Skip,
        Some(Data::Error(e)) => CellOutcome::Invalid(format!("cell contains an error value ({})", e)),
        Some(Data::String(s)) => CellOutcome::Title(s.clone()),
        Some(other) => CellOutcome::Title(other.to_string()),
    }
}

/// Collect first-column titles from every row after the header row
pub fn extract_titles(range: &Range<Data>) -> SheetTitles {
    let mut sheet = SheetTitles::default();

    let (Some((start_row, _)), Some((end_row, _))) = (range.start(), range.end()) else {
        return sheet;
    };

    // Row 0 is the header, whatever it contains
    for row in start_row.max(1)..=end_row {
        let number = row + 1;
        match classify_cell(range.get_value((row, 0))) {
            CellOutcome::Title(title) => sheet.titles.push((number, title)),
            CellOutcome::Skip => sheet.skipped += 1,
            CellOutcome::Invalid(message) => sheet.errors.push(RowError { row: number, message }),
        }
    }

    sheet
}

/// Open a workbook from raw bytes (format detected from content) and read its first sheet
pub fn read_titles(bytes: Vec<u8>) -> AppResult<SheetTitles> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Spreadsheet("workbook has no worksheet".to_string()))?
        .map_err(|e| AppError::Spreadsheet(e.to_string()))?;

    Ok(extract_titles(&range))
}

#[derive(Clone)]
pub struct ImportService {
    repository: Repository,
    config: UploadsConfig,
}

impl ImportService {
    pub fn new(repository: Repository, config: UploadsConfig) -> Self {
        Self { repository, config }
    }

    /// Store an uploaded spreadsheet and import its titles as books
    pub async fn import_books(&self, original_name: &str, bytes: Vec<u8>) -> AppResult<ImportReport> {
        let file_name = sanitize_filename(original_name);
        let path = self.config.dir.join(&file_name);

        tokio::fs::create_dir_all(&self.config.dir)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to create upload directory: {}", e)))?;
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store upload {}: {}", path.display(), e)))?;

        let sheet = tokio::task::spawn_blocking(move || read_titles(bytes))
            .await
            .map_err(|e| AppError::Internal(format!("Spreadsheet reader panicked: {}", e)))??;

        let (inserted, failures) = self.repository.books_create_batch(&sheet.titles).await?;

        let mut report = ImportReport::new(file_name);
        report.inserted = inserted;
        report.skipped = sheet.skipped;
        for error in sheet.errors.into_iter().chain(failures) {
            report.record_failure(error.row, error.message);
        }
        report.errors.sort_by_key(|e| e.row);

        tracing::info!(
            file = %report.file_name,
            inserted = report.inserted,
            skipped = report.skipped,
            failed = report.failed,
            "Book import finished"
        );

        Ok(report)
    }
}
