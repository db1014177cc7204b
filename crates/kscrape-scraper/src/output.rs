//! CSV output with a UTF-8 byte-order mark, so spreadsheet tools detect
//! the encoding of the Korean text.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use kscrape_core::{ListingRecord, OutputPaths, StoreRecord, StoreTable};

use crate::error::ScraperError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn open_with_bom(path: &Path) -> Result<File, ScraperError> {
    if let Some(parent) = path.parent() {
        OutputPaths::ensure_dir(parent)?;
    }
    let io_err = |source| ScraperError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(UTF8_BOM).map_err(io_err)?;
    Ok(file)
}

fn csv_err(path: &Path) -> impl Fn(csv::Error) -> ScraperError + '_ {
    move |source| ScraperError::Csv {
        path: path.display().to_string(),
        source,
    }
}

/// Writes listing records to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ScraperError::Io`] or [`ScraperError::Csv`] when the file
/// cannot be created or written.
pub fn write_listing_csv(path: &Path, records: &[ListingRecord]) -> Result<(), ScraperError> {
    let mut writer = csv::Writer::from_writer(open_with_bom(path)?);
    for record in records {
        writer.serialize(record).map_err(csv_err(path))?;
    }
    writer.flush().map_err(|source| ScraperError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Writes store records to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ScraperError::Io`] or [`ScraperError::Csv`] when the file
/// cannot be created or written.
pub fn write_store_csv(path: &Path, records: &[StoreRecord]) -> Result<(), ScraperError> {
    let table = StoreTable::from_records(records);
    let mut writer = csv::Writer::from_writer(open_with_bom(path)?);
    writer
        .write_record(&table.header)
        .map_err(csv_err(path))?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_err(path))?;
    }
    writer.flush().map_err(|source| ScraperError::Io {
        path: path.display().to_string(),
        source,
    })
}
