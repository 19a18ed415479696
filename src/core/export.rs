// Stocklist - core/export.rs
//
// CSV and JSON export of the current catalog view.
// Core layer: writes to any Write trait object.
//
// Exports operate on a view (catalog slice + view indices) so the filtered
// and sorted table the user sees is exactly what lands in the file.

use crate::core::model::Product;
use crate::util::constants::MAX_EXPORT_ENTRIES;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export the view to CSV format.
///
/// Writes: id, name, price, category, registered_at (RFC 3339).
/// `export_path` is used only for error context; the data goes to `writer`.
pub fn export_csv<W: Write>(
    products: &[Product],
    indices: &[usize],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_entry_count(indices.len())?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    // Header
    csv_writer
        .write_record(["id", "name", "price", "category", "registered_at"])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for &idx in indices {
        let product = &products[idx];
        csv_writer
            .write_record([
                &product.id.to_string(),
                &product.name,
                &product.price.to_string(),
                &product.category,
                &product.registered_at.to_rfc3339(),
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export the view to JSON format (array of objects).
pub fn export_json<W: Write>(
    products: &[Product],
    indices: &[usize],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_entry_count(indices.len())?;

    let view: Vec<&Product> = indices.iter().map(|&idx| &products[idx]).collect();
    serde_json::to_writer_pretty(writer, &view).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(view.len())
}

fn check_entry_count(count: usize) -> Result<(), ExportError> {
    if count > MAX_EXPORT_ENTRIES {
        return Err(ExportError::TooManyEntries {
            count,
            max: MAX_EXPORT_ENTRIES,
        });
    }
    Ok(())
}
