// src/process/normalize.rs

use tracing::{debug, warn};

use crate::dataset::{IncidentRecord, ProcessedDataset};
use crate::html::{Node, LINE_BREAK};
use crate::schema::{self, HeaderSchema};

/// Number of leading cells that carry the column labels.
pub const HEADER_CELLS: usize = 4;
/// Number of consecutive cells that make up one incident.
pub const GROUP_SIZE: usize = 4;

const HEADER_SEPARATOR: char = '/';

/// Fold one year page's cells into `dataset`, returning how many records
/// were appended.
///
/// Headers are read from the first four cells only while the dataset's
/// schema is still incomplete; the cells after them are always treated as
/// data, grouped four at a time.
pub fn normalize<N: Node>(cells: &[N], dataset: &mut ProcessedDataset) -> usize {
    let split = cells.len().min(HEADER_CELLS);
    let (header_cells, data_cells) = cells.split_at(split);

    if !schema::is_complete(&dataset.headers) {
        fill_headers(header_cells, &mut dataset.headers);
        if !schema::is_complete(&dataset.headers) {
            warn!(headers = ?dataset.headers, "header cells did not yield the expected columns");
        }
    }

    let groups = data_cells.chunks_exact(GROUP_SIZE);
    let dropped = groups.remainder().len();
    let before = dataset.data.len();
    dataset.data.extend(groups.map(build_record));

    // a trailing partial group never becomes a record
    if dropped > 0 {
        warn!(dropped, "discarding trailing cells that do not fill a group");
    }

    let added = dataset.data.len() - before;
    debug!(added, "normalised cells");
    added
}

/// Rebuild the header positions from the header cells, starting over at
/// position 0. Stops the moment the schema is satisfied, even part-way
/// through a cell.
fn fill_headers<N: Node>(cells: &[N], headers: &mut HeaderSchema) {
    // only reached while incomplete, so nothing frozen is discarded
    headers.clear();
    let mut pos = 0;
    for cell in cells {
        for field in cell.text().split(HEADER_SEPARATOR) {
            if schema::is_complete(headers) {
                return;
            }
            headers.insert(pos, field.trim().to_lowercase());
            pos += 1;
        }
    }
}

fn build_record<N: Node>(group: &[N]) -> IncidentRecord {
    group
        .iter()
        .flat_map(|cell| split_fields(&cell.text_with_breaks(LINE_BREAK)))
        .collect()
}

/// Split linearised cell text on the line-break marker into trimmed,
/// lower-cased fields. Empty fields are kept.
pub fn split_fields(text: &str) -> Vec<String> {
    text.split(LINE_BREAK)
        .map(|field| field.trim().to_lowercase())
        .collect()
}
