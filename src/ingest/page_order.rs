//! Reading-order sort for uploaded page images.

use crate::ingest::PageFile;

/// Extracts the page-number sort key from a filename.
///
/// The key is the first maximal run of decimal digits in the filename
/// (`"page12_v3.png"` → 12). A filename with no digits sorts first with key 0.
/// A run too large for `u64` sorts last. This heuristic is the documented
/// ordering contract for uploads and must not change, or existing chapters
/// re-ingested with the same filenames would reorder.
pub fn page_number(filename: &str) -> u64 {
    let digits: String = filename
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    }
}

/// Sorts an uploaded batch into reading order.
///
/// Ascending by [`page_number`]; the sort is stable, so files with equal keys
/// keep their original batch order.
pub fn sort_into_reading_order(files: &mut [PageFile]) {
    files.sort_by_key(|file| page_number(&file.filename));
}
