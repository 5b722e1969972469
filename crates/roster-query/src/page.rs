//! Fixed-size pagination over the pipeline output.

use std::num::NonZeroUsize;

use roster_model::UserRecord;

/// One page of rows plus the derived page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Rows visible on this page, in pipeline order.
    pub rows: Vec<UserRecord>,
    /// Total number of pages; 0 when the row set is empty.
    pub total_pages: usize,
}

/// Slice `rows` into the 1-based `page` of `page_size` rows.
///
/// Pages partition the input exactly: concatenating pages
/// `1..=total_pages` reproduces `rows` once, with no gaps or overlap.
/// Out-of-range pages (including page 0) yield an empty slice; clamping
/// `current_page` back into range is the caller's responsibility.
pub fn paginate(rows: &[UserRecord], page_size: NonZeroUsize, page: usize) -> Page {
    let size = page_size.get();
    let total_pages = rows.len().div_ceil(size);
    let start = page.saturating_sub(1).saturating_mul(size);
    let slice: &[UserRecord] = if page == 0 || start >= rows.len() {
        &[]
    } else {
        &rows[start..rows.len().min(start + size)]
    };
    Page {
        rows: slice.to_vec(),
        total_pages,
    }
}
