//! Offset/limit pagination over shaped results.

/// A single page of results plus metadata about the full set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Size of the full set, independent of offset and limit
    pub total: usize,

    /// True when items exist past this page
    pub has_more: bool,
}

/// Slice `items` starting at `offset`, returning at most `limit` entries
///
/// An offset at or past the end yields an empty page.
pub fn paginate<T: Clone>(items: &[T], offset: usize, limit: usize) -> Page<T> {
    let total = items.len();
    let start = offset.min(total);
    let end = start.saturating_add(limit).min(total);
    let page = items[start..end].to_vec();
    let has_more = offset.saturating_add(page.len()) < total;

    Page {
        items: page,
        total,
        has_more,
    }
}
