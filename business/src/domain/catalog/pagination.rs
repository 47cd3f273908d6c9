//! Fixed-size paging over a filtered product list.

/// Number of products shown on a single page.
pub const PRODUCTS_PER_PAGE: usize = 10;

/// Number of pages needed to show `len` items. Zero items means zero pages.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PRODUCTS_PER_PAGE)
}

/// Items `[(page - 1) * 10, page * 10)` of `items`, clamped to its length.
///
/// `page` is 1-indexed; page 0 and pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(PRODUCTS_PER_PAGE).min(items.len());
    let end = page.saturating_mul(PRODUCTS_PER_PAGE).min(items.len());
    &items[start..end]
}
