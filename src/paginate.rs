//! Paginator: fixed-size slicing with page metadata. The engine never
//! clamps the requested page — an out-of-range page is an empty slice and
//! callers reset to page 1 whenever the filtered set changes size.

use serde::Serialize;

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    /// ceil(total / per_page), minimum 1 even for an empty collection.
    pub total_pages: u32,
    /// 1-based display bounds ("showing `from` to `to` of `total`");
    /// both 0 when the slice is empty.
    pub from: u64,
    pub to: u64,
}

pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Result<Page<T>> {
    if per_page == 0 {
        return Err(EngineError::InvalidPageSize);
    }

    let total = items.len() as u64;
    let total_pages = (total.div_ceil(per_page as u64) as u32).max(1);

    let start = (page.saturating_sub(1) as u64) * per_page as u64;
    let slice: Vec<T> = if start >= total || page == 0 {
        Vec::new()
    } else {
        let end = (start + per_page as u64).min(total);
        items[start as usize..end as usize].to_vec()
    };

    let (from, to) = if slice.is_empty() {
        (0, 0)
    } else {
        (start + 1, start + slice.len() as u64)
    };

    Ok(Page {
        items: slice,
        page,
        per_page,
        total,
        total_pages,
        from,
        to,
    })
}
