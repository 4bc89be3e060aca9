//! Deterministic pagination.
//!
//! Third stage of the query pipeline. Runs after filter and search so that
//! `total_pages` reflects the narrowed set, and after the stable sort so
//! page boundaries are deterministic across requests.

/// Slice one page out of a collection.
///
/// Returns the page contents and the total page count
/// (`ceil(len / page_size)`, 0 for an empty collection). A page number
/// past the end yields an empty slice with the correct total; it is the
/// routing layer's job to normalize nonsense page input to 1 before this
/// point (see [`crate::query::QueryRequest::parse_page`]).
pub fn paginate<T>(items: Vec<T>, page: u32, page_size: usize) -> (Vec<T>, u32) {
    let total = total_pages(items.len(), page_size);
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);

    if start >= items.len() {
        return (Vec::new(), total);
    }

    let page_items = items
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();
    (page_items, total)
}

/// Total page count for a collection size.
pub fn total_pages(count: usize, page_size: usize) -> u32 {
    debug_assert!(page_size > 0, "page_size must be positive");
    count.div_ceil(page_size.max(1)) as u32
}

/// 1-based display rank of the item at `offset` within `page`.
///
/// Continuous across pages: the first item of page 2 is `page_size + 1`.
/// Display-only; never a stored identifier.
pub fn order_index(page: u32, offset: usize, page_size: usize) -> usize {
    (page.max(1) as usize - 1) * page_size + offset + 1
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn slices_interior_and_final_pages() {
        let items: Vec<u32> = (1..=25).collect();

        let (page, total) = paginate(items.clone(), 1, 10);
        assert_eq!(page, (1..=10).collect::<Vec<_>>());
        assert_eq!(total, 3);

        let (page, total) = paginate(items.clone(), 2, 10);
        assert_eq!(page, (11..=20).collect::<Vec<_>>());
        assert_eq!(total, 3);

        let (page, total) = paginate(items, 3, 10);
        assert_eq!(page, (21..=25).collect::<Vec<_>>());
        assert_eq!(total, 3);
    }

    #[test]
    fn out_of_range_page_yields_empty_slice_with_correct_total() {
        let items: Vec<u32> = (1..=25).collect();
        let (page, total) = paginate(items, 4, 10);
        assert!(page.is_empty());
        assert_eq!(total, 3);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let (page, total) = paginate(Vec::<u32>::new(), 1, 10);
        assert!(page.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn concatenated_pages_cover_the_collection() {
        let items: Vec<u32> = (1..=25).collect();
        let total = total_pages(items.len(), 10);

        let mut gathered = Vec::new();
        for page in 1..=total {
            let (slice, _) = paginate(items.clone(), page, 10);
            gathered.extend(slice);
        }
        assert_eq!(gathered, items);
    }

    #[test]
    fn order_indices_are_page_continuous() {
        assert_eq!(order_index(1, 0, 10), 1);
        assert_eq!(order_index(1, 9, 10), 10);
        assert_eq!(order_index(2, 0, 10), 11);
        assert_eq!(order_index(3, 4, 10), 25);
    }
}
