//! Client-side page windows over an already fetched collection.
//!
//! Pages are 1-indexed. An empty collection has zero pages; a page index
//! outside `1..=total_pages` yields an empty window instead of an error.

/// Visible slice of a collection plus the page count it was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> PageWindow<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    if page_index == 0 || page_index > total_pages {
        return PageWindow {
            visible: &[],
            total_pages,
        };
    }

    let start = (page_index - 1) * page_size;
    let end = (start + page_size).min(items.len());
    PageWindow {
        visible: &items[start..end],
        total_pages,
    }
}

/// Brings a page index back into `1..=total_pages` (page 1 when there are none)
pub fn clamp_page(page_index: usize, total_pages: usize) -> usize {
    page_index.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (1..=13).collect();
        let window = paginate(&items, 6, 3);
        assert_eq!(window.visible, &[13]);
        assert_eq!(window.total_pages, 3);
    }

    #[test]
    fn test_full_pages() {
        let items: Vec<u32> = (1..=13).collect();
        assert_eq!(paginate(&items, 6, 1).visible, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(paginate(&items, 6, 2).visible, &[7, 8, 9, 10, 11, 12]);

        let exact: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&exact, 6, 2).total_pages, 2);
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        let window = paginate(&items, 6, 1);
        assert!(window.visible.is_empty());
        assert_eq!(window.total_pages, 0);
    }

    #[test]
    fn test_out_of_range_degrades_to_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 6, 2).visible.is_empty());
        assert!(paginate(&items, 6, 0).visible.is_empty());
        assert_eq!(paginate(&items, 6, 2).total_pages, 1);
    }

    #[test]
    fn test_zero_page_size() {
        let items: Vec<u32> = (1..=5).collect();
        let window = paginate(&items, 0, 1);
        assert!(window.visible.is_empty());
        assert_eq!(window.total_pages, 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(4, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 0), 1);
        assert_eq!(clamp_page(2, 3), 2);
    }
}
