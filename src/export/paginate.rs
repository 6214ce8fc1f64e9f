//! Greedy pagination of prepared lines onto fixed-capacity pages.

use crate::model::Page;

use super::PageGeometry;

/// Partition lines into pages holding at most
/// [`PageGeometry::max_lines_per_page`] lines each.
///
/// Always yields at least one page, even for an empty line sequence, so the
/// footer has somewhere to land.
pub fn paginate(lines: &[String], geometry: &PageGeometry) -> Vec<Page> {
    let capacity = geometry.max_lines_per_page();

    let mut pages: Vec<Page> = lines
        .chunks(capacity)
        .enumerate()
        .map(|(i, chunk)| Page {
            number: i as u32 + 1,
            lines: chunk.to_vec(),
        })
        .collect();

    if pages.is_empty() {
        pages.push(Page::new(1));
    }

    log::debug!(
        "paginated {} lines onto {} pages ({} per page)",
        lines.len(),
        pages.len(),
        capacity
    );
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn test_empty_input_yields_one_page() {
        let pages = paginate(&[], &PageGeometry::a4());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_partition_is_exact() {
        let lines = numbered_lines(100);
        let pages = paginate(&lines, &PageGeometry::a4());
        let total: usize = pages.iter().map(Page::line_count).sum();
        assert_eq!(total, 100);

        let capacity = PageGeometry::a4().max_lines_per_page();
        for page in &pages {
            assert!(page.line_count() <= capacity);
        }
    }

    #[test]
    fn test_page_numbers_are_sequential() {
        let lines = numbered_lines(200);
        let pages = paginate(&lines, &PageGeometry::a4());
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.number, i as u32 + 1);
        }
    }

    #[test]
    fn test_a4_defaults_500_lines() {
        // 37 lines per page with the A4 defaults: ceil(500 / 37) = 14 pages.
        let pages = paginate(&numbered_lines(500), &PageGeometry::a4());
        assert_eq!(pages.len(), 14);
        assert_eq!(pages.last().unwrap().line_count(), 500 - 13 * 37);
    }

    #[test]
    fn test_39_line_pages_500_lines() {
        // line_height 19 fits 39 lines per page: ceil(500 / 39) = 13 pages.
        let mut geometry = PageGeometry::a4();
        geometry.line_height = 19.0;
        assert_eq!(geometry.max_lines_per_page(), 39);

        let pages = paginate(&numbered_lines(500), &geometry);
        assert_eq!(pages.len(), 13);
        assert_eq!(pages.last().unwrap().line_count(), 500 - 12 * 39);
    }

    #[test]
    fn test_order_preserved_across_pages() {
        let lines = numbered_lines(80);
        let pages = paginate(&lines, &PageGeometry::a4());
        let flattened: Vec<&String> = pages.iter().flat_map(|p| p.lines.iter()).collect();
        assert_eq!(flattened.len(), 80);
        assert_eq!(flattened[0], "line 0");
        assert_eq!(flattened[79], "line 79");
    }
}
