/// Pagination window computation for the numbered page strip.
///
/// Pure function from (current page, total pages) to the bounded set of page
/// numbers to render, with first/last shortcuts and ellipsis collapsing.
const WINDOW_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Page numbers to render, 0-based, contiguous.
    pub pages: Vec<usize>,
    /// Shortcut to page 0 before the window.
    pub show_first: bool,
    /// Ellipsis between page 0 and the window start.
    pub leading_ellipsis: bool,
    /// Shortcut to the last page after the window.
    pub show_last: bool,
    /// Ellipsis between the window end and the last page.
    pub trailing_ellipsis: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageWindow {
    /// Returns `None` when there is a single page or none: no pagination
    /// control is shown at all in that case.
    pub fn compute(current_page: usize, total_pages: usize) -> Option<PageWindow> {
        if total_pages <= 1 {
            return None;
        }

        let mut start = current_page.saturating_sub(2);
        let end = (start + WINDOW_SIZE - 1).min(total_pages - 1);
        // Pull the window back when it is clipped by the last page.
        if end - start < WINDOW_SIZE - 1 {
            start = end.saturating_sub(WINDOW_SIZE - 1);
        }

        Some(PageWindow {
            pages: (start..=end).collect(),
            show_first: start > 0,
            leading_ellipsis: start > 1,
            show_last: end < total_pages - 1,
            trailing_ellipsis: end + 2 < total_pages,
            prev_enabled: current_page > 0,
            next_enabled: current_page + 1 < total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_control_for_single_page() {
        assert_eq!(PageWindow::compute(0, 0), None);
        assert_eq!(PageWindow::compute(0, 1), None);
    }

    #[test]
    fn test_middle_of_long_run() {
        let w = PageWindow::compute(10, 20).unwrap();
        assert_eq!(w.pages, vec![8, 9, 10, 11, 12]);
        assert!(w.show_first);
        assert!(w.leading_ellipsis);
        assert!(w.show_last);
        assert!(w.trailing_ellipsis);
        assert!(w.prev_enabled);
        assert!(w.next_enabled);
    }

    #[test]
    fn test_first_page() {
        let w = PageWindow::compute(0, 20).unwrap();
        assert_eq!(w.pages, vec![0, 1, 2, 3, 4]);
        assert!(!w.show_first);
        assert!(!w.leading_ellipsis);
        assert!(w.show_last);
        assert!(w.trailing_ellipsis);
        assert!(!w.prev_enabled);
        assert!(w.next_enabled);
    }

    #[test]
    fn test_last_page() {
        let w = PageWindow::compute(19, 20).unwrap();
        assert_eq!(w.pages, vec![15, 16, 17, 18, 19]);
        assert!(w.show_first);
        assert!(w.leading_ellipsis);
        assert!(!w.show_last);
        assert!(!w.trailing_ellipsis);
        assert!(w.prev_enabled);
        assert!(!w.next_enabled);
    }

    #[test]
    fn test_short_run_has_no_shortcuts() {
        let w = PageWindow::compute(1, 3).unwrap();
        assert_eq!(w.pages, vec![0, 1, 2]);
        assert!(!w.show_first);
        assert!(!w.leading_ellipsis);
        assert!(!w.show_last);
        assert!(!w.trailing_ellipsis);
    }

    #[test]
    fn test_shortcut_without_ellipsis() {
        // Window starts at exactly page 1: shortcut to page 0, no gap to hide.
        let w = PageWindow::compute(3, 7).unwrap();
        assert_eq!(w.pages, vec![1, 2, 3, 4, 5]);
        assert!(w.show_first);
        assert!(!w.leading_ellipsis);
        assert!(w.show_last);
        assert!(!w.trailing_ellipsis);
    }

    #[test]
    fn test_near_end_window_is_pulled_back() {
        let w = PageWindow::compute(18, 20).unwrap();
        assert_eq!(w.pages, vec![15, 16, 17, 18, 19]);
        assert!(!w.show_last);
        assert!(w.next_enabled);
    }
}
