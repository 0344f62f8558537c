// Pager
// Ordered page list and the current swipe progress

/// One page of content: a stable id, the tab title, and optional body text
#[derive(Debug, Clone)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub body: Option<String>,
}

/// Sub-page swipe progress, supplied once per animation frame.
/// `offset` is the fraction swiped toward the next page, in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageProgress {
    pub page_index: usize,
    pub offset: f32,
}

impl PageProgress {
    /// Largest representable in-flight offset; a full page advance is
    /// reported as the next index with offset 0 instead.
    const MAX_OFFSET: f32 = 1.0 - f32::EPSILON;

    pub fn new(page_index: usize, offset: f32) -> Self {
        Self {
            page_index,
            offset: offset.clamp(0.0, Self::MAX_OFFSET),
        }
    }

    /// Progress for a page the pager has settled on
    pub fn settled(page_index: usize) -> Self {
        Self { page_index, offset: 0.0 }
    }
}

impl Default for PageProgress {
    fn default() -> Self {
        Self::settled(0)
    }
}

/// Holds the ordered pages and the progress the swipe source reports.
/// The indicator only ever needs the page count and the per-frame
/// progress from here.
pub struct Pager {
    pages: Vec<Page>,
    progress: PageProgress,
}

impl Pager {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            progress: PageProgress::default(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// The page currently under the indicator
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.progress.page_index)
    }

    /// The page being swiped toward, if the current one is not the last
    pub fn next_page(&self) -> Option<&Page> {
        self.pages.get(self.progress.page_index + 1)
    }

    pub fn titles(&self) -> Vec<String> {
        self.pages.iter().map(|p| p.title.clone()).collect()
    }

    pub fn progress(&self) -> PageProgress {
        self.progress
    }

    /// Record one swipe frame; indices past the last page clamp to it
    pub fn set_progress(&mut self, progress: PageProgress) {
        let last = self.pages.len().saturating_sub(1);
        self.progress = PageProgress::new(progress.page_index.min(last), progress.offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(n: usize) -> Vec<Page> {
        (1..=n)
            .map(|i| Page {
                id: format!("item-{}", i),
                title: format!("Item {}", i),
                body: None,
            })
            .collect()
    }

    #[test]
    fn test_progress_offset_stays_below_one() {
        let progress = PageProgress::new(2, 1.0);
        assert!(progress.offset < 1.0);
        let progress = PageProgress::new(2, -0.5);
        assert_eq!(progress.offset, 0.0);
    }

    #[test]
    fn test_set_progress_clamps_page_index() {
        let mut pager = Pager::new(pages(3));
        pager.set_progress(PageProgress::settled(9));
        assert_eq!(pager.progress().page_index, 2);
        assert_eq!(pager.current_page().map(|p| p.title.as_str()), Some("Item 3"));
    }

    #[test]
    fn test_next_page_at_end() {
        let mut pager = Pager::new(pages(2));
        assert_eq!(pager.next_page().map(|p| p.id.as_str()), Some("item-2"));
        pager.set_progress(PageProgress::settled(1));
        assert!(pager.next_page().is_none());
    }

    #[test]
    fn test_empty_pager() {
        let pager = Pager::new(Vec::new());
        assert!(pager.is_empty());
        assert!(pager.current_page().is_none());
        assert!(pager.titles().is_empty());
    }
}
