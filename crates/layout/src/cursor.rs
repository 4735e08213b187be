use crate::config::PageGeometry;

/// Where the next block will be drawn.
///
/// Threaded by `&mut` through every primitive; each primitive reads the
/// position, draws, and leaves the cursor below what it drew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page_index: usize,
    /// Distance from the top edge of the page, in points.
    pub y: f32,
    pub geometry: PageGeometry,
}

impl LayoutCursor {
    /// A cursor at the top margin of the first page.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            page_index: 0,
            y: geometry.content_top(),
            geometry,
        }
    }

    /// Space left above the content bottom on the current page.
    pub fn remaining(&self) -> f32 {
        (self.geometry.content_bottom() - self.y).max(0.0)
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Moves the cursor to an absolute offset on the current page.
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub(crate) fn move_to_page(&mut self, page_index: usize) {
        self.page_index = page_index;
        self.y = self.geometry.content_top();
    }
}
