use proplens_types::mm;

/// Physical page dimensions in points, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Band reserved above the bottom margin for footer chrome.
    pub footer_height: f32,
}

impl PageGeometry {
    /// A4 portrait with uniform margins, both given in millimetres.
    pub fn a4(margin_mm: f32, footer_mm: f32) -> Self {
        Self {
            width: mm(210.0),
            height: mm(297.0),
            margin_top: mm(margin_mm),
            margin_bottom: mm(margin_mm),
            margin_left: mm(margin_mm),
            margin_right: mm(margin_mm),
            footer_height: mm(footer_mm),
        }
    }

    pub fn content_left(&self) -> f32 {
        self.margin_left
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margin_right
    }

    pub fn content_width(&self) -> f32 {
        self.content_right() - self.content_left()
    }

    pub fn content_top(&self) -> f32 {
        self.margin_top
    }

    /// Lowest y any content block may reach.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom - self.footer_height
    }

    /// Vertical space available on a fresh page.
    pub fn usable_height(&self) -> f32 {
        self.content_bottom() - self.content_top()
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4(15.0, 20.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub geometry: PageGeometry,
    /// Hard ceiling on allocated pages. Exceeding it is a layout error.
    ///
    /// Defaults to `200`.
    pub max_pages: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            max_pages: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_content_area() {
        let g = PageGeometry::default();
        assert!((g.width - 595.28).abs() < 0.01);
        assert!((g.height - 841.89).abs() < 0.01);
        assert!((g.content_bottom() - mm(262.0)).abs() < 0.01);
        assert!((g.content_width() - mm(180.0)).abs() < 0.01);
    }
}
