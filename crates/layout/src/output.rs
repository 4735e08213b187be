//! The drawing surface that layout primitives write into.

use crate::config::{LayoutConfig, PageGeometry};
use crate::{LayoutElement, LayoutError, PositionedElement};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Raw encoded image bytes shared between the chart cache and the canvas.
pub type SharedData = Arc<Vec<u8>>;

/// Pages of positioned elements plus the image resources they reference.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub geometry: PageGeometry,
    pub pages: Vec<Vec<PositionedElement>>,
    /// Image bytes keyed by resource name. Ordered so output is reproducible.
    pub resources: BTreeMap<String, SharedData>,
    max_pages: usize,
}

impl Canvas {
    /// A canvas with its first page already allocated.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            geometry: config.geometry,
            pages: vec![Vec::new()],
            resources: BTreeMap::new(),
            max_pages: config.max_pages.max(1),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Appends an empty page and returns its index.
    pub fn add_page(&mut self) -> Result<usize, LayoutError> {
        if self.pages.len() >= self.max_pages {
            return Err(LayoutError::PageLimitExceeded(self.max_pages));
        }
        self.pages.push(Vec::new());
        log::trace!("Allocated page {}", self.pages.len());
        Ok(self.pages.len() - 1)
    }

    pub fn push(&mut self, page: usize, element: PositionedElement) {
        match self.pages.get_mut(page) {
            Some(elements) => elements.push(element),
            None => log::warn!("Dropped element for missing page {}", page),
        }
    }

    pub fn register_image(&mut self, key: impl Into<String>, data: SharedData) {
        self.resources.entry(key.into()).or_insert(data);
    }

    /// All text on one page, in drawing order.
    pub fn page_text(&self, page: usize) -> Vec<&str> {
        self.pages
            .get(page)
            .map(|elements| elements.iter().filter_map(|e| e.as_text()).collect())
            .unwrap_or_default()
    }

    /// Index of the first page carrying exactly `text`.
    pub fn find_text(&self, text: &str) -> Option<usize> {
        (0..self.pages.len()).find(|&p| self.page_text(p).contains(&text))
    }

    pub fn image_count(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .filter(|e| matches!(e.element, LayoutElement::Image(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_has_one_page() {
        let canvas = Canvas::new(&LayoutConfig::default());
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn page_limit_is_enforced() {
        let config = LayoutConfig {
            max_pages: 2,
            ..Default::default()
        };
        let mut canvas = Canvas::new(&config);
        assert_eq!(canvas.add_page().unwrap(), 1);
        assert!(matches!(
            canvas.add_page(),
            Err(LayoutError::PageLimitExceeded(2))
        ));
    }
}
