//! Generator settings that are not part of a single report request.

use crate::error::GenerationError;
use chrono::NaiveDate;
use proplens_layout::{LayoutConfig, PageGeometry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Page margins and footer band, in millimetres. The page itself is always
/// A4 portrait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    pub margin_mm: f32,
    pub footer_mm: f32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            margin_mm: 15.0,
            footer_mm: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Document title written to the PDF metadata.
    pub title: String,
    /// Generation fails with a layout error past this many pages.
    pub max_pages: usize,
    /// Render charts on the thread pool instead of the calling thread.
    pub parallel_charts: bool,
    /// Load installed system fonts for chart labels.
    pub system_fonts: bool,
    /// Extra directories scanned for chart label fonts.
    pub font_dirs: Vec<PathBuf>,
    /// Fixed date for the cover page. Today's date when unset.
    pub generated_on: Option<NaiveDate>,
    pub page: PageSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            title: "Property Investment Analysis Report".to_string(),
            max_pages: 200,
            parallel_charts: true,
            system_fonts: true,
            font_dirs: Vec::new(),
            generated_on: None,
            page: PageSettings::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GenerationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GenerationError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&source)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_pages == 0 {
            return Err(GenerationError::Config("maxPages must be at least 1".into()));
        }
        let PageSettings { margin_mm, footer_mm } = self.page;
        if !(0.0..=60.0).contains(&margin_mm) || !(0.0..=60.0).contains(&footer_mm) {
            return Err(GenerationError::Config(format!(
                "page margins must be between 0 and 60 mm (margin {margin_mm}, footer {footer_mm})"
            )));
        }
        Ok(())
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            geometry: PageGeometry::a4(self.page.margin_mm, self.page.footer_mm),
            max_pages: self.max_pages,
        }
    }

    pub fn report_date(&self) -> NaiveDate {
        self.generated_on
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
