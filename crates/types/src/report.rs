use serde::{Deserialize, Serialize};

/// Caller-supplied selection of sections, format and notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportConfiguration {
    /// Section identifiers such as `"executiveSummary"`. Order here does not
    /// matter; sections are always composed in canonical order.
    pub selected_sections: Vec<String>,
    /// `"detailed"` adds a table of contents.
    pub format: String,
    pub custom_notes: Option<String>,
}

impl Default for ReportConfiguration {
    fn default() -> Self {
        Self {
            selected_sections: Vec::new(),
            format: "standard".to_string(),
            custom_notes: None,
        }
    }
}

impl ReportConfiguration {
    pub fn is_detailed(&self) -> bool {
        self.format == "detailed"
    }

    pub fn includes(&self, section: &str) -> bool {
        self.selected_sections.iter().any(|s| s == section)
    }

    /// Notes with surrounding whitespace removed, `None` when blank.
    pub fn notes(&self) -> Option<&str> {
        self.custom_notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Realtor contact details shown in the header and footer chrome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealtorBrandingInfo {
    pub name: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo_url: Option<String>,
}

impl RealtorBrandingInfo {
    /// `phone | email`, skipping whichever is missing.
    pub fn contact_line(&self) -> Option<String> {
        let parts: Vec<&str> = [self.phone.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" | "))
        }
    }
}

/// Letter-grade summary of the investment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentGrade {
    /// Weighted score, `0..=100`.
    pub score: u8,
    /// `"A+"` through `"F"`.
    pub grade: String,
    pub description: String,
}
