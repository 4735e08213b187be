use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Count image XObjects anywhere in the document
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|name| name == b"Image")
        })
        .count()
}

/// 1-based number of the first page whose text contains `needle`
pub fn find_page(doc: &LopdfDocument, needle: &str) -> Option<u32> {
    let pages = doc.get_pages().len() as u32;
    (1..=pages).find(|&p| doc.extract_text(&[p]).is_ok_and(|t| t.contains(needle)))
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
