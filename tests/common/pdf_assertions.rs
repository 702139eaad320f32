use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Strings drawn with `Tj`, one entry per page in page order.
pub fn shown_text(doc: &LopdfDocument) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&page_id| {
            let bytes = doc.get_page_content(page_id).unwrap_or_default();
            Content::decode(&bytes)
                .map(|content| {
                    content
                        .operations
                        .iter()
                        .filter(|op| op.operator == "Tj")
                        .filter_map(|op| op.operands.first()?.as_str().ok())
                        .map(|s| String::from_utf8_lossy(s).into_owned())
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default()
        })
        .collect()
}

/// Value of a string entry in the `/Info` dictionary.
pub fn info_entry(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let value = doc.get_dictionary(info_id).ok()?.get(key).ok()?.as_str().ok()?;
    match value.strip_prefix(&[0xFE, 0xFF]) {
        Some(utf16) => {
            let units: Vec<u16> = utf16.chunks(2).map(|c| u16::from_be_bytes([c[0], c[1]])).collect();
            String::from_utf16(&units).ok()
        }
        None => Some(String::from_utf8_lossy(value).into_owned()),
    }
}

/// Number of image XObjects in the file.
pub fn image_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|s| matches!(s.dict.get(b"Subtype").and_then(|o| o.as_name()), Ok(b"Image")))
        .count()
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

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

/// Assert the footer of a 1-based page
#[macro_export]
macro_rules! assert_pdf_footer {
    ($pdf:expr, $page:expr, $text:expr) => {
        let footers = $pdf.footers();
        assert_eq!(
            footers.get($page - 1).map(String::as_str),
            Some($text),
            "Unexpected footer on page {}; all footers: {:?}",
            $page,
            footers
        );
    };
}
