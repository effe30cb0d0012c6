//! The placeholder order document.
//!
//! There is no real document fetch. Every download request is answered
//! with the same minimal single-page PDF so the end-to-end flow can be
//! exercised without touching the court website.

/// File name offered to the browser for downloaded orders.
pub const ORDER_PDF_FILENAME: &str = "court_order.pdf";

// xref offsets are fixed; the body above them never changes.
const ORDER_PDF: &[u8] = b"%PDF-1.4\n\
1 0 obj\n\
<<\n\
/Type /Catalog\n\
/Pages 2 0 R\n\
>>\n\
endobj\n\
\n\
2 0 obj\n\
<<\n\
/Type /Pages\n\
/Kids [3 0 R]\n\
/Count 1\n\
>>\n\
endobj\n\
\n\
3 0 obj\n\
<<\n\
/Type /Page\n\
/Parent 2 0 R\n\
/MediaBox [0 0 612 792]\n\
/Contents 4 0 R\n\
/Resources <<\n\
/Font <<\n\
/F1 5 0 R\n\
>>\n\
>>\n\
>>\n\
endobj\n\
\n\
4 0 obj\n\
<<\n\
/Length 85\n\
>>\n\
stream\n\
BT\n\
/F1 12 Tf\n\
72 720 Td\n\
(Delhi High Court - Order Document) Tj\n\
0 -20 Td\n\
(This is a sample court order for demonstration.) Tj\n\
ET\n\
endstream\n\
endobj\n\
\n\
5 0 obj\n\
<<\n\
/Type /Font\n\
/Subtype /Type1\n\
/BaseFont /Helvetica\n\
>>\n\
endobj\n\
\n\
xref\n\
0 6\n\
0000000000 65535 f \n\
0000000009 00000 n \n\
0000000058 00000 n \n\
0000000115 00000 n \n\
0000000274 00000 n \n\
0000000410 00000 n \n\
trailer\n\
<<\n\
/Size 6\n\
/Root 1 0 R\n\
>>\n\
startxref\n\
507\n\
%%EOF";

/// Returns the placeholder PDF served for every order-document request.
#[must_use]
pub fn placeholder_order_pdf() -> &'static [u8] {
    ORDER_PDF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_magic_bytes() {
        let pdf = placeholder_order_pdf();
        assert!(pdf.starts_with(b"%PDF-1.4"));
        assert!(pdf.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_pdf_contains_demo_text() {
        let pdf = placeholder_order_pdf();
        let text = std::str::from_utf8(pdf).unwrap();
        assert!(text.contains("Delhi High Court - Order Document"));
        assert!(text.contains("This is a sample court order for demonstration."));
    }
}
