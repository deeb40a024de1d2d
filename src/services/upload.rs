use tracing::warn;

use crate::error::AppError;
use crate::extractor::RawDocument;

pub const DEFAULT_FILENAME: &str = "syllabus.txt";

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Turn uploaded bytes into a document the extractor can read.
///
/// Only UTF-8 text is accepted. Control characters other than line breaks,
/// tabs and form feeds mark the upload as binary.
pub fn decode_upload(filename: Option<&str>, bytes: &[u8]) -> Result<RawDocument, AppError> {
    let filename = filename
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FILENAME);

    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.is_empty() {
        return Err(AppError::InvalidInput(format!("{} is empty", filename)));
    }

    let text = std::str::from_utf8(bytes).map_err(|e| {
        warn!("rejecting {}: not valid UTF-8 ({})", filename, e);
        AppError::InvalidInput(format!("{} is not a text document", filename))
    })?;

    if let Some(c) = text.chars().find(|c| is_forbidden_control(*c)) {
        warn!("rejecting {}: control character U+{:04X}", filename, c as u32);
        return Err(AppError::InvalidInput(format!(
            "{} contains binary data",
            filename
        )));
    }

    Ok(RawDocument::new(filename, text))
}

fn is_forbidden_control(c: char) -> bool {
    c.is_control() && !matches!(c, '\n' | '\r' | '\t' | '\u{0C}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_accepted() {
        let doc = decode_upload(Some("cse310.txt"), b"Course: Algorithms\r\n\tWeek 1").unwrap();
        assert_eq!(doc.filename, "cse310.txt");
        assert_eq!(doc.text, "Course: Algorithms\r\n\tWeek 1");
    }

    #[test]
    fn test_bom_is_stripped_and_filename_defaults() {
        let doc = decode_upload(None, b"\xEF\xBB\xBFCourse: Art").unwrap();
        assert_eq!(doc.filename, DEFAULT_FILENAME);
        assert_eq!(doc.text, "Course: Art");

        let doc = decode_upload(Some("  "), "Résumé writing".as_bytes()).unwrap();
        assert_eq!(doc.filename, DEFAULT_FILENAME);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = decode_upload(Some("x.pdf"), &[0x25, 0x50, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        let err = decode_upload(Some("x.bin"), b"PK\x03\x04word/document.xml").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = decode_upload(Some("x.txt"), b"hello\0world").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        assert!(decode_upload(Some("x.txt"), b"").is_err());
        assert!(decode_upload(Some("x.txt"), UTF8_BOM).is_err());
    }
}
