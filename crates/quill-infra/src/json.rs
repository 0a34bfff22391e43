//! Fixture serialization.

use quill_core::domain::BlogPost;
use quill_core::ports::SinkError;

/// Render the collection as a pretty-printed JSON array (two-space indent,
/// raw UTF-8, no trailing newline).
///
/// Non-ASCII characters such as the em dash are written as UTF-8 rather than
/// `\u2014` escapes, so the file parses to the same values as an ASCII-escaped
/// rendering but is not byte-identical to one.
///
/// Every sink goes through this function so they all emit the same bytes.
pub fn render_pretty(posts: &[BlogPost]) -> Result<Vec<u8>, SinkError> {
    serde_json::to_vec_pretty(posts).map_err(|e| SinkError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use quill_core::FixtureGenerator;

    use super::*;

    #[test]
    fn test_render_is_stable() {
        let posts = FixtureGenerator::default().generate();
        assert_eq!(render_pretty(&posts).unwrap(), render_pretty(&posts).unwrap());
    }

    #[test]
    fn test_reparse_and_render_is_byte_identical() {
        let rendered = render_pretty(&FixtureGenerator::default().generate()).unwrap();
        let parsed: Vec<BlogPost> = serde_json::from_slice(&rendered).unwrap();
        assert_eq!(render_pretty(&parsed).unwrap(), rendered);
    }

    #[test]
    fn test_layout() {
        let rendered = render_pretty(&FixtureGenerator::default().generate()).unwrap();
        let text = String::from_utf8(rendered).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": \"1\",\n    \"title\": "));
        assert!(text.ends_with("\n]"));
        assert!(text.contains("<br/>— <cite>"));
        assert!(!text.contains("\\u2014"));
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(render_pretty(&[]).unwrap(), b"[]");
    }
}
