//! Plain string substitution for the content templates.

use crate::pools::QUOTE_DELIMITER;

const CATEGORY_PLACEHOLDER: &str = "{cat}";
const TITLE_PLACEHOLDER: &str = "{}";

/// Replace every `{cat}` placeholder with the category.
pub fn fill(template: &str, category: &str) -> String {
    template.replace(CATEGORY_PLACEHOLDER, category)
}

/// Title templates use a bare `{}` placeholder.
pub fn fill_title(template: &str, category: &str) -> String {
    template.replace(TITLE_PLACEHOLDER, category)
}

/// Quotation split into its text and attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotation<'a> {
    pub text: &'a str,
    pub attribution: &'a str,
}

impl<'a> Quotation<'a> {
    /// Split at the first `" - "`. A string without the delimiter becomes
    /// text with an empty attribution.
    pub fn parse(raw: &'a str) -> Self {
        let (text, attribution) = raw.split_once(QUOTE_DELIMITER).unwrap_or((raw, ""));
        Self { text, attribution }
    }

    /// Render as the `<blockquote>` fragment embedded in post content.
    pub fn to_html(&self) -> String {
        format!(
            "<blockquote>\"{}\" <br/>— <cite>{}</cite></blockquote>",
            self.text, self.attribution
        )
    }
}

/// Count whitespace-separated tokens; HTML tags count as literal tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_placeholder() {
        assert_eq!(fill("{cat} and {cat}", "UX"), "UX and UX");
        assert_eq!(fill("no placeholder", "UX"), "no placeholder");
    }

    #[test]
    fn test_fill_title() {
        assert_eq!(fill_title("{} vs. The World", "AI"), "AI vs. The World");
    }

    #[test]
    fn test_quotation_splits_at_first_delimiter() {
        let q = Quotation::parse("Stay hungry. - Steve Jobs");
        assert_eq!(q.text, "Stay hungry.");
        assert_eq!(q.attribution, "Steve Jobs");

        let q = Quotation::parse("a - b - c");
        assert_eq!(q.text, "a");
        assert_eq!(q.attribution, "b - c");
    }

    #[test]
    fn test_quotation_html() {
        let html = Quotation::parse("Less is more. - Mies").to_html();
        assert_eq!(
            html,
            "<blockquote>\"Less is more.\" <br/>— <cite>Mies</cite></blockquote>"
        );
    }

    #[test]
    fn test_word_count_counts_tags_as_tokens() {
        assert_eq!(word_count("<p>Hello world</p>"), 2);
        assert_eq!(word_count("<h3>A</h3> <p>b c</p>\n"), 3);
        // A tag surrounded by whitespace is a token of its own.
        assert_eq!(word_count("<p> a </p>"), 3);
        assert_eq!(word_count(""), 0);
    }
}
