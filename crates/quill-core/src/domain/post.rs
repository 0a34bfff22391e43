use serde::{Deserialize, Serialize};

use super::Comment;

/// Blog post record.
///
/// Field order and the camelCase JSON names are consumed verbatim by the
/// front-end, so neither may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub author_role: String,
    pub date: String,
    /// Epoch milliseconds of the same instant `date` was formatted from.
    pub timestamp: i64,
    pub read_time: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        BlogPost {
            id: "7".to_string(),
            title: "A Deep Dive into Cloud".to_string(),
            excerpt: "excerpt".to_string(),
            content: "<p>body</p>".to_string(),
            author: "Sophia Dev".to_string(),
            author_role: "Frontend Engineer".to_string(),
            date: "Jan 23, 2026".to_string(),
            timestamp: 1_769_117_000_000,
            read_time: "5 min read".to_string(),
            image: "https://example.test/img".to_string(),
            category: "Cloud".to_string(),
            tags: vec!["Cloud".to_string()],
            comments: vec![Comment {
                id: Comment::id_for(7, 0),
                author: "Jamie Tech".to_string(),
                content: "Nice".to_string(),
                date: "Jan 23, 2026".to_string(),
            }],
        }
    }

    #[test]
    fn test_serializes_camel_case_fields_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys = [
            "\"id\"",
            "\"title\"",
            "\"excerpt\"",
            "\"content\"",
            "\"author\"",
            "\"authorRole\"",
            "\"date\"",
            "\"timestamp\"",
            "\"readTime\"",
            "\"image\"",
            "\"category\"",
            "\"tags\"",
            "\"comments\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains("\"c-7-0\""));
    }
}
