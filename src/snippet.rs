//! Snippet type - a named piece of text
//!
//! `name` is the unique key (`keyword` column), `content` the stored text
//! (`message` column).

use serde::Serialize;

/// A named piece of text content stored under a unique key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub name: String,
    pub content: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_serializes_with_field_names() {
        let snippet = Snippet::new("k1", "v1");
        let json = serde_json::to_value(&snippet).unwrap();
        assert_eq!(json["name"], "k1");
        assert_eq!(json["content"], "v1");
    }
}
