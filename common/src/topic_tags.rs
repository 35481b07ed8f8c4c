//! Bounded, normalized list of topic keywords.

use serde::{Deserialize, Serialize};

use crate::search_const::MAX_TOPIC_TAGS;

/// Ordered topic keywords. Tags are trimmed, lower-cased and unique, and the
/// list never grows past [`MAX_TOPIC_TAGS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TopicTags(Vec<String>);

impl TopicTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma separated topic string, as found in the `topic` query key.
    pub fn from_joined(joined: &str) -> Self {
        let mut tags = Self::new();
        for tag in joined.split(',') {
            tags.push(tag);
        }
        tags
    }

    /// Adds a tag. Returns false when the tag is empty, already present, or
    /// the list is full; the list is unchanged in those cases.
    pub fn push(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || self.is_full() || self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let len = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != len
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn joined(&self) -> String {
        self.0.join(",")
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_TOPIC_TAGS
    }

    pub fn remaining(&self) -> usize {
        MAX_TOPIC_TAGS.saturating_sub(self.0.len())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for TopicTags {
    fn from(value: Vec<String>) -> Self {
        let mut tags = Self::new();
        for tag in value {
            tags.push(&tag);
        }
        tags
    }
}

impl From<TopicTags> for Vec<String> {
    fn from(value: TopicTags) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_normalized_and_deduplicated() {
        let mut tags = TopicTags::new();
        assert!(tags.push("  Machine Learning "));
        assert!(!tags.push("machine learning"));
        assert!(!tags.push("   "));
        assert_eq!(tags.as_slice(), &["machine learning".to_string()]);
    }

    #[test]
    fn seventh_tag_is_a_no_op() {
        let mut tags = TopicTags::from_joined("a,b,c,d,e,f");
        assert_eq!(tags.len(), MAX_TOPIC_TAGS);
        assert!(tags.is_full());
        assert_eq!(tags.remaining(), 0);

        let before = tags.clone();
        assert!(!tags.push("g"));
        assert_eq!(tags, before);
    }

    #[test]
    fn joined_string_keeps_insertion_order() {
        let tags = TopicTags::from_joined("Physics, chemistry,,physics,Biology");
        assert_eq!(tags.joined(), "physics,chemistry,biology");
    }

    #[test]
    fn remove_and_pop() {
        let mut tags = TopicTags::from_joined("a,b,c");
        assert!(tags.remove("b"));
        assert!(!tags.remove("b"));
        assert_eq!(tags.pop().as_deref(), Some("c"));
        assert_eq!(tags.joined(), "a");
    }

    #[test]
    fn deserializing_applies_the_same_rules() {
        let tags: TopicTags = serde_json::from_str(r#"["A","a","b","c","d","e","f","g"]"#).unwrap();
        assert_eq!(tags.joined(), "a,b,c,d,e,f");
    }
}
