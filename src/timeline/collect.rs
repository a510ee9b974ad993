//! Keep-first post collection across scroll passes.

use super::ScrapedPost;
use std::collections::HashSet;

/// First-seen-ordered collection keyed by status id.
///
/// Later sightings of an id are discarded even when their fields differ;
/// posts without an id are never stored.
#[derive(Debug, Default)]
pub struct PostCollector {
    seen: HashSet<String>,
    posts: Vec<ScrapedPost>,
}

impl PostCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a post. Returns true when the post was kept.
    pub fn insert(&mut self, post: ScrapedPost) -> bool {
        let Some(id) = post.id.clone() else {
            return false;
        };
        if !self.seen.insert(id) {
            return false;
        }
        self.posts.push(post);
        true
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Consume the collector, yielding posts in first-seen order.
    pub fn into_posts(self) -> Vec<ScrapedPost> {
        self.posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: Option<&str>, text: &str) -> ScrapedPost {
        ScrapedPost {
            id: id.map(str::to_string),
            permalink: None,
            datetime: None,
            username: None,
            display_name: None,
            content_text: Some(text.to_string()),
            content_html: None,
            replies_count: None,
            reblogs_count: None,
            favourites_count: None,
        }
    }

    #[test]
    fn keeps_first_record_for_an_id() {
        let mut collector = PostCollector::new();
        assert!(collector.insert(post(Some("42"), "first")));
        assert!(!collector.insert(post(Some("42"), "second")));

        let posts = collector.into_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content_text.as_deref(), Some("first"));
    }

    #[test]
    fn null_id_is_never_stored() {
        let mut collector = PostCollector::new();
        assert!(!collector.insert(post(None, "ghost")));
        assert!(collector.is_empty());
    }

    #[test]
    fn preserves_first_seen_order() {
        let mut collector = PostCollector::new();
        for id in ["3", "1", "2", "1"] {
            collector.insert(post(Some(id), id));
        }
        let ids: Vec<_> = collector
            .into_posts()
            .into_iter()
            .map(|p| p.id.unwrap())
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
