//! Post field extraction from rendered timeline HTML.
//!
//! Mastodon's web UI renders each status as an `article`; class names vary
//! between the compact timeline view and the detailed status view, so every
//! field carries an ordered list of selector probes. A probe succeeds only
//! when the element exists and the wanted attribute or text is present; the
//! first success wins and a full miss yields a null field, never an error.
//!
//! All entry points are synchronous: `scraper` types are not `Send`, so
//! parsing happens between awaits on a snapshot string.

use super::ScrapedPost;
use scraper::{ElementRef, Html, Selector};

const PERMALINK_PROBES: [&str; 2] = ["a.status__relative-time", "a.detailed-status__datetime"];
const DATETIME_PROBES: [&str; 1] = ["time"];
const USERNAME_PROBES: [&str; 2] = [".display-name__account", ".status__display-name strong"];
const DISPLAY_NAME_PROBES: [&str; 2] = [".display-name__html", ".status__display-name strong"];
const CONTENT_PROBES: [&str; 2] = [".status__content", ".detailed-status__text"];

/// Extract every rendered `article` in a DOM snapshot, in document order.
pub fn extract_posts(html: &str) -> Vec<ScrapedPost> {
    let doc = Html::parse_document(html);
    let articles = Selector::parse("article").expect("static selector");
    doc.select(&articles).map(extract_post).collect()
}

/// Extract one post element. Never fails; missed fields are null.
pub fn extract_post(article: ElementRef<'_>) -> ScrapedPost {
    let permalink = probe_attr(article, &PERMALINK_PROBES, "href");
    let id = permalink.as_deref().and_then(status_id);

    let (content_text, content_html) = match probe_element(article, &CONTENT_PROBES) {
        Some(el) => (Some(el.text().collect::<String>()), Some(el.inner_html())),
        None => (None, None),
    };

    ScrapedPost {
        id,
        permalink,
        datetime: probe_attr(article, &DATETIME_PROBES, "datetime"),
        username: probe_text(article, &USERNAME_PROBES),
        display_name: probe_text(article, &DISPLAY_NAME_PROBES),
        content_text,
        content_html,
        replies_count: None,
        reblogs_count: None,
        favourites_count: None,
    }
}

/// The status id is the permalink's trailing path segment.
fn status_id(permalink: &str) -> Option<String> {
    let segment = permalink.trim_end_matches('/').rsplit('/').next()?;
    (!segment.is_empty()).then(|| segment.to_string())
}

fn probe_element<'a>(scope: ElementRef<'a>, probes: &[&str]) -> Option<ElementRef<'a>> {
    probes.iter().find_map(|probe| {
        let selector = Selector::parse(probe).ok()?;
        scope.select(&selector).next()
    })
}

fn probe_attr(scope: ElementRef<'_>, probes: &[&str], attr: &str) -> Option<String> {
    probes.iter().find_map(|probe| {
        let selector = Selector::parse(probe).ok()?;
        scope
            .select(&selector)
            .next()?
            .value()
            .attr(attr)
            .map(str::to_string)
    })
}

fn probe_text(scope: ElementRef<'_>, probes: &[&str]) -> Option<String> {
    probes.iter().find_map(|probe| {
        let selector = Selector::parse(probe).ok()?;
        let text: String = scope.select(&selector).next()?.text().collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMELINE_VIEW: &str = r#"
        <article>
          <a class="status__relative-time" href="https://a.example/@alice/42/">
            <time datetime="2024-05-01T12:00:00Z">1h</time>
          </a>
          <span class="display-name__account">@alice</span>
          <span class="display-name__html">Alice</span>
          <div class="status__content"><p>hello <b>world</b></p></div>
        </article>"#;

    const DETAILED_VIEW: &str = r#"
        <article>
          <a class="detailed-status__datetime" href="https://a.example/@bob/7">
            <time datetime="2024-05-02T08:30:00Z">May 2</time>
          </a>
          <div class="status__display-name"><strong>Bob</strong></div>
          <div class="detailed-status__text"><p>second view</p></div>
        </article>"#;

    fn first_post(html: &str) -> ScrapedPost {
        let posts = extract_posts(html);
        assert_eq!(posts.len(), 1);
        posts.into_iter().next().unwrap()
    }

    #[test]
    fn timeline_view_uses_primary_probes() {
        let post = first_post(TIMELINE_VIEW);
        assert_eq!(post.id.as_deref(), Some("42"));
        assert_eq!(
            post.permalink.as_deref(),
            Some("https://a.example/@alice/42/")
        );
        assert_eq!(post.datetime.as_deref(), Some("2024-05-01T12:00:00Z"));
        assert_eq!(post.username.as_deref(), Some("@alice"));
        assert_eq!(post.display_name.as_deref(), Some("Alice"));
        assert_eq!(post.content_text.as_deref(), Some("hello world"));
        assert_eq!(post.content_html.as_deref(), Some("<p>hello <b>world</b></p>"));
    }

    #[test]
    fn detailed_view_falls_back_to_secondary_probes() {
        let post = first_post(DETAILED_VIEW);
        assert_eq!(post.id.as_deref(), Some("7"));
        // both name fields fall through to the shared strong element
        assert_eq!(post.username.as_deref(), Some("Bob"));
        assert_eq!(post.display_name.as_deref(), Some("Bob"));
        assert_eq!(post.content_text.as_deref(), Some("second view"));
    }

    #[test]
    fn missing_fields_are_null_not_errors() {
        let post = first_post("<article><p>bare</p></article>");
        assert_eq!(post, ScrapedPost {
            id: None,
            permalink: None,
            datetime: None,
            username: None,
            display_name: None,
            content_text: None,
            content_html: None,
            replies_count: None,
            reblogs_count: None,
            favourites_count: None,
        });
    }

    #[test]
    fn counts_start_null_before_enrichment() {
        let post = first_post(TIMELINE_VIEW);
        assert!(post.replies_count.is_none());
        assert!(post.reblogs_count.is_none());
        assert!(post.favourites_count.is_none());
    }

    #[test]
    fn status_id_strips_trailing_slashes() {
        assert_eq!(status_id("https://a.example/@u/99///").as_deref(), Some("99"));
        assert_eq!(status_id("///"), None);
        assert_eq!(status_id(""), None);
    }

    #[test]
    fn multiple_articles_extract_in_document_order() {
        let html = format!("{TIMELINE_VIEW}{DETAILED_VIEW}");
        let posts = extract_posts(&html);
        let ids: Vec<_> = posts.iter().map(|p| p.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("42"), Some("7")]);
    }
}
