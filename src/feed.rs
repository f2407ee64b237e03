//! RSS 2.0 feed generation for the blog.
//!
//! One item per post, newest 20, with RFC 2822 publication dates. The feed
//! is assembled by hand rather than through an XML library — the channel
//! shape is fixed and tiny, and every interpolated field goes through
//! [`xml_escape`]. `<ttl>60</ttl>` mirrors the 1-hour cache policy; actual
//! cache headers are the hosting layer's concern.

use crate::blog::PostSummary;
use crate::config::SiteConfig;

/// Maximum number of items in the feed.
pub const FEED_LIMIT: usize = 20;

/// Escape the five XML special characters.
pub fn xml_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the RSS feed from the given posts.
///
/// Posts are sorted newest-first and truncated to [`FEED_LIMIT`]; the input
/// order does not matter.
pub fn render_feed(config: &SiteConfig, posts: &[PostSummary]) -> String {
    let mut newest: Vec<&PostSummary> = posts.iter().collect();
    newest.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    newest.truncate(FEED_LIMIT);

    let base_url = &config.site.base_url;
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str("<rss version=\"2.0\">\n<channel>\n");
    xml.push_str(&format!(
        "  <title>{} Blog</title>\n",
        xml_escape(&config.site.name)
    ));
    xml.push_str(&format!("  <link>{base_url}/blog</link>\n"));
    xml.push_str(&format!(
        "  <description>{}</description>\n",
        xml_escape(&config.site.tagline)
    ));
    xml.push_str("  <ttl>60</ttl>\n");

    for post in newest {
        xml.push_str("  <item>\n");
        xml.push_str(&format!("    <title>{}</title>\n", xml_escape(&post.title)));
        xml.push_str(&format!("    <link>{}/blog/{}</link>\n", base_url, post.slug));
        xml.push_str(&format!(
            "    <guid>{}/blog/{}</guid>\n",
            base_url, post.slug
        ));
        xml.push_str(&format!(
            "    <description>{}</description>\n",
            xml_escape(&post.excerpt)
        ));
        xml.push_str(&format!(
            "    <pubDate>{}</pubDate>\n",
            post.published_at.to_rfc2822()
        ));
        xml.push_str("  </item>\n");
    }

    xml.push_str("</channel>\n</rss>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_config;
    use chrono::{TimeZone, Utc};

    fn post(slug: &str, title: &str, day: u32) -> PostSummary {
        serde_json::from_value(serde_json::json!({
            "slug": slug,
            "title": title,
            "excerpt": "Tips & tricks for <home> owners",
            "publishedAt": Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap().to_rfc3339(),
        }))
        .unwrap()
    }

    #[test]
    fn escapes_all_five_special_characters() {
        assert_eq!(
            xml_escape(r#"&<>"'"#),
            "&amp;&lt;&gt;&quot;&apos;"
        );
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn feed_contains_channel_and_items() {
        let config = sample_config();
        let posts = vec![post("gutter-tips", "Gutter Tips", 10)];
        let feed = render_feed(&config, &posts);

        assert!(feed.contains("<title>Crystal Clean Yorkshire Blog</title>"));
        assert!(feed.contains("<link>https://crystalclean.example/blog/gutter-tips</link>"));
        assert!(feed.contains("<ttl>60</ttl>"));
    }

    #[test]
    fn feed_escapes_interpolated_fields() {
        let config = sample_config();
        let posts = vec![post("amp", "Moss & Algae <Removal>", 10)];
        let feed = render_feed(&config, &posts);

        assert!(feed.contains("Moss &amp; Algae &lt;Removal&gt;"));
        assert!(feed.contains("Tips &amp; tricks for &lt;home&gt; owners"));
        assert!(!feed.contains("<Removal>"));
    }

    #[test]
    fn feed_sorts_newest_first() {
        let config = sample_config();
        let posts = vec![post("older", "Older", 5), post("newer", "Newer", 20)];
        let feed = render_feed(&config, &posts);

        let newer_at = feed.find("Newer").unwrap();
        let older_at = feed.find("Older").unwrap();
        assert!(newer_at < older_at);
    }

    #[test]
    fn feed_truncates_to_limit() {
        let config = sample_config();
        let posts: Vec<PostSummary> = (1..=25)
            .map(|day| post(&format!("post-{day}"), &format!("Post {day}"), day))
            .collect();
        let feed = render_feed(&config, &posts);
        assert_eq!(feed.matches("<item>").count(), FEED_LIMIT);
    }

    #[test]
    fn pub_date_is_rfc2822() {
        let config = sample_config();
        let feed = render_feed(&config, &[post("p", "P", 10)]);
        assert!(feed.contains("<pubDate>Tue, 10 Mar 2026 09:00:00 +0000</pubDate>"));
    }
}
