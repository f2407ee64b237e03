//! Sitemap and robots.txt serialization.
//!
//! The surface enumerator produces base-URL-agnostic relative paths; this is
//! the one place the configured origin is joined onto them. Output follows
//! the standard sitemap protocol: `lastmod` as `YYYY-MM-DD`, `priority` with
//! one decimal place.

use crate::surfaces::Surface;

/// Render the full sitemap XML for an enumerated surface set.
pub fn render_sitemap(surfaces: &[Surface], base_url: &str) -> String {
    let mut xml = String::with_capacity(surfaces.len() * 160);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');
    for surface in surfaces {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}{}</loc>\n", base_url, surface.path));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            surface.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            surface.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", surface.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Render robots.txt pointing crawlers at the sitemap.
pub fn render_robots(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {base_url}/sitemap.xml\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::{enumerate_surfaces, STATIC_ROUTES};
    use crate::test_helpers::{location, service};
    use chrono::NaiveDate;

    fn surfaces() -> Vec<Surface> {
        enumerate_surfaces(
            &[service("window-cleaning")],
            &[location("leeds")],
            STATIC_ROUTES,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        )
    }

    #[test]
    fn sitemap_joins_base_url_at_serialization() {
        let xml = render_sitemap(&surfaces(), "https://crystalclean.example");
        assert!(xml.contains("<loc>https://crystalclean.example/</loc>"));
        assert!(xml.contains("<loc>https://crystalclean.example/services/window-cleaning</loc>"));
        assert!(xml.contains("<loc>https://crystalclean.example/window-cleaning/leeds</loc>"));
    }

    #[test]
    fn sitemap_entry_count_matches_surfaces() {
        let xml = render_sitemap(&surfaces(), "https://crystalclean.example");
        assert_eq!(xml.matches("<url>").count(), surfaces().len());
    }

    #[test]
    fn sitemap_formats_metadata() {
        let xml = render_sitemap(&surfaces(), "https://crystalclean.example");
        assert!(xml.contains("<lastmod>2026-03-01</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = render_robots("https://crystalclean.example");
        assert!(robots.contains("Sitemap: https://crystalclean.example/sitemap.xml"));
        assert!(robots.starts_with("User-agent: *"));
    }
}
