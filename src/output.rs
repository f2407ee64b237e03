//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (service, location, page) is its semantic identity, with
//! URL paths shown after an arrow and secondary details on indented context
//! lines. This makes the output readable as a site inventory.
//!
//! # Output Format
//!
//! ## Plan
//!
//! ```text
//! Static pages
//!     001 / (weekly, 1.0)
//!     002 /services (weekly, 0.9)
//!
//! Services
//!     001 Window Cleaning → /services/window-cleaning
//!     002 Gutter Cleaning → /services/gutter-cleaning
//!
//! Areas
//!     West Yorkshire
//!         001 Leeds → /areas/leeds
//!
//! Service × area pages: 24
//! Planned 34 surfaces
//! ```
//!
//! ## Build
//!
//! ```text
//! Built 34 pages
//!     Static: 7
//!     Services: 4
//!     Areas: 3
//!     Service × area: 12
//!     Blog: 8 (1 listing, 2 categories, 5 posts)
//! Sitemap: 34 surfaces
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::generate::BuildSummary;
use crate::surfaces::{Surface, STATIC_ROUTES};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Plan output
// ============================================================================

/// Format the site plan: the full surface inventory grouped by kind.
pub fn format_plan_output(catalog: &Catalog, surfaces: &[Surface]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Static pages".to_string());
    for (i, route) in STATIC_ROUTES.iter().enumerate() {
        lines.push(format!(
            "    {} {} ({}, {:.1})",
            format_index(i + 1),
            route.path,
            route.change_frequency.as_str(),
            route.priority
        ));
    }

    lines.push(String::new());
    lines.push("Services".to_string());
    for (i, service) in catalog.services.iter().enumerate() {
        lines.push(format!(
            "    {} {} \u{2192} /services/{}",
            format_index(i + 1),
            service.name,
            service.slug
        ));
    }

    lines.push(String::new());
    lines.push("Areas".to_string());
    let mut current_county: Option<&str> = None;
    let mut position = 0;
    for location in &catalog.locations {
        if current_county != Some(location.county.as_str()) {
            current_county = Some(location.county.as_str());
            position = 0;
            lines.push(format!("    {}", location.county));
        }
        position += 1;
        lines.push(format!(
            "        {} {} \u{2192} /areas/{}",
            format_index(position),
            location.name,
            location.slug
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Service \u{d7} area pages: {}",
        catalog.services.len() * catalog.locations.len()
    ));
    lines.push(format!("Planned {} surfaces", surfaces.len()));

    lines
}

/// Print the site plan to stdout.
pub fn print_plan_output(catalog: &Catalog, surfaces: &[Surface]) {
    for line in format_plan_output(catalog, surfaces) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the check report: what the content directory contains.
pub fn format_check_output(config: &SiteConfig, catalog: &Catalog) -> Vec<String> {
    vec![
        format!("Site: {} ({})", config.site.name, config.site.base_url),
        format!("    Services: {}", catalog.services.len()),
        format!("    Locations: {}", catalog.locations.len()),
        format!("    Reviews: {}", catalog.reviews.len()),
        format!("    FAQs: {}", catalog.faqs.len()),
        format!("    Jobs: {}", catalog.jobs.len()),
        format!("    Pages: {}", catalog.pages.len()),
        "Content OK".to_string(),
    ]
}

/// Print the check report to stdout.
pub fn print_check_output(config: &SiteConfig, catalog: &Catalog) {
    for line in format_check_output(config, catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Build output
// ============================================================================

/// Format the build summary printed after a successful build.
pub fn format_build_summary(summary: &BuildSummary) -> Vec<String> {
    let blog_total =
        summary.blog_listing_pages + summary.blog_category_pages + summary.blog_post_pages;
    vec![
        format!("Built {} pages", summary.total_pages()),
        format!("    Static: {}", summary.static_pages),
        format!("    Services: {}", summary.service_pages),
        format!("    Areas: {}", summary.location_pages),
        format!("    Service \u{d7} area: {}", summary.combination_pages),
        format!(
            "    Blog: {} ({} listing, {} categories, {} posts)",
            blog_total,
            summary.blog_listing_pages,
            summary.blog_category_pages,
            summary.blog_post_pages
        ),
        format!("Sitemap: {} surfaces", summary.surfaces),
    ]
}

/// Print the build summary to stdout.
pub fn print_build_summary(summary: &BuildSummary) {
    for line in format_build_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
