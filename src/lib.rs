//! # Spruce
//!
//! A static site generator for local service-business marketing sites.
//! Your content directory is the data source: TOML catalogs describe the
//! services you offer and the areas you cover, markdown files become pages,
//! and an external content API supplies the blog. The output is a plain
//! HTML site with complete structured data, a sitemap, and an RSS feed.
//!
//! # Architecture: Catalogs × Surfaces
//!
//! The site's page set is the cross product of two small catalogs:
//!
//! ```text
//! services.toml  (what we do)     ┐
//!                                 ├── N + M + N×M pages + static routes
//! locations.toml (where we do it) ┘
//! ```
//!
//! A dozen services and two dozen locations yield several hundred targeted
//! landing pages ("Gutter Cleaning in Leeds"), each with its own canonical
//! URL, breadcrumbs, and Service structured data. The full page inventory
//! is enumerated once by [`surfaces`] and drives both generation and the
//! sitemap, so the two can never disagree.
//!
//! Blog content comes from an external API at build time. The API being
//! down degrades the blog to an empty listing; it never fails the build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Loads and validates the TOML catalogs and markdown pages |
//! | [`config`] | `config.toml` loading, stock-default merging, validation |
//! | [`surfaces`] | Enumerates the complete page inventory from the catalogs |
//! | [`blog`] | Typed client for the content API; collects posts, categories, and listing pages |
//! | [`cta`] | Maps blog categories to contextual calls to action |
//! | [`schema`] | JSON-LD structured data documents (LocalBusiness, Service, FAQPage, ...) |
//! | [`generate`] | Renders the final HTML site with Maud |
//! | [`sitemap`] | sitemap.xml and robots.txt rendering |
//! | [`feed`] | RSS 2.0 feed rendering |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Catalogs Over a CMS
//!
//! Services and locations change a few times a year. Two TOML files under
//! version control beat a database for that cadence: diffs are reviewable,
//! deploys are atomic, and the cross product is recomputed on every build.
//! Only the blog, which changes weekly, lives behind an API.
//!
//! ## Build-Time Blog Fetch
//!
//! The blog is fetched once at build time rather than proxied at request
//! time. The generated site is fully static: no origin server, no API keys
//! in production, and a content API outage can delay a rebuild but never
//! take the site down.

pub mod blog;
pub mod catalog;
pub mod config;
pub mod cta;
pub mod feed;
pub mod generate;
pub mod output;
pub mod schema;
pub mod sitemap;
pub mod surfaces;

#[cfg(test)]
pub(crate) mod test_helpers;
