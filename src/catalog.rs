//! Content catalog loading and validation.
//!
//! The catalog is the hardcoded-data side of the site: services, coverage
//! locations, customer reviews, FAQ entries, open positions, and markdown
//! pages. Everything lives in the content directory as TOML and markdown:
//!
//! ```text
//! content/
//! ├── config.toml        # site configuration (see `config`)
//! ├── services.toml      # [[service]] entries
//! ├── locations.toml     # [[location]] entries
//! ├── reviews.toml       # [[review]] entries (optional)
//! ├── faqs.toml          # [[faq]] entries (optional)
//! ├── jobs.toml          # [[job]] entries (optional)
//! └── pages/
//!     ├── about.md       # page title from the first `# heading`
//!     └── contact.md
//! ```
//!
//! ## Validation
//!
//! [`validate`] enforces the invariants the rest of the build relies on:
//!
//! - service and location slugs are non-empty and unique within their catalog
//! - `related` references on a service resolve to existing services
//! - `nearby` references on a location resolve to existing locations
//!   (adjacency is not required to be bidirectional)
//! - review ratings are within 1–5
//!
//! Unknown TOML keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {0}: {1}")]
    Toml(PathBuf, toml::de::Error),
    #[error("missing catalog file: {0}")]
    MissingFile(PathBuf),
    #[error("empty slug on {kind} entry \"{name}\"")]
    EmptySlug { kind: &'static str, name: String },
    #[error("duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },
    #[error("service {service} references unknown related service: {reference}")]
    DanglingRelated { service: String, reference: String },
    #[error("location {location} references unknown nearby location: {reference}")]
    DanglingNearby { location: String, reference: String },
    #[error("review by {author} has rating {rating}, expected 1-5")]
    RatingOutOfRange { author: String, rating: u8 },
    #[error("catalog must contain at least one {0}")]
    EmptyCatalog(&'static str),
}

/// Whether a service is performed inside or outside the property.
///
/// Closed set — combination pages group related services by cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Interior,
    Exterior,
}

/// One offered service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    /// URL-safe unique key, e.g. `gutter-cleaning`.
    pub slug: String,
    pub name: String,
    /// Short form used in navigation and combination-page titles.
    pub short_name: String,
    pub description: String,
    pub cluster: Cluster,
    /// Slugs of related services, in display order.
    #[serde(default)]
    pub related: Vec<String>,
}

/// One coverage area — either a town or a county-level aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub slug: String,
    pub name: String,
    /// County/region grouping used on the areas index.
    pub county: String,
    /// County-level aggregate entries cover their towns rather than a town itself.
    #[serde(default)]
    pub is_county: bool,
    #[serde(default)]
    pub postcode_areas: Vec<String>,
    /// Slugs of nearby locations. Not guaranteed bidirectional.
    #[serde(default)]
    pub nearby: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Review {
    pub author: String,
    /// 1-5 stars.
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    /// Restricts the entry to one service's pages; `None` means site-wide.
    #[serde(default)]
    pub service: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub title: String,
    pub description: String,
    /// schema.org employmentType token, e.g. `FULL_TIME`.
    pub employment_type: String,
    #[serde(default)]
    pub salary: Option<String>,
    /// ISO date string, e.g. `"2026-08-01"`.
    pub posted: String,
}

/// A markdown page from `content/pages/`.
#[derive(Debug, Clone)]
pub struct PageDoc {
    /// URL slug from the file stem (`about.md` → `about`).
    pub slug: String,
    /// First `# heading` in the file, or the slug when absent.
    pub title: String,
    /// Raw markdown body.
    pub body: String,
}

/// Everything loaded from the content directory except `config.toml`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub services: Vec<Service>,
    pub locations: Vec<Location>,
    pub reviews: Vec<Review>,
    pub faqs: Vec<FaqItem>,
    pub jobs: Vec<Job>,
    pub pages: Vec<PageDoc>,
}

impl Catalog {
    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.slug == slug)
    }

    pub fn location(&self, slug: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.slug == slug)
    }

    pub fn page(&self, slug: &str) -> Option<&PageDoc> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// FAQ entries shown on a given service page: service-specific first,
    /// then site-wide entries.
    pub fn faqs_for_service(&self, slug: &str) -> Vec<&FaqItem> {
        let mut items: Vec<&FaqItem> = self
            .faqs
            .iter()
            .filter(|f| f.service.as_deref() == Some(slug))
            .collect();
        items.extend(self.faqs.iter().filter(|f| f.service.is_none()));
        items
    }
}

// File wrappers — each catalog file is an array-of-tables under one key.

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ServicesFile {
    #[serde(default, rename = "service")]
    services: Vec<Service>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LocationsFile {
    #[serde(default, rename = "location")]
    locations: Vec<Location>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ReviewsFile {
    #[serde(default, rename = "review")]
    reviews: Vec<Review>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FaqsFile {
    #[serde(default, rename = "faq")]
    faqs: Vec<FaqItem>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JobsFile {
    #[serde(default, rename = "job")]
    jobs: Vec<Job>,
}

fn parse_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CatalogError::Toml(path.to_path_buf(), e))
}

fn parse_optional<T: serde::de::DeserializeOwned + Default>(
    path: &Path,
) -> Result<T, CatalogError> {
    if path.exists() {
        parse_file(path)
    } else {
        Ok(T::default())
    }
}

impl Default for ReviewsFile {
    fn default() -> Self {
        Self { reviews: vec![] }
    }
}

impl Default for FaqsFile {
    fn default() -> Self {
        Self { faqs: vec![] }
    }
}

impl Default for JobsFile {
    fn default() -> Self {
        Self { jobs: vec![] }
    }
}

/// Extract the first `# heading` line from markdown, if any.
fn first_heading(markdown: &str) -> Option<String> {
    markdown.lines().find_map(|line| {
        line.strip_prefix("# ")
            .map(|title| title.trim().to_string())
    })
}

fn load_pages(pages_dir: &Path) -> Result<Vec<PageDoc>, CatalogError> {
    let mut pages = Vec::new();
    if !pages_dir.exists() {
        return Ok(pages);
    }
    for entry in WalkDir::new(pages_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().map(|ext| ext != "md").unwrap_or(true) {
            continue;
        }
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let body = fs::read_to_string(path)?;
        let title = first_heading(&body).unwrap_or_else(|| slug.clone());
        pages.push(PageDoc { slug, title, body });
    }
    Ok(pages)
}

/// Load the full catalog from a content directory.
///
/// `services.toml` and `locations.toml` are required; the remaining files
/// are optional and default to empty. The result is not yet validated —
/// call [`validate`] before building.
pub fn load_catalog(content_dir: &Path) -> Result<Catalog, CatalogError> {
    let services_path = content_dir.join("services.toml");
    if !services_path.exists() {
        return Err(CatalogError::MissingFile(services_path));
    }
    let locations_path = content_dir.join("locations.toml");
    if !locations_path.exists() {
        return Err(CatalogError::MissingFile(locations_path));
    }

    let services: ServicesFile = parse_file(&services_path)?;
    let locations: LocationsFile = parse_file(&locations_path)?;
    let reviews: ReviewsFile = parse_optional(&content_dir.join("reviews.toml"))?;
    let faqs: FaqsFile = parse_optional(&content_dir.join("faqs.toml"))?;
    let jobs: JobsFile = parse_optional(&content_dir.join("jobs.toml"))?;
    let pages = load_pages(&content_dir.join("pages"))?;

    Ok(Catalog {
        services: services.services,
        locations: locations.locations,
        reviews: reviews.reviews,
        faqs: faqs.faqs,
        jobs: jobs.jobs,
        pages,
    })
}

/// Check all catalog invariants. Used by `check` and before every build.
pub fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.services.is_empty() {
        return Err(CatalogError::EmptyCatalog("service"));
    }
    if catalog.locations.is_empty() {
        return Err(CatalogError::EmptyCatalog("location"));
    }

    let mut seen_services = std::collections::HashSet::new();
    for service in &catalog.services {
        if service.slug.is_empty() {
            return Err(CatalogError::EmptySlug {
                kind: "service",
                name: service.name.clone(),
            });
        }
        if !seen_services.insert(service.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                kind: "service",
                slug: service.slug.clone(),
            });
        }
    }

    let mut seen_locations = std::collections::HashSet::new();
    for location in &catalog.locations {
        if location.slug.is_empty() {
            return Err(CatalogError::EmptySlug {
                kind: "location",
                name: location.name.clone(),
            });
        }
        if !seen_locations.insert(location.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                kind: "location",
                slug: location.slug.clone(),
            });
        }
    }

    for service in &catalog.services {
        for reference in &service.related {
            if !seen_services.contains(reference.as_str()) {
                return Err(CatalogError::DanglingRelated {
                    service: service.slug.clone(),
                    reference: reference.clone(),
                });
            }
        }
    }
    for location in &catalog.locations {
        for reference in &location.nearby {
            if !seen_locations.contains(reference.as_str()) {
                return Err(CatalogError::DanglingNearby {
                    location: location.slug.clone(),
                    reference: reference.clone(),
                });
            }
        }
    }

    for review in &catalog.reviews {
        if !(1..=5).contains(&review.rating) {
            return Err(CatalogError::RatingOutOfRange {
                author: review.author.clone(),
                rating: review.rating,
            });
        }
    }

    Ok(())
}
