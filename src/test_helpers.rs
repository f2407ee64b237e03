//! Shared test utilities for the spruce test suite.
//!
//! Provides catalog and config builders so module tests can construct
//! realistic inputs without repeating fixture boilerplate.

use crate::catalog::{Catalog, Cluster, FaqItem, Job, Location, Review, Service};
use crate::config::SiteConfig;

/// A service with the given slug and otherwise generic fields.
pub fn service(slug: &str) -> Service {
    Service {
        slug: slug.to_string(),
        name: format!("{slug} service"),
        short_name: slug.to_string(),
        description: format!("Professional {slug} for homes and businesses."),
        cluster: Cluster::Exterior,
        related: vec![],
    }
}

/// A town-level location with the given slug.
pub fn location(slug: &str) -> Location {
    Location {
        slug: slug.to_string(),
        name: slug.to_string(),
        county: "West Yorkshire".to_string(),
        is_county: false,
        postcode_areas: vec![],
        nearby: vec![],
    }
}

/// A small but complete catalog: two services, two locations, one of each
/// optional content type.
pub fn sample_catalog() -> Catalog {
    let mut window = service("window-cleaning");
    window.name = "Window Cleaning".to_string();
    window.short_name = "Windows".to_string();
    window.cluster = Cluster::Exterior;

    let mut oven = service("oven-cleaning");
    oven.name = "Oven Cleaning".to_string();
    oven.short_name = "Ovens".to_string();
    oven.cluster = Cluster::Interior;
    oven.related = vec!["window-cleaning".to_string()];

    let mut leeds = location("leeds");
    leeds.name = "Leeds".to_string();
    leeds.postcode_areas = vec!["LS1".to_string(), "LS2".to_string()];

    let mut york = location("york");
    york.name = "York".to_string();
    york.county = "North Yorkshire".to_string();

    Catalog {
        services: vec![window, oven],
        locations: vec![leeds, york],
        reviews: vec![Review {
            author: "Sam T.".to_string(),
            rating: 5,
            text: "Spotless windows, friendly crew.".to_string(),
            location: Some("Leeds".to_string()),
        }],
        faqs: vec![FaqItem {
            question: "Are you insured?".to_string(),
            answer: "Yes, fully insured for domestic and commercial work.".to_string(),
            service: None,
        }],
        jobs: vec![Job {
            title: "Window Cleaning Technician".to_string(),
            description: "Join our Leeds round.".to_string(),
            employment_type: "FULL_TIME".to_string(),
            salary: Some("£24,000".to_string()),
            posted: "2026-08-01".to_string(),
        }],
        pages: vec![],
    }
}

/// A config with a non-placeholder base URL, suitable for serialization tests.
pub fn sample_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.name = "Crystal Clean Yorkshire".to_string();
    config.site.base_url = "https://crystalclean.example".to_string();
    config.site.tagline = "Exterior cleaning across Yorkshire".to_string();
    config.business.phone = "0113 496 0000".to_string();
    config.business.email = "hello@crystalclean.example".to_string();
    config
}
