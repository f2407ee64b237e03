//! schema.org structured data (JSON-LD) builders.
//!
//! Each builder is a pure transform of config/catalog data into the fixed
//! schema.org shape — no logic beyond field mapping. The resulting
//! `serde_json::Value` documents are embedded per page inside
//! `<script type="application/ld+json">` by the generator.

use crate::blog::Pagination;
use crate::catalog::{FaqItem, Job, Location, Review, Service};
use crate::config::SiteConfig;
use serde_json::{json, Value};

/// LocalBusiness document for the home page. Includes an aggregate rating
/// when reviews exist.
pub fn local_business(config: &SiteConfig, reviews: &[Review]) -> Value {
    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": config.site.name,
        "description": config.site.tagline,
        "url": config.site.base_url,
        "telephone": config.business.phone,
        "email": config.business.email,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": config.business.street,
            "addressLocality": config.business.locality,
            "addressRegion": config.business.region,
            "postalCode": config.business.postcode,
            "addressCountry": config.business.country,
        },
        "openingHours": config.business.opening_hours,
    });

    if !reviews.is_empty() {
        let total: u32 = reviews.iter().map(|r| r.rating as u32).sum();
        let average = total as f64 / reviews.len() as f64;
        doc["aggregateRating"] = json!({
            "@type": "AggregateRating",
            "ratingValue": format!("{average:.1}"),
            "reviewCount": reviews.len(),
        });
    }
    doc
}

/// WebSite document with the site's canonical origin.
pub fn web_site(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.site.name,
        "url": config.site.base_url,
    })
}

/// BreadcrumbList from `(name, path)` pairs, root first.
pub fn breadcrumbs(config: &SiteConfig, trail: &[(&str, &str)]) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(index, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": format!("{}{}", config.site.base_url, path),
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Service document for a service hub or a service×location page.
///
/// With a location, `areaServed` names that location; otherwise the business
/// locality stands in.
pub fn service_schema(config: &SiteConfig, service: &Service, location: Option<&Location>) -> Value {
    let area = location
        .map(|l| l.name.clone())
        .unwrap_or_else(|| config.business.region.clone());
    json!({
        "@context": "https://schema.org",
        "@type": "Service",
        "name": service.name,
        "description": service.description,
        "serviceType": service.name,
        "areaServed": area,
        "provider": {
            "@type": "LocalBusiness",
            "name": config.site.name,
            "telephone": config.business.phone,
        },
    })
}

/// FAQPage document from question/answer pairs.
pub fn faq_page(faqs: &[&FaqItem]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

/// JobPosting document for one open position.
pub fn job_posting(config: &SiteConfig, job: &Job) -> Value {
    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": "JobPosting",
        "title": job.title,
        "description": job.description,
        "datePosted": job.posted,
        "employmentType": job.employment_type,
        "hiringOrganization": {
            "@type": "Organization",
            "name": config.site.name,
        },
        "jobLocation": {
            "@type": "Place",
            "address": {
                "@type": "PostalAddress",
                "addressLocality": config.business.locality,
                "addressRegion": config.business.region,
                "addressCountry": config.business.country,
            },
        },
    });
    if let Some(salary) = &job.salary {
        doc["baseSalary"] = json!(salary);
    }
    doc
}

/// CollectionPage document for blog category listing pages.
pub fn collection_page(
    config: &SiteConfig,
    title: &str,
    description: &str,
    path: &str,
    pagination: &Pagination,
) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "CollectionPage",
        "name": title,
        "description": description,
        "url": format!("{}{}", config.site.base_url, path),
        "isPartOf": {
            "@type": "WebSite",
            "name": config.site.name,
            "url": config.site.base_url,
        },
        "numberOfItems": pagination.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_catalog, sample_config};

    #[test]
    fn local_business_maps_address_fields() {
        let config = sample_config();
        let doc = local_business(&config, &[]);
        assert_eq!(doc["@type"], "LocalBusiness");
        assert_eq!(doc["name"], "Crystal Clean Yorkshire");
        assert_eq!(doc["address"]["addressLocality"], "Leeds");
        assert!(doc.get("aggregateRating").is_none());
    }

    #[test]
    fn local_business_aggregates_review_ratings() {
        let config = sample_config();
        let mut reviews = sample_catalog().reviews;
        reviews.push(crate::catalog::Review {
            author: "Jo".to_string(),
            rating: 4,
            text: "Good.".to_string(),
            location: None,
        });
        let doc = local_business(&config, &reviews);
        assert_eq!(doc["aggregateRating"]["ratingValue"], "4.5");
        assert_eq!(doc["aggregateRating"]["reviewCount"], 2);
    }

    #[test]
    fn breadcrumbs_are_positioned_and_absolute() {
        let config = sample_config();
        let doc = breadcrumbs(
            &config,
            &[("Home", "/"), ("Services", "/services"), ("Ovens", "/services/oven-cleaning")],
        );
        let items = doc["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[2]["position"], 3);
        assert_eq!(
            items[2]["item"],
            "https://crystalclean.example/services/oven-cleaning"
        );
    }

    #[test]
    fn service_schema_uses_location_as_area_served() {
        let config = sample_config();
        let catalog = sample_catalog();
        let doc = service_schema(&config, &catalog.services[0], Some(&catalog.locations[0]));
        assert_eq!(doc["areaServed"], "Leeds");

        let doc = service_schema(&config, &catalog.services[0], None);
        assert_eq!(doc["areaServed"], "West Yorkshire");
    }

    #[test]
    fn faq_page_wraps_questions() {
        let catalog = sample_catalog();
        let refs: Vec<&FaqItem> = catalog.faqs.iter().collect();
        let doc = faq_page(&refs);
        assert_eq!(doc["@type"], "FAQPage");
        assert_eq!(doc["mainEntity"][0]["name"], "Are you insured?");
    }

    #[test]
    fn job_posting_includes_salary_when_present() {
        let config = sample_config();
        let catalog = sample_catalog();
        let doc = job_posting(&config, &catalog.jobs[0]);
        assert_eq!(doc["@type"], "JobPosting");
        assert_eq!(doc["datePosted"], "2026-08-01");
        assert_eq!(doc["baseSalary"], "£24,000");

        let mut job = catalog.jobs[0].clone();
        job.salary = None;
        let doc = job_posting(&config, &job);
        assert!(doc.get("baseSalary").is_none());
    }

    #[test]
    fn collection_page_counts_items() {
        let config = sample_config();
        let pagination = Pagination {
            page: 1,
            limit: 12,
            total: 40,
            total_pages: 4,
            has_more: true,
        };
        let doc = collection_page(
            &config,
            "Gutter Cleaning",
            "Posts about gutters",
            "/blog/category/gutter-cleaning",
            &pagination,
        );
        assert_eq!(doc["numberOfItems"], 40);
        assert_eq!(
            doc["url"],
            "https://crystalclean.example/blog/category/gutter-cleaning"
        );
    }
}
