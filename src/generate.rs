//! HTML site generation.
//!
//! Takes the loaded config, catalog, and collected blog content and writes
//! the final static site. Every page is rendered with
//! [maud](https://maud.lambda.xyz/) — compile-time checked, auto-escaped
//! templates — with the stylesheet embedded in each document head.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                       # Home page
//! ├── services/
//! │   ├── index.html                   # Services index
//! │   └── gutter-cleaning/index.html   # Service hub pages
//! ├── areas/
//! │   ├── index.html                   # Coverage index (grouped by county)
//! │   └── leeds/index.html             # Location hub pages
//! ├── gutter-cleaning/leeds/index.html # Service × location pages
//! ├── about/index.html                 # Markdown pages
//! ├── careers/index.html               # Jobs + JobPosting structured data
//! ├── blog/
//! │   ├── index.html                   # Listing page 1
//! │   ├── page/2/index.html            # Further listing pages
//! │   ├── category/gutters/index.html  # Category archives
//! │   └── why-gutters-block/index.html # Post pages with contextual CTA
//! ├── sitemap.xml
//! ├── feed.xml
//! └── robots.txt
//! ```
//!
//! Every page embeds its structured data (JSON-LD) inline; see
//! [`crate::schema`] for the documents and [`crate::surfaces`] for how the
//! page set is derived from the catalogs.

use crate::blog::{BlogContent, BlogListing, PostSummary};
use crate::catalog::{Catalog, Cluster, Location, PageDoc, Service};
use crate::config::SiteConfig;
use crate::cta::{resolve_cta, Cta};
use crate::feed;
use crate::schema;
use crate::sitemap;
use crate::surfaces::{enumerate_surfaces, STATIC_ROUTES};
use chrono::Utc;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use pulldown_cmark::{html as md_html, Parser};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Page counts for CLI reporting.
#[derive(Debug, Default)]
pub struct BuildSummary {
    pub static_pages: usize,
    pub service_pages: usize,
    pub location_pages: usize,
    pub combination_pages: usize,
    pub blog_listing_pages: usize,
    pub blog_category_pages: usize,
    pub blog_post_pages: usize,
    pub surfaces: usize,
}

impl BuildSummary {
    pub fn total_pages(&self) -> usize {
        self.static_pages
            + self.service_pages
            + self.location_pages
            + self.combination_pages
            + self.blog_listing_pages
            + self.blog_category_pages
            + self.blog_post_pages
    }
}

/// Generate the complete site into `output_dir`.
pub fn generate(
    config: &SiteConfig,
    catalog: &Catalog,
    blog: &BlogContent,
    output_dir: &Path,
) -> Result<BuildSummary, GenerateError> {
    let mut summary = BuildSummary::default();
    fs::create_dir_all(output_dir)?;

    // Home
    write_page(output_dir, "", render_home(config, catalog))?;
    summary.static_pages += 1;

    // Service pages
    write_page(output_dir, "services", render_services_index(config, catalog))?;
    summary.static_pages += 1;
    for service in &catalog.services {
        write_page(
            output_dir,
            &format!("services/{}", service.slug),
            render_service_page(config, catalog, service),
        )?;
        summary.service_pages += 1;
    }

    // Location pages
    write_page(output_dir, "areas", render_areas_index(config, catalog))?;
    summary.static_pages += 1;
    for location in &catalog.locations {
        write_page(
            output_dir,
            &format!("areas/{}", location.slug),
            render_location_page(config, catalog, location),
        )?;
        summary.location_pages += 1;
    }

    // Service × location combination pages
    for service in &catalog.services {
        for location in &catalog.locations {
            write_page(
                output_dir,
                &format!("{}/{}", service.slug, location.slug),
                render_combination_page(config, catalog, service, location),
            )?;
            summary.combination_pages += 1;
        }
    }

    // Markdown pages (careers is rendered separately below)
    for page in catalog.pages.iter().filter(|p| p.slug != "careers") {
        write_page(output_dir, &page.slug, render_markdown_page(config, page))?;
        summary.static_pages += 1;
    }
    write_page(output_dir, "careers", render_careers_page(config, catalog))?;
    summary.static_pages += 1;

    // Blog
    for (index, listing) in blog.listing_pages.iter().enumerate() {
        let page_number = index as u32 + 1;
        let rel_path = if page_number == 1 {
            "blog".to_string()
        } else {
            format!("blog/page/{page_number}")
        };
        write_page(
            output_dir,
            &rel_path,
            render_blog_index(config, listing, page_number),
        )?;
        summary.blog_listing_pages += 1;
    }
    for (category, listing) in &blog.category_pages {
        write_page(
            output_dir,
            &format!("blog/category/{}", category.slug),
            render_blog_category(config, category, listing),
        )?;
        summary.blog_category_pages += 1;
    }
    for post in &blog.posts {
        write_page(
            output_dir,
            &format!("blog/{}", post.slug),
            render_blog_post(config, post),
        )?;
        summary.blog_post_pages += 1;
    }

    // Machine-readable outputs
    let surfaces = enumerate_surfaces(
        &catalog.services,
        &catalog.locations,
        STATIC_ROUTES,
        Utc::now().date_naive(),
    );
    summary.surfaces = surfaces.len();
    fs::write(
        output_dir.join("sitemap.xml"),
        sitemap::render_sitemap(&surfaces, &config.site.base_url),
    )?;
    fs::write(
        output_dir.join("feed.xml"),
        feed::render_feed(config, &blog.posts),
    )?;
    fs::write(
        output_dir.join("robots.txt"),
        sitemap::render_robots(&config.site.base_url),
    )?;

    Ok(summary)
}

/// Write one page as `{rel_path}/index.html` (or `index.html` at the root).
fn write_page(output_dir: &Path, rel_path: &str, markup: Markup) -> Result<(), GenerateError> {
    let dir = if rel_path.is_empty() {
        output_dir.to_path_buf()
    } else {
        output_dir.join(rel_path)
    };
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("index.html"), markup.into_string())?;
    Ok(())
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// Document shell
// ============================================================================

/// Renders the base HTML document: meta description, canonical URL,
/// embedded CSS, and the page's JSON-LD documents.
fn base_document(
    config: &SiteConfig,
    title: &str,
    description: &str,
    canonical_path: &str,
    structured_data: &[serde_json::Value],
    content: Markup,
) -> Markup {
    let canonical = format!("{}{}", config.site.base_url, canonical_path);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                meta name="description" content=(description);
                link rel="canonical" href=(canonical);
                link rel="alternate" type="application/rss+xml" title="Blog" href="/feed.xml";
                style { (CSS) }
                @for doc in structured_data {
                    script type="application/ld+json" {
                        (PreEscaped(doc.to_string()))
                    }
                }
            }
            body {
                (site_header(config))
                (content)
                (site_footer(config))
            }
        }
    }
}

fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            a.site-name href="/" { (config.site.name) }
            nav.site-nav {
                ul {
                    li { a href="/services/" { "Services" } }
                    li { a href="/areas/" { "Areas" } }
                    li { a href="/blog/" { "Blog" } }
                    li { a href="/about/" { "About" } }
                    li { a href="/contact/" { "Contact" } }
                }
            }
            a.phone-cta href={ "tel:" (config.business.phone.replace(' ', "")) } {
                (config.business.phone)
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            p {
                (config.site.name) " · " (config.business.street) ", "
                (config.business.locality) ", " (config.business.postcode)
            }
            p {
                a href={ "mailto:" (config.business.email) } { (config.business.email) }
                " · "
                a href={ "tel:" (config.business.phone.replace(' ', "")) } { (config.business.phone) }
            }
            p { a href="/careers/" { "Careers" } " · " a href="/sitemap.xml" { "Sitemap" } }
        }
    }
}

fn breadcrumb_bar(trail: &[(&str, &str)]) -> Markup {
    html! {
        nav.breadcrumb {
            @for (index, (name, path)) in trail.iter().enumerate() {
                @if index > 0 { " › " }
                @if index + 1 == trail.len() {
                    span { (name) }
                } @else {
                    a href=(path) { (name) }
                }
            }
        }
    }
}

fn cta_panel(cta: &Cta) -> Markup {
    html! {
        aside.cta-panel {
            h3 { (cta.headline) }
            p { (cta.description) }
            ul.cta-features {
                @for feature in cta.features {
                    li { (feature) }
                }
            }
            a.button href="/contact/" { (cta.button_label) }
        }
    }
}

// ============================================================================
// Marketing pages
// ============================================================================

fn render_home(config: &SiteConfig, catalog: &Catalog) -> Markup {
    let structured_data = vec![
        schema::local_business(config, &catalog.reviews),
        schema::web_site(config),
    ];
    let content = html! {
        main.home-page {
            section.hero {
                h1 { (config.site.name) }
                p.tagline { (config.site.tagline) }
                a.button href="/contact/" { "Get a free quote" }
            }
            section.service-grid {
                h2 { "Our services" }
                div.grid {
                    @for service in &catalog.services {
                        a.card href={ "/services/" (service.slug) "/" } {
                            h3 { (service.name) }
                            p { (service.description) }
                        }
                    }
                }
            }
            @if !catalog.reviews.is_empty() {
                section.reviews {
                    h2 { "What customers say" }
                    @for review in &catalog.reviews {
                        blockquote.review {
                            p { (review.text) }
                            footer {
                                (review.author)
                                @if let Some(place) = &review.location {
                                    ", " (place)
                                }
                                " — " (review.rating) "/5"
                            }
                        }
                    }
                }
            }
            section.areas-teaser {
                h2 { "Areas we cover" }
                ul.area-list {
                    @for location in &catalog.locations {
                        li { a href={ "/areas/" (location.slug) "/" } { (location.name) } }
                    }
                }
            }
        }
    };
    base_document(
        config,
        &format!("{} — {}", config.site.name, config.site.tagline),
        &config.site.tagline,
        "/",
        &structured_data,
        content,
    )
}

fn cluster_section(title: &str, services: &[&Service]) -> Markup {
    html! {
        @if !services.is_empty() {
            section.cluster {
                h2 { (title) }
                div.grid {
                    @for service in services {
                        a.card href={ "/services/" (service.slug) "/" } {
                            h3 { (service.name) }
                            p { (service.description) }
                        }
                    }
                }
            }
        }
    }
}

fn render_services_index(config: &SiteConfig, catalog: &Catalog) -> Markup {
    let structured_data = vec![schema::breadcrumbs(
        config,
        &[("Home", "/"), ("Services", "/services")],
    )];
    let interior: Vec<&Service> = catalog
        .services
        .iter()
        .filter(|s| s.cluster == Cluster::Interior)
        .collect();
    let exterior: Vec<&Service> = catalog
        .services
        .iter()
        .filter(|s| s.cluster == Cluster::Exterior)
        .collect();

    let content = html! {
        main.services-index {
            (breadcrumb_bar(&[("Home", "/"), ("Services", "/services/")]))
            h1 { "Our services" }
            (cluster_section("Exterior cleaning", &exterior))
            (cluster_section("Interior cleaning", &interior))
        }
    };
    base_document(
        config,
        &format!("Services — {}", config.site.name),
        "All cleaning services we offer.",
        "/services",
        &structured_data,
        content,
    )
}

fn render_service_page(config: &SiteConfig, catalog: &Catalog, service: &Service) -> Markup {
    let faqs = catalog.faqs_for_service(&service.slug);
    let service_path = format!("/services/{}", service.slug);
    let mut structured_data = vec![
        schema::service_schema(config, service, None),
        schema::breadcrumbs(
            config,
            &[
                ("Home", "/"),
                ("Services", "/services"),
                (&service.name, &service_path),
            ],
        ),
    ];
    if !faqs.is_empty() {
        structured_data.push(schema::faq_page(&faqs));
    }

    let content = html! {
        main.service-page {
            (breadcrumb_bar(&[("Home", "/"), ("Services", "/services/"), (&service.name, &service_path)]))
            h1 { (service.name) }
            p.lede { (service.description) }
            section.coverage {
                h2 { (service.short_name) " across the region" }
                ul.area-list {
                    @for location in &catalog.locations {
                        li {
                            a href={ "/" (service.slug) "/" (location.slug) "/" } {
                                (service.short_name) " in " (location.name)
                            }
                        }
                    }
                }
            }
            @if !service.related.is_empty() {
                section.related {
                    h2 { "Often booked together" }
                    ul {
                        @for slug in &service.related {
                            @if let Some(related) = catalog.service(slug) {
                                li { a href={ "/services/" (related.slug) "/" } { (related.name) } }
                            }
                        }
                    }
                }
            }
            @if !faqs.is_empty() {
                section.faqs {
                    h2 { "Frequently asked questions" }
                    @for faq in &faqs {
                        details {
                            summary { (faq.question) }
                            p { (faq.answer) }
                        }
                    }
                }
            }
        }
    };
    base_document(
        config,
        &format!("{} — {}", service.name, config.site.name),
        &service.description,
        &service_path,
        &structured_data,
        content,
    )
}

fn render_areas_index(config: &SiteConfig, catalog: &Catalog) -> Markup {
    let structured_data = vec![schema::breadcrumbs(
        config,
        &[("Home", "/"), ("Areas", "/areas")],
    )];
    // Group towns under their county, preserving catalog order.
    let mut counties: Vec<(&str, Vec<&Location>)> = Vec::new();
    for location in &catalog.locations {
        match counties.iter_mut().find(|(name, _)| *name == location.county) {
            Some((_, members)) => members.push(location),
            None => counties.push((&location.county, vec![location])),
        }
    }

    let content = html! {
        main.areas-index {
            (breadcrumb_bar(&[("Home", "/"), ("Areas", "/areas/")]))
            h1 { "Areas we cover" }
            @for (county, members) in &counties {
                section.county {
                    h2 { (county) }
                    ul.area-list {
                        @for location in members {
                            li { a href={ "/areas/" (location.slug) "/" } { (location.name) } }
                        }
                    }
                }
            }
        }
    };
    base_document(
        config,
        &format!("Areas we cover — {}", config.site.name),
        "Towns and counties we serve.",
        "/areas",
        &structured_data,
        content,
    )
}

fn render_location_page(config: &SiteConfig, catalog: &Catalog, location: &Location) -> Markup {
    let location_path = format!("/areas/{}", location.slug);
    let structured_data = vec![schema::breadcrumbs(
        config,
        &[
            ("Home", "/"),
            ("Areas", "/areas"),
            (&location.name, &location_path),
        ],
    )];
    let scope = if location.is_county { "across" } else { "in" };

    let content = html! {
        main.location-page {
            (breadcrumb_bar(&[("Home", "/"), ("Areas", "/areas/"), (&location.name, &location_path)]))
            h1 { "Cleaning services " (scope) " " (location.name) }
            section.services {
                h2 { "What we offer " (scope) " " (location.name) }
                ul {
                    @for service in &catalog.services {
                        li {
                            a href={ "/" (service.slug) "/" (location.slug) "/" } {
                                (service.name) " in " (location.name)
                            }
                        }
                    }
                }
            }
            @if !location.postcode_areas.is_empty() {
                section.postcodes {
                    h2 { "Postcodes covered" }
                    p { (location.postcode_areas.join(", ")) }
                }
            }
            @if !location.nearby.is_empty() {
                section.nearby {
                    h2 { "Nearby areas" }
                    ul.area-list {
                        @for slug in &location.nearby {
                            @if let Some(nearby) = catalog.location(slug) {
                                li { a href={ "/areas/" (nearby.slug) "/" } { (nearby.name) } }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document(
        config,
        &format!("Cleaning in {} — {}", location.name, config.site.name),
        &format!("All our cleaning services {scope} {}.", location.name),
        &location_path,
        &structured_data,
        content,
    )
}

fn render_combination_page(
    config: &SiteConfig,
    catalog: &Catalog,
    service: &Service,
    location: &Location,
) -> Markup {
    let combo_path = format!("/{}/{}", service.slug, location.slug);
    let title = format!("{} in {}", service.name, location.name);
    let service_path = format!("/services/{}", service.slug);
    let structured_data = vec![
        schema::service_schema(config, service, Some(location)),
        schema::breadcrumbs(
            config,
            &[
                ("Home", "/"),
                (&service.name, &service_path),
                (&title, &combo_path),
            ],
        ),
    ];

    let content = html! {
        main.combination-page {
            (breadcrumb_bar(&[
                ("Home", "/"),
                (&service.name, &format!("{service_path}/")),
                (&title, &combo_path),
            ]))
            h1 { (title) }
            p.lede { (service.description) }
            p {
                "Serving " (location.name)
                @if !location.postcode_areas.is_empty() {
                    " (" (location.postcode_areas.join(", ")) ")"
                }
                " and the surrounding area."
            }
            a.button href="/contact/" { "Get a quote in " (location.name) }
            @if !location.nearby.is_empty() {
                section.nearby {
                    h2 { (service.short_name) " nearby" }
                    ul.area-list {
                        @for slug in &location.nearby {
                            @if let Some(nearby) = catalog.location(slug) {
                                li {
                                    a href={ "/" (service.slug) "/" (nearby.slug) "/" } {
                                        (service.short_name) " in " (nearby.name)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document(
        config,
        &format!("{title} — {}", config.site.name),
        &format!("{} — local, insured, guaranteed in {}.", service.description, location.name),
        &combo_path,
        &structured_data,
        content,
    )
}

/// Renders a markdown page. The contact page additionally gets the booking
/// widget embed point when one is configured.
fn render_markdown_page(config: &SiteConfig, page: &PageDoc) -> Markup {
    let page_path = format!("/{}", page.slug);
    let body_html = markdown_to_html(&page.body);
    let structured_data = vec![schema::breadcrumbs(
        config,
        &[("Home", "/"), (&page.title, &page_path)],
    )];
    let booking_widget = (page.slug == "contact")
        .then_some(config.booking.widget_url.as_deref())
        .flatten();

    let content = html! {
        main.content-page {
            (breadcrumb_bar(&[("Home", "/"), (&page.title, &page_path)]))
            article {
                (PreEscaped(body_html))
            }
            @if let Some(widget_url) = booking_widget {
                section.booking {
                    h2 { "Book online" }
                    div #booking-widget data-widget=(widget_url) {}
                    script src=(widget_url) defer {}
                }
            }
            @if page.slug == "contact" {
                section.contact-details {
                    p { "Call " a href={ "tel:" (config.business.phone.replace(' ', "")) } { (config.business.phone) } }
                    p { "Email " a href={ "mailto:" (config.business.email) } { (config.business.email) } }
                }
            }
        }
    };
    base_document(
        config,
        &format!("{} — {}", page.title, config.site.name),
        &config.site.tagline,
        &page_path,
        &structured_data,
        content,
    )
}

fn render_careers_page(config: &SiteConfig, catalog: &Catalog) -> Markup {
    let mut structured_data = vec![schema::breadcrumbs(
        config,
        &[("Home", "/"), ("Careers", "/careers")],
    )];
    for job in &catalog.jobs {
        structured_data.push(schema::job_posting(config, job));
    }
    let intro = catalog.page("careers").map(|p| markdown_to_html(&p.body));

    let content = html! {
        main.careers-page {
            (breadcrumb_bar(&[("Home", "/"), ("Careers", "/careers/")]))
            h1 { "Work with us" }
            @if let Some(intro_html) = &intro {
                article { (PreEscaped(intro_html.as_str())) }
            }
            @if catalog.jobs.is_empty() {
                p.empty-state { "No open positions right now — check back soon." }
            } @else {
                @for job in &catalog.jobs {
                    section.job {
                        h2 { (job.title) }
                        p.job-meta {
                            (job.employment_type.replace('_', " "))
                            @if let Some(salary) = &job.salary { " · " (salary) }
                        }
                        p { (job.description) }
                        a.button href="/contact/" { "Apply now" }
                    }
                }
            }
        }
    };
    base_document(
        config,
        &format!("Careers — {}", config.site.name),
        &format!("Open positions at {}.", config.site.name),
        "/careers",
        &structured_data,
        content,
    )
}

// ============================================================================
// Blog pages
// ============================================================================

fn post_card(post: &PostSummary) -> Markup {
    html! {
        article.post-card {
            h2 { a href={ "/blog/" (post.slug) "/" } { (post.title) } }
            p.post-date { (post.published_at.format("%d %B %Y")) }
            p { (post.excerpt) }
        }
    }
}

fn category_nav(listing: &BlogListing) -> Markup {
    html! {
        @if !listing.categories.is_empty() {
            nav.category-nav {
                h2 { "Categories" }
                ul {
                    @for category in &listing.categories {
                        li { a href={ "/blog/category/" (category.slug) "/" } { (category.name) } }
                    }
                }
            }
        }
    }
}

fn pagination_controls(page_number: u32, listing: &BlogListing) -> Markup {
    let previous = match page_number {
        0 | 1 => None,
        2 => Some("/blog/".to_string()),
        n => Some(format!("/blog/page/{}/", n - 1)),
    };
    let next = listing
        .pagination
        .has_more
        .then(|| format!("/blog/page/{}/", page_number + 1));

    html! {
        @if previous.is_some() || next.is_some() {
            nav.pagination {
                @if let Some(href) = &previous {
                    a.prev href=(href) { "← Newer posts" }
                }
                span.page-counter {
                    "Page " (page_number) " of " (listing.pagination.total_pages)
                }
                @if let Some(href) = &next {
                    a.next href=(href) { "Older posts →" }
                }
            }
        }
    }
}

fn render_blog_index(config: &SiteConfig, listing: &BlogListing, page_number: u32) -> Markup {
    let canonical_path = if page_number == 1 {
        "/blog".to_string()
    } else {
        format!("/blog/page/{page_number}")
    };
    let structured_data = vec![schema::breadcrumbs(
        config,
        &[("Home", "/"), ("Blog", "/blog")],
    )];

    let content = html! {
        main.blog-index {
            (breadcrumb_bar(&[("Home", "/"), ("Blog", "/blog/")]))
            h1 { "Cleaning tips and news" }
            (category_nav(listing))
            @if listing.posts.is_empty() {
                p.empty-state { "No articles found." }
            } @else {
                div.post-list {
                    @for post in &listing.posts {
                        (post_card(post))
                    }
                }
            }
            (pagination_controls(page_number, listing))
        }
    };
    base_document(
        config,
        &format!("Blog — {}", config.site.name),
        "Cleaning tips, guides and company news.",
        &canonical_path,
        &structured_data,
        content,
    )
}

fn render_blog_category(
    config: &SiteConfig,
    category: &crate::blog::Category,
    listing: &BlogListing,
) -> Markup {
    let category_path = format!("/blog/category/{}", category.slug);
    let description = category
        .description
        .clone()
        .unwrap_or_else(|| format!("Posts about {}.", category.name));
    let structured_data = vec![
        schema::collection_page(
            config,
            &category.name,
            &description,
            &category_path,
            &listing.pagination,
        ),
        schema::breadcrumbs(
            config,
            &[
                ("Home", "/"),
                ("Blog", "/blog"),
                (&category.name, &category_path),
            ],
        ),
    ];

    let content = html! {
        main.blog-category {
            (breadcrumb_bar(&[("Home", "/"), ("Blog", "/blog/"), (&category.name, &category_path)]))
            h1 { (category.name) }
            p.lede { (description) }
            @if listing.posts.is_empty() {
                p.empty-state { "No articles found." }
            } @else {
                div.post-list {
                    @for post in &listing.posts {
                        (post_card(post))
                    }
                }
            }
        }
    };
    base_document(
        config,
        &format!("{} — Blog — {}", category.name, config.site.name),
        &description,
        &category_path,
        &structured_data,
        content,
    )
}

fn render_blog_post(config: &SiteConfig, post: &PostSummary) -> Markup {
    let post_path = format!("/blog/{}", post.slug);
    let body_html = markdown_to_html(post.content.as_deref().unwrap_or(&post.excerpt));
    let category_slugs: Vec<&str> = post.categories.iter().map(|c| c.slug.as_str()).collect();
    let cta = resolve_cta(&category_slugs);

    let structured_data = vec![schema::breadcrumbs(
        config,
        &[("Home", "/"), ("Blog", "/blog"), (&post.title, &post_path)],
    )];

    let content = html! {
        main.blog-post {
            (breadcrumb_bar(&[("Home", "/"), ("Blog", "/blog/"), (&post.title, &post_path)]))
            article {
                h1 { (post.title) }
                p.post-date { (post.published_at.format("%d %B %Y")) }
                @if !post.categories.is_empty() {
                    ul.post-categories {
                        @for category in &post.categories {
                            li { a href={ "/blog/category/" (category.slug) "/" } { (category.name) } }
                        }
                    }
                }
                (PreEscaped(body_html))
            }
            (cta_panel(cta))
        }
    };
    base_document(
        config,
        &format!("{} — {}", post.title, config.site.name),
        &post.excerpt,
        &post_path,
        &structured_data,
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================
