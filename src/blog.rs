//! Blog content API client and query resolution.
//!
//! The blog is the only part of the site not driven by local content: posts
//! and categories live in an external CMS-style API and are fetched at build
//! time. This module owns three concerns:
//!
//! 1. **Query normalization** — raw, possibly-malformed listing parameters
//!    (`page`, `q`, `tag`, `category`) are folded into a well-formed
//!    [`BlogQuery`]. Malformed input is never an error: a page value of
//!    `"abc"` or `"-5"` normalizes to 1, an empty-string filter normalizes
//!    to absent.
//! 2. **Transport** — [`BlogClient`] wraps the HTTP endpoints and
//!    deserializes the API's `{data, meta}` envelope into typed structs at
//!    the boundary. A payload that doesn't match the schema is a distinct
//!    [`BlogError::Malformed`] rather than undefined values leaking into
//!    rendering.
//! 3. **Failure policy** — listing fetches degrade: if the API is down,
//!    [`resolve_listing`] substitutes empty results and a zeroed pagination
//!    block so the blog renders as an empty state instead of failing the
//!    build. Detail lookups ([`BlogClient::fetch_post`],
//!    [`BlogClient::fetch_category`]) propagate [`BlogError::NotFound`],
//!    because a detail page cannot meaningfully render without its entity.
//!
//! Posts and categories for one listing are fetched concurrently on two
//! threads and joined before rendering proceeds; the two calls read
//! independent resources and have no ordering dependency.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("content API returned status {0} for {1}")]
    Status(reqwest::StatusCode, String),
    #[error("malformed content API payload from {resource}: {detail}")]
    Malformed { resource: String, detail: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("content API listing response is missing pagination metadata")]
    MissingPagination,
}

/// Normalized listing parameters, ready to be sent to the content API.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogQuery {
    /// 1-based page number. Always >= 1.
    pub page: u32,
    pub page_size: u32,
    /// Free-text search term. `None` when absent or empty.
    pub search: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
}

impl BlogQuery {
    /// First page with no filters.
    pub fn page_n(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size,
            search: None,
            tag: None,
            category: None,
        }
    }

    /// Normalize raw URL-style parameters.
    ///
    /// `page` parses as base-10; missing, non-numeric, and sub-1 values all
    /// normalize to 1. There is deliberately no upper clamp — an
    /// out-of-range page passes through and the API returns an empty page.
    /// Empty-string filters normalize to absent rather than an
    /// empty-string filter.
    pub fn from_raw(
        page: Option<&str>,
        q: Option<&str>,
        tag: Option<&str>,
        category: Option<&str>,
        page_size: u32,
    ) -> Self {
        Self {
            page: normalize_page(page),
            page_size,
            search: normalize_filter(q),
            tag: normalize_filter(tag),
            category: normalize_filter(category),
        }
    }

    /// Query-string pairs for the post-listing endpoint.
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(q) = &self.search {
            params.push(("q", q.clone()));
        }
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        params
    }
}

fn normalize_page(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|&n| n >= 1)
        .map(|n| n.min(u32::MAX as i64) as u32)
        .unwrap_or(1)
}

fn normalize_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// =============================================================================
// API payload types
// =============================================================================

/// Pagination block from the API's `meta` envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_more: bool,
}

impl Pagination {
    /// The zeroed block used when a listing degrades to an empty state:
    /// page 1 of 1, nothing in it.
    pub fn empty(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
            total_pages: 1,
            has_more: false,
        }
    }

    /// Enforce the invariants the renderer relies on: `total_pages >= 1`
    /// even for an empty result, and `has_more` consistent with the page
    /// position.
    fn normalized(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.has_more = self.page < self.total_pages;
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Parent category slug for hierarchical trees; `None` at the root.
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body. Listing endpoints may omit it; the detail endpoint
    /// always includes it.
    #[serde(default)]
    pub content: Option<String>,
    pub published_at: DateTime<Utc>,
    /// Category memberships in the post's own order — this order drives
    /// contextual CTA selection.
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
    #[serde(default)]
    meta: Meta,
}

#[derive(Default, Deserialize)]
struct Meta {
    #[serde(default)]
    pagination: Option<Pagination>,
}

// =============================================================================
// Client
// =============================================================================

/// Blocking HTTP client for the content API.
pub struct BlogClient {
    http: reqwest::blocking::Client,
    api_url: String,
}

impl BlogClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_envelope<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Envelope<T>, BlogError> {
        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(%url, "content API request");
        let response = self.http.get(&url).query(params).send()?;
        let status = response.status();
        tracing::debug!(%url, %status, "content API response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BlogError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(BlogError::Status(status, path.to_string()));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| BlogError::Malformed {
            resource: path.to_string(),
            detail: e.to_string(),
        })
    }

    /// Fetch one listing page of posts matching the query's filters.
    pub fn fetch_posts(&self, query: &BlogQuery) -> Result<(Vec<PostSummary>, Pagination), BlogError> {
        let envelope: Envelope<Vec<PostSummary>> =
            self.get_envelope("/posts", &query.to_params())?;
        let pagination = envelope
            .meta
            .pagination
            .ok_or(BlogError::MissingPagination)?
            .normalized();
        Ok((envelope.data, pagination))
    }

    /// Fetch the flat category list.
    pub fn fetch_categories(&self) -> Result<Vec<Category>, BlogError> {
        let envelope: Envelope<Vec<Category>> = self.get_envelope("/categories", &[])?;
        Ok(envelope.data)
    }

    /// Fetch a single post by slug. A missing post is [`BlogError::NotFound`].
    pub fn fetch_post(&self, slug: &str) -> Result<PostSummary, BlogError> {
        let path = format!("/posts/{slug}");
        let envelope: Envelope<PostSummary> = self
            .get_envelope(&path, &[])
            .map_err(|e| rename_not_found(e, slug))?;
        Ok(envelope.data)
    }

    /// Fetch a single category by slug. A missing category is
    /// [`BlogError::NotFound`].
    pub fn fetch_category(&self, slug: &str) -> Result<Category, BlogError> {
        let path = format!("/categories/{slug}");
        let envelope: Envelope<Category> = self
            .get_envelope(&path, &[])
            .map_err(|e| rename_not_found(e, slug))?;
        Ok(envelope.data)
    }
}

fn rename_not_found(err: BlogError, slug: &str) -> BlogError {
    match err {
        BlogError::NotFound(_) => BlogError::NotFound(slug.to_string()),
        other => other,
    }
}

// =============================================================================
// Listing resolution
// =============================================================================

/// One resolved listing page: posts, their pagination block, and the category
/// navigation list.
#[derive(Debug)]
pub struct BlogListing {
    pub posts: Vec<PostSummary>,
    pub pagination: Pagination,
    pub categories: Vec<Category>,
}

impl BlogListing {
    /// The state rendered when the content API is unavailable.
    pub fn empty(page_size: u32) -> Self {
        Self {
            posts: Vec::new(),
            pagination: Pagination::empty(page_size),
            categories: Vec::new(),
        }
    }
}

/// Resolve a listing page, absorbing upstream failure.
///
/// Posts and categories are fetched concurrently and joined. A failed call
/// is substituted with an empty result for that branch — availability over
/// completeness: a broken content API degrades the blog to a "no articles"
/// state, it never fails the build.
pub fn resolve_listing(client: &BlogClient, query: &BlogQuery) -> BlogListing {
    let (posts_result, categories_result) = std::thread::scope(|scope| {
        let categories = scope.spawn(|| client.fetch_categories());
        let posts = client.fetch_posts(query);
        let categories = categories.join().expect("category fetch thread panicked");
        (posts, categories)
    });

    let (posts, pagination) = match posts_result {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!(error = %err, page = query.page, "post listing unavailable, rendering empty state");
            (Vec::new(), Pagination::empty(query.page_size))
        }
    };
    let categories = match categories_result {
        Ok(categories) => categories,
        Err(err) => {
            tracing::warn!(error = %err, "category list unavailable, rendering without category navigation");
            Vec::new()
        }
    };

    BlogListing {
        posts,
        pagination,
        categories,
    }
}

// =============================================================================
// Build-time content collection
// =============================================================================

/// Everything the generator needs from the content API, collected up front.
#[derive(Debug)]
pub struct BlogContent {
    /// Listing pages in order; index 0 is page 1. Never empty — a dead API
    /// yields a single empty listing.
    pub listing_pages: Vec<BlogListing>,
    /// One filtered listing per category, for category archive pages.
    pub category_pages: Vec<(Category, BlogListing)>,
    /// Full posts (with bodies) for detail pages, listing order.
    pub posts: Vec<PostSummary>,
}

impl BlogContent {
    /// The content used when the blog is skipped entirely.
    pub fn empty(page_size: u32) -> Self {
        Self {
            listing_pages: vec![BlogListing::empty(page_size)],
            category_pages: Vec::new(),
            posts: Vec::new(),
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

/// Walk the content API and collect everything the site build needs.
///
/// Listing failures degrade per [`resolve_listing`]. A post that appears in
/// a listing but 404s on detail fetch is dropped with a warning — a static
/// build has no error page to render for it.
pub fn collect_content(client: &BlogClient, page_size: u32) -> BlogContent {
    let first = resolve_listing(client, &BlogQuery::page_n(1, page_size));
    let total_pages = first.pagination.total_pages;
    let categories = first.categories.clone();

    let mut listing_pages = vec![first];
    for page in 2..=total_pages {
        listing_pages.push(resolve_listing(client, &BlogQuery::page_n(page, page_size)));
    }

    let mut category_pages = Vec::with_capacity(categories.len());
    for category in categories {
        let query = BlogQuery::from_raw(None, None, None, Some(&category.slug), page_size);
        let listing = resolve_listing(client, &query);
        category_pages.push((category, listing));
    }

    let mut posts = Vec::new();
    for summary in listing_pages.iter().flat_map(|l| &l.posts) {
        if summary.content.is_some() {
            posts.push(summary.clone());
            continue;
        }
        match client.fetch_post(&summary.slug) {
            Ok(full) => posts.push(full),
            Err(BlogError::NotFound(slug)) => {
                tracing::warn!(%slug, "post listed but missing on detail fetch, skipping");
            }
            Err(err) => {
                tracing::warn!(slug = %summary.slug, error = %err, "post detail fetch failed, skipping");
            }
        }
    }

    BlogContent {
        listing_pages,
        category_pages,
        posts,
    }
}
