//! Programmatic SEO surface enumeration.
//!
//! A *surface* is a single publishable URL together with the sitemap metadata
//! search engines care about (last modification date, change frequency,
//! priority). The full surface set is derived fresh on every build from the
//! service and location catalogs — it is never stored, so regeneration is
//! idempotent by construction.
//!
//! ## Surface classes
//!
//! In output order:
//!
//! 1. **Static routes** — the fixed marketing pages (`/`, `/about`, ...)
//! 2. **Service hubs** — `/services/{service}`, one per catalog service
//! 3. **Location hubs** — `/areas/{location}`, one per catalog location
//! 4. **Combinations** — `/{service}/{location}`, the full cross product with
//!    the service as the outer loop
//!
//! The ordering is load-bearing only for reproducibility of the generated
//! sitemap, not for correctness. Output size is always
//! `|static| + |services| + |locations| + |services| * |locations|`.
//!
//! Paths are relative with a single leading slash. The configured base URL is
//! joined at serialization time (see [`crate::sitemap`]), keeping this module
//! pure and base-URL-agnostic.

use crate::catalog::{Location, Service};
use chrono::NaiveDate;

/// Sitemap change-frequency hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    /// The literal token used in sitemap XML.
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

/// A fixed route that exists independently of the catalogs.
#[derive(Debug, Clone, Copy)]
pub struct StaticRoute {
    pub path: &'static str,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// The static marketing pages every generated site carries.
pub const STATIC_ROUTES: &[StaticRoute] = &[
    StaticRoute {
        path: "/",
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    },
    StaticRoute {
        path: "/services",
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.9,
    },
    StaticRoute {
        path: "/areas",
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    },
    StaticRoute {
        path: "/blog",
        change_frequency: ChangeFrequency::Daily,
        priority: 0.8,
    },
    StaticRoute {
        path: "/about",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.6,
    },
    StaticRoute {
        path: "/contact",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.7,
    },
    StaticRoute {
        path: "/careers",
        change_frequency: ChangeFrequency::Monthly,
        priority: 0.5,
    },
];

/// One publishable URL identity with its SEO metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Relative path with a single leading slash (e.g. `/gutter-cleaning/leeds`).
    pub path: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Enumerate every surface of the site in deterministic order.
///
/// Total over well-formed catalogs. Entries with empty slugs are a caller
/// precondition violation — [`crate::catalog::validate`] rejects them before
/// any build reaches this point — and are not handled here.
pub fn enumerate_surfaces(
    services: &[Service],
    locations: &[Location],
    static_routes: &[StaticRoute],
    last_modified: NaiveDate,
) -> Vec<Surface> {
    let mut surfaces =
        Vec::with_capacity(static_routes.len() + services.len() * (locations.len() + 1) + locations.len());

    for route in static_routes {
        surfaces.push(Surface {
            path: route.path.to_string(),
            last_modified,
            change_frequency: route.change_frequency,
            priority: route.priority,
        });
    }

    for service in services {
        surfaces.push(Surface {
            path: format!("/services/{}", service.slug),
            last_modified,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.9,
        });
    }

    for location in locations {
        surfaces.push(Surface {
            path: format!("/areas/{}", location.slug),
            last_modified,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.7,
        });
    }

    // Service outer, location inner — keeps sitemap diffs stable when a
    // location is added.
    for service in services {
        for location in locations {
            surfaces.push(Surface {
                path: format!("/{}/{}", service.slug, location.slug),
                last_modified,
                change_frequency: ChangeFrequency::Monthly,
                priority: 0.8,
            });
        }
    }

    surfaces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{location, service};
    use std::collections::HashSet;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    const TWO_ROUTES: &[StaticRoute] = &[
        StaticRoute {
            path: "/",
            change_frequency: ChangeFrequency::Weekly,
            priority: 1.0,
        },
        StaticRoute {
            path: "/contact",
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.7,
        },
    ];

    #[test]
    fn three_by_two_catalog_yields_thirteen_surfaces() {
        let services = vec![service("a"), service("b"), service("c")];
        let locations = vec![location("x"), location("y")];

        let surfaces = enumerate_surfaces(&services, &locations, TWO_ROUTES, date());

        // 2 static + 3 hubs + 2 hubs + 6 combinations
        assert_eq!(surfaces.len(), 13);
        let paths: Vec<&str> = surfaces.iter().map(|s| s.path.as_str()).collect();
        for combo in ["/a/x", "/a/y", "/b/x", "/b/y", "/c/x", "/c/y"] {
            assert!(paths.contains(&combo), "missing {combo}");
        }
    }

    #[test]
    fn output_size_matches_formula() {
        for (n_services, n_locations) in [(1, 1), (2, 5), (12, 18)] {
            let services: Vec<_> = (0..n_services).map(|i| service(&format!("s{i}"))).collect();
            let locations: Vec<_> = (0..n_locations).map(|i| location(&format!("l{i}"))).collect();
            let surfaces = enumerate_surfaces(&services, &locations, STATIC_ROUTES, date());
            assert_eq!(
                surfaces.len(),
                STATIC_ROUTES.len() + n_services + n_locations + n_services * n_locations
            );
        }
    }

    #[test]
    fn no_duplicate_paths() {
        let services: Vec<_> = (0..12).map(|i| service(&format!("s{i}"))).collect();
        let locations: Vec<_> = (0..18).map(|i| location(&format!("l{i}"))).collect();
        let surfaces = enumerate_surfaces(&services, &locations, STATIC_ROUTES, date());

        let unique: HashSet<&str> = surfaces.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(unique.len(), surfaces.len());
    }

    #[test]
    fn every_path_has_single_leading_slash() {
        let services = vec![service("window-cleaning")];
        let locations = vec![location("leeds")];
        let surfaces = enumerate_surfaces(&services, &locations, STATIC_ROUTES, date());

        for surface in &surfaces {
            assert!(surface.path.starts_with('/'), "{}", surface.path);
            assert!(!surface.path.starts_with("//"), "{}", surface.path);
        }
    }

    #[test]
    fn ordering_is_static_then_hubs_then_combinations() {
        let services = vec![service("a"), service("b")];
        let locations = vec![location("x")];
        let surfaces = enumerate_surfaces(&services, &locations, TWO_ROUTES, date());

        let paths: Vec<&str> = surfaces.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/contact",
                "/services/a",
                "/services/b",
                "/areas/x",
                "/a/x",
                "/b/x",
            ]
        );
    }

    #[test]
    fn combinations_iterate_service_outer_location_inner() {
        let services = vec![service("a"), service("b")];
        let locations = vec![location("x"), location("y")];
        let surfaces = enumerate_surfaces(&services, &locations, &[], date());

        let combos: Vec<&str> = surfaces
            .iter()
            .skip(services.len() + locations.len())
            .map(|s| s.path.as_str())
            .collect();
        assert_eq!(combos, vec!["/a/x", "/a/y", "/b/x", "/b/y"]);
    }

    #[test]
    fn static_routes_keep_their_own_metadata() {
        let surfaces = enumerate_surfaces(&[], &[], TWO_ROUTES, date());
        assert_eq!(surfaces[0].priority, 1.0);
        assert_eq!(surfaces[0].change_frequency, ChangeFrequency::Weekly);
        assert_eq!(surfaces[1].priority, 0.7);
        assert_eq!(surfaces[1].change_frequency, ChangeFrequency::Monthly);
    }
}
