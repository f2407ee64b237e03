//! Contextual call-to-action selection for blog content.
//!
//! Each blog post carries an ordered list of category slugs. The sidebar CTA
//! is chosen by first-match priority against a static category→CTA mapping:
//! the first slug in the post's own order that has a mapped CTA wins, and an
//! unmatched or empty list falls back to the default. First-match-wins is
//! deliberate — a post in both `pressure-washing` and `window-cleaning`
//! (in that order) always gets the pressure-washing CTA, not a "most
//! specific" one.

/// One promotional call-to-action block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cta {
    pub headline: &'static str,
    pub description: &'static str,
    pub button_label: &'static str,
    pub features: &'static [&'static str],
}

/// Always-resolvable fallback shown when no category matches.
pub const DEFAULT_CTA: Cta = Cta {
    headline: "Get your free cleaning quote",
    description: "Tell us what needs cleaning and we'll send a fixed quote the same day.",
    button_label: "Request a quote",
    features: &[
        "Fully insured, uniformed team",
        "Fixed prices, no call-out fees",
        "Satisfaction guaranteed",
    ],
};

/// Category slug → CTA mapping, in priority-irrelevant order (priority comes
/// from the post's category order, not this table).
const CTA_MAP: &[(&str, Cta)] = &[
    (
        "pressure-washing",
        Cta {
            headline: "Restore your driveway and patio",
            description:
                "Professional pressure washing lifts years of grime, moss and algae in a single visit.",
            button_label: "Book pressure washing",
            features: &[
                "Driveways, patios and decking",
                "Commercial-grade equipment",
                "Weed and moss treatment included",
            ],
        },
    ),
    (
        "window-cleaning",
        Cta {
            headline: "Streak-free windows, every visit",
            description:
                "Regular rounds with pure-water poles keep frames, sills and glass spotless.",
            button_label: "Book window cleaning",
            features: &[
                "4-weekly or 8-weekly rounds",
                "Frames and sills included",
                "Reach up to 4 storeys",
            ],
        },
    ),
    (
        "gutter-cleaning",
        Cta {
            headline: "Blocked gutters cause damp walls",
            description:
                "Vacuum gutter clearance from the ground, with a camera survey before and after.",
            button_label: "Book gutter clearance",
            features: &[
                "Camera survey included",
                "No ladders against your gutters",
                "Downpipe flush test",
            ],
        },
    ),
    (
        "roof-cleaning",
        Cta {
            headline: "Moss off, roof protected",
            description:
                "Gentle scrape-and-treat roof cleaning that protects tiles and stops regrowth.",
            button_label: "Book roof cleaning",
            features: &[
                "No pressure washing on tiles",
                "Biocide treatment included",
                "Before and after photos",
            ],
        },
    ),
];

/// Select the CTA for a content item given its category slugs, in the item's
/// own order. Total: any input, including an empty list, resolves to a CTA.
pub fn resolve_cta(category_slugs: &[&str]) -> &'static Cta {
    for slug in category_slugs {
        if let Some((_, cta)) = CTA_MAP.iter().find(|(key, _)| key == slug) {
            return cta;
        }
    }
    &DEFAULT_CTA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_category_wins() {
        let cta = resolve_cta(&["pressure-washing", "window-cleaning"]);
        assert_eq!(cta.button_label, "Book pressure washing");

        // Same memberships, reversed order: the other CTA wins.
        let cta = resolve_cta(&["window-cleaning", "pressure-washing"]);
        assert_eq!(cta.button_label, "Book window cleaning");
    }

    #[test]
    fn unmatched_leading_slugs_are_skipped() {
        let cta = resolve_cta(&["company-news", "tips", "gutter-cleaning"]);
        assert_eq!(cta.button_label, "Book gutter clearance");
    }

    #[test]
    fn empty_input_resolves_to_default() {
        assert_eq!(*resolve_cta(&[]), DEFAULT_CTA);
    }

    #[test]
    fn entirely_unmatched_input_resolves_to_default() {
        assert_eq!(*resolve_cta(&["company-news", "tips"]), DEFAULT_CTA);
    }

    #[test]
    fn every_mapped_cta_is_complete() {
        for (slug, cta) in CTA_MAP {
            assert!(!slug.is_empty());
            assert!(!cta.headline.is_empty());
            assert!(!cta.description.is_empty());
            assert!(!cta.button_label.is_empty());
            assert!(!cta.features.is_empty(), "{slug} has no feature list");
        }
    }
}
