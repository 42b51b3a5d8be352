//! Brand logo resolution.
//!
//! Brand names arrive inconsistently ("Google Pixel" vs. the canonical
//! "google"), so logo lookup runs a tiered heuristic against a fixed table
//! built once at startup. The heuristic trades precision for availability:
//! it may mis-attribute a logo, but it always returns *some* image reference
//! so a page never fails to render.
//!
//! Matching tiers, tried in order:
//!
//! 1. Exact normalized match.
//! 2. Substring match in either direction, scanning entries in declared
//!    order. First match wins, not longest match.
//! 3. First-token substring match, again in declared order.
//! 4. Synthesized local path `/images/{key}.png` (may 404; views tolerate
//!    a broken image).
//!
//! Empty or missing input short-circuits to the default logo path before
//! any tier runs.

use std::collections::HashMap;

/// Logo path returned for empty or missing brand names.
pub const DEFAULT_LOGO_PATH: &str = "/images/default-logo.png";

/// Which tier of the heuristic produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Input was empty; the default logo path was returned.
    Default,
    /// Tier 1: normalized key matched a table entry exactly.
    Exact,
    /// Tier 2: substring match in either direction.
    Substring,
    /// Tier 3: first token of the key matched a table entry.
    FirstToken,
    /// Tier 4: no entry matched; a local path was synthesized.
    LocalFallback,
}

impl MatchTier {
    /// Whether every table-scanning tier missed (tier 4 or the default).
    #[must_use]
    pub const fn is_miss(self) -> bool {
        matches!(self, Self::Default | Self::LocalFallback)
    }
}

/// A resolved logo reference plus the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLogo {
    /// URL or local path, usable directly as an image `src`.
    pub url: String,
    /// Tier that produced the URL.
    pub tier: MatchTier,
}

/// Normalized brand-to-logo lookup table.
///
/// Built once at startup, immutable for the process lifetime, safe for
/// unsynchronized concurrent reads. Entries keep their declared order
/// because tiers 2 and 3 are deliberately order-dependent.
#[derive(Debug, Clone)]
pub struct BrandLogoTable {
    /// Entries in declared order, scanned by tiers 2 and 3.
    entries: Vec<(String, String)>,
    /// Exact-match index over normalized keys for tier 1.
    by_key: HashMap<String, usize>,
}

impl BrandLogoTable {
    /// Build a table from `(brand name, logo URL)` pairs.
    ///
    /// Keys are normalized on insertion; declared order is preserved for
    /// the order-dependent tiers. Keys are assumed unique after
    /// normalization.
    pub fn new<I, S, U>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (S, U)>,
        S: AsRef<str>,
        U: Into<String>,
    {
        let mut entries = Vec::new();
        let mut by_key = HashMap::new();
        for (brand, url) in mapping {
            let key = normalize(brand.as_ref());
            by_key.entry(key.clone()).or_insert(entries.len());
            entries.push((key, url.into()));
        }
        Self { entries, by_key }
    }

    /// The fixed builtin mapping of known phone brands.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new([
            ("samsung", "https://1000logos.net/wp-content/uploads/2017/06/Font-Samsung-Logo.jpg"),
            ("apple", "https://www.freepnglogos.com/uploads/apple-logo-png/apple-logo-png-index-content-uploads-10.png"),
            ("vivo", "https://download.logo.wine/logo/Vivo_(technology_company)/Vivo_(technology_company)-Logo.wine.png"),
            ("oppo", "https://download.logo.wine/logo/Oppo/Oppo-Logo.wine.png"),
            ("realme", "https://upload.wikimedia.org/wikipedia/commons/thumb/9/91/Realme_logo.png/1200px-Realme_logo.png"),
            ("xiaomi", "https://images.seeklogo.com/logo-png/40/2/xiaomi-new-2021-logo-png_seeklogo-400999.png"),
            ("oneplus", "https://i.pinimg.com/736x/a8/3b/5d/a83b5ddfc044104f35356c1a843e6d36.jpg"),
            ("nothing", "https://pnghdpro.com/wp-content/themes/pnghdpro/download/social-media-and-brands/nothing-logo.png"),
            ("google", "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRZY2dHbZJIMhXaf2hvCT_o6NAYyAdRBHhpYA&s"),
            ("motorola", "https://1000logos.net/wp-content/uploads/2017/04/Emblem-Motorola.jpg"),
        ])
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a brand name to a displayable logo reference.
    ///
    /// Total over its input: every value, including `None` and the empty
    /// string, maps to some string.
    #[must_use]
    pub fn resolve(&self, brand: Option<&str>) -> String {
        self.resolve_detailed(brand).url
    }

    /// Resolve a brand name, also reporting which tier matched.
    #[must_use]
    pub fn resolve_detailed(&self, brand: Option<&str>) -> ResolvedLogo {
        let Some(raw) = brand else {
            return ResolvedLogo {
                url: DEFAULT_LOGO_PATH.to_string(),
                tier: MatchTier::Default,
            };
        };
        if raw.is_empty() {
            return ResolvedLogo {
                url: DEFAULT_LOGO_PATH.to_string(),
                tier: MatchTier::Default,
            };
        }

        let key = normalize(raw);

        // Tier 1: exact normalized match.
        if let Some(&idx) = self.by_key.get(&key) {
            if let Some((_, url)) = self.entries.get(idx) {
                return ResolvedLogo {
                    url: url.clone(),
                    tier: MatchTier::Exact,
                };
            }
        }

        // Tier 2: substring match in either direction, first entry wins.
        for (bk, url) in &self.entries {
            if bk.contains(&key) || key.contains(bk.as_str()) {
                return ResolvedLogo {
                    url: url.clone(),
                    tier: MatchTier::Substring,
                };
            }
        }

        // Tier 3: first token of the key. Under the current normalization
        // the split is a no-op (non-alphanumerics are already stripped);
        // the normalize-then-split ordering is preserved on purpose.
        let first_token = key
            .split(|c: char| !c.is_ascii_alphanumeric())
            .next()
            .unwrap_or("");
        for (bk, url) in &self.entries {
            if bk.contains(first_token) {
                return ResolvedLogo {
                    url: url.clone(),
                    tier: MatchTier::FirstToken,
                };
            }
        }

        // Tier 4: synthesized local path, not guaranteed to exist.
        ResolvedLogo {
            url: format!("/images/{key}.png"),
            tier: MatchTier::LocalFallback,
        }
    }
}

impl Default for BrandLogoTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Normalize a brand name into a lookup key.
///
/// Trims, lowercases, and strips every character that is not an ASCII
/// lowercase letter or digit. Table construction and lookup must use the
/// same rule.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_url(brand: &str) -> String {
        let table = BrandLogoTable::builtin();
        let resolved = table.resolve_detailed(Some(brand));
        assert_eq!(resolved.tier, MatchTier::Exact, "expected exact match for {brand}");
        resolved.url
    }

    #[test]
    fn test_normalize_strips_and_lowercases() {
        assert_eq!(normalize("  One-Plus 9R  "), "oneplus9r");
        assert_eq!(normalize("GOOGLE"), "google");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["  Google Pixel ", "One-Plus", "xiaomi", "Ünïcode Brand", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_and_missing_resolve_to_default() {
        let table = BrandLogoTable::builtin();
        assert_eq!(table.resolve(None), DEFAULT_LOGO_PATH);
        assert_eq!(table.resolve(Some("")), DEFAULT_LOGO_PATH);
        assert_eq!(
            table.resolve_detailed(None).tier,
            MatchTier::Default
        );
    }

    #[test]
    fn test_case_and_whitespace_invariance() {
        let table = BrandLogoTable::builtin();
        let canonical = builtin_url("samsung");
        assert_eq!(table.resolve(Some("Samsung")), canonical);
        assert_eq!(table.resolve(Some("  SAMSUNG  ")), canonical);
    }

    #[test]
    fn test_substring_tier_matches_qualified_brand() {
        let table = BrandLogoTable::builtin();
        let resolved = table.resolve_detailed(Some("Google Pixel"));
        assert_eq!(resolved.tier, MatchTier::Substring);
        assert_eq!(resolved.url, builtin_url("google"));
    }

    #[test]
    fn test_unknown_brand_falls_back_to_local_path() {
        let table = BrandLogoTable::builtin();
        let resolved = table.resolve_detailed(Some("UnknownBrandXYZ"));
        assert_eq!(resolved.tier, MatchTier::LocalFallback);
        assert_eq!(resolved.url, "/images/unknownbrandxyz.png");
        assert!(resolved.tier.is_miss());
    }

    #[test]
    fn test_exact_match_short_circuits_substring_tier() {
        // "one" substring-matches "oneplus", so if tier 1 did not
        // short-circuit, "one" would resolve via tier 2. An exact entry
        // for "one" must win regardless of table position.
        let table = BrandLogoTable::new([
            ("oneplus", "https://logos.test/oneplus.png"),
            ("one", "https://logos.test/one.png"),
        ]);
        let resolved = table.resolve_detailed(Some("one"));
        assert_eq!(resolved.tier, MatchTier::Exact);
        assert_eq!(resolved.url, "https://logos.test/one.png");
    }

    #[test]
    fn test_substring_tier_is_order_dependent() {
        // Both keys substring-match the query; the first declared entry
        // must win. This fixes the tie-break as declared order, not
        // best/longest match.
        let first = BrandLogoTable::new([
            ("nord", "https://logos.test/nord.png"),
            ("nordic", "https://logos.test/nordic.png"),
        ]);
        assert_eq!(
            first.resolve(Some("Nordica")),
            "https://logos.test/nord.png"
        );

        let flipped = BrandLogoTable::new([
            ("nordic", "https://logos.test/nordic.png"),
            ("nord", "https://logos.test/nord.png"),
        ]);
        assert_eq!(
            flipped.resolve(Some("Nordica")),
            "https://logos.test/nordic.png"
        );
    }

    #[test]
    fn test_punctuation_only_brand_matches_first_entry() {
        // Punctuation-only input normalizes to the empty key, which every
        // stored key "contains", so tier 2 returns the first table entry.
        // Inherited behavior, kept as-is.
        let table = BrandLogoTable::builtin();
        let resolved = table.resolve_detailed(Some("!!!"));
        assert_eq!(resolved.tier, MatchTier::Substring);
        assert_eq!(resolved.url, builtin_url("samsung"));
    }

    #[test]
    fn test_empty_table_always_falls_back() {
        let table = BrandLogoTable::new(Vec::<(&str, &str)>::new());
        assert!(table.is_empty());
        let resolved = table.resolve_detailed(Some("anything"));
        assert_eq!(resolved.tier, MatchTier::LocalFallback);
        assert_eq!(resolved.url, "/images/anything.png");
    }

    #[test]
    fn test_builtin_table_has_ten_brands() {
        assert_eq!(BrandLogoTable::builtin().len(), 10);
    }
}
