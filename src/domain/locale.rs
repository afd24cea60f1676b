//! Amazon marketplace locale table and lookup.

use serde::Serialize;

/// A known Amazon marketplace.
///
/// Immutable records loaded from a fixed in-memory table. The category
/// fields point at the marketplace's best-sellers taxonomy node, which the
/// content pipeline uses to label generated articles per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmazonLocale {
    /// Marketplace domain without scheme or `www.` prefix, e.g. `amazon.de`.
    pub domain: &'static str,
    /// Country the marketplace serves, in English.
    pub country: &'static str,
    /// Taxonomy node slug for the marketplace's best-sellers category.
    pub category_slug: &'static str,
    /// Category name in English.
    pub category_en: &'static str,
    /// Category name in the marketplace's native language.
    pub category_native: &'static str,
}

/// The 17 Amazon marketplaces recognized by link validation and affiliate
/// formatting. Order is presentation order for the locales endpoint.
pub const MARKETPLACES: [AmazonLocale; 17] = [
    AmazonLocale {
        domain: "amazon.com",
        country: "United States",
        category_slug: "best-sellers",
        category_en: "Best Sellers",
        category_native: "Best Sellers",
    },
    AmazonLocale {
        domain: "amazon.ca",
        country: "Canada",
        category_slug: "best-sellers",
        category_en: "Best Sellers",
        category_native: "Best Sellers",
    },
    AmazonLocale {
        domain: "amazon.com.mx",
        country: "Mexico",
        category_slug: "los-mas-vendidos",
        category_en: "Best Sellers",
        category_native: "Los Más Vendidos",
    },
    AmazonLocale {
        domain: "amazon.co.uk",
        country: "United Kingdom",
        category_slug: "best-sellers",
        category_en: "Best Sellers",
        category_native: "Best Sellers",
    },
    AmazonLocale {
        domain: "amazon.de",
        country: "Germany",
        category_slug: "bestseller",
        category_en: "Best Sellers",
        category_native: "Bestseller",
    },
    AmazonLocale {
        domain: "amazon.fr",
        country: "France",
        category_slug: "meilleures-ventes",
        category_en: "Best Sellers",
        category_native: "Meilleures ventes",
    },
    AmazonLocale {
        domain: "amazon.es",
        country: "Spain",
        category_slug: "los-mas-vendidos",
        category_en: "Best Sellers",
        category_native: "Los más vendidos",
    },
    AmazonLocale {
        domain: "amazon.it",
        country: "Italy",
        category_slug: "i-piu-venduti",
        category_en: "Best Sellers",
        category_native: "I più venduti",
    },
    AmazonLocale {
        domain: "amazon.in",
        country: "India",
        category_slug: "best-sellers",
        category_en: "Best Sellers",
        category_native: "Best Sellers",
    },
    AmazonLocale {
        domain: "amazon.nl",
        country: "Netherlands",
        category_slug: "bestsellers",
        category_en: "Best Sellers",
        category_native: "Bestsellers",
    },
    AmazonLocale {
        domain: "amazon.se",
        country: "Sweden",
        category_slug: "bastsaljare",
        category_en: "Best Sellers",
        category_native: "Bästsäljare",
    },
    AmazonLocale {
        domain: "amazon.pl",
        country: "Poland",
        category_slug: "bestsellery",
        category_en: "Best Sellers",
        category_native: "Bestsellery",
    },
    AmazonLocale {
        domain: "amazon.com.br",
        country: "Brazil",
        category_slug: "mais-vendidos",
        category_en: "Best Sellers",
        category_native: "Mais Vendidos",
    },
    AmazonLocale {
        domain: "amazon.com.au",
        country: "Australia",
        category_slug: "best-sellers",
        category_en: "Best Sellers",
        category_native: "Best Sellers",
    },
    AmazonLocale {
        domain: "amazon.co.jp",
        country: "Japan",
        category_slug: "ranking",
        category_en: "Best Sellers",
        category_native: "売れ筋ランキング",
    },
    AmazonLocale {
        domain: "amazon.sg",
        country: "Singapore",
        category_slug: "best-sellers",
        category_en: "Best Sellers",
        category_native: "Best Sellers",
    },
    AmazonLocale {
        domain: "amazon.ae",
        country: "United Arab Emirates",
        category_slug: "best-sellers",
        category_en: "Best Sellers",
        category_native: "الأكثر مبيعاً",
    },
];

/// Returns true when `domain` is one of the known marketplace domains.
pub fn is_known_marketplace(domain: &str) -> bool {
    MARKETPLACES.iter().any(|m| m.domain == domain)
}

/// Looks up the locale record for a marketplace domain.
///
/// The input may carry a scheme or `www.` prefix; both are stripped before
/// matching. Matching is by suffix so host variants like `smile.amazon.com`
/// resolve to their marketplace.
pub fn locale_for_domain(domain: &str) -> Option<&'static AmazonLocale> {
    let cleaned = domain
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_end_matches('/')
        .to_ascii_lowercase();

    MARKETPLACES
        .iter()
        .find(|m| cleaned == m.domain || cleaned.ends_with(&format!(".{}", m.domain)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_17_marketplaces() {
        assert_eq!(MARKETPLACES.len(), 17);
    }

    #[test]
    fn test_locale_for_plain_domain() {
        let locale = locale_for_domain("amazon.de").unwrap();
        assert_eq!(locale.country, "Germany");
        assert_eq!(locale.category_native, "Bestseller");
    }

    #[test]
    fn test_locale_for_prefixed_domain() {
        let locale = locale_for_domain("https://www.amazon.co.uk/").unwrap();
        assert_eq!(locale.domain, "amazon.co.uk");
    }

    #[test]
    fn test_locale_for_subdomain_host() {
        let locale = locale_for_domain("smile.amazon.com").unwrap();
        assert_eq!(locale.domain, "amazon.com");
    }

    #[test]
    fn test_locale_for_unknown_domain() {
        assert!(locale_for_domain("notamazon.com").is_none());
        assert!(locale_for_domain("").is_none());
    }

    #[test]
    fn test_known_marketplace_check() {
        assert!(is_known_marketplace("amazon.co.jp"));
        assert!(!is_known_marketplace("amazon.xx"));
    }
}
