//! Amazon product URL parsing.
//!
//! Handles ASIN extraction, product URL validation, and marketplace domain
//! extraction. All functions are pure; extraction failure is signalled with
//! `None`/`false`, never an error, because arbitrary user input is the
//! expected case.

use url::Url;

use crate::domain::Asin;
use crate::domain::locale::MARKETPLACES;

/// Marketplace domain used when none can be recognized.
pub const DEFAULT_MARKETPLACE: &str = "amazon.com";

/// Extracts the ASIN from an Amazon product URL.
///
/// Three extraction strategies are tried in order, returning the first
/// candidate that validates as a 10-character alphanumeric ASIN:
///
/// 1. Path segment following `/dp/`
/// 2. Path segment following `/gp/product/`
/// 3. `ASIN` query parameter
///
/// Returns `None` for malformed URLs or URLs carrying no recognizable ASIN.
pub fn extract_asin(url: &str) -> Option<Asin> {
    let parsed = Url::parse(url).ok()?;

    if let Some(candidate) = dp_segment(&parsed).and_then(|s| Asin::parse(s)) {
        return Some(candidate);
    }
    if let Some(candidate) = gp_product_segment(&parsed).and_then(|s| Asin::parse(s)) {
        return Some(candidate);
    }
    asin_query_param(&parsed)
}

/// Candidate from the `/dp/{asin}` path form.
fn dp_segment(url: &Url) -> Option<&str> {
    let mut segments = url.path_segments()?;
    segments
        .by_ref()
        .position(|s| s.eq_ignore_ascii_case("dp"))?;
    segments.next()
}

/// Candidate from the `/gp/product/{asin}` path form.
fn gp_product_segment(url: &Url) -> Option<&str> {
    let segments: Vec<&str> = url.path_segments()?.collect();
    segments
        .windows(2)
        .position(|w| w[0].eq_ignore_ascii_case("gp") && w[1].eq_ignore_ascii_case("product"))
        .and_then(|i| segments.get(i + 2).copied())
}

/// Candidate from the `ASIN=` query parameter.
fn asin_query_param(url: &Url) -> Option<Asin> {
    url.query_pairs()
        .find(|(k, _)| k.eq_ignore_ascii_case("asin"))
        .and_then(|(_, v)| Asin::parse(&v))
}

/// Returns the marketplace domain matching a hostname, if any.
///
/// A host matches when it equals the marketplace domain or its
/// `www.`-prefixed form.
fn marketplace_for_host(host: &str) -> Option<&'static str> {
    let host = host.to_ascii_lowercase();
    MARKETPLACES
        .iter()
        .map(|m| m.domain)
        .find(|d| host == *d || host == format!("www.{d}"))
}

/// Checks whether a string is a valid Amazon product URL.
///
/// Three conditions, all required, checked in order: the URL parses, the
/// hostname is a known marketplace (bare or `www.`-prefixed), and an ASIN
/// is extractable.
pub fn is_valid_amazon_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    if marketplace_for_host(host).is_none() {
        return false;
    }
    extract_asin(url).is_some()
}

/// Extracts the marketplace domain from a product URL.
///
/// Falls back to `amazon.com` when the URL does not parse or the host is
/// not a recognized marketplace. The fallback is product behavior: a link
/// must always resolve to some storefront.
pub fn extract_marketplace(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().and_then(marketplace_for_host))
        .unwrap_or(DEFAULT_MARKETPLACE)
        .to_string()
}
