//! Affiliate link formatting and in-document rewriting.

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::{Captures, Regex};

use crate::domain::locale::{AmazonLocale, is_known_marketplace, locale_for_domain};
use crate::domain::Asin;
use crate::error::AffiliateError;
use crate::utils::amazon_url::{extract_asin, extract_marketplace, is_valid_amazon_url};
use crate::utils::image_url::upgrade_to_high_res;

/// Characters escaped when embedding the associate tag in a query value.
const TAG_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'%')
    .add(b'?');

static HREF_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href="([^"]*)""#).unwrap());
static IMG_SRC_ATTR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"src="([^"]*)""#).unwrap());

/// What link inspection learned about a product URL.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LinkReport {
    pub valid: bool,
    pub asin: Option<Asin>,
    pub marketplace: String,
    pub locale: Option<&'static AmazonLocale>,
}

/// Service for building affiliate links and rewriting article documents.
///
/// Holds the deployment defaults (associate tag, marketplace) so handlers
/// and the CLI can omit them per call.
pub struct AffiliateService {
    default_tag: Option<String>,
    default_marketplace: String,
}

impl AffiliateService {
    pub fn new(default_tag: Option<String>, default_marketplace: String) -> Self {
        Self {
            default_tag,
            default_marketplace,
        }
    }

    /// Resolves the tag to use for a request, falling back to the
    /// configured default.
    pub fn resolve_tag<'a>(&'a self, tag: Option<&'a str>) -> Option<&'a str> {
        tag.filter(|t| !t.is_empty()).or(self.default_tag.as_deref())
    }

    /// Builds the canonical affiliate URL for an ASIN.
    ///
    /// # Errors
    ///
    /// - [`AffiliateError::MissingArgument`] when `asin` or `tag` is empty
    /// - [`AffiliateError::InvalidAsin`] when `asin` is not a 10-character
    ///   alphanumeric code
    /// - [`AffiliateError::UnknownDomain`] when `domain` is not a known
    ///   marketplace
    pub fn format_affiliate_url(
        &self,
        asin: &str,
        tag: &str,
        domain: Option<&str>,
    ) -> Result<String, AffiliateError> {
        if asin.is_empty() {
            return Err(AffiliateError::MissingArgument("asin"));
        }
        if tag.is_empty() {
            return Err(AffiliateError::MissingArgument("associate_tag"));
        }

        let asin = Asin::parse(asin).ok_or_else(|| AffiliateError::InvalidAsin(asin.to_string()))?;

        let domain = domain.unwrap_or(&self.default_marketplace);
        if !is_known_marketplace(domain) {
            return Err(AffiliateError::UnknownDomain(domain.to_string()));
        }

        let encoded_tag = utf8_percent_encode(tag, TAG_ENCODE_SET);
        Ok(format!("https://www.{domain}/dp/{asin}/?tag={encoded_tag}"))
    }

    /// Converts an arbitrary product URL into its affiliate equivalent.
    ///
    /// When the URL is not a valid Amazon product URL, or the ASIN cannot
    /// be extracted, or formatting fails, the original URL is returned
    /// unchanged. A link the user already had is never broken. The
    /// transform is idempotent: the link is rebuilt from the ASIN, so a
    /// second application yields the same canonical URL.
    pub fn to_affiliate_link(&self, url: &str, tag: &str) -> String {
        if !is_valid_amazon_url(url) {
            return url.to_string();
        }
        let Some(asin) = extract_asin(url) else {
            return url.to_string();
        };
        let marketplace = extract_marketplace(url);

        self.format_affiliate_url(asin.as_str(), tag, Some(&marketplace))
            .unwrap_or_else(|_| url.to_string())
    }

    /// Inspects a product URL: validity, ASIN, marketplace, and locale.
    pub fn inspect(&self, url: &str) -> LinkReport {
        let marketplace = extract_marketplace(url);
        LinkReport {
            valid: is_valid_amazon_url(url),
            asin: extract_asin(url),
            marketplace: marketplace.clone(),
            locale: locale_for_domain(&marketplace),
        }
    }

    /// Rewrites article HTML for publication.
    ///
    /// Every Amazon product `href` is replaced with its affiliate form and
    /// every Amazon CDN `src` is upgraded to the 1500px variant. Anything
    /// unrecognized is left byte-identical.
    pub fn rewrite_html(&self, html: &str, tag: &str) -> String {
        let with_links = HREF_ATTR.replace_all(html, |caps: &Captures| {
            let href = &caps[1];
            if is_valid_amazon_url(href) {
                format!(r#"href="{}""#, self.to_affiliate_link(href, tag))
            } else {
                caps[0].to_string()
            }
        });

        IMG_SRC_ATTR
            .replace_all(&with_links, |caps: &Captures| {
                let src = &caps[1];
                if src.contains("media-amazon.") || src.contains("images-amazon.") {
                    format!(r#"src="{}""#, upgrade_to_high_res(src))
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

impl Default for AffiliateService {
    fn default() -> Self {
        Self::new(None, crate::utils::amazon_url::DEFAULT_MARKETPLACE.to_string())
    }
}
