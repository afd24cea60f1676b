//! Amazon image CDN helpers and SEO naming for generated media.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the CDN size-suffix token immediately before the file extension,
/// e.g. `._AC_SL300_.jpg`.
static SIZE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\._[A-Z0-9_,]+_\.(jpg|jpeg|gif|png|webp|bmp|svg)").unwrap()
});

/// Maximum slug length for generated filenames.
const SLUG_MAX_LEN: usize = 50;

/// Rotating alt-text phrasings for body images.
const BODY_ALT_TEMPLATES: [&str; 4] = [
    "{product} shown in detail",
    "Close-up view of {product}",
    "{product} from an alternate angle",
    "Key feature of {product}",
];

/// Whether a generated image is the article hero or an in-body detail shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Featured,
    Body,
}

/// Rewrites an Amazon thumbnail URL to request the 1500px variant.
///
/// Replaces the size-suffix token (`._AC_SL300_.` and similar) with
/// `._SL1500_.`, preserving the extension. Inputs without the token are
/// returned unchanged; a URL the caller already had is never broken.
pub fn upgrade_to_high_res(url: &str) -> String {
    SIZE_TOKEN.replace(url, "._SL1500_.$1").into_owned()
}

/// Builds an SEO filename for a generated product image.
///
/// `{slug}-featured.webp` for the hero image, `{slug}-detail-{n}.webp`
/// (1-based) for body images.
pub fn seo_filename(product_name: &str, index: usize, kind: ImageKind) -> String {
    let slug = slugify(product_name);
    match kind {
        ImageKind::Featured => format!("{slug}-featured.webp"),
        ImageKind::Body => format!("{slug}-detail-{}.webp", index + 1),
    }
}

/// Builds alt text for a generated product image.
///
/// Body images cycle through four phrasings by index so adjacent images
/// don't repeat the same alt text.
pub fn alt_text(product_name: &str, index: usize, kind: ImageKind) -> String {
    match kind {
        ImageKind::Featured => format!("{product_name} product photo"),
        ImageKind::Body => {
            BODY_ALT_TEMPLATES[index % BODY_ALT_TEMPLATES.len()].replace("{product}", product_name)
        }
    }
}

/// Lowercases, hyphenates spaces, strips anything outside `[a-z0-9-]`, and
/// truncates to 50 characters.
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();
    slug.chars().take(SLUG_MAX_LEN).collect()
}
