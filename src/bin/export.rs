//! CLI export tool for affiliate-press.
//!
//! Provides one-shot conversion and link tooling without requiring the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Convert a Markdown article to WordPress block markup
//! cargo run --bin export -- convert article.md --format wordpress --tag mysite-20
//!
//! # Build an affiliate link from a product URL
//! cargo run --bin export -- affiliate "https://www.amazon.com/dp/B08C7KG5LP" --tag mysite-20
//!
//! # Inspect a URL
//! cargo run --bin export -- inspect "https://www.amazon.de/dp/b000000001"
//!
//! # Compute a word-count target
//! cargo run --bin export -- length product-roundup --requested 3000 --competitor-longest 4000
//! ```
//!
//! # Environment Variables
//!
//! - `ASSOCIATE_TAG` (optional): default tag when `--tag` is omitted
//! - `DEFAULT_MARKETPLACE` (optional): marketplace for bare-ASIN links

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

use affiliate_press::application::services::AffiliateService;
use affiliate_press::domain::{ArticleType, CompetitorSignals};
use affiliate_press::export::{ExportFormat, markdown_to_html};

/// CLI tool for article exports and affiliate links.
#[derive(Parser)]
#[command(name = "export")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an article file to another format
    Convert {
        /// Input file (.md or .html, decided by extension)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = FormatArg::Html)]
        format: FormatArg,

        /// Article title (derived from content when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Associate tag; rewrites Amazon links before export
        #[arg(long)]
        tag: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build an affiliate link from a product URL
    Affiliate {
        /// Amazon product URL
        url: String,

        /// Associate tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Validate a product URL and show what it resolves to
    Inspect {
        /// URL to inspect
        url: String,
    },

    /// Compute a minimum word-count target
    Length {
        /// Article type selecting the targeting policy
        #[arg(value_enum)]
        article_type: TypeArg,

        #[arg(long)]
        requested: Option<u32>,

        #[arg(long)]
        competitor_target: Option<u32>,

        #[arg(long)]
        competitor_longest: Option<u32>,

        #[arg(long)]
        competitor_shortest: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Html,
    Markdown,
    PlainText,
    Styled,
    Wordpress,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => ExportFormat::Html,
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::PlainText => ExportFormat::PlainText,
            FormatArg::Styled => ExportFormat::StyledHtml,
            FormatArg::Wordpress => ExportFormat::Wordpress,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    ProductRoundup,
    BuyingGuide,
    Comparison,
    SingleReview,
    NewsBrief,
    DealAlert,
}

impl From<TypeArg> for ArticleType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::ProductRoundup => ArticleType::ProductRoundup,
            TypeArg::BuyingGuide => ArticleType::BuyingGuide,
            TypeArg::Comparison => ArticleType::Comparison,
            TypeArg::SingleReview => ArticleType::SingleReview,
            TypeArg::NewsBrief => ArticleType::NewsBrief,
            TypeArg::DealAlert => ArticleType::DealAlert,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let service = AffiliateService::new(
        std::env::var("ASSOCIATE_TAG").ok().filter(|t| !t.is_empty()),
        std::env::var("DEFAULT_MARKETPLACE").unwrap_or_else(|_| "amazon.com".to_string()),
    );

    match cli.command {
        Commands::Convert {
            input,
            format,
            title,
            tag,
            output,
        } => convert(&service, input, format, title, tag, output),
        Commands::Affiliate { url, tag } => affiliate(&service, &url, tag),
        Commands::Inspect { url } => {
            inspect(&service, &url);
            Ok(())
        }
        Commands::Length {
            article_type,
            requested,
            competitor_target,
            competitor_longest,
            competitor_shortest,
        } => {
            length(
                article_type.into(),
                requested,
                CompetitorSignals {
                    target: competitor_target,
                    longest: competitor_longest,
                    shortest: competitor_shortest,
                },
            );
            Ok(())
        }
    }
}

fn convert(
    service: &AffiliateService,
    input: PathBuf,
    format: FormatArg,
    title: Option<String>,
    tag: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let source = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    let is_markdown = input
        .extension()
        .is_none_or(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"));

    let html = if is_markdown {
        markdown_to_html(&source)
    } else {
        source.clone()
    };

    let (html, markdown_source) = match service.resolve_tag(tag.as_deref()) {
        Some(tag) => (service.rewrite_html(&html, tag), None),
        None => (html, is_markdown.then_some(source.as_str()).map(str::to_string)),
    };

    let title = title.unwrap_or_else(|| {
        input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Untitled")
            .to_string()
    });

    let rendered = ExportFormat::from(format).render(&html, markdown_source.as_deref(), &title);

    match output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} {}", "Wrote".green(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn affiliate(service: &AffiliateService, url: &str, tag: Option<String>) -> Result<()> {
    let tag = service
        .resolve_tag(tag.as_deref())
        .context("No associate tag given; pass --tag or set ASSOCIATE_TAG")?;

    let report = service.inspect(url);
    let Some(asin) = report.asin.filter(|_| report.valid) else {
        anyhow::bail!("Not a valid Amazon product URL: {url}");
    };

    let link = service.format_affiliate_url(asin.as_str(), tag, Some(&report.marketplace))?;
    println!("{link}");
    Ok(())
}

fn inspect(service: &AffiliateService, url: &str) {
    let report = service.inspect(url);

    if report.valid {
        println!("{}", "Valid Amazon product URL".green());
    } else {
        println!("{}", "Not a valid Amazon product URL".red());
    }
    match &report.asin {
        Some(asin) => println!("  ASIN:        {}", asin.to_string().bold()),
        None => println!("  ASIN:        {}", "not found".dimmed()),
    }
    println!("  Marketplace: {}", report.marketplace);
    if let Some(locale) = report.locale {
        println!("  Country:     {}", locale.country);
        println!("  Category:    {} ({})", locale.category_en, locale.category_native);
    }
}

fn length(
    article_type: ArticleType,
    requested: Option<u32>,
    competitors: CompetitorSignals,
) {
    let policy = article_type.policy();
    let minimum = policy.minimum_words(requested, competitors);

    println!("  Policy:  {policy:?}");
    println!("  Minimum: {}", minimum.to_string().bold());
}
