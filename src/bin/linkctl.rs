//! Command line tool for checking link policy behavior.
//!
//! Reads the same `LINKBLOG_*` environment as the server, so a policy can be
//! tried out before deploying it.
//!
//! # Usage
//!
//! ```bash
//! # Show the policy loaded from the environment
//! cargo run --bin linkctl -- policy
//!
//! # Apply UTM tagging to a URL
//! cargo run --bin linkctl -- decorate "https://example.com/article?ref=1"
//!
//! # Resolve title and glyph links for a hypothetical item
//! cargo run --bin linkctl -- resolve --url https://example.com/a \
//!     --permalink https://blog.test/p/1 --context feed
//!
//! # Would a single view redirect?
//! cargo run --bin linkctl -- decide --url https://example.com/a \
//!     --permalink https://blog.test/p/1
//!
//! # Render a glyph anchor
//! cargo run --bin linkctl -- glyph --href https://blog.test/p/1 --context feed
//!
//! # Resolve every item of the configured items file
//! cargo run --bin linkctl -- items --context listing
//! ```

use linkblog::config::Config;
use linkblog::domain::entities::{LinkItem, RenderContext};
use linkblog::domain::repositories::{LinkItemRepository, PolicyRepository};
use linkblog::infrastructure::memory::InMemoryLinkRepository;
use linkblog::infrastructure::policy::StaticPolicyRepository;
use linkblog::linking::{self, GlyphMarkup, RedirectDecision};
use linkblog::state::SharedLinkService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for exercising the link policy.
#[derive(Parser)]
#[command(name = "linkctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the policy loaded from the environment as JSON
    Policy,

    /// Apply UTM tagging to a URL
    Decorate {
        /// URL to decorate
        url: String,
    },

    /// Resolve title and glyph links for one item
    Resolve {
        #[command(flatten)]
        item: ItemArgs,

        /// Render context: listing, single or feed
        #[arg(long, default_value = "listing")]
        context: RenderContext,
    },

    /// Decide whether the item's single view redirects
    Decide {
        #[command(flatten)]
        item: ItemArgs,

        /// Simulate the bypass query parameter
        #[arg(long)]
        bypass: bool,
    },

    /// Render a glyph anchor with the configured glyph
    Glyph {
        /// Glyph link target
        #[arg(long)]
        href: String,

        /// Render context: listing, single or feed
        #[arg(long, default_value = "listing")]
        context: RenderContext,
    },

    /// Resolve every item from LINKBLOG_ITEMS_FILE
    Items {
        /// Render context: listing, single or feed
        #[arg(long, default_value = "listing")]
        context: RenderContext,
    },
}

/// A hypothetical item described on the command line.
#[derive(clap::Args)]
struct ItemArgs {
    /// External URL of the link item
    #[arg(long)]
    url: Option<String>,

    /// On-site permalink
    #[arg(long, default_value = "https://blog.test/p/1")]
    permalink: String,

    /// Item opts out of single-view redirects
    #[arg(long)]
    skip_redirect: bool,

    /// Item opts out of listing title rewrites
    #[arg(long)]
    skip_rewrite: bool,
}

impl ItemArgs {
    fn into_item(self) -> LinkItem {
        LinkItem::new("cli", self.permalink, self.url)
            .with_skip_redirect(self.skip_redirect)
            .with_skip_rewrite(self.skip_rewrite)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Policy => show_policy(&config)?,
        Commands::Decorate { url } => decorate_url(&config, &url),
        Commands::Resolve { item, context } => resolve_item(&config, item.into_item(), context),
        Commands::Decide { item, bypass } => decide_redirect(&config, item.into_item(), bypass),
        Commands::Glyph { href, context } => render_glyph(&config, &href, context),
        Commands::Items { context } => resolve_items(&config, context).await?,
    }

    Ok(())
}

fn show_policy(config: &Config) -> Result<()> {
    println!("{}", "Link policy".bright_blue().bold());
    println!("{}", serde_json::to_string_pretty(&config.policy)?);
    Ok(())
}

fn decorate_url(config: &Config, url: &str) {
    let decorated = linking::decorate(url, &config.policy.utm);

    if decorated == url {
        println!("{} {}", "unchanged".yellow(), url);
    } else {
        println!("{} {}", "decorated".green(), decorated);
    }
}

fn resolve_item(config: &Config, item: LinkItem, context: RenderContext) {
    let resolution = linking::resolve(&item, context, &config.policy);

    println!("{} {}", "Context:".bold(), context.to_string().cyan());
    println!(
        "{} {} ({})",
        "Title:".bold(),
        resolution.title_href,
        resolution.title_target
    );
    match resolution.glyph {
        Some(glyph) => println!("{} {} ({})", "Glyph:".bold(), glyph.href, glyph.target),
        None => println!("{} {}", "Glyph:".bold(), "suppressed".dimmed()),
    }
}

fn decide_redirect(config: &Config, item: LinkItem, bypass: bool) {
    match linking::decide(&item, &config.policy, bypass) {
        RedirectDecision::Redirect { target, status } => {
            println!("{} {} {}", "redirect".green().bold(), status, target);
        }
        RedirectDecision::Stay(reason) => {
            println!("{} {}", "stay".yellow().bold(), reason);
        }
    }
}

fn render_glyph(config: &Config, href: &str, context: RenderContext) {
    let glyph_config = match context {
        RenderContext::Feed => &config.policy.feed_glyph,
        _ => &config.policy.site_glyph,
    };

    if !glyph_config.enabled {
        println!("{}", "Glyph disabled for this context".yellow());
    }

    println!(
        "{}",
        linking::glyph_renderer::render(GlyphMarkup::from_config(glyph_config), href, context)
    );
}

async fn resolve_items(config: &Config, context: RenderContext) -> Result<()> {
    let path = config
        .items_file
        .as_deref()
        .context("LINKBLOG_ITEMS_FILE must be set")?;

    let items: Arc<dyn LinkItemRepository> =
        Arc::new(InMemoryLinkRepository::load_from_file(path).await?);
    let policy: Arc<dyn PolicyRepository> =
        Arc::new(StaticPolicyRepository::new(config.policy.clone()));
    let service = SharedLinkService::new(items, policy);

    let resolved = service.list_resolved(context).await?;
    println!(
        "{} {} items ({})",
        "Resolved".bright_blue().bold(),
        resolved.len(),
        context
    );
    println!();

    for item in resolved {
        println!("{} {}", item.id.bold(), item.title_href);
        if let Some(glyph) = item.glyph {
            println!("  {} {} ({})", "glyph".dimmed(), glyph.href, glyph.target);
        }
    }

    Ok(())
}
