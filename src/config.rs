//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The link policy is part of it and is served unchanged to every
//! request.
//!
//! ## Server Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LINKBLOG_ITEMS_FILE` - JSON seed file of link items (optional)
//! - `LINKBLOG_BYPASS_PARAM` - Query parameter that suppresses redirects (default: `stay`)
//!
//! ## Policy Variables
//!
//! Flags accept `1`, `true`, `yes` or `on`. Anything else, or an unset
//! variable, means off.
//!
//! ```bash
//! export LINKBLOG_REDIRECT_SINGLES=1
//! export LINKBLOG_REWRITE_PERMALINKS=1
//! export LINKBLOG_GLYPH_DIRECTION=internal     # or external
//!
//! export LINKBLOG_UTM_ENABLED=1
//! export LINKBLOG_UTM_PRESERVE_EXISTING=1
//! export LINKBLOG_UTM_SOURCE=rss
//! export LINKBLOG_UTM_MEDIUM=linked-post
//! # LINKBLOG_UTM_CAMPAIGN, LINKBLOG_UTM_TERM, LINKBLOG_UTM_CONTENT
//!
//! export LINKBLOG_SITE_GLYPH_ENABLED=1
//! export LINKBLOG_SITE_GLYPH_TEXT="★"
//! # LINKBLOG_SITE_GLYPH_HTML, LINKBLOG_SITE_GLYPH_ON_SINGLE
//! export LINKBLOG_FEED_GLYPH_ENABLED=1
//! # LINKBLOG_FEED_GLYPH_TEXT, LINKBLOG_FEED_GLYPH_HTML
//! ```

use anyhow::{Context, Result};
use std::env;

use crate::domain::entities::{DEFAULT_GLYPH, GlyphConfig, LinkTarget, SiteLinkPolicy, UtmPolicy};
use crate::utils::flags::parse_flag;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Seed file for the in-memory item store. Empty store when unset.
    pub items_file: Option<String>,
    pub bypass_param: String,
    pub policy: SiteLinkPolicy,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LINKBLOG_GLYPH_DIRECTION` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let items_file = optional_var("LINKBLOG_ITEMS_FILE");
        let bypass_param =
            optional_var("LINKBLOG_BYPASS_PARAM").unwrap_or_else(|| "stay".to_string());

        let policy = Self::load_policy().context("Failed to load link policy")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            items_file,
            bypass_param,
            policy,
        })
    }

    /// Builds the site policy from `LINKBLOG_*` variables.
    fn load_policy() -> Result<SiteLinkPolicy> {
        let glyph_direction = match optional_var("LINKBLOG_GLYPH_DIRECTION") {
            Some(value) => value
                .parse::<LinkTarget>()
                .context("Invalid LINKBLOG_GLYPH_DIRECTION")?,
            None => LinkTarget::default(),
        };

        let utm = UtmPolicy {
            enabled: flag_var("LINKBLOG_UTM_ENABLED"),
            preserve_existing: flag_var("LINKBLOG_UTM_PRESERVE_EXISTING"),
            source: optional_var("LINKBLOG_UTM_SOURCE"),
            medium: optional_var("LINKBLOG_UTM_MEDIUM"),
            campaign: optional_var("LINKBLOG_UTM_CAMPAIGN"),
            term: optional_var("LINKBLOG_UTM_TERM"),
            content: optional_var("LINKBLOG_UTM_CONTENT"),
        };

        Ok(SiteLinkPolicy {
            redirect_singles_enabled: flag_var("LINKBLOG_REDIRECT_SINGLES"),
            rewrite_permalinks_enabled: flag_var("LINKBLOG_REWRITE_PERMALINKS"),
            utm,
            site_glyph: glyph_from_env("LINKBLOG_SITE_GLYPH"),
            feed_glyph: glyph_from_env("LINKBLOG_FEED_GLYPH"),
            glyph_direction,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `bypass_param` is empty or not URL-safe
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.bypass_param.is_empty()
            || !self
                .bypass_param
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!(
                "LINKBLOG_BYPASS_PARAM must be a non-empty [A-Za-z0-9_-] name, got '{}'",
                self.bypass_param
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        match &self.items_file {
            Some(path) => tracing::info!("  Items file: {}", path),
            None => tracing::info!("  Items file: none (empty store)"),
        }
        tracing::info!("  Bypass parameter: ?{}=1", self.bypass_param);
        tracing::info!(
            "  Redirect singles: {}",
            enabled(self.policy.redirect_singles_enabled)
        );
        tracing::info!(
            "  Rewrite permalinks: {}",
            enabled(self.policy.rewrite_permalinks_enabled)
        );
        tracing::info!(
            "  UTM tagging: {} ({} parameters)",
            enabled(self.policy.utm.enabled),
            self.policy.utm.configured_params().len()
        );
        tracing::info!("  Glyph direction: {}", self.policy.glyph_direction);
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}

/// Reads a variable, treating unset and blank the same.
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn flag_var(name: &str) -> bool {
    env::var(name).map(|v| parse_flag(&v)).unwrap_or(false)
}

/// Reads `{prefix}_ENABLED`, `{prefix}_TEXT`, `{prefix}_HTML` and `{prefix}_ON_SINGLE`.
fn glyph_from_env(prefix: &str) -> GlyphConfig {
    GlyphConfig {
        enabled: flag_var(&format!("{prefix}_ENABLED")),
        text: optional_var(&format!("{prefix}_TEXT")).unwrap_or_else(|| DEFAULT_GLYPH.to_string()),
        is_html: flag_var(&format!("{prefix}_HTML")),
        show_on_single: flag_var(&format!("{prefix}_ON_SINGLE")),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
