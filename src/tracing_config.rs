//! Tracing configuration for arena diagnostics.
//!
//! The arena emits `debug` events when it acquires chunks, resets or tears
//! down, and a `trace` event per allocation. Output format is controlled by
//! `ARENAKIT_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per event
//!
//! ```bash
//! ARENAKIT_LOG=debug ARENAKIT_LOG_FORMAT=tree cargo test
//! ARENAKIT_LOG="arenakit_arena=trace" cargo bench
//! ```
//!
//! The subscriber is only initialised when `ARENAKIT_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead otherwise.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name. Unknown names fall back to `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Read from the `ARENAKIT_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("ARENAKIT_LOG_FORMAT").unwrap_or_default())
    }
}

/// Filter directives from `ARENAKIT_LOG`, falling back to `RUST_LOG`.
///
/// `ARENAKIT_LOG` takes precedence when both are set.
fn filter_from_env() -> Option<String> {
    std::env::var("ARENAKIT_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
}

/// Initialise the global tracing subscriber from the environment.
///
/// Does nothing when neither `ARENAKIT_LOG` nor `RUST_LOG` is set. Returns
/// whether a subscriber was installed.
pub fn init_tracing() -> bool {
    match filter_from_env() {
        Some(directives) => init_tracing_with(&directives, LogFormat::from_env()),
        None => false,
    }
}

/// Initialise the global tracing subscriber with explicit settings.
///
/// Output goes to stderr. Returns `false` if a global subscriber was already
/// installed; that is not treated as an error.
pub fn init_tracing_with(directives: &str, format: LogFormat) -> bool {
    let filter = EnvFilter::builder().parse_lossy(directives);

    match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("bogus"), LogFormat::Text);
    }
}
