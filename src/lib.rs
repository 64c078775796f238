//! Chunked bump arena and borrowed string views.
//!
//! This crate re-exports the workspace crates:
//! - `arenakit-arena`: the chunked `Arena` with bulk `reset` and `teardown`
//! - `arenakit-text`: `StrView`, a borrowed window over arena or caller bytes
//! - `arenakit-common`: the shared `Error` type and size limits
//!
//! ```
//! use arenakit::{Arena, ArenaConfig, StrView};
//!
//! let mut arena = Arena::with_config(ArenaConfig::debug(64));
//! let handle = arena.allocate_text(b"  hello").unwrap();
//! let view = StrView::from_allocation(&arena, &handle).unwrap();
//! assert_eq!(view.skip_leading_whitespace().to_str(), Some("hello"));
//! ```

pub use arenakit_arena::{Allocation, Arena, ArenaConfig, ArenaState, ArenaStats};
pub use arenakit_common::{Error, ErrorKind, Result, limits};
pub use arenakit_text::{Comparison, StrView, equals, is_whitespace};

// Tracing configuration (text / tree / JSON output for debugging)
pub mod tracing_config;
