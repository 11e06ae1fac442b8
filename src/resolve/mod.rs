//! Computing effective ssh settings for a host.
//!
//! This module handles:
//! - Glob-with-negation matching of `Host` pattern lists
//! - Merging matching sections into per-host settings

pub mod compute;
pub mod pattern;

pub use compute::{ResolvedConfig, ResolvedValue};
pub use pattern::{HostPattern, PatternList, matches_pattern_list};
