//! Parsing of ssh client configuration text.
//!
//! This module handles:
//! - Character scanning and lexer primitives
//! - Building one comment/directive node per line
//! - Assembling lines into root and `Host`/`Match` sections

pub mod assembler;
pub mod cursor;

pub use assembler::{parse, parse_line};
pub use cursor::Cursor;
