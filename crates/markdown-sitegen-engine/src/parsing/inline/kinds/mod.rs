//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`, never directly after `!`
//! - **`Bold`**: `STARS = "**"`, `UNDERSCORES = "__"`
//! - **`Italic`**: single `_..._` or `*...*`, matched by pattern
//! - **`CodeSpan`**: `TICK = "`"`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};
