//! Declaration-level CSS building blocks for utility-first CSS generation.
//!
//! This package re-exports [`wstyle`], which does the parsing and
//! serialization. Depend on it directly when only the core is needed.
//!
//! ```rust
//! use windstyle_rs::{Property, Result};
//!
//! fn generate() -> Result<String> {
//!     let declaration: Property = "padding: 1rem".parse()?;
//!     Ok(declaration.with_comment("p-4").to_style(Some(".sm:p-4"), true).build())
//! }
//!
//! assert_eq!(generate().unwrap(), ".sm\\:p-4 {\n  padding: 1rem; /* p-4 */\n}");
//! ```

pub use wstyle::*;

/// Result of the strict parsing entry points.
pub type Result<T> = std::result::Result<T, StyleError>;
