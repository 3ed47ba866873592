//! # wstyle - CSS declaration micro-parser
//!
//! Parses and serializes the small pieces of CSS a utility-first generator
//! works with: single declarations and bare inline at-rules such as `@apply`.
//!
//! - **Build**: turn a [`Property`] or [`InlineAtRule`] into expanded or
//!   minimized CSS text
//! - **Parse**: read `;`-separated statements back into a [`Parsed`] list
//! - **Style**: wrap a declaration in a selector block, escaping `:` in
//!   variant class names
//!
//! ## Quick Start
//!
//! ```rust
//! use wstyle::{Parsed, Property, Statement};
//!
//! let padding = Property::new("padding", "1rem").with_comment("p-4");
//! assert_eq!(padding.build(false), "padding: 1rem; /* p-4 */");
//! assert_eq!(padding.build(true), "padding:1rem;");
//!
//! let style = padding.to_style(Some(".sm:p-4"), true);
//! assert_eq!(style.build(), ".sm\\:p-4 {\n  padding: 1rem; /* p-4 */\n}");
//!
//! match Property::parse("padding:1rem;@apply font-bold;") {
//!     Parsed::Many(statements) => {
//!         assert!(matches!(statements[0], Statement::Property(_)));
//!         assert!(matches!(statements[1], Statement::AtRule(_)));
//!     }
//!     other => panic!("expected two statements, got {other:?}"),
//! }
//! ```
//!
//! ## Not Supported
//!
//! - Full stylesheets, selectors, media queries or nesting
//! - At-rules other than bare inline directives
//! - Validation of property names or values
//!
//! ## Modules
//!
//! - [`property`]: declarations and their build/parse operations
//! - [`at_rule`]: inline at-rules
//! - [`statement`]: mixed statement lists
//! - [`style`]: selector blocks and escaping
//! - [`parser`]: statement grammar and splitting
//! - [`options`]: output configuration
//! - [`error`]: strict parsing errors

pub mod at_rule;
pub mod error;
pub mod options;
pub mod parser;
pub mod property;
pub mod statement;
pub mod style;

pub use at_rule::InlineAtRule;
pub use error::StyleError;
pub use options::BuildOptions;
pub use property::{Property, PropertyNames};
pub use statement::{Parsed, Statement};
pub use style::{Style, escape_selector};
