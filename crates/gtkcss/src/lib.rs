//! # gtkcss - GTK theme CSS to web CSS
//!
//! GTK and GNOME themes are written in a CSS dialect that standard browsers
//! do not understand. This crate parses that dialect and renders equivalent
//! standard CSS:
//!
//! - `@define-color NAME VALUE;` becomes `:root { --NAME: VALUE; }`
//! - `@name` becomes `var(--name)`
//! - `alpha(color, a)` becomes `color-mix(in srgb, color A%, transparent)`
//! - `mix(c1, c2, a)` becomes `color-mix(in srgb, c1 A%, c2)`
//!
//! Rules, `@keyframes` blocks and comments are understood as well, and are
//! re-serialized with normalized indentation.
//!
//! ## Quick Start
//!
//! ```rust
//! use gtkcss::translate;
//!
//! let source = r#"
//!     @define-color view_fg_color #000;
//!
//!     selection {
//!         background-color: alpha(@view_fg_color, 0.1);
//!     }
//! "#;
//!
//! let css = translate(source).expect("valid GTK CSS");
//! assert_eq!(
//!     css,
//!     ":root { --view_fg_color: #000; }\n\
//!      selection {\n    \
//!      background-color: color-mix(in srgb, var(--view_fg_color) 10%, transparent);\n\
//!      }"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: Grammar and data model
//! - [`render`]: Rendering of the data model as web CSS
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod parser;
pub mod render;

pub use error::GtkCssError;
pub use parser::{Document, parse_document, translate};
