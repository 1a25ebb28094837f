//! hclgen compiles nested infrastructure descriptions into Terraform-compatible
//! HCL text.
//!
//! Documents are trees of [`Block`] values: a block path (keyword plus
//! labels), an ordered attribute map and nested child blocks. Attribute
//! values are the closed [`Value`] union of HCL scalars, arrays, objects and
//! two escape hatches: [`Variable`] references and [`RawExpression`] text
//! spliced into the output verbatim.
//!
//! ```
//! use hclgen::{Block, RawExpression, Variable};
//!
//! let body = vec![Block::new(["resource", "aws_instance", "web"])
//!     .attribute("ami", "ami-0c55b159cbfafe1f0")
//!     .attribute("instance_type", Variable::new("instance_type"))
//!     .attribute("tags", RawExpression::new(r#"tomap({Name = "web"})"#))];
//!
//! let output = hclgen::to_string(&body).unwrap();
//!
//! assert!(output.starts_with(r#"resource "aws_instance" "web" {"#));
//! ```
//!
//! Compilation is a pure read-only transform: identical input trees always
//! produce byte-identical output, and errors abort the whole document instead
//! of emitting truncated HCL.

#![warn(missing_docs)]

mod error;
mod format;
mod ident;
mod number;
mod ser;
mod structure;
mod template;
mod value;

pub use error::{Error, ErrorPath, PathSegment, Result};
pub use format::{FormatBuilder, FormatOptions};
pub use ident::is_identifier;
pub use number::Number;
pub use ser::{to_string, to_string_with, to_writer, to_writer_with};
pub use structure::{Block, Body};
pub use template::{Segment, Template};
pub use value::{Map, RawExpression, Value, Variable};
