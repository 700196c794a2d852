//! tagenum-compiler
//!
//! This crate implements:
//!  1) A tokenizer for `key:"value"` field tags and the `enum` tag interpreter,
//!  2) A declaration scanner over `syn`-parsed source files,
//!  3) The enum model and a verifier (reserved names, duplicates, etc.),
//!  4) Code generation (`generate_source` → `String`) from a fixed template,
//!  5) Output normalization through `rustfmt` with a raw-text fallback,
//!  6) Error types (`TagEnumError`).

pub mod error;
pub mod utils;
pub mod tokenizer;
pub mod tag;
pub mod model;
pub mod scanner;
pub mod verifier;
pub mod gen_rust;
pub mod emitter;
pub mod compiler;

pub use compiler::{compile, generate_source, Options, DEFAULT_PACKAGE};
pub use emitter::{emit, Normalize, Rustfmt, Verbatim};
pub use error::TagEnumError;
pub use scanner::{parse_source, scan_package, Package, SourceFile};
