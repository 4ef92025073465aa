// Author: Dustin Pilgrim
// License: MIT

//! Sectioned configuration files: `[section]` headers, `key = value` pairs,
//! nested `[a, [b, c]]` arrays and `;` comments attached to sections.

pub mod ast;
pub mod error;
pub mod export;
pub mod options;
pub mod parser;
pub mod serializer;
pub mod utils;
pub mod value;
pub mod config;

pub use ast::{Document, Section, Value, ValueKind};
pub use error::SconfError;
pub use options::{QuoteStyle, WriteOptions};
pub use config::SconfConfig;
