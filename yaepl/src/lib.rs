//! Populate struct fields from environment variables
//!
//! `yaepl` fills the fields of a struct from the process environment, driven by
//! a small annotation on each field. The annotation names the environment
//! variable to read and whether it must be set:
//!
//! ```text
//! key:<ENV_KEY>[;required]
//! ```
//!
//! # Features
//!
//! - **Declarative**: field tables generated with `#[derive(Populate)]`, no runtime reflection
//! - **In place**: populates an existing `&mut` record; unannotated fields keep their values
//! - **Typed**: `bool`, integers up to 64 bits, `f32`, `f64` and `String`
//! - **Fail-fast**: the first problem is returned as a single [`Error`]
//! - **Pluggable source**: read from the process or from any [`Env`], e.g. a `HashMap`
//!
//! # Value Parsing
//!
//! - Strings: assigned verbatim, including the empty string
//! - Booleans: `1 t T TRUE true True` / `0 f F FALSE false False`
//! - Unsigned integers: base-10 digits, `APP_WORKERS=8`
//! - Signed integers: optional sign, `APP_OFFSET=-10`
//! - Floats: decimal or scientific, `APP_RATIO=3.14e+50`
//!
//! An unset variable reads as the empty string, so a non-`String` field whose
//! variable is unset fails to convert. Mark such fields `required` to get a
//! clearer error.
//!
//! # Example
//!
//! ```rust
//! use yaepl::Populate;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     #[yaepl = "key:DATABASE_URL;required"]
//!     pub database_url: String,
//!
//!     #[yaepl = "key:MAX_CONNECTIONS"]
//!     pub max_connections: u32,
//!
//!     // Not annotated: never read from the environment
//!     pub label: String,
//! }
//!
//! # fn main() -> Result<(), yaepl::Error> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! #     std::env::set_var("MAX_CONNECTIONS", "42");
//! let mut config = Config::default();
//! yaepl::populate(&mut config)?;
//! assert_eq!(config.database_url, "postgres://localhost/db");
//! assert_eq!(config.max_connections, 42);
//! assert_eq!(config.label, "");
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[yaepl = "key:NAME;required"]`
//!
//! The field annotation. Clauses are separated by `;` and trimmed; unknown
//! clauses are ignored. Only `pub` fields are populated.
//!
//! ## `#[yaepl(prefix = "PREFIX_")]`
//!
//! Struct-level prefix prepended to every key before lookup.
//!
//! ```rust
//! # use yaepl::Populate;
//! #[derive(Default, Populate)]
//! #[yaepl(prefix = "MYAPP_")]
//! struct Config {
//!     // Reads MYAPP_PORT
//!     #[yaepl = "key:PORT"]
//!     pub port: u16,
//! }
//! ```

extern crate self as yaepl;

pub mod convert;
pub mod directive;
pub mod env;
pub mod field;

mod error;
mod populate;

pub use convert::EnvValue;
pub use directive::Directive;
pub use env::{Env, ProcessEnv};
pub use error::{ConversionError, Error};
pub use field::{Assign, FieldDescriptor, FieldKind, Populate};
pub use populate::{populate, Populator, UnsupportedPolicy};
pub use yaepl_derive::Populate;
