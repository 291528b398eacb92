//! Declaration and preparation of field arguments.
//!
//! Arguments are declared once per field with an [`ArgumentDefinition`] and grouped into an
//! [`ArgumentSet`]. At execution time, an [`ArgumentRuntime`] turns the raw arguments of a field
//! call into [`KeywordArguments`] for the resolver, coercing every value and running its prepare
//! hook.

mod config;
mod context;
mod definition;
mod error;
mod hook;
mod keyword;
pub mod names;
mod runtime;
mod set;
mod types;

pub use config::*;
pub use context::*;
pub use definition::*;
pub use error::*;
pub use hook::*;
pub use keyword::*;
pub use runtime::*;
pub use set::*;
pub use types::*;
