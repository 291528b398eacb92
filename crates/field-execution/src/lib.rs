//! Executes the root fields of an operation, containing failures at the field they happened in.
//!
//! Each field call prepares its arguments with [`field_arguments::ArgumentRuntime`] and then runs
//! the resolver. Any error is turned into a [`GraphqlError`] located at the field's response path
//! while the field's value becomes `null`.

mod error;
mod executor;
mod response;
mod schema;

pub use error::*;
pub use executor::*;
pub use response::*;
pub use schema::*;
