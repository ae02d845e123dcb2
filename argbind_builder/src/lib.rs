//! Builder module for `argbind`.
//! See the `argbind` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod registry;

pub use api::*;
pub use model::*;
pub use parser::ParseError;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
