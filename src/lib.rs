#![cfg_attr(not(feature = "std"), no_std)]
//! Read and rewrite the query part of a URL.
//!
//! ```
//! use query_params::{QueryParams, step};
//!
//! let mut query = QueryParams::parse("?testKey1=testValue1&testKey2=testValue2%26&testKey3=testValue3");
//! let result = query.compose([
//!     step(|q| q.add_or_replace_param("testKey1", "replacedValue1")),
//!     step(|q| q.remove_param("testKey3")),
//!     step(|q| q.add_param("testValue4", "addedValue4")),
//! ]);
//! assert_eq!(result, "testKey1=replacedValue1&testKey2=testValue2%26&testValue4=addedValue4");
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod log;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod error;
mod helpers;
mod mutation;
mod param_map;
mod percent_encode;
mod query_params;

// Public API
pub use error::{ParseError, Result};
pub use mutation::{Mutation, Step, step};
pub use param_map::ParamMap;
pub use percent_encode::{FORM_URLENCODED_SET, SpaceEncoding};
pub use query_params::QueryParams;
