//! Core data types for queries, lookup results, and rendered documents.
//!
//! - [`QueryKind`] / [`LeakQuery`] - what the user asked for
//! - [`BreachSource`] / [`LeakResult`] - what the lookup API answered
//! - [`DisplayField`] / [`DisplayDocument`] - what gets shown back
//!
//! # Example
//!
//! ```
//! use breachbot::{LeakQuery, QueryKind};
//!
//! let query = LeakQuery::new(QueryKind::Username, "neo");
//! assert_eq!(query.normalized(), "neo");
//! ```

mod display;
mod query;
mod result;

pub use display::*;
pub use query::*;
pub use result::*;
