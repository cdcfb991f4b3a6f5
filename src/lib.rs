pub mod batch;
pub mod client;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod output;
pub mod render;
pub mod router;

pub use client::{LeakLookup, LookupClient};
pub use config::Config;
pub use model::{
    BreachSource, DisplayDocument, DisplayField, LeakQuery, LeakResult, QueryKind,
    FIELD_VALUE_LIMIT,
};
pub use normalizer::normalize;
pub use render::ResultRenderer;
pub use router::{CommandRouter, Invocation};
