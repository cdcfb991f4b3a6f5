mod leakcheck;

pub use leakcheck::{LookupClient, LookupError};

use crate::model::LeakResult;
use async_trait::async_trait;

/// A breach-lookup backend.
///
/// Implementations never fail outright: transport and upstream problems are
/// reported through [`LeakResult::error`].
#[async_trait]
pub trait LeakLookup: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, normalized_query: &str) -> LeakResult;
}
