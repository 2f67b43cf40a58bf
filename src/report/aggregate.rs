//! Bounded fan-out over sibling entities

use futures::stream::{self, StreamExt, TryStreamExt};
use std::future::Future;

use crate::error::Result;

/// Run `fetcher` once per parent, at most `concurrency` at a time
///
/// Results come back in parent order regardless of completion order. The
/// first error stops the fan-out; fetches still in flight are dropped and
/// whatever they produced is discarded.
pub async fn fan_out<P, T, F, Fut>(parents: Vec<P>, concurrency: usize, fetcher: F) -> Result<Vec<T>>
where
    F: FnMut(P) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    stream::iter(parents)
        .map(fetcher)
        .buffered(concurrency.max(1))
        .try_collect()
        .await
}
