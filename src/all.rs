//! Fan-in over a fixed set of promises.
use futures::future::join_all;
use tracing::trace;

use crate::PromiseOut;

/// Blocks until every promise is settled and returns the values and errors
/// lined up with the input order.
///
/// A rejected promise only fills its own slot in `errors`; its siblings are
/// unaffected. An empty slice returns two empty vectors straight away.
pub fn all<T, E>(promises: &[PromiseOut<T, E>]) -> (Vec<Option<T>>, Vec<Option<E>>)
where
    T: Clone,
    E: Clone,
{
    trace!(count = promises.len(), "waiting for all promises");
    promises.iter().map(PromiseOut::get).unzip()
}

/// Async counterpart of [`all`]; all promises are awaited concurrently.
///
/// ```
/// use promise_out::{all_async, PromiseOut};
/// use futures::executor::block_on;
///
/// let promises: Vec<PromiseOut<&str, String>> = vec![PromiseOut::new(), PromiseOut::new()];
/// promises[1].reject("💥".into());
/// promises[0].resolve("🍓");
/// let (values, errors) = block_on(all_async(&promises));
/// assert_eq!(values, vec![Some("🍓"), None]);
/// assert_eq!(errors, vec![None, Some("💥".to_owned())]);
/// ```
pub async fn all_async<T, E>(promises: &[PromiseOut<T, E>]) -> (Vec<Option<T>>, Vec<Option<E>>)
where
    T: Clone,
    E: Clone,
{
    trace!(count = promises.len(), "awaiting all promises");
    join_all(promises.iter().map(PromiseOut::wait))
        .await
        .iter()
        .map(|settled| settled.to_pair())
        .unzip()
}
