//! Timeout for wallet calls on both native (tokio) and browser (gloo) targets.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

/// Run `fut` for at most `limit`; `None` when the limit elapsed first.
pub(crate) async fn with_timeout<F: Future>(limit: Duration, fut: F) -> Option<F::Output> {
    let fut = pin!(fut);
    let timer = pin!(sleep(limit));
    match select(fut, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(limit: Duration) {
    tokio::time::sleep(limit).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(limit: Duration) {
    gloo_timers::future::sleep(limit).await;
}
