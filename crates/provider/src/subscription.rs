//! The live head-subscription resource.

use crate::{Header, ProviderResult};
use futures::{Stream, StreamExt, stream::BoxStream};
use std::{
    fmt,
    pin::Pin,
    task::{Context, Poll},
};

type ReleaseFn = Box<dyn FnOnce() + Send>;

/// An open subscription to new block headers.
///
/// Yields headers in the node's delivery order and ends when the upstream
/// channel closes. The upstream resource is released exactly once when the
/// subscription is dropped, whichever way the consumer's loop exits.
pub struct HeadSubscription {
    stream: BoxStream<'static, ProviderResult<Header>>,
    release: Option<ReleaseFn>,
}

impl HeadSubscription {
    /// Wraps a header stream together with a release hook.
    ///
    /// `release` runs exactly once, on drop.
    pub fn new<S>(stream: S, release: impl FnOnce() + Send + 'static) -> Self
    where
        S: Stream<Item = ProviderResult<Header>> + Send + 'static,
    {
        Self { stream: stream.boxed(), release: Some(Box::new(release)) }
    }

    /// Wraps a header stream whose own drop already releases the upstream
    /// resource.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = ProviderResult<Header>> + Send + 'static,
    {
        Self { stream: stream.boxed(), release: None }
    }
}

impl Stream for HeadSubscription {
    type Item = ProviderResult<Header>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.stream.as_mut().poll_next(cx)
    }
}

impl Drop for HeadSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for HeadSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadSubscription")
            .field("explicit_release", &self.release.is_some())
            .finish_non_exhaustive()
    }
}
