use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::optional::Optional;
use crate::util::panic::{absorb_panic, log_absorbed};

/// Calls `f` and awaits the future it creates, returning `None` instead of unwinding when either the call or any poll
/// of the future panics.
pub async fn absorb_panic_async<F, Fut>(f: F) -> Option<Fut::Output> where
  F: FnOnce() -> Fut,
  Fut: Future,
{
  let future = absorb_panic(f)?;
  match AssertUnwindSafe(future).catch_unwind().await {
    Ok(output) => Some(output),
    Err(payload) => {
      log_absorbed(payload.as_ref());
      None
    }
  }
}

pub trait OptionalFutureExt {
  type Output;

  /// Awaits the contained future if present; an absent future resolves immediately to
  /// [`Absent`](Optional::Absent).
  fn into_future_output(self) -> impl Future<Output=Optional<Self::Output>>;

  fn opt_map<U>(self, f: impl FnOnce(Self::Output) -> U) -> Optional<impl Future<Output=U>>;
  fn opt_map_into<U>(self) -> Optional<impl Future<Output=U>> where
    Self::Output: Into<U>;
}

impl<F: Future> OptionalFutureExt for Optional<F> {
  type Output = F::Output;

  #[inline]
  fn into_future_output(self) -> impl Future<Output=Optional<Self::Output>> {
    async move {
      match self {
        Optional::Present(future) => Optional::Present(future.await),
        Optional::Absent => Optional::Absent,
      }
    }
  }

  #[inline]
  fn opt_map<U>(self, f: impl FnOnce(Self::Output) -> U) -> Optional<impl Future<Output=U>> {
    self.map(|fut| fut.map(f))
  }

  #[inline]
  fn opt_map_into<U>(self) -> Optional<impl Future<Output=U>> where
    Self::Output: Into<U>
  {
    self.map(|fut| fut.map_into())
  }
}
