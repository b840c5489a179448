//! Asynchronous combinators.
//!
//! Each combinator awaits at most one caller-supplied future, and only after synchronously deciding which callback to
//! call. Panics follow the same policy as the synchronous [combinators](crate::optional::combinator): a panic while
//! calling an absorbing callback, or while polling the future it returned, yields the absent outcome.

use std::future::Future;

use crate::optional::Optional;
use crate::util::future::absorb_panic_async;

// Construction

impl<T> Optional<T> {
  /// Creates a [`Present`](Self::Present) from the output of the future `f` creates, or [`Absent`](Self::Absent)
  /// if `f` or the future panics.
  pub async fn from_throwing_async<F, Fut>(f: F) -> Self where
    F: FnOnce() -> Fut,
    Fut: Future<Output=T>,
  {
    Self::from_nullable(absorb_panic_async(f).await)
  }

  /// Creates a [`Present`](Self::Present) from the nullable output of the future `f` creates, or
  /// [`Absent`](Self::Absent) if it resolves to `None`, or if `f` or the future panics.
  pub async fn from_throwing_nullable_async<F, Fut>(f: F) -> Self where
    F: FnOnce() -> Fut,
    Fut: Future<Output=Option<T>>,
  {
    Self::from_nullable(absorb_panic_async(f).await.flatten())
  }

  /// Creates a [`Present`](Self::Present) from the `Ok` output of the future `f` creates, or
  /// [`Absent`](Self::Absent) if the future resolves to `Err`, or if `f` or the future panics.
  pub async fn from_fallible_async<F, Fut, E>(f: F) -> Self where
    F: FnOnce() -> Fut,
    Fut: Future<Output=Result<T, E>>,
  {
    match absorb_panic_async(f).await {
      Some(Ok(value)) => Self::Present(value),
      Some(Err(_)) => {
        tracing::trace!("fallible future resolved to an error; creating absent");
        Self::Absent
      }
      None => Self::Absent,
    }
  }
}


// Extraction

impl<T> Optional<T> {
  /// Returns the contained value, or awaits the value `fallback` creates. `fallback` only runs when absent.
  pub async fn get_or_else_async<Fut>(self, fallback: impl FnOnce() -> Fut) -> T where
    Fut: Future<Output=T>,
  {
    match self {
      Self::Present(value) => value,
      Self::Absent => {
        tracing::trace!("evaluating fallback value");
        fallback().await
      }
    }
  }

  /// Returns `self` when present, or awaits the `Optional` that `fallback` creates. `fallback` only runs when absent.
  pub async fn or_else_async<Fut>(self, fallback: impl FnOnce() -> Fut) -> Optional<T> where
    Fut: Future<Output=Optional<T>>,
  {
    match self {
      Self::Present(_) => self,
      Self::Absent => {
        tracing::trace!("evaluating fallback optional");
        fallback().await
      }
    }
  }
}


// Transformation

impl<T> Optional<T> {
  /// Asynchronous [`satisfies`](Self::satisfies). The future `predicate` creates may borrow the contained value.
  pub async fn satisfies_async<'a, F, Fut>(&'a self, predicate: F) -> bool where
    F: FnOnce(&'a T) -> Fut,
    Fut: Future<Output=bool>,
  {
    match self {
      Self::Present(value) => absorb_panic_async(|| predicate(value)).await.unwrap_or(false),
      Self::Absent => false,
    }
  }

  /// Asynchronous [`map`](Self::map).
  pub async fn map_async<U, F, Fut>(self, f: F) -> Optional<U> where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output=U>,
  {
    match self {
      Self::Present(value) => Optional::from_nullable(absorb_panic_async(|| f(value)).await),
      Self::Absent => Optional::Absent,
    }
  }

  /// Asynchronous [`map_nullable`](Self::map_nullable).
  pub async fn map_nullable_async<U, F, Fut>(self, f: F) -> Optional<U> where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output=Option<U>>,
  {
    match self {
      Self::Present(value) => Optional::from_nullable(absorb_panic_async(|| f(value)).await.flatten()),
      Self::Absent => Optional::Absent,
    }
  }

  /// Asynchronous [`filter`](Self::filter). The future `predicate` creates can not borrow the contained value;
  /// destructure or clone what it needs first.
  pub async fn filter_async<F, Fut>(self, predicate: F) -> Self where
    F: FnOnce(&T) -> Fut,
    Fut: Future<Output=bool>,
  {
    match self {
      Self::Present(value) => {
        let keep = absorb_panic_async(|| predicate(&value)).await.unwrap_or(false);
        if keep { Self::Present(value) } else { Self::Absent }
      }
      Self::Absent => Self::Absent,
    }
  }

  /// Asynchronous [`flat_map`](Self::flat_map).
  pub async fn flat_map_async<U, F, Fut>(self, f: F) -> Optional<U> where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output=Optional<U>>,
  {
    match self {
      Self::Present(value) => absorb_panic_async(|| f(value)).await.unwrap_or_default(),
      Self::Absent => Optional::Absent,
    }
  }

  /// Asynchronous [`reduce`](Self::reduce).
  pub async fn reduce_async<U, F, Fut>(self, initial: U, reducer: F) -> U where
    F: FnOnce(U, T) -> Fut,
    Fut: Future<Output=U>,
  {
    match self {
      Self::Present(value) => reducer(initial, value).await,
      Self::Absent => initial,
    }
  }

  /// Asynchronous [`fold`](Self::fold).
  pub async fn fold_async<U, P, PFut, A, AFut>(self, on_present: P, on_absent: A) -> U where
    P: FnOnce(T) -> PFut,
    PFut: Future<Output=U>,
    A: FnOnce() -> AFut,
    AFut: Future<Output=U>,
  {
    match self {
      Self::Present(value) => match absorb_panic_async(|| on_present(value)).await {
        Some(output) => output,
        None => on_absent().await,
      },
      Self::Absent => on_absent().await,
    }
  }

  #[deprecated(note = "use `fold_async` instead")]
  pub async fn match_async<U, P, PFut, A, AFut>(self, on_present: P, on_absent: A) -> U where
    P: FnOnce(T) -> PFut,
    PFut: Future<Output=U>,
    A: FnOnce() -> AFut,
    AFut: Future<Output=U>,
  {
    self.fold_async(on_present, on_absent).await
  }
}


// Equality

impl<T> Optional<T> {
  /// Asynchronous [`equals`](Self::equals).
  pub async fn equals_async(&self, other: &Optional<T>) -> bool where
    T: PartialEq
  {
    self.equals(other)
  }

  /// Asynchronous [`equals_by`](Self::equals_by). The future `comparator` creates may borrow both values.
  pub async fn equals_by_async<'a, U, F, Fut>(&'a self, other: &'a Optional<U>, comparator: F) -> bool where
    F: FnOnce(&'a T, &'a U) -> Fut,
    Fut: Future<Output=bool>,
  {
    match (self, other) {
      (Self::Present(a), Optional::Present(b)) => absorb_panic_async(|| comparator(a, b)).await.unwrap_or(false),
      (Self::Absent, Optional::Absent) => true,
      _ => false,
    }
  }
}
