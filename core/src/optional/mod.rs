use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::error::{Error, Result, ABSENT_MESSAGE};
use crate::util::panic::absorb_panic;

pub mod combinator;
pub mod asynchronous;
#[cfg(feature = "serde")]
mod serde_impls;

/// A value that may be absent.
///
/// Instances are never mutated: every combinator consumes `self` and returns a new `Optional` (or `self` unchanged).
/// Combinators taking callbacks run them at most once. See [`combinator`] for which combinators absorb panics.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[must_use = "if unused, the contained value is dropped"]
pub enum Optional<T> {
  /// Holds exactly one value.
  Present(T),
  /// Holds no value.
  Absent,
}

impl<T> Default for Optional<T> {
  #[inline]
  fn default() -> Self { Self::Absent }
}


// Construction

impl<T> Optional<T> {
  #[inline]
  pub const fn present(value: T) -> Self { Self::Present(value) }
  /// Alias of [`present`](Self::present).
  #[inline]
  pub const fn some(value: T) -> Self { Self::present(value) }
  /// Creates a [`Present`](Self::Present) from a nullable that the caller knows to hold a value.
  ///
  /// # Errors
  ///
  /// Returns [`Error::NullValue`] when `value` is `None`.
  #[inline]
  pub fn try_present(value: Option<T>) -> Result<Self> {
    value.map(Self::Present).ok_or(Error::NullValue)
  }

  #[inline]
  pub const fn absent() -> Self { Self::Absent }
  /// Alias of [`absent`](Self::absent).
  #[inline]
  pub const fn none() -> Self { Self::absent() }

  /// Creates an `Optional` from a nullable, collapsing `None` into [`Absent`](Self::Absent).
  #[inline]
  pub fn from_nullable(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }

  /// Creates a [`Present`](Self::Present) from the value `f` returns, or [`Absent`](Self::Absent) if `f` panics.
  pub fn from_throwing(f: impl FnOnce() -> T) -> Self {
    Self::from_nullable(absorb_panic(f))
  }

  /// Creates a [`Present`](Self::Present) from the nullable `f` returns, or [`Absent`](Self::Absent) if it returns
  /// `None` or panics.
  pub fn from_throwing_nullable(f: impl FnOnce() -> Option<T>) -> Self {
    Self::from_nullable(absorb_panic(f).flatten())
  }

  /// Creates a [`Present`](Self::Present) from the `Ok` value `f` returns, or [`Absent`](Self::Absent) if `f`
  /// returns `Err` or panics.
  pub fn from_fallible<E>(f: impl FnOnce() -> Result<T, E>) -> Self {
    match absorb_panic(f) {
      Some(Ok(value)) => Self::Present(value),
      Some(Err(_)) => {
        tracing::trace!("fallible constructor returned an error; creating absent");
        Self::Absent
      }
      None => Self::Absent,
    }
  }
}


impl<T> Optional<Optional<T>> {
  /// Removes one level of nesting.
  #[inline]
  pub fn flatten(self) -> Optional<T> {
    match self {
      Self::Present(inner) => inner,
      Self::Absent => Optional::Absent,
    }
  }
}


// Inspection

impl<T> Optional<T> {
  #[inline]
  pub const fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }
  #[inline]
  pub const fn is_absent(&self) -> bool { !self.is_present() }

  #[inline]
  pub const fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(value) => Optional::Present(value),
      Self::Absent => Optional::Absent,
    }
  }

  #[inline]
  pub fn iter(&self) -> Iter<'_, T> { Iter(self.as_nullable()) }
}


// Extraction

impl<T> Optional<T> {
  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics with "No value in Option" when absent.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    self.expect(ABSENT_MESSAGE)
  }

  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics with `message` when absent.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => panic!("{}", message),
    }
  }

  /// Returns the contained value, or [`Error::Absent`] with the default message.
  #[inline]
  pub fn try_unwrap(self) -> Result<T> {
    self.unwrap_or_raise(Error::absent())
  }

  /// Returns the contained value, or [`Error::Absent`] with `message`.
  #[inline]
  pub fn try_unwrap_with(self, message: impl Into<Cow<'static, str>>) -> Result<T> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(Error::absent_with(message)),
    }
  }

  /// Returns the contained value, or `error` as-is.
  #[inline]
  pub fn unwrap_or_raise<E>(self, error: E) -> Result<T, E> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(error),
    }
  }

  /// Returns the contained value, or the value `fallback` returns. `fallback` only runs when absent.
  #[inline]
  pub fn get_or_else(self, fallback: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => {
        tracing::trace!("evaluating fallback value");
        fallback()
      }
    }
  }

  /// Returns `self` when present, or the `Optional` that `fallback` returns. `fallback` only runs when absent.
  #[inline]
  pub fn or_else(self, fallback: impl FnOnce() -> Optional<T>) -> Optional<T> {
    match self {
      Self::Present(_) => self,
      Self::Absent => {
        tracing::trace!("evaluating fallback optional");
        fallback()
      }
    }
  }

  #[inline]
  pub fn to_nullable(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }
  /// Same projection as [`to_nullable`](Self::to_nullable): null and undefined are both `None`.
  #[inline]
  pub fn to_undefined(self) -> Option<T> { self.to_nullable() }
  #[inline]
  pub const fn as_nullable(&self) -> Option<&T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }
}


// Conversions

impl<T> From<Option<T>> for Optional<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_nullable(value) }
}
impl<T> From<Optional<T>> for Option<T> {
  #[inline]
  fn from(value: Optional<T>) -> Self { value.to_nullable() }
}

/// Iterator over the zero or one values of an [`Optional`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T>(Option<&'a T>);
impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.0.take() }
  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = usize::from(self.0.is_some());
    (len, Some(len))
  }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.to_nullable().into_iter() }
}
impl<'a, T> IntoIterator for &'a Optional<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
