//! Synchronous combinators.
//!
//! [`map`](Optional::map), [`map_nullable`](Optional::map_nullable), [`filter`](Optional::filter),
//! [`flat_map`](Optional::flat_map), [`satisfies`](Optional::satisfies) and [`equals_by`](Optional::equals_by) absorb
//! a panicking callback into the absent outcome, so chains of these never unwind. The present branch of
//! [`fold`](Optional::fold) falls back to the absent branch when it panics. Panics from the absent branch of `fold`,
//! from fallbacks, and from reducers propagate to the caller.
//!
//! Absorbing happens after the panic hook ran, so an absorbed panic is still reported by the installed hook (the
//! default hook prints `thread '..' panicked at ..` to stderr). Under `panic = "abort"` nothing can be absorbed and a
//! panicking callback aborts the process.

use crate::optional::Optional;
use crate::util::panic::absorb_panic;

impl<T> Optional<T> {
  /// Returns whether the contained value satisfies `predicate`. Returns `false` when absent (without calling
  /// `predicate`) or when `predicate` panics.
  #[inline]
  pub fn satisfies(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Self::Present(value) => absorb_panic(|| predicate(value)).unwrap_or(false),
      Self::Absent => false,
    }
  }

  /// Maps the contained value with `f`. Absent when `self` is absent (without calling `f`) or when `f` panics.
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Self::Present(value) => Optional::from_nullable(absorb_panic(|| f(value))),
      Self::Absent => Optional::Absent,
    }
  }

  /// Maps the contained value with `f`, which returns a nullable. A `None` result becomes absent.
  #[inline]
  pub fn map_nullable<U>(self, f: impl FnOnce(T) -> Option<U>) -> Optional<U> {
    match self {
      Self::Present(value) => Optional::from_nullable(absorb_panic(|| f(value)).flatten()),
      Self::Absent => Optional::Absent,
    }
  }

  /// Keeps `self` when the contained value satisfies `predicate`; absent otherwise, including when `predicate`
  /// panics.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Self::Present(value) => {
        let keep = absorb_panic(|| predicate(&value)).unwrap_or(false);
        if keep { Self::Present(value) } else { Self::Absent }
      }
      Self::Absent => Self::Absent,
    }
  }

  /// Returns the `Optional` that `f` creates from the contained value. Absent when `self` is absent or when `f`
  /// panics.
  #[inline]
  pub fn flat_map<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Self::Present(value) => absorb_panic(|| f(value)).unwrap_or_default(),
      Self::Absent => Optional::Absent,
    }
  }

  /// Combines `initial` with the contained value using `reducer`, or returns `initial` when absent.
  #[inline]
  pub fn reduce<U>(self, initial: U, reducer: impl FnOnce(U, T) -> U) -> U {
    match self {
      Self::Present(value) => reducer(initial, value),
      Self::Absent => initial,
    }
  }

  /// Returns `on_present(value)` when present, or `on_absent()` when absent.
  ///
  /// When `on_present` panics, `on_absent` is called instead. Panics of `on_absent` are not caught.
  #[inline]
  pub fn fold<U>(self, on_present: impl FnOnce(T) -> U, on_absent: impl FnOnce() -> U) -> U {
    match self {
      Self::Present(value) => match absorb_panic(|| on_present(value)) {
        Some(output) => output,
        None => on_absent(),
      },
      Self::Absent => on_absent(),
    }
  }

  #[deprecated(note = "use `fold` instead")]
  #[inline]
  pub fn r#match<U>(self, on_present: impl FnOnce(T) -> U, on_absent: impl FnOnce() -> U) -> U {
    self.fold(on_present, on_absent)
  }

  /// Compares with `other` using `PartialEq`. Two absents are equal.
  #[inline]
  pub fn equals(&self, other: &Optional<T>) -> bool where
    T: PartialEq
  {
    self.equals_by(other, |a, b| a == b)
  }

  /// Compares with `other`, calling `comparator` only when both are present. Two absents are equal, and a panicking
  /// `comparator` means unequal.
  #[inline]
  pub fn equals_by<U>(&self, other: &Optional<U>, comparator: impl FnOnce(&T, &U) -> bool) -> bool {
    match (self, other) {
      (Self::Present(a), Optional::Present(b)) => absorb_panic(|| comparator(a, b)).unwrap_or(false),
      (Self::Absent, Optional::Absent) => true,
      _ => false,
    }
  }
}


#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn satisfies() {
    assert!(Optional::present("foo").satisfies(|v| *v == "foo"));
    assert!(!Optional::present("foo").satisfies(|v| *v == "bar"));
    assert!(!Optional::present("foo").satisfies(|_| panic!("foo")));
  }

  #[test]
  fn satisfies_never_calls_predicate_when_absent() {
    let calls = Cell::new(0);
    assert!(!Optional::<&str>::absent().satisfies(|_| {
      calls.set(calls.get() + 1);
      true
    }));
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn map_present() {
    assert_eq!(Optional::present("foo").map(|v| v.to_uppercase()), Optional::present(String::from("FOO")));
  }

  #[test]
  fn map_absent_never_calls_mapper() {
    let calls = Cell::new(0);
    let mapped = Optional::<&str>::absent().map(|v| {
      calls.set(calls.get() + 1);
      v
    });
    assert!(mapped.is_absent());
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn map_absorbs_panic() {
    assert!(Optional::present("foo").map(|_| -> i32 { panic!("foo") }).is_absent());
    assert!(Optional::present("foo").map(|_| -> i32 { std::panic::panic_any("foo") }).is_absent());
  }

  #[test]
  fn map_nullable_demotes_none() {
    assert_eq!(Optional::present("foo").map_nullable(|v| Some(v.len())), Optional::present(3));
    assert!(Optional::present("foo").map_nullable(|v| if v == "foo" { None } else { Some(v) }).is_absent());
    assert!(Optional::present("foo").map_nullable(|_| -> Option<i32> { panic!("foo") }).is_absent());
  }

  #[test]
  fn filter() {
    assert_eq!(Optional::present(1).filter(|n| *n > 0), Optional::present(1));
    assert!(Optional::present(1).filter(|n| *n < 0).is_absent());
    assert!(Optional::present(1).filter(|_| panic!("foo")).is_absent());
  }

  #[test]
  fn filter_absent_never_calls_predicate() {
    let calls = Cell::new(0);
    let filtered = Optional::<i32>::absent().filter(|_| {
      calls.set(calls.get() + 1);
      true
    });
    assert!(filtered.is_absent());
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn flat_map() {
    assert_eq!(
      Optional::present("a").flat_map(|v| Optional::from_nullable(Some(format!("{v}b")))),
      Optional::present(String::from("ab"))
    );
    assert!(Optional::present("a").flat_map(|_| Optional::<i32>::absent()).is_absent());
    assert!(Optional::present("a").flat_map(|_| -> Optional<i32> { panic!("foo") }).is_absent());
    assert!(Optional::<&str>::absent().flat_map(|v| Optional::present(v)).is_absent());
  }

  #[test]
  fn reduce() {
    assert_eq!(Optional::present("foo").reduce(String::new(), |acc, v| acc + v), "foo");
    assert_eq!(Optional::<&str>::absent().reduce(String::from("init"), |acc, v| acc + v), "init");
  }

  #[test]
  fn fold_runs_exactly_one_branch() {
    let present_calls = Cell::new(0);
    let absent_calls = Cell::new(0);
    let on_present = |v: &str| {
      present_calls.set(present_calls.get() + 1);
      v.to_uppercase()
    };
    let on_absent = || {
      absent_calls.set(absent_calls.get() + 1);
      String::from("default")
    };
    assert_eq!(Optional::present("foo").fold(on_present, on_absent), "FOO");
    assert_eq!((present_calls.get(), absent_calls.get()), (1, 0));
    assert_eq!(Optional::<&str>::absent().fold(on_present, on_absent), "default");
    assert_eq!((present_calls.get(), absent_calls.get()), (1, 1));
  }

  #[test]
  fn fold_falls_back_when_present_branch_panics() {
    assert_eq!(Optional::present("foo").fold(|_| -> &'static str { panic!("foo") }, || "bar"), "bar");
  }

  #[test]
  #[should_panic(expected = "bar")]
  fn fold_propagates_absent_branch_panic() {
    Optional::<&str>::absent().fold(|v| v, || panic!("bar"));
  }

  #[test]
  #[allow(deprecated)]
  fn match_is_fold() {
    assert_eq!(Optional::present("foo").r#match(|v| v.len(), || 0), 3);
    assert_eq!(Optional::<&str>::absent().r#match(|v| v.len(), || 0), 0);
  }

  #[test]
  fn equals() {
    assert!(Optional::present("foo").equals(&Optional::present("foo")));
    assert!(!Optional::present("foo").equals(&Optional::present("bar")));
    assert!(!Optional::present("foo").equals(&Optional::absent()));
    assert!(!Optional::absent().equals(&Optional::present("foo")));
    assert!(Optional::<&str>::absent().equals(&Optional::absent()));
  }

  #[test]
  fn equals_by_uses_comparator_only_for_two_presents() {
    assert!(Optional::present("foo").equals_by(&Optional::present("bar"), |a, b| a.len() == b.len()));
    assert!(!Optional::present("foo").equals_by(&Optional::present("bar"), |_, _| false));
    assert!(!Optional::present("foo").equals_by(&Optional::<&str>::absent(), |_, _| true));
    assert!(!Optional::present("foo").equals_by(&Optional::present("foo"), |_, _| panic!("foo")));

    let calls = Cell::new(0);
    let equal = Optional::<&str>::absent().equals_by(&Optional::<&str>::absent(), |_, _| {
      calls.set(calls.get() + 1);
      false
    });
    assert!(equal);
    assert_eq!(calls.get(), 0);
  }
}
