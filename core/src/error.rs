use std::borrow::Cow;

/// Message used when extracting from an [`Absent`](crate::optional::Optional::Absent) without a caller message.
pub const ABSENT_MESSAGE: &str = "No value in Option";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  #[error("Cannot construct a present value from a null value")]
  NullValue,
  #[error("{message}")]
  Absent { message: Cow<'static, str> },
}
impl Error {
  #[inline]
  pub fn absent() -> Self { Self::Absent { message: Cow::Borrowed(ABSENT_MESSAGE) } }
  #[inline]
  pub fn absent_with(message: impl Into<Cow<'static, str>>) -> Self { Self::Absent { message: message.into() } }

  #[inline]
  pub fn is_null_value(&self) -> bool { matches!(self, Self::NullValue) }
  #[inline]
  pub fn is_absent(&self) -> bool { matches!(self, Self::Absent { .. }) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
