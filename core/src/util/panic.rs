use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Runs `f`, returning `None` instead of unwinding when it panics.
///
/// The panic payload is logged at `debug` level and then dropped.
pub fn absorb_panic<R>(f: impl FnOnce() -> R) -> Option<R> {
  match catch_unwind(AssertUnwindSafe(f)) {
    Ok(value) => Some(value),
    Err(payload) => {
      log_absorbed(payload.as_ref());
      None
    }
  }
}

pub(crate) fn log_absorbed(payload: &(dyn Any + Send)) {
  tracing::debug!(cause = payload_message(payload), "absorbed panic in callback");
}

/// Gets the message of a panic payload, if it was created with a string.
pub fn payload_message(payload: &(dyn Any + Send)) -> &str {
  if let Some(message) = payload.downcast_ref::<&'static str>() {
    message
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.as_str()
  } else {
    "<non-string panic payload>"
  }
}


#[cfg(test)]
mod tests {
  use std::panic::panic_any;

  use super::*;

  #[test]
  fn returns_value_when_not_panicking() {
    assert_eq!(absorb_panic(|| 42), Some(42));
  }

  #[test]
  fn absorbs_panic_with_message() {
    assert_eq!(absorb_panic(|| -> i32 { panic!("foo") }), None);
  }

  #[test]
  fn absorbs_panic_with_non_string_payload() {
    assert_eq!(absorb_panic(|| -> i32 { panic_any(7u8) }), None);
  }

  #[test]
  fn payload_message_of_strings() {
    let payload: Box<dyn Any + Send> = Box::new("static");
    assert_eq!(payload_message(payload.as_ref()), "static");
    let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
    assert_eq!(payload_message(payload.as_ref()), "owned");
    let payload: Box<dyn Any + Send> = Box::new(1);
    assert_eq!(payload_message(payload.as_ref()), "<non-string panic payload>");
  }
}
