use std::io;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable read for the console filter when none is set on the builder.
pub const CONSOLE_LOG_ENV: &str = "OPTIONAL_LOG";

#[derive(Default)]
pub struct AppTracingBuilder {
  console_filter: Option<EnvFilter>,
  with_ansi: Option<bool>,
}
impl AppTracingBuilder {
  pub fn with_console_filter(mut self, console_filter: EnvFilter) -> Self {
    self.console_filter = Some(console_filter);
    self
  }
  pub fn with_ansi(mut self, with_ansi: bool) -> Self {
    self.with_ansi = Some(with_ansi);
    self
  }

  fn console_filter(&mut self) -> EnvFilter {
    self.console_filter.take().unwrap_or_else(|| EnvFilter::try_from_env(CONSOLE_LOG_ENV).unwrap_or_default())
  }

  /// Installs the subscriber as the global default.
  ///
  /// Returns `None` when a global default was already installed, for example by an earlier test.
  pub fn try_init(mut self) -> Option<AppTracing> {
    let console_filter = self.console_filter();
    let layered = tracing_subscriber::registry().with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(self.with_ansi.unwrap_or(true))
        .with_filter(console_filter)
    );
    match layered.try_init() {
      Ok(()) => Some(AppTracing { _private: () }),
      Err(cause) => {
        tracing::warn!(%cause, "Cannot install tracing subscriber");
        None
      }
    }
  }
}

/// Proof that [`AppTracingBuilder::try_init`] installed the global subscriber.
pub struct AppTracing {
  _private: (),
}


#[cfg(test)]
mod tests {
  use crate::optional::Optional;

  use super::*;

  #[test]
  fn installs_once_and_logs_absorbed_panics() {
    let first = AppTracingBuilder::default()
      .with_console_filter(EnvFilter::new("optional_core=debug"))
      .with_ansi(false)
      .try_init();
    let second = AppTracingBuilder::default().try_init();
    assert!(first.is_some());
    assert!(second.is_none());
    assert!(Optional::present(1).map(|_| -> i32 { panic!("logged") }).is_absent());
  }
}
