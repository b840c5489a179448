//! A value that may be absent, with a combinator algebra that absorbs panicking callbacks.
//!
//! ```
//! use optional_core::Optional;
//!
//! let name = Optional::from_nullable(Some("foo")).map(|s| s.to_uppercase());
//! assert_eq!(name, Optional::present(String::from("FOO")));
//! assert_eq!(Optional::<&str>::absent().fold(|v| v, || "default"), "default");
//! ```

pub mod util;
pub mod app;
pub mod error;

pub mod optional;

pub use error::Error;
pub use optional::Optional;
pub use util::future::OptionalFutureExt;
