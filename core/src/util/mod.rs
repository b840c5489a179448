pub mod panic;
pub mod future;
