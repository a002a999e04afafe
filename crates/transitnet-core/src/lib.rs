pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{Cost, Stop, StopId, INFINITY};
