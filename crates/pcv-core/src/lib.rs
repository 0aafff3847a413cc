pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{PcvError, Result};
pub use tolerance::Tolerance;
