use crate::error::Result;

/// Check a configuration before any numeric work.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

