//! Validated request type for assist calls

use serde::{Deserialize, Serialize};
use log::debug;

/// A validated (mode, input) pair.
/// Construction is the validation boundary: blank input is
/// rejected here, before any prompt is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistRequest
{   /// The study-assistance feature to run
    pub mode: crate::Mode
  , /// User text, non-empty after trimming
    pub input: String
}

impl AssistRequest
{   /// Validate raw input and build a request.
    /// The input is kept verbatim; trimming is only applied
    /// to decide whether anything is there at all.
    pub fn new(
      mode: crate::Mode
    , raw_input: &str
    ) -> Result<Self, crate::error::Error>
    {   if raw_input.trim().is_empty()
        {   debug!("Rejecting empty input");
            return Err(crate::error::Error::EmptyInput);
        }
        Ok(AssistRequest
        {   mode
          , input: raw_input.to_string()
        })
    }
}
