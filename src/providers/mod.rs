//! Generation endpoint transports

use serde::{Deserialize, Serialize};

pub mod huggingface;

// Re-export for convenience
pub use huggingface::HfTransport;

/// Fixed generation parameters sent with every request.
/// Constant across all requests; never derived from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters
{   pub max_new_tokens: usize
  , pub temperature: f64
  , pub do_sample: bool
  , pub top_p: f64
}

impl Default for GenerationParameters
{   fn default() -> Self
    {   GenerationParameters
        {   max_new_tokens: 512
          , temperature: 0.7
          , do_sample: true
          , top_p: 0.95
        }
    }
}

/// Request payload of the text-generation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest
{   pub inputs: String
  , pub parameters: GenerationParameters
}

/// The one capability the orchestration layer needs from a
/// transport: send a payload, report what came back. The
/// backend is generic over this, so tests can stand in a
/// call-counting double for the real endpoint.
pub trait Transport
{   fn send(
      &self
    , payload: &GenerateRequest
    ) -> impl std::future::Future<
        Output = crate::EndpointOutcome
      > + Send;
}
