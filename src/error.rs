use std::fmt;
use log::error;

/// Custom error type for studylm operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Input was empty after trimming whitespace
    EmptyInput
  , /// Bearer credential is missing from the environment
    MissingApiKey(String)
  , /// Endpoint does not serve the requested model (404)
    ModelNotFound
    {   model: String
      , endpoint: String
    }
  , /// Credential was rejected (401)
    Unauthorized
  , /// Model is loading or busy (503)
    ServiceBusy(String)
  , /// Any other HTTP error status
    HttpStatus
    {   status: u16
      , body: String
    }
  , /// Could not reach the endpoint at all
    ConnectionFailed(String)
  , /// Parse failures and anything unclassified
    Unknown(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::EmptyInput => {
              write!(f,
                "Empty input: please enter some text or a topic"
              )
            }
          , Error::MissingApiKey(var) => {
              write!(f,
                "Hugging Face API key ({}) not found. \
                 Please set it in the environment",
                var
              )
            }
          , Error::ModelNotFound { model, endpoint } => {
              write!(f,
                "Error 404: model '{}' not found at {}. \
                 Please double-check the model id and its \
                 availability on Hugging Face",
                model, endpoint
              )
            }
          , Error::Unauthorized => {
              write!(f,
                "Error 401: unauthorized. Please check your \
                 Hugging Face API token"
              )
            }
          , Error::ServiceBusy(model) => {
              write!(f,
                "Error 503: service unavailable. The model \
                 '{}' is currently loading or busy. Please \
                 try again in a moment",
                model
              )
            }
          , Error::HttpStatus { status, body } => {
              write!(f, "HTTP error {}: {}", status, body)
            }
          , Error::ConnectionFailed(detail) => {
              write!(f,
                "Connection error: could not connect to the \
                 inference API. Details: {}",
                detail
              )
            }
          , Error::Unknown(detail) => {
              write!(f,
                "An unexpected error occurred: {}", detail
              )
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Unknown(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Unknown(s.to_string())
    }
}

/// Map a raw endpoint outcome onto the error taxonomy.
/// Total over EndpointOutcome: every variant lands somewhere,
/// a stray success included; nothing panics.
pub fn classify(
  outcome: crate::EndpointOutcome
, model: &str
, endpoint: &str
) -> Error
{   match outcome
    {   crate::EndpointOutcome::HttpFailure {
          status: 404, ..
        } => {
          error!("Model not found: {} at {}", model, endpoint);
          Error::ModelNotFound
          {   model: model.to_string()
            , endpoint: endpoint.to_string()
          }
        }
      , crate::EndpointOutcome::HttpFailure {
          status: 401, ..
        } => {
          error!("Unauthorized against {}", endpoint);
          Error::Unauthorized
        }
      , crate::EndpointOutcome::HttpFailure {
          status: 503, ..
        } => {
          error!("Model loading or busy: {}", model);
          Error::ServiceBusy(model.to_string())
        }
      , crate::EndpointOutcome::HttpFailure {
          status, body
        } => {
          error!("HTTP error {}: {}", status, body);
          Error::HttpStatus
          {   status
            , body
          }
        }
      , crate::EndpointOutcome::TransportFailure(detail) => {
          error!("Transport failure: {}", detail);
          Error::ConnectionFailed(detail)
        }
      , crate::EndpointOutcome::Success(_) => {
          error!("Success outcome reached the classifier");
          Error::Unknown(
            "success outcome reached the classifier"
              .to_string()
          )
        }
    }
}
