use std::time::Duration;
use log::{debug, trace, error};

/// Transport for the Hugging Face Inference API
pub struct HfTransport
{   endpoint: String
  , api_key: String
  , http_client: reqwest::Client
}

impl HfTransport
{   /// Build a transport for an endpoint and credential.
    /// The call is unbounded unless the config opts into a
    /// timeout.
    pub fn new(
      config: &crate::config::EndpointConfig
    , api_key: String
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating HfTransport for {}", config.model);

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   debug!("Applying {}s request timeout", secs);
            builder = builder
              .timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()
          .map_err(|e| {
            error!("Failed to build HTTP client: {}", e);
            crate::error::Error::ConnectionFailed(
              e.to_string()
            )
          })?;

        Ok(HfTransport
        {   endpoint: config.url()
          , api_key
          , http_client
        })
    }
}

impl crate::providers::Transport for HfTransport
{   async fn send(
      &self
    , payload: &crate::providers::GenerateRequest
    ) -> crate::EndpointOutcome
    {   trace!("POST {}", self.endpoint);

        let response = match self.http_client
          .post(&self.endpoint)
          .header(
            "Authorization",
            format!("Bearer {}", self.api_key)
          )
          .header("Content-Type", "application/json")
          .json(payload)
          .send()
          .await
        {   Ok(response) => response
          , Err(e) => {
              error!("Transport failure: {}", e);
              return crate::EndpointOutcome::TransportFailure(
                e.to_string()
              );
            }
        };

        let status = response.status();
        trace!("Endpoint response status: {}", status);

        let body = response.text().await
          .unwrap_or_else(|_|
            "Unknown error".to_string()
          );

        if status.is_success()
        {   crate::EndpointOutcome::Success(body)
        } else
        {   error!("Endpoint error {}: {}", status, body);
            crate::EndpointOutcome::HttpFailure
            {   status: status.as_u16()
              , body
            }
        }
    }
}
