use tokio::sync::mpsc;
use log::{debug, trace, error, info};
use crate::AssistFoot;
use crate::providers::Transport;

/// Backend state for one assist session: the transport, the
/// fixed generation parameters, and the per-prompt reply
/// cache. The cache lives and dies with this state, so its
/// process-scoped lifetime is explicit.
pub struct AssistBackendState<T: Transport>
{   pub config: crate::config::EndpointConfig
  , pub parameters: crate::providers::GenerationParameters
  , pub cache: crate::cache::ResultCache
  , pub transport: T
}

impl<T: Transport> AssistBackendState<T>
{   /// Create a new backend state around a transport
    pub fn new(
      config: crate::config::EndpointConfig
    , transport: T
    ) -> Self
    {   debug!("Initializing AssistBackendState");
        AssistBackendState
        {   config
          , parameters:
              crate::providers::GenerationParameters::default()
          , cache: crate::cache::ResultCache::new()
          , transport
        }
    }

    /// Run one assist call end to end: validate, build the
    /// prompt, consult the cache, hit the endpoint on a miss,
    /// then memoize whatever came out. Every failure comes
    /// back as an Err value; nothing panics.
    pub async fn handle_run_assist(
      &mut self
    , mode: crate::Mode
    , raw_input: &str
    ) -> crate::RunAssistReply
    {   debug!("Handling run_assist for {:?}", mode);

        let request = crate::request::AssistRequest::new(
          mode, raw_input
        )?;

        let prompt = crate::prompt::build(
          &request.mode, &request.input
        );

        if let Some(reply) = self.cache.get(&prompt)
        {   debug!("Returning memoized reply");
            return reply;
        }

        let payload = crate::providers::GenerateRequest
        {   inputs: prompt.clone()
          , parameters: self.parameters.clone()
        };
        trace!("Generate payload: {:?}", payload);

        let outcome = self.transport.send(&payload).await;

        let reply = match outcome
        {   crate::EndpointOutcome::Success(body) => {
              crate::parse::extract(&body)
            }
          , failure => {
              Err(crate::error::classify(
                failure,
                &self.config.model,
                &self.config.url()
              ))
            }
        };

        self.cache.put(prompt, reply.clone());
        reply
    }
}

/// Public API for the studylm backend - owns the task
pub struct AssistBackend
{   hand: crate::AssistHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl AssistBackend
{   /// Create and spawn a backend against the Hugging Face
    /// endpoint. The credential is required up front: without
    /// one, no backend exists and no request is ever accepted.
    pub fn new(
      config: crate::config::EndpointConfig
    , api_key: String
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating AssistBackend for {}", config.model);
        let transport = crate::providers::HfTransport::new(
          &config, api_key
        )?;
        Ok(AssistBackend::with_transport(config, transport))
    }

    /// Create and spawn a backend around any transport.
    /// Returns immediately - spawns background task.
    pub fn with_transport<T>(
      config: crate::config::EndpointConfig
    , transport: T
    ) -> Self
      where T: Transport + Send + 'static
    {   debug!("Creating AssistBackend with task ownership");

        let (run_assist_tx, run_assist_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::AssistHand
        {   run_assist_tx: run_assist_tx.clone()
          , kill_process_tx: kill_process_tx.clone()
        };

        let foot = crate::AssistFoot
        {   run_assist_rx
          , kill_process_rx
        };

        let state = AssistBackendState::new(config, transport);

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, state).await
        });

        AssistBackend
        {   hand
          , _task_handle
        }
    }

    /// Queue an assist call - returns almost immediately
    pub async fn run_assist(
      &self
    , mode: crate::Mode
    , input: String
    ) -> Result<
        mpsc::UnboundedReceiver<crate::RunAssistReply>,
        crate::error::Error
      >
    {   debug!("run_assist queuing {:?}", mode);
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::RunAssistArgs
        {   mode
          , input
          , reply: reply_tx
        };

        self.hand.run_assist_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Unknown(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Run one assist call and wait for its reply.
    /// This is the whole surface a presentation layer needs.
    pub async fn assist(
      &self
    , mode: crate::Mode
    , input: &str
    ) -> crate::RunAssistReply
    {   let mut reply_rx = self
          .run_assist(mode, input.to_string())
          .await?;

        match reply_rx.recv().await
        {   Some(reply) => reply
          , None => {
              error!("Backend dropped the reply channel");
              Err(crate::error::Error::Unknown(
                "Backend disconnected".to_string()
              ))
            }
        }
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down AssistBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Unknown(
              "Backend already shutdown".to_string()
            )
          })?;

        // Wait for shutdown confirmation
        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend shutdown not confirmed");
            Err(crate::error::Error::Unknown(
              "Backend shutdown not confirmed".to_string()
            ))
        }
    }
}

/// Main backend event loop
///
/// Design: commands are handled one at a time. Serializing
/// assist calls through the loop keeps the cache's
/// check-then-insert sequence atomic, so a distinct prompt
/// triggers at most one outbound call per process.
async fn run_backend_loop<T>(
  foot: crate::AssistFoot
, mut state: AssistBackendState<T>
)
  where T: Transport + Send + 'static
{   debug!("Starting AssistBackend event loop");
    let AssistFoot
    {   mut run_assist_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = run_assist_rx.recv() => {
          debug!("Received RunAssist for {:?}", cmd.mode);
          let reply = state
            .handle_run_assist(cmd.mode, &cmd.input)
            .await;
          let _ = cmd.reply.send(reply);
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("AssistBackend shutting down");
          break;
        }
      }
    }
}
