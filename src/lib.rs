pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod prompt;
pub mod parse;
pub mod cache;
pub mod client;
use serde::{Deserialize, Serialize};

/*

studylm: a small client for hosted text-generation endpoints,
built around four study-assistance features. A caller picks a
mode and supplies raw text; the crate templates that into a
Mistral-Instruct prompt, runs one generation request against
the Hugging Face Inference API, extracts the answer from the
raw body, classifies failures into a closed taxonomy, and
memoizes every reply per prompt for the life of the process.

studylm/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and channel API interface
│   ├── error.rs        # Error taxonomy and outcome classification
│   ├── config.rs       # Endpoint configuration and credential loading
│   ├── request.rs      # Validated request type
│   ├── prompt.rs       # Mode templates and chat-marker wrapping
│   ├── parse.rs        # Generated-text extraction
│   ├── cache.rs        # Per-prompt reply memoization
│   ├── client.rs       # Backend actor orchestrating assist calls
│   ├── providers/      # Endpoint transports
│   │   ├── mod.rs      # Transport seam and payload types
│   │   └── huggingface.rs  # Hugging Face Inference API transport
│   └── main.rs         # CLI glue
└── tests/              # Integration tests

*/

/// STUDYLM API INTERFACE:

// ===== RunAssist =====

pub type RunAssistReply = Result<String, crate::error::Error>;
pub type RunAssistReplySender
  = tokio::sync::mpsc::UnboundedSender<RunAssistReply>;

pub struct RunAssistArgs
{   pub mode: Mode
  , pub input: String
  , pub reply: RunAssistReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== AssistHand (sender side) =====

pub struct AssistHand
{   pub run_assist_tx
      : tokio::sync::mpsc::UnboundedSender<RunAssistArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== AssistFoot (receiver side) =====

pub struct AssistFoot
{   pub run_assist_rx
      : tokio::sync::mpsc::UnboundedReceiver<RunAssistArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}

/// STUDYLM STRUCTURES:

/// Enum representing the study-assistance features a caller
/// can select. Chosen once per request; the prompt builder
/// branches on this and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Mode
{   /// Condense a passage into its main points
    Summarize
  , /// Explain a concept in student-level terms
    ExplainConcept
  , /// Generate 5 open-ended exam/essay questions
    ModelQuestions
  , /// Generate a 3 MCQ + 2 true/false quiz
    QuizQuestions
}

impl Mode
{   /// Human-readable feature name.
    /// Presentation only; the core never branches on it.
    pub fn display_name(&self) -> &'static str
    {   match self
        {   Mode::Summarize => "Summarize Text"
          , Mode::ExplainConcept => "Explain Concept"
          , Mode::ModelQuestions => "Generate Model Questions"
          , Mode::QuizQuestions => "Generate Quiz Questions"
        }
    }
}

/// Raw result of one exchange with the generation endpoint,
/// before any parsing or classification has happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointOutcome
{   /// 2xx response; holds the raw body text
    Success(String)
  , /// The endpoint answered with an error status
    HttpFailure
    {   status: u16
      , body: String
    }
  , /// The request never produced an HTTP response
    TransportFailure(String)
}
