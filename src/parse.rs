//! Extraction of the model's answer from a raw success body

use serde::Deserialize;
use log::{debug, error};

/// One record of the endpoint's success payload
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedRecord
{   pub generated_text: String
}

/// Pull the model's continuation out of a raw success body.
///
/// The body must deserialize to a non-empty JSON array of
/// records carrying "generated_text"; any other shape
/// degrades to Error::Unknown before a single field is
/// touched. On a valid shape the first record's text is split
/// on the last closing chat marker when present (the model
/// usually echoes the instruction back); when the marker is
/// absent the whole text is returned trimmed. The fallback
/// order is fixed: marker split first, whole-text trim second.
pub fn extract(raw_body: &str) -> crate::RunAssistReply
{   let records: Vec<GeneratedRecord>
      = match serde_json::from_str(raw_body)
        {   Ok(records) => records
          , Err(e) => {
              error!("Unexpected response shape: {}", e);
              return Err(crate::error::Error::Unknown(
                format!("unexpected response format: {}", e)
              ));
            }
        };

    let first = match records.first()
    {   Some(record) => record
      , None => {
          error!("Response array was empty");
          return Err(crate::error::Error::Unknown(
            "unexpected response format: empty array"
              .to_string()
          ));
        }
    };

    let text = &first.generated_text;
    if text.contains(crate::prompt::INST_CLOSE)
    {   debug!("Splitting on closing marker");
        let answer = text
          .split(crate::prompt::INST_CLOSE)
          .last()
          .unwrap_or("")
          .trim();
        Ok(answer.to_string())
    } else
    {   debug!("No closing marker; trimming whole text");
        Ok(text.trim().to_string())
    }
}
