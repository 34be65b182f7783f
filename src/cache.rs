//! Per-prompt reply memoization, valid for the process lifetime

use std::collections::HashMap;
use log::{debug, trace};

/// Memoization store keyed by exact prompt text.
/// No TTL, no size bound, no eviction: a distinct prompt
/// resolves over the network at most once per process.
pub struct ResultCache
{   entries: HashMap<String, crate::RunAssistReply>
}

impl ResultCache
{   pub fn new() -> Self
    {   debug!("Creating ResultCache");
        ResultCache
        {   entries: HashMap::new()
        }
    }

    /// Look up the memoized reply for a prompt
    pub fn get(&self, key: &str)
      -> Option<crate::RunAssistReply>
    {   let hit = self.entries.get(key).cloned();
        trace!(
          "Cache {} for prompt of {} chars",
          if hit.is_some() { "hit" } else { "miss" },
          key.len()
        );
        hit
    }

    /// Memoize the reply for a prompt.
    /// At most one entry per key; a second put overwrites.
    pub fn put(
      &mut self
    , key: String
    , reply: crate::RunAssistReply
    )
    {   debug!("Caching reply for prompt of {} chars", key.len());
        self.entries.insert(key, reply);
    }

    pub fn len(&self) -> usize
    {   self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {   self.entries.is_empty()
    }
}

impl Default for ResultCache
{   fn default() -> Self
    {   ResultCache::new()
    }
}
