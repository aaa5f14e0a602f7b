//! Archival memory passages: insert and delete only, no in-place edit.

use tracing::info;

use crate::error::ConsoleError;
use crate::model::Passage;
use crate::repo::{decode, decode_list};
use crate::transport::{invoke, routes, Transport};

pub struct ArchivalRepo<'t, T: Transport> {
    transport: &'t T,
}

impl<'t, T: Transport> ArchivalRepo<'t, T> {
    pub fn new(transport: &'t T) -> Self {
        Self { transport }
    }

    pub fn list(&self, agent_id: &str) -> Result<Vec<Passage>, ConsoleError> {
        decode_list(
            invoke(self.transport, routes::list_archival(agent_id))?,
            "archival_memory",
            "passage",
        )
    }

    pub fn insert(&self, agent_id: &str, text: &str) -> Result<Passage, ConsoleError> {
        let value = invoke(self.transport, routes::insert_archival(agent_id, text))?;
        // Some servers answer with the created passage, others with a
        // one-element list of passages.
        let passage: Passage = match value {
            serde_json::Value::Array(mut items) if !items.is_empty() => {
                decode(items.remove(0), "passage")?
            }
            other => decode(other, "passage")?,
        };
        info!(%agent_id, passage_id = %passage.id, "passage inserted");
        Ok(passage)
    }

    /// Delete a passage by id. Deleting an identifier absent from the
    /// current listing is an operator error, not a transport failure, so the
    /// listing is checked before any delete is issued.
    pub fn delete(&self, agent_id: &str, passage_id: &str) -> Result<(), ConsoleError> {
        let known = self.list(agent_id)?;
        if !known.iter().any(|p| p.id == passage_id) {
            return Err(ConsoleError::NotFound(format!(
                "passage {} is not in agent {}'s archival memory",
                passage_id, agent_id
            )));
        }
        invoke(self.transport, routes::delete_archival(agent_id, passage_id))?;
        info!(%agent_id, %passage_id, "passage deleted");
        Ok(())
    }
}
