//! Per-resource-kind read/write operations over the transport unifier.
//!
//! Each repository owns the mapping from its resource kind to route
//! templates and payload schemas, and holds the client-side guards the
//! service itself does not enforce (duplicate attach, phantom deletes).

pub mod agents;
pub mod archival;
pub mod catalog;
pub mod sources;

pub use agents::{AgentRepo, CreateAgentRequest, ToolChange};
pub use archival::ArchivalRepo;
pub use catalog::ModelCatalog;
pub use sources::SourceRepo;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConsoleError, FailureKind};

/// Decode a normalized transport result into a typed record.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, ConsoleError> {
    serde_json::from_value(value).map_err(|e| ConsoleError::Transport {
        kind: FailureKind::ServerError,
        status: None,
        message: format!("unexpected {} payload: {}", context, e),
    })
}

/// Decode a listing. The service sometimes returns a bare array and
/// sometimes wraps it in an object keyed by the collection name.
pub(crate) fn decode_list<T: DeserializeOwned>(
    value: Value,
    key: &str,
    context: &str,
) -> Result<Vec<T>, ConsoleError> {
    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove(key) {
            Some(items @ Value::Array(_)) => items,
            _ => {
                return Err(ConsoleError::Transport {
                    kind: FailureKind::ServerError,
                    status: None,
                    message: format!("unexpected {} listing shape", context),
                })
            }
        },
        Value::Null => Value::Array(Vec::new()),
        _ => {
            return Err(ConsoleError::Transport {
                kind: FailureKind::ServerError,
                status: None,
                message: format!("unexpected {} listing shape", context),
            })
        }
    };
    decode(items, context)
}
