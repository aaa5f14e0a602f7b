//! Route templates for every operation the console issues.
//!
//! Each constructor returns an [`Endpoint`]: the primary request plus, where
//! the service is known to diverge, the alternate convention to fall back to.
//! The attach/detach agent-id convention (query parameter vs path parameter)
//! differs between deployments, so which form is primary is configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Request, Upload};

/// Which convention carries the agent id on attach/detach calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachStyle {
    /// `POST /v1/sources/{id}/attach?agent_id={agent}` first.
    Query,
    /// `POST /v1/sources/{id}/attach/{agent}` first.
    Path,
}

impl Default for AttachStyle {
    fn default() -> Self {
        AttachStyle::Query
    }
}

/// A primary route and its optional fallback convention.
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub primary: Request,
    pub fallback: Option<Request>,
}

impl Endpoint {
    fn single(primary: Request) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    fn with_fallback(primary: Request, fallback: Request) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
        }
    }
}

// Agents

pub fn list_agents() -> Endpoint {
    Endpoint::single(Request::get("/v1/agents/"))
}

pub fn get_agent(agent_id: &str) -> Endpoint {
    Endpoint::single(Request::get(format!("/v1/agents/{}", agent_id)))
}

pub fn create_agent(payload: Value) -> Endpoint {
    Endpoint::single(Request::post("/v1/agents/").with_body(payload))
}

pub fn update_agent(agent_id: &str, payload: Value) -> Endpoint {
    Endpoint::single(Request::post(format!("/v1/agents/{}", agent_id)).with_body(payload))
}

pub fn delete_agent(agent_id: &str) -> Endpoint {
    Endpoint::single(Request::delete(format!("/v1/agents/{}", agent_id)))
}

pub fn agent_tools(agent_id: &str) -> Endpoint {
    Endpoint::single(Request::get(format!("/v1/agents/{}/tools", agent_id)))
}

pub fn agent_sources(agent_id: &str) -> Endpoint {
    Endpoint::single(Request::get(format!("/v1/agents/{}/sources", agent_id)))
}

pub fn agent_messages(agent_id: &str, limit: usize) -> Endpoint {
    Endpoint::single(
        Request::get(format!("/v1/agents/{}/messages", agent_id))
            .with_query("limit", limit.to_string()),
    )
}

/// Core memory update. Newer servers expose a dedicated memory endpoint;
/// older ones only accept the block map through a whole-agent update.
pub fn update_agent_memory(agent_id: &str, memory: Value) -> Endpoint {
    Endpoint::with_fallback(
        Request::post(format!("/v1/agents/{}/memory", agent_id)).with_body(memory.clone()),
        Request::post(format!("/v1/agents/{}", agent_id))
            .with_body(serde_json::json!({ "memory": memory })),
    )
}

// Archival memory

pub fn list_archival(agent_id: &str) -> Endpoint {
    Endpoint::with_fallback(
        Request::get(format!("/v1/agents/{}/archival", agent_id)),
        Request::get(format!("/v1/agents/{}/archival_memory", agent_id)),
    )
}

pub fn insert_archival(agent_id: &str, text: &str) -> Endpoint {
    let body = serde_json::json!({ "text": text });
    Endpoint::with_fallback(
        Request::post(format!("/v1/agents/{}/archival", agent_id)).with_body(body.clone()),
        Request::post(format!("/v1/agents/{}/archival_memory", agent_id)).with_body(body),
    )
}

pub fn delete_archival(agent_id: &str, passage_id: &str) -> Endpoint {
    Endpoint::with_fallback(
        Request::delete(format!("/v1/agents/{}/archival/{}", agent_id, passage_id)),
        Request::delete(format!(
            "/v1/agents/{}/archival_memory/{}",
            agent_id, passage_id
        )),
    )
}

// Sources and files

pub fn list_sources() -> Endpoint {
    Endpoint::single(Request::get("/v1/sources/"))
}

pub fn get_source(source_id: &str) -> Endpoint {
    Endpoint::single(Request::get(format!("/v1/sources/{}", source_id)))
}

pub fn create_source(name: &str) -> Endpoint {
    Endpoint::single(Request::post("/v1/sources/").with_body(serde_json::json!({ "name": name })))
}

pub fn delete_source(source_id: &str) -> Endpoint {
    Endpoint::single(Request::delete(format!("/v1/sources/{}", source_id)))
}

pub fn attach_source(style: AttachStyle, source_id: &str, agent_id: &str) -> Endpoint {
    relationship(style, "attach", source_id, agent_id)
}

pub fn detach_source(style: AttachStyle, source_id: &str, agent_id: &str) -> Endpoint {
    relationship(style, "detach", source_id, agent_id)
}

fn relationship(style: AttachStyle, verb: &str, source_id: &str, agent_id: &str) -> Endpoint {
    let query_form = Request::post(format!("/v1/sources/{}/{}", source_id, verb))
        .with_query("agent_id", agent_id);
    let path_form = Request::post(format!("/v1/sources/{}/{}/{}", source_id, verb, agent_id));
    match style {
        AttachStyle::Query => Endpoint::with_fallback(query_form, path_form),
        AttachStyle::Path => Endpoint::with_fallback(path_form, query_form),
    }
}

pub fn upload_file(source_id: &str, upload: Upload) -> Endpoint {
    Endpoint::single(Request::post(format!("/v1/sources/{}/upload", source_id)).with_upload(upload))
}

pub fn list_files(source_id: &str) -> Endpoint {
    Endpoint::single(Request::get(format!("/v1/sources/{}/files", source_id)))
}

pub fn delete_file(source_id: &str, file_id: &str) -> Endpoint {
    Endpoint::single(Request::delete(format!("/v1/sources/{}/{}", source_id, file_id)))
}

// Model catalog

pub fn list_embedding_models() -> Endpoint {
    Endpoint::single(Request::get("/v1/models/embedding"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[test]
    fn attach_query_style_puts_agent_id_in_query() {
        let endpoint = attach_source(AttachStyle::Query, "s1", "a1");
        assert_eq!(endpoint.primary.path, "/v1/sources/s1/attach");
        assert_eq!(
            endpoint.primary.query,
            vec![("agent_id".to_string(), "a1".to_string())]
        );
        let fallback = endpoint.fallback.unwrap();
        assert_eq!(fallback.path, "/v1/sources/s1/attach/a1");
        assert!(fallback.query.is_empty());
    }

    #[test]
    fn attach_path_style_flips_the_conventions() {
        let endpoint = attach_source(AttachStyle::Path, "s1", "a1");
        assert_eq!(endpoint.primary.path, "/v1/sources/s1/attach/a1");
        assert_eq!(endpoint.fallback.unwrap().path, "/v1/sources/s1/attach");
    }

    #[test]
    fn archival_routes_carry_the_legacy_fallback() {
        let endpoint = delete_archival("a1", "passage-9");
        assert_eq!(endpoint.primary.path, "/v1/agents/a1/archival/passage-9");
        assert_eq!(
            endpoint.fallback.unwrap().path,
            "/v1/agents/a1/archival_memory/passage-9"
        );
    }

    #[test]
    fn message_listing_is_bounded() {
        let endpoint = agent_messages("a1", 50);
        assert_eq!(endpoint.primary.method, Method::Get);
        assert_eq!(
            endpoint.primary.query,
            vec![("limit".to_string(), "50".to_string())]
        );
    }
}
