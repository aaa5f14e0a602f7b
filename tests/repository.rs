mod support;

use serde_json::json;

use agentops::error::ConsoleError;
use agentops::repo::{AgentRepo, ArchivalRepo, ModelCatalog, SourceRepo, ToolChange};
use agentops::transport::{AttachStyle, Method};
use support::StubTransport;

fn agent_json(id: &str, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "tools": ["send_message"] })
}

#[test]
fn list_then_get_returns_matching_identifiers() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/agents/", json!([agent_json("a1", "Bot")]))
        .on(Method::Get, "/v1/agents/a1", agent_json("a1", "Bot"));

    let repo = AgentRepo::new(&transport);
    let listed = repo.list().unwrap();
    assert_eq!(listed.len(), 1);
    let fetched = repo.get(&listed[0].id).unwrap();
    assert_eq!(fetched.id, listed[0].id);
}

#[test]
fn source_list_then_get_returns_matching_identifiers() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/sources/", json!([{ "id": "s1", "name": "Docs" }]))
        .on(Method::Get, "/v1/sources/s1", json!({ "id": "s1", "name": "Docs" }));

    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    let listed = repo.list().unwrap();
    let fetched = repo.get(&listed[0].id).unwrap();
    assert_eq!(fetched.id, "s1");
}

#[test]
fn attach_twice_yields_precondition_error_and_one_mutation() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/agents/a1/sources", json!([]))
        .on(Method::Post, "/v1/sources/s1/attach", json!(null));

    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    repo.attach("s1", "a1").unwrap();
    assert_eq!(transport.mutation_count(), 1);

    // The server now reports the pair as attached.
    transport.set(
        Method::Get,
        "/v1/agents/a1/sources",
        Ok(json!([{ "id": "s1", "name": "Docs" }])),
    );
    let err = repo.attach("s1", "a1").unwrap_err();
    assert!(matches!(err, ConsoleError::Precondition(_)));
    assert_eq!(transport.mutation_count(), 1);
}

#[test]
fn detach_when_not_attached_yields_precondition_error() {
    let transport = StubTransport::new().on(Method::Get, "/v1/agents/a1/sources", json!([]));

    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    let err = repo.detach("s1", "a1").unwrap_err();
    assert!(matches!(err, ConsoleError::Precondition(_)));
    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn attach_falls_back_to_path_convention_on_endpoint_mismatch() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/agents/a1/sources", json!([]))
        .fail(Method::Post, "/v1/sources/s1/attach", 405, "method not allowed")
        .on(Method::Post, "/v1/sources/s1/attach/a1", json!(null));

    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    repo.attach("s1", "a1").unwrap();
    assert_eq!(transport.calls_to("/v1/sources/s1/attach"), 1);
    assert_eq!(transport.calls_to("/v1/sources/s1/attach/a1"), 1);
}

#[test]
fn attach_does_not_fall_back_on_server_error() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/agents/a1/sources", json!([]))
        .fail(Method::Post, "/v1/sources/s1/attach", 500, "boom");

    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    let err = repo.attach("s1", "a1").unwrap_err();
    assert!(matches!(err, ConsoleError::Transport { status: Some(500), .. }));
    assert_eq!(transport.calls_to("/v1/sources/s1/attach/a1"), 0);
}

#[test]
fn tool_add_is_idempotent() {
    let transport = StubTransport::new().on(Method::Get, "/v1/agents/a1", agent_json("a1", "Bot"));

    let repo = AgentRepo::new(&transport);
    let change = repo.add_tool("a1", "send_message").unwrap();
    assert_eq!(change, ToolChange::AlreadyPresent);
    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn tool_add_replaces_the_whole_list() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/agents/a1", agent_json("a1", "Bot"))
        .on(Method::Post, "/v1/agents/a1", json!(null));

    let repo = AgentRepo::new(&transport);
    let change = repo.add_tool("a1", "core_memory_append").unwrap();
    assert_eq!(
        change,
        ToolChange::Updated(vec![
            "send_message".to_string(),
            "core_memory_append".to_string()
        ])
    );

    let update = transport
        .calls()
        .into_iter()
        .find(|c| c.method == Method::Post)
        .unwrap();
    assert_eq!(
        update.body.unwrap(),
        json!({ "tools": ["send_message", "core_memory_append"] })
    );
}

#[test]
fn tool_remove_of_absent_tool_is_a_distinguishable_noop() {
    let transport = StubTransport::new().on(Method::Get, "/v1/agents/a1", agent_json("a1", "Bot"));

    let repo = AgentRepo::new(&transport);
    let change = repo.remove_tool("a1", "conversation_search").unwrap();
    assert_eq!(change, ToolChange::NotPresent);
    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn archival_delete_verifies_the_listing_first() {
    let transport = StubTransport::new().on(
        Method::Get,
        "/v1/agents/a1/archival",
        json!([{ "id": "passage-1", "text": "remember this" }]),
    );

    let repo = ArchivalRepo::new(&transport);
    let err = repo.delete("a1", "passage-404").unwrap_err();
    assert!(matches!(err, ConsoleError::NotFound(_)));
    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn archival_delete_of_listed_passage_goes_through() {
    let transport = StubTransport::new()
        .on(
            Method::Get,
            "/v1/agents/a1/archival",
            json!([{ "id": "passage-1", "text": "remember this" }]),
        )
        .on(Method::Delete, "/v1/agents/a1/archival/passage-1", json!(null));

    let repo = ArchivalRepo::new(&transport);
    repo.delete("a1", "passage-1").unwrap();
    assert_eq!(transport.mutation_count(), 1);
}

#[test]
fn archival_listing_falls_back_to_legacy_route() {
    let transport = StubTransport::new().on(
        Method::Get,
        "/v1/agents/a1/archival_memory",
        json!([{ "id": "passage-1", "text": "kept" }]),
    );

    let repo = ArchivalRepo::new(&transport);
    let passages = repo.list("a1").unwrap();
    assert_eq!(passages.len(), 1);
    assert_eq!(transport.calls_to("/v1/agents/a1/archival"), 1);
}

#[test]
fn archival_insert_accepts_single_record_or_list_response() {
    let transport = StubTransport::new().on(
        Method::Post,
        "/v1/agents/a1/archival",
        json!([{ "id": "passage-7", "text": "noted" }]),
    );
    let repo = ArchivalRepo::new(&transport);
    assert_eq!(repo.insert("a1", "noted").unwrap().id, "passage-7");

    transport.set(
        Method::Post,
        "/v1/agents/a1/archival",
        Ok(json!({ "id": "passage-8", "text": "noted again" })),
    );
    assert_eq!(repo.insert("a1", "noted again").unwrap().id, "passage-8");
}

#[test]
fn message_listing_unwraps_keyed_objects() {
    let transport = StubTransport::new().on(
        Method::Get,
        "/v1/agents/a1/messages",
        json!({ "messages": [{ "role": "user", "text": "hi" }] }),
    );

    let repo = AgentRepo::new(&transport);
    let messages = repo.messages("a1", 50).unwrap();
    assert_eq!(messages.len(), 1);

    let call = &transport.calls()[0];
    assert_eq!(call.query, vec![("limit".to_string(), "50".to_string())]);
}

#[test]
fn memory_block_update_preserves_the_existing_limit() {
    let transport = StubTransport::new()
        .on(
            Method::Get,
            "/v1/agents/a1",
            json!({
                "id": "a1",
                "name": "Bot",
                "memory": { "memory": {
                    "human": { "label": "human", "value": "old", "limit": 500 }
                }}
            }),
        )
        .on(Method::Post, "/v1/agents/a1/memory", json!(null));

    let repo = AgentRepo::new(&transport);
    repo.update_memory_block("a1", "human", "new value").unwrap();

    let update = transport
        .calls()
        .into_iter()
        .find(|c| c.method == Method::Post)
        .unwrap();
    assert_eq!(
        update.body.unwrap(),
        json!({ "memory": { "human": { "label": "human", "value": "new value", "limit": 500 } } })
    );
}

#[test]
fn file_upload_sends_multipart_and_returns_job() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "contents").unwrap();

    let transport = StubTransport::new().on(
        Method::Post,
        "/v1/sources/s1/upload",
        json!({ "id": "job-1", "status": "created" }),
    );

    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    let job = repo.upload_file("s1", &path).unwrap();
    assert_eq!(job.id.as_deref(), Some("job-1"));

    let call = &transport.calls()[0];
    assert_eq!(call.upload_file_name.as_deref(), Some("notes.txt"));
}

#[test]
fn file_upload_of_missing_path_is_a_validation_error() {
    let transport = StubTransport::new();
    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    let err = repo
        .upload_file("s1", std::path::Path::new("/nonexistent/notes.txt"))
        .unwrap_err();
    assert!(matches!(err, ConsoleError::Validation(_)));
    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn attached_agents_walks_every_agent() {
    let transport = StubTransport::new()
        .on(
            Method::Get,
            "/v1/agents/",
            json!([agent_json("a1", "Bot"), agent_json("a2", "Helper")]),
        )
        .on(Method::Get, "/v1/agents/a1/sources", json!([{ "id": "s1", "name": "Docs" }]))
        .on(Method::Get, "/v1/agents/a2/sources", json!([]));

    let repo = SourceRepo::new(&transport, AttachStyle::Query);
    let attached = repo.attached_agents("s1").unwrap();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].id, "a1");
}

#[test]
fn embedding_model_catalog_lists_configs() {
    let transport = StubTransport::new().on(
        Method::Get,
        "/v1/models/embedding",
        json!([{
            "embedding_endpoint_type": "hugging-face",
            "embedding_endpoint": "https://embeddings.example",
            "embedding_model": "free",
            "embedding_dim": 1024,
            "embedding_chunk_size": 300
        }]),
    );

    let catalog = ModelCatalog::new(&transport);
    let models = catalog.embedding_models().unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].embedding_dim, 1024);
}
