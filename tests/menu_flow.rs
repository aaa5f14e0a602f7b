mod support;

use serde_json::json;

use agentops::tooling::flows::{self, FlowContext};
use agentops::transport::{AttachStyle, Method};
use support::{ScriptedPrompter, StubTransport};

fn context(transport: &StubTransport) -> FlowContext<'_, StubTransport> {
    FlowContext {
        transport,
        attach_style: AttachStyle::Query,
        message_limit: 50,
    }
}

#[test]
fn declined_confirmation_issues_zero_mutating_calls() {
    let transport = StubTransport::new().on(
        Method::Get,
        "/v1/sources/",
        json!([{ "id": "s1", "name": "Docs" }]),
    );

    // Choose "Delete source", pick the only source, decline, then exit.
    let mut prompter = ScriptedPrompter::new(&["3", "1", "0"], &[false]);
    flows::sources::run(&context(&transport), &mut prompter).unwrap();

    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn confirmed_delete_issues_exactly_one_mutation() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/agents/", json!([{ "id": "a1", "name": "Bot" }]))
        .on(Method::Delete, "/v1/agents/a1", json!(null));

    // Choose "Delete agent", pick the agent, confirm, then exit.
    let mut prompter = ScriptedPrompter::new(&["6", "1", "0"], &[true]);
    flows::agents::run(&context(&transport), &mut prompter).unwrap();

    assert_eq!(transport.mutation_count(), 1);
    assert_eq!(transport.calls_to("/v1/agents/a1"), 1);
}

#[test]
fn empty_listing_short_circuits_without_prompting_for_selection() {
    let transport = StubTransport::new().on(Method::Get, "/v1/sources/", json!([]));

    // "Delete source" over an empty listing needs no selection input.
    let mut prompter = ScriptedPrompter::new(&["3", "0"], &[]);
    flows::sources::run(&context(&transport), &mut prompter).unwrap();

    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn failed_action_keeps_the_menu_loop_alive() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/sources/", json!([{ "id": "s1", "name": "Docs" }]))
        .fail(Method::Get, "/v1/agents/", 500, "unavailable");

    // "Attach source to agent" fails while listing agents; the session
    // continues and exit still works.
    let mut prompter = ScriptedPrompter::new(&["5", "1", "0"], &[]);
    flows::sources::run(&context(&transport), &mut prompter).unwrap();

    assert_eq!(transport.mutation_count(), 0);
}

#[test]
fn message_view_survives_malformed_embedded_payloads() {
    let transport = StubTransport::new()
        .on(Method::Get, "/v1/agents/", json!([{ "id": "a1", "name": "Bot" }]))
        .on(
            Method::Get,
            "/v1/agents/a1/messages",
            json!([
                { "role": "user", "text": "{broken json" },
                { "role": "tool", "text": "also not json" },
                { "role": "internal_monologue", "text": "???" }
            ]),
        );

    let mut prompter = ScriptedPrompter::new(&["1"], &[]);
    flows::messages::run(&context(&transport), &mut prompter).unwrap();
}
