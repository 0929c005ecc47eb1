use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use transl8::mcp::{
    Transl8McpServer,
    types::{EditTranslationParams, LookupKeyParams},
};

use crate::{McpTestFixture, extract_tool_result_json};

fn edit(
    fixture: &McpTestFixture,
    key: &str,
    value: &str,
    context: Option<&str>,
) -> Parameters<EditTranslationParams> {
    Parameters(EditTranslationParams {
        project_root_path: fixture.root(),
        key: key.to_string(),
        value: value.to_string(),
        context: context.map(str::to_string),
    })
}

#[tokio::test]
async fn test_edit_translation_adds_key() {
    let fixture = McpTestFixture::with_translations(json!({"nav": {"home": ["Home"]}})).unwrap();
    let server = Transl8McpServer::new();

    let result = server
        .edit_translation(edit(&fixture, "nav.about", "About", Some("Footer link")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["action"], "added");
    assert_eq!(
        fixture.read_translations().unwrap(),
        json!({"nav": {"home": ["Home"], "about": ["About", "Footer link"]}})
    );
}

#[tokio::test]
async fn test_edit_translation_update_and_unchanged() {
    let fixture = McpTestFixture::with_translations(json!({"a": ["A", "note"]})).unwrap();
    let server = Transl8McpServer::new();

    let result = server
        .edit_translation(edit(&fixture, "a", "A2", Some("")))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["action"], "updated");
    assert_eq!(fixture.read_translations().unwrap(), json!({"a": ["A2"]}));

    let result = server
        .edit_translation(edit(&fixture, "a", "A2", None))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["action"], "unchanged");
}

#[tokio::test]
async fn test_edit_translation_collision_is_reported() {
    let fixture = McpTestFixture::with_translations(json!({"nav": {"home": ["Home"]}})).unwrap();
    let server = Transl8McpServer::new();

    let result = server
        .edit_translation(edit(&fixture, "nav", "Nav", None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert!(json_result.get("action").is_none());
    assert_eq!(
        json_result["error"],
        "Cannot edit \"nav\" because the key \"nav.home\" already exists"
    );
    assert_eq!(
        fixture.read_translations().unwrap(),
        json!({"nav": {"home": ["Home"]}})
    );
}

#[tokio::test]
async fn test_edit_is_visible_to_later_lookups() {
    let fixture = McpTestFixture::with_translations(json!({})).unwrap();
    let server = Transl8McpServer::new();

    let lookup = || {
        Parameters(LookupKeyParams {
            project_root_path: fixture.root(),
            key: "greeting".to_string(),
        })
    };

    let before = server.lookup_key(lookup()).await.unwrap();
    assert_eq!(extract_tool_result_json(&before)["found"], false);

    server
        .edit_translation(edit(&fixture, "greeting", "Hello", None))
        .await
        .unwrap();

    let after = server.lookup_key(lookup()).await.unwrap();
    assert_eq!(extract_tool_result_json(&after)["value"], "Hello");
}
