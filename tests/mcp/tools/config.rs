use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use transl8::mcp::{Transl8McpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_without_file() {
    let fixture = McpTestFixture::new().unwrap();
    let server = Transl8McpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert!(json_result["config"]["translationFilePath"].is_null());
    assert_eq!(json_result["config"]["functionNames"], json!([]));
    assert!(json_result.get("resolved").is_none());
}

#[tokio::test]
async fn test_get_config_resolves_paths() {
    let fixture = McpTestFixture::with_translations(json!({})).unwrap();
    let server = Transl8McpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(
        json_result["config"]["translationFilePath"],
        "./locales/en.json"
    );
    assert_eq!(
        json_result["resolved"]["translationFile"],
        fixture
            .root_path()
            .join("locales")
            .join("en.json")
            .display()
            .to_string()
    );
    assert_eq!(json_result["resolved"]["functionNames"], json!(["t"]));
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".transl8rc.json", "{ broken").unwrap();
    let server = Transl8McpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
