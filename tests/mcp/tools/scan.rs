use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use transl8::mcp::{Transl8McpServer, types::ScanMissingParams};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json};

#[tokio::test]
async fn test_scan_missing() {
    let fixture = McpTestFixture::with_translations(json!({"nav": {"home": ["Home"]}})).unwrap();
    fixture
        .write_file(
            "src/app.ts",
            "t('nav.home');\nconst a = t('nav.about');\n",
        )
        .unwrap();
    fixture
        .write_file("src/pages/index.vue", "{{ t(\"page.title\") }}")
        .unwrap();
    let server = Transl8McpServer::new();

    let params = Parameters(ScanMissingParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.scan_missing(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["totalFileCount"], 2);
    assert_eq!(json_result["filesChecked"], 2);
    assert_eq!(
        json_result["items"][0],
        json!({"key": "nav.about", "filePath": "src/app.ts", "line": 2, "col": 14})
    );
    assert_eq!(json_result["items"][1]["key"], "page.title");
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_missing_pagination() {
    let fixture = McpTestFixture::with_translations(json!({})).unwrap();
    fixture
        .write_file("src/app.ts", "t('a'); t('b'); t('c');")
        .unwrap();
    let server = Transl8McpServer::new();

    let params = Parameters(ScanMissingParams {
        project_root_path: fixture.root(),
        limit: Some(2),
        offset: Some(1),
    });

    let result = server.scan_missing(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(
        json_result["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["key"].as_str().unwrap())
            .collect::<Vec<_>>(),
        vec!["b", "c"]
    );
    assert_pagination(&json_result, 1, 2, false);
}
