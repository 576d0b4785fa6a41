//! On-disk effects of running the binary.

use super::patch_command;
use claude_config_patcher::constants::DEFAULT_ALLOWED_TOOLS;
use claude_config_patcher::test_utils::ConfigFixture;
use serde_json::json;

#[test]
fn test_empty_document_scenario() {
    let fixture = ConfigFixture::with_content("{}").unwrap();

    patch_command(&fixture).arg("/repo").assert().success();

    let document = fixture.read_json().unwrap();
    assert_eq!(
        document,
        json!({
            "projects": {
                "/repo": {
                    "allowedTools": DEFAULT_ALLOWED_TOOLS,
                    "enableAllProjectMcpServers": true,
                    "enabledMcpjsonServers": ["local_server"],
                    "mcpServers": {
                        "local_server": {
                            "type": "stdio",
                            "command": ".mcp.json",
                            "args": [],
                            "env": {}
                        }
                    }
                }
            }
        })
    );
}

#[test]
fn test_existing_read_tool_stays_first() {
    let fixture =
        ConfigFixture::with_json(&json!({"projects": {"/repo": {"allowedTools": ["Read"]}}}))
            .unwrap();

    patch_command(&fixture).arg("/repo").assert().success();

    let document = fixture.read_json().unwrap();
    let tools = document["projects"]["/repo"]["allowedTools"].as_array().unwrap();
    assert_eq!(tools.len(), 15);
    assert_eq!(tools[0], json!("Read"));
    let rest: Vec<_> = DEFAULT_ALLOWED_TOOLS[1..].iter().map(|tool| json!(tool)).collect();
    assert_eq!(&tools[1..], rest.as_slice());
}

#[test]
fn test_second_run_leaves_file_byte_identical() {
    let fixture = ConfigFixture::with_json(&json!({
        "numStartups": 4,
        "projects": {"/elsewhere": {"allowedTools": ["Bash"]}},
        "userID": "abc"
    }))
    .unwrap();

    patch_command(&fixture).args(["/repo", "docs_server"]).assert().success();
    let first = fixture.read_raw().unwrap();
    patch_command(&fixture).args(["/repo", "docs_server"]).assert().success();
    let second = fixture.read_raw().unwrap();

    assert_eq!(first, second);
    let document = fixture.read_json().unwrap();
    assert_eq!(document["projects"]["/elsewhere"], json!({"allowedTools": ["Bash"]}));
    assert_eq!(document["projects"]["/repo"]["enabledMcpjsonServers"], json!(["docs_server"]));
    let keys: Vec<_> = document.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["numStartups", "projects", "userID"]);
}

#[test]
fn test_relative_project_path_resolved_against_working_directory() {
    let fixture = ConfigFixture::with_content("{}").unwrap();
    let project_dir = fixture.dir().join("work").join("repo");
    std::fs::create_dir_all(&project_dir).unwrap();

    patch_command(&fixture).current_dir(&project_dir).arg(".").assert().success();

    let document = fixture.read_json().unwrap();
    let projects = document["projects"].as_object().unwrap();
    assert_eq!(projects.len(), 1);
    let key = projects.keys().next().unwrap();
    assert!(std::path::Path::new(key).is_absolute());
    assert!(key.ends_with("repo"));
}

#[test]
fn test_nonexistent_project_directory_is_accepted() {
    let fixture = ConfigFixture::with_content("{}").unwrap();
    let missing = fixture.dir().join("not-created-yet");

    patch_command(&fixture).arg(&missing).assert().success();

    let document = fixture.read_json().unwrap();
    let key = missing.to_string_lossy().into_owned();
    assert_eq!(document["projects"][key.as_str()]["enableAllProjectMcpServers"], json!(true));
    assert!(!missing.exists());
}
