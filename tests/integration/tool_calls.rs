use std::path::PathBuf;

use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
    service::{RoleClient, RunningService},
    ServiceExt,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use cowsay_mcp::server::{
    config::{AuthSection, RenderSection, ServerConfig, ServerSection},
    runtime::CowsayServer,
};

use crate::common::envelope_text;

type ClientHandle = RunningService<RoleClient, ClientInfo>;

fn test_server_config() -> ServerConfig {
    ServerConfig {
        server: ServerSection {
            host: "127.0.0.1".into(),
            port: 8787,
        },
        auth: AuthSection {
            token: Some("integration-token".into()),
        },
        render: RenderSection::default(),
        source_path: PathBuf::from("tests/fixtures/config_valid.toml"),
    }
}

async fn start_session() -> Result<(ClientHandle, JoinHandle<Result<()>>)> {
    let server = CowsayServer::new(test_server_config(), None, "cowsay-integration".into());
    let (server_transport, client_transport) = tokio::io::duplex(4096);
    let server_task = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        Result::<_, anyhow::Error>::Ok(())
    });
    let client = serve_client(ClientInfo::default(), client_transport).await?;
    Ok((client, server_task))
}

async fn call(client: &ClientHandle, name: &'static str, args: Value) -> Result<Value> {
    let response = client
        .call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: Some(args.as_object().expect("object args").clone()),
        })
        .await?;
    Ok(serde_json::to_value(response)?)
}

#[tokio::test]
async fn list_tools_returns_the_extended_catalog() -> Result<()> {
    let (client, server_task) = start_session().await?;

    let listed = client.list_tools(Default::default()).await?;
    let names: Vec<&str> = listed.tools.iter().map(|t| t.name.as_ref()).collect();
    assert_eq!(names, vec!["cowsay", "cowthink", "list_cows", "get_version"]);

    let cowsay = &listed.tools[0];
    let schema = serde_json::to_value(cowsay.input_schema.as_ref())?;
    assert_eq!(schema["required"], json!(["message"]));
    assert_eq!(schema["properties"]["character"]["default"], "default");

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn cowsay_renders_over_the_wire() -> Result<()> {
    let (client, server_task) = start_session().await?;

    let envelope = call(
        &client,
        "cowsay",
        json!({ "message": "moo moo", "character": "tux" }),
    )
    .await?;
    assert_eq!(envelope["isError"], false);
    let text = envelope_text(&envelope);
    assert!(text.contains("moo moo"), "{text}");
    assert!(text.contains(".--."), "tux figure expected: {text}");

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn invalid_arguments_come_back_as_error_envelopes() -> Result<()> {
    let (client, server_task) = start_session().await?;

    let envelope = call(&client, "cowsay", json!({})).await?;
    assert_eq!(envelope["isError"], true);
    assert!(envelope_text(&envelope).contains("Invalid arguments for tool [cowsay]"));

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn unknown_tool_comes_back_as_error_envelope() -> Result<()> {
    let (client, server_task) = start_session().await?;

    let envelope = call(&client, "bogus_tool", json!({})).await?;
    assert_eq!(envelope["isError"], true);
    assert_eq!(envelope_text(&envelope), "Unknown tool: bogus_tool");

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}

#[tokio::test]
async fn list_cows_and_get_version_answer_over_the_wire() -> Result<()> {
    let (client, server_task) = start_session().await?;

    let cows = call(&client, "list_cows", json!({})).await?;
    assert_eq!(cows["isError"], false);
    let text = envelope_text(&cows).to_string();
    assert!(text.starts_with("Available cow characters: "), "{text}");
    assert!(text.contains("moose"), "{text}");

    let version = call(&client, "get_version", json!({})).await?;
    assert_eq!(
        envelope_text(&version),
        format!("version: {}", env!("CARGO_PKG_VERSION"))
    );

    let _ = client.cancel().await;
    let _ = server_task.await;
    Ok(())
}
