use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
};
use serde_json::json;

use crate::common::{envelope_text, spawn_server_process};

#[tokio::test]
async fn spawned_binary_serves_tools_over_stdio() -> Result<()> {
    let (mut child, bridge, stderr_handle) = spawn_server_process().await?;

    let client = serve_client(ClientInfo::default(), bridge).await?;

    let response = client
        .call_tool(CallToolRequestParam {
            name: "get_version".into(),
            arguments: Some(json!({}).as_object().expect("object").clone()),
        })
        .await?;
    let envelope = serde_json::to_value(response)?;
    assert_eq!(envelope["isError"], false);
    assert_eq!(
        envelope_text(&envelope),
        format!("version: {}", env!("CARGO_PKG_VERSION"))
    );

    let _ = client.cancel().await;
    let _ = child.kill().await;
    if let Some(handle) = stderr_handle {
        let _ = handle.await;
    }
    Ok(())
}
