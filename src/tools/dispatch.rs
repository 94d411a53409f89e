//! The dispatch boundary: validate, normalize, invoke, wrap.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::warn;

use crate::{
    lib::{errors::ToolError, telemetry::InvocationSpan},
    render::{CowRenderer, FALLBACK_CHARACTERS},
    server::{auth::AccessPolicy, config::RenderSection},
    tools::{
        catalog::{COWSAY_TOOL, COWTHINK_TOOL, GET_VERSION_TOOL, LIST_COWS_TOOL},
        request::RenderRequest,
    },
};

const LIST_COWS_LABEL: &str = "Available cow characters: ";
const VERSION_LABEL: &str = "version: ";

/// Stateless per-invocation mapping from tool name plus raw arguments to a
/// response envelope. Holds no mutable state, so concurrent invocations can
/// share one instance behind `Arc`.
pub struct Dispatcher {
    renderer: Arc<dyn CowRenderer>,
    settings: RenderSection,
    access: AccessPolicy,
}

impl Dispatcher {
    pub fn new(renderer: Arc<dyn CowRenderer>, settings: RenderSection, access: AccessPolicy) -> Self {
        Self {
            renderer,
            settings,
            access,
        }
    }

    /// Invoke a tool and wrap the outcome.
    ///
    /// Every caught condition comes back as an error envelope through the
    /// normal return path; the transport never sees a protocol-level fault
    /// from here.
    pub async fn invoke(&self, tool_name: &str, args: JsonObject) -> CallToolResult {
        let span = InvocationSpan::start(tool_name);
        match self.dispatch(tool_name, args).await {
            Ok(text) => {
                span.finish("success");
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(error) => {
                span.finish("error");
                CallToolResult::error(vec![Content::text(error.to_string())])
            }
        }
    }

    async fn dispatch(&self, tool_name: &str, args: JsonObject) -> Result<String, ToolError> {
        self.access.authorize()?;

        match tool_name {
            COWSAY_TOOL | COWTHINK_TOOL => self.render(tool_name, &args),
            LIST_COWS_TOOL => Ok(self.list_cows()),
            GET_VERSION_TOOL => Ok(version_text()),
            other => Err(ToolError::UnknownTool {
                name: other.to_string(),
            }),
        }
    }

    fn render(&self, tool_name: &str, args: &JsonObject) -> Result<String, ToolError> {
        let request = RenderRequest::from_args(tool_name, args)?.normalized(&self.settings);
        let (message, options) = request.into_parts();

        let rendered = if tool_name == COWTHINK_TOOL {
            self.renderer.think(&message, &options)
        } else {
            self.renderer.say(&message, &options)
        };
        rendered.map_err(|err| ToolError::RenderFailed {
            message: err.to_string(),
        })
    }

    /// Listing never fails: a collaborator fault falls back to the fixed
    /// nine-name catalog.
    fn list_cows(&self) -> String {
        let names = match self.renderer.list_characters() {
            Ok(names) => names,
            Err(error) => {
                warn!(
                    target: "cowsay_mcp::tools",
                    error = %error,
                    "Character catalog unavailable; using fallback list"
                );
                FALLBACK_CHARACTERS.iter().map(|s| s.to_string()).collect()
            }
        };
        format!("{LIST_COWS_LABEL}{}", names.join(", "))
    }
}

fn version_text() -> String {
    format!("{VERSION_LABEL}{}", env!("CARGO_PKG_VERSION"))
}
