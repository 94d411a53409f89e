//! Static tool catalog advertised to MCP clients.
//!
//! Pure data: the catalog is built once at startup and never mutated. The
//! `character` enum in the schemas is advisory documentation; the live
//! catalog comes from the renderer and can differ.

use std::{borrow::Cow, sync::Arc};

use rmcp::model::{JsonObject, Tool};
use serde_json::{json, Value};

use crate::render::FALLBACK_CHARACTERS;

pub const COWSAY_TOOL: &str = "cowsay";
pub const COWTHINK_TOOL: &str = "cowthink";
pub const LIST_COWS_TOOL: &str = "list_cows";
pub const GET_VERSION_TOOL: &str = "get_version";

/// One entry of the tool registry.
#[derive(Debug, Clone)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// The full extended catalog: both render tools, the character listing, and
/// the version query.
pub fn descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: COWSAY_TOOL,
            title: "Cow Say",
            description: "Generate ASCII art of a cow saying something.",
            input_schema: render_schema("say"),
        },
        ToolDescriptor {
            name: COWTHINK_TOOL,
            title: "Cow Think",
            description: "Generate ASCII art of a cow thinking something.",
            input_schema: render_schema("think"),
        },
        ToolDescriptor {
            name: LIST_COWS_TOOL,
            title: "List Cows",
            description: "List all available cow characters.",
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
        ToolDescriptor {
            name: GET_VERSION_TOOL,
            title: "Get Version",
            description: "Return the cowsay-mcp server version.",
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}

/// Convert the catalog into the rmcp wire model.
pub fn tools() -> Vec<Tool> {
    descriptors()
        .into_iter()
        .map(|descriptor| {
            let mut tool = Tool::new(
                Cow::Borrowed(descriptor.name),
                Cow::Borrowed(descriptor.description),
                Arc::new(object_schema(descriptor.input_schema)),
            );
            tool.title = Some(descriptor.title.to_string());
            tool
        })
        .collect()
}

fn object_schema(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => unreachable!("tool schemas are always JSON objects: {other}"),
    }
}

fn render_schema(verb: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "message": {
                "type": "string",
                "description": format!("The message for the cow to {verb}.")
            },
            "character": {
                "type": "string",
                "description": "The cow character to use.",
                "enum": FALLBACK_CHARACTERS,
                "default": "default"
            },
            "e": {
                "type": "string",
                "description": "Custom eyes (two characters).",
                "default": "oo"
            },
            "T": {
                "type": "string",
                "description": "Custom tongue (two characters)."
            },
            "b": { "type": "boolean", "description": "Borg mode.", "default": false },
            "d": { "type": "boolean", "description": "Dead mode.", "default": false },
            "g": { "type": "boolean", "description": "Greedy mode.", "default": false },
            "p": { "type": "boolean", "description": "Paranoia mode.", "default": false },
            "r": { "type": "boolean", "description": "Pick a random cow character.", "default": false },
            "s": { "type": "boolean", "description": "Stoned mode.", "default": false },
            "t": { "type": "boolean", "description": "Tired mode.", "default": false },
            "w": { "type": "boolean", "description": "Wired mode.", "default": false },
            "y": { "type": "boolean", "description": "Youthful mode.", "default": false }
        },
        "required": ["message"]
    })
}
