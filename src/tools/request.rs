//! Typed render request built from untyped tool arguments.

use rmcp::model::JsonObject;
use serde_json::Value;

use crate::{
    lib::errors::ToolError,
    render::{FaceMode, FaceOptions},
    server::config::RenderSection,
};

/// Sentinel character name meaning "let the renderer choose".
const DEFAULT_CHARACTER: &str = "default";

/// Validated arguments for `cowsay`/`cowthink`.
///
/// Constructed once per invocation by [`RenderRequest::from_args`]; nothing
/// downstream re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub message: String,
    pub character: Option<String>,
    pub eyes: Option<String>,
    pub tongue: Option<String>,
    pub mode: Option<FaceMode>,
    pub random: bool,
}

impl RenderRequest {
    /// Single validation point for the render tools.
    ///
    /// `message` must be present and a string. `character` (or its deprecated
    /// alias `cow`) and the face overrides must match their declared types
    /// when present. Unknown extra fields are ignored.
    pub fn from_args(tool: &str, args: &JsonObject) -> Result<Self, ToolError> {
        let message = required_string(tool, args, "message")?;
        // `character` wins over the legacy `cow` field when both are present.
        let character = optional_string(tool, args, "character")?
            .or(optional_string(tool, args, "cow")?);
        let eyes = optional_string(tool, args, "e")?;
        let tongue = optional_string(tool, args, "T")?;

        let mode = first_mode_flag(tool, args)?;
        let random = optional_bool(tool, args, "r")?;

        Ok(Self {
            message,
            character,
            eyes,
            tongue,
            mode,
            random,
        })
    }

    /// Apply the configured normalization and strip the `"default"` sentinel.
    ///
    /// The sentinel must never reach the renderer as an explicit selector: a
    /// normalized request carries `character: None` instead.
    pub fn normalized(mut self, settings: &RenderSection) -> Self {
        if !settings.case_sensitive {
            self.message = self.message.to_lowercase();
            self.character = self.character.map(|c| c.to_lowercase());
        }
        if self.character.as_deref() == Some(DEFAULT_CHARACTER) {
            self.character = None;
        }
        self
    }

    /// Split into the message and the options forwarded to the collaborator.
    pub fn into_parts(self) -> (String, FaceOptions) {
        let options = FaceOptions {
            character: self.character,
            eyes: self.eyes,
            tongue: self.tongue,
            mode: self.mode,
            random: self.random,
        };
        (self.message, options)
    }
}

/// Mode flags in resolution order; the first one set wins.
const MODE_FLAGS: &[(&str, FaceMode)] = &[
    ("b", FaceMode::Borg),
    ("d", FaceMode::Dead),
    ("g", FaceMode::Greedy),
    ("p", FaceMode::Paranoia),
    ("s", FaceMode::Stoned),
    ("t", FaceMode::Tired),
    ("w", FaceMode::Wired),
    ("y", FaceMode::Youthful),
];

fn first_mode_flag(tool: &str, args: &JsonObject) -> Result<Option<FaceMode>, ToolError> {
    for (flag, mode) in MODE_FLAGS {
        if optional_bool(tool, args, flag)? {
            return Ok(Some(*mode));
        }
    }
    Ok(None)
}

fn required_string(tool: &str, args: &JsonObject, field: &str) -> Result<String, ToolError> {
    match args.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(invalid(tool, format!("`{field}` must be a string"))),
        None => Err(invalid(tool, format!("`{field}` is required"))),
    }
}

fn optional_string(tool: &str, args: &JsonObject, field: &str) -> Result<Option<String>, ToolError> {
    match args.get(field) {
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(invalid(tool, format!("`{field}` must be a string"))),
    }
}

fn optional_bool(tool: &str, args: &JsonObject, field: &str) -> Result<bool, ToolError> {
    match args.get(field) {
        Some(Value::Bool(value)) => Ok(*value),
        Some(Value::Null) | None => Ok(false),
        Some(_) => Err(invalid(tool, format!("`{field}` must be a boolean"))),
    }
}

fn invalid(tool: &str, reason: String) -> ToolError {
    ToolError::InvalidArguments {
        tool: tool.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().expect("test args are objects").clone()
    }

    fn insensitive() -> RenderSection {
        RenderSection {
            case_sensitive: false,
            wrap_width: 40,
        }
    }

    fn sensitive() -> RenderSection {
        RenderSection {
            case_sensitive: true,
            wrap_width: 40,
        }
    }

    #[test]
    fn missing_message_is_rejected() {
        let error = RenderRequest::from_args("cowsay", &args(json!({})))
            .expect_err("message is required");
        assert_eq!(
            error,
            ToolError::InvalidArguments {
                tool: "cowsay".into(),
                reason: "`message` is required".into()
            }
        );
    }

    #[test]
    fn non_string_message_is_rejected() {
        let error = RenderRequest::from_args("cowsay", &args(json!({ "message": 42 })))
            .expect_err("message must be a string");
        assert_eq!(
            error,
            ToolError::InvalidArguments {
                tool: "cowsay".into(),
                reason: "`message` must be a string".into()
            }
        );
    }

    #[test]
    fn non_string_character_is_rejected() {
        let error = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "moo", "character": true })),
        )
        .expect_err("character must be a string");
        assert!(matches!(error, ToolError::InvalidArguments { .. }));
    }

    #[test]
    fn non_boolean_flag_is_rejected() {
        let error =
            RenderRequest::from_args("cowsay", &args(json!({ "message": "moo", "d": "yes" })))
                .expect_err("flags must be booleans");
        assert_eq!(
            error,
            ToolError::InvalidArguments {
                tool: "cowsay".into(),
                reason: "`d` must be a boolean".into()
            }
        );
    }

    #[test]
    fn unknown_extra_fields_are_ignored() {
        let request = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "moo", "volume": 11, "nested": { "x": 1 } })),
        )
        .expect("extras are ignored");
        assert_eq!(request.message, "moo");
    }

    #[test]
    fn legacy_cow_field_is_accepted_as_alias() {
        let request =
            RenderRequest::from_args("cowsay", &args(json!({ "message": "moo", "cow": "tux" })))
                .expect("alias accepted");
        assert_eq!(request.character.as_deref(), Some("tux"));
    }

    #[test]
    fn character_wins_over_legacy_alias() {
        let request = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "moo", "cow": "tux", "character": "moose" })),
        )
        .expect("both fields accepted");
        assert_eq!(request.character.as_deref(), Some("moose"));
    }

    #[test]
    fn first_mode_flag_wins() {
        let request = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "moo", "t": true, "d": true })),
        )
        .expect("flags accepted");
        assert_eq!(request.mode, Some(FaceMode::Dead));
    }

    #[test]
    fn normalization_lowercases_when_insensitive() {
        let request = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "HELLO", "character": "TUX" })),
        )
        .expect("valid request")
        .normalized(&insensitive());
        assert_eq!(request.message, "hello");
        assert_eq!(request.character.as_deref(), Some("tux"));
    }

    #[test]
    fn normalization_preserves_case_when_sensitive() {
        let request = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "HELLO", "character": "tux" })),
        )
        .expect("valid request")
        .normalized(&sensitive());
        assert_eq!(request.message, "HELLO");
    }

    #[test]
    fn default_sentinel_is_never_forwarded() {
        let request = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "moo", "character": "default" })),
        )
        .expect("valid request")
        .normalized(&insensitive());
        assert_eq!(request.character, None);

        let uppercase = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "moo", "character": "DEFAULT" })),
        )
        .expect("valid request")
        .normalized(&insensitive());
        assert_eq!(uppercase.character, None);
    }

    #[test]
    fn insensitive_requests_normalize_to_identical_parts() {
        let upper = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "HELLO", "character": "TUX" })),
        )
        .expect("valid request")
        .normalized(&insensitive());
        let lower = RenderRequest::from_args(
            "cowsay",
            &args(json!({ "message": "hello", "character": "tux" })),
        )
        .expect("valid request")
        .normalized(&insensitive());
        assert_eq!(upper, lower);
    }
}
