use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_CASE_SENSITIVE: bool = false;
pub const DEFAULT_WRAP_WIDTH: usize = 40;

const MIN_WRAP_WIDTH: usize = 10;
const MAX_WRAP_WIDTH: usize = 200;

/// Rendering settings applied by the dispatcher before forwarding arguments
/// to the collaborator.
#[derive(Debug, Clone)]
pub struct RenderSection {
    /// When false (the default), message and character are lower-cased before
    /// they are forwarded.
    pub case_sensitive: bool,
    /// Column at which bubble text is word-wrapped.
    pub wrap_width: usize,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            case_sensitive: DEFAULT_CASE_SENSITIVE,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawRenderSection {
    pub case_sensitive: Option<bool>,
    pub wrap_width: Option<usize>,
}

pub fn parse_render_section(
    raw: Option<RawRenderSection>,
    path: &Path,
) -> Result<RenderSection, ConfigError> {
    let render_raw = raw.unwrap_or_default();
    let case_sensitive = render_raw.case_sensitive.unwrap_or(DEFAULT_CASE_SENSITIVE);
    let wrap_width = render_raw.wrap_width.unwrap_or(DEFAULT_WRAP_WIDTH);
    validate_wrap_width(wrap_width, path)?;
    Ok(RenderSection {
        case_sensitive,
        wrap_width,
    })
}

fn validate_wrap_width(wrap_width: usize, path: &Path) -> Result<(), ConfigError> {
    if (MIN_WRAP_WIDTH..=MAX_WRAP_WIDTH).contains(&wrap_width) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "render.wrap_width",
        message: format!("Use a wrap width in the range {MIN_WRAP_WIDTH}-{MAX_WRAP_WIDTH}"),
    })
}
