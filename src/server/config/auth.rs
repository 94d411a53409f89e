use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// Authentication settings.
///
/// The token is optional: the access policy accepts absent tokens, so a
/// configuration without an `[auth]` section is valid.
#[derive(Debug, Clone, Default)]
pub struct AuthSection {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawAuthSection {
    pub token: Option<String>,
}

pub fn parse_auth_section(
    raw: Option<RawAuthSection>,
    _path: &Path,
) -> Result<AuthSection, ConfigError> {
    let auth_raw = raw.unwrap_or_default();
    // An empty token is kept as-is so the access policy can reject it at
    // dispatch time rather than at startup.
    Ok(AuthSection {
        token: auth_raw.token,
    })
}
