use tracing::{debug, info};

use super::{ServerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "cowsay_mcp::config",
            path = %path.display(),
            "Loading configuration using MCP_CONFIG_PATH environment variable"
        );
    } else {
        debug!(
            target: "cowsay_mcp::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "MCP_CONFIG_PATH not set; using default config.toml"
        );
    }
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "cowsay_mcp::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        case_sensitive = config.render.case_sensitive,
        wrap_width = config.render.wrap_width,
        token_configured = config.auth.token.is_some(),
        "Configuration file loaded successfully"
    );
}
