use crate::conf::{ConfigError, GstscopeConfig, validate};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "gstscope.hcl";

/// Read, parse and validate `<root>/gstscope.hcl`, then apply `PORT`.
pub fn load_config(root: &Path) -> Result<GstscopeConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    let raw = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;

    let mut config = parse_config(&path, &raw)?;
    apply_port_override(&mut config, std::env::var("PORT").ok().as_deref())?;

    let report = validate(&config);
    if report.has_errors() {
        return Err(ConfigError::Validation { report });
    }

    tracing::debug!(path = %path.display(), listen = %config.server.listen, "config loaded");
    Ok(config)
}

pub fn parse_config(path: &Path, raw: &str) -> Result<GstscopeConfig, ConfigError> {
    hcl::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}

/// Replace the port of `server.listen`, keeping the host.
pub fn apply_port_override(
    config: &mut GstscopeConfig,
    port: Option<&str>,
) -> Result<(), ConfigError> {
    let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    let port: u16 = port.parse().map_err(|_| ConfigError::InvalidPort {
        value: port.to_string(),
    })?;

    let host = config
        .server
        .listen
        .rsplit_once(':')
        .map_or("0.0.0.0", |(host, _)| host);
    config.server.listen = format!("{host}:{port}");
    Ok(())
}
