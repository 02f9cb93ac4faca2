use stubdns_domain::{CliOverrides, Config};

/// Loads, applies overrides, and validates. Runs before logging is up, so
/// failures are reported through the returned error only.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

pub fn config_source(path: Option<&str>) -> String {
    path.map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "<defaults>".to_string())
}
