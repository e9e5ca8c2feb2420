use crate::cli::Cli;
use apo_core::Result;
use apo_model::ProviderConfig;
use apo_model::config::ENV_PROVIDER;
use std::time::Duration;

/// Resolve the provider configuration: environment first, CLI flags on top.
///
/// `--provider` is applied before the API key lookup so the key variable
/// always matches the provider actually used.
pub fn provider_config(cli: &Cli) -> Result<ProviderConfig> {
    provider_config_from(cli, |key| std::env::var(key).ok())
}

pub fn provider_config_from<F>(cli: &Cli, env: F) -> Result<ProviderConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ProviderConfig::from_lookup(|key| match key {
        ENV_PROVIDER if cli.provider.is_some() => cli.provider.clone(),
        _ => env(key),
    })?;

    if let Some(model) = &cli.model {
        config = config.with_model(model.as_str());
    }
    if let Some(temperature) = cli.temperature {
        config = config.with_temperature(temperature);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}
