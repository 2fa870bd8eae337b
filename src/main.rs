//! custom-teams entry point, run by the Wazuh integrator once per alert

use anyhow::Context;
use clap::Parser;

use custom_teams::constants::APP_VERSION;
use custom_teams::{handle_alert, logging, Config, Dispatcher, Invocation};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let _log = logging::init(&config)
        .with_context(|| format!("failed to open log file {}", config.log_path.display()))?;

    let args: Vec<_> = std::env::args_os().collect();
    tracing::debug!("custom-teams v{} invoked with {:?}", APP_VERSION, args);

    let invocation = match Invocation::try_parse_from(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            tracing::error!("{}", e);
            e.exit()
        }
    };

    let dispatcher = Dispatcher::new(&config);

    if let Err(e) = handle_alert(&invocation, &dispatcher) {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
