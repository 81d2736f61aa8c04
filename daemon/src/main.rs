//! meridian-params: operator tool for consensus-parameter governance.

mod config;
mod delta;

use anyhow::{bail, Context};
use clap::Parser;
use meridian_governance::GovernanceEngine;
use meridian_messages::proto;
use meridian_types::{ConsensusParams, Height};
use meridian_utils::LogFormat;
use std::path::PathBuf;

use config::GenesisConfig;
use delta::ParamsDelta;

#[derive(Parser)]
#[command(
    name = "meridian-params",
    about = "Validate, hash and update Meridian consensus parameters"
)]
struct Cli {
    /// Path to a genesis TOML file. Without one, the default parameters are used.
    #[arg(long, env = "MERIDIAN_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Overrides the value in the config file.
    #[arg(long, env = "MERIDIAN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json". Overrides the value in the config file.
    #[arg(long, env = "MERIDIAN_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the default genesis configuration.
    Defaults,
    /// Check the genesis consensus parameters.
    Validate,
    /// Print the header hash of the genesis consensus parameters.
    Hash,
    /// Apply a parameter delta to the genesis parameters at a height.
    Update {
        /// TOML file with the sub-groups to change.
        #[arg(long)]
        delta: PathBuf,

        /// Height of the block carrying the update. Defaults to the
        /// configured initial height.
        #[arg(long, allow_hyphen_values = true)]
        height: Option<i64>,
    },
    /// Show which height-gated features are in effect at a height.
    Enabled {
        /// Defaults to the configured initial height.
        #[arg(long, allow_hyphen_values = true)]
        height: Option<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GenesisConfig::from_toml_file(path)
            .with_context(|| format!("loading genesis config {}", path.display()))?,
        None => GenesisConfig::default(),
    };

    meridian_utils::init_logging(
        cli.log_format.unwrap_or(config.log_format),
        cli.log_level.as_deref().unwrap_or(&config.log_level),
    );
    if let Some(path) = &cli.config {
        tracing::info!(chain_id = %config.chain_id, "loaded config from {}", path.display());
    }

    let engine = GovernanceEngine::standard();

    match cli.command {
        Command::Defaults => {
            print!("{}", GenesisConfig::default().to_toml_string()?);
        }
        Command::Validate => {
            engine.genesis(Some(config.consensus_params))?;
            println!("ok");
        }
        Command::Hash => {
            let params = engine.genesis(Some(config.consensus_params))?;
            println!("{}", engine.hash(&params));
        }
        Command::Update { delta, height } => {
            let height = config.height_or_initial(height);
            let params = engine.genesis(Some(config.consensus_params))?;
            let delta = ParamsDelta::from_toml_file(&delta)
                .with_context(|| format!("loading delta {}", delta.display()))?;
            let response = proto::FinalizeBlockResponse {
                consensus_param_updates: Some(proto::ConsensusParams::from(&delta)),
                app_hash: Vec::new(),
            };

            let transition = match engine.finalize_block(&params, &response, height) {
                Ok(t) => t,
                Err(e) if e.is_fatal() => bail!("contract violation: {e}"),
                Err(e) => bail!("update rejected: {e}"),
            };
            tracing::info!(height, hash = %transition.hash, "update accepted");

            let out = GenesisConfig {
                consensus_params: transition.params,
                ..config
            };
            print!("{}", out.to_toml_string()?);
            println!("# hash = \"{}\"", transition.hash);
        }
        Command::Enabled { height } => {
            let h = Height::new(config.height_or_initial(height))?;
            let ConsensusParams { abci, pbts, .. } = engine.genesis(Some(config.consensus_params))?;
            let report = serde_json::json!({
                "height": h,
                "vote_extensions": abci.vote_extensions_enabled(h),
                "pbts": pbts.pbts_enabled(h),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
