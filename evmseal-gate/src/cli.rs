use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use evmseal_denom::DenomCatalog;
use evmseal_engine::{resolve, FeatureActivatorTable};

use crate::config::{ChainSource, GateConfig, CONFIG_FILE_NAME};
use crate::error::GateError;
use crate::global;

#[derive(Parser)]
#[command(
    name = "evmseal",
    about = "Apply-once chain configuration gate for an EVM execution layer",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a default configuration file
    Init {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: String,
    },
    /// Apply a configuration file through the process gate and print the result
    Apply {
        /// Path to config file
        #[arg(short, long, default_value = CONFIG_FILE_NAME)]
        config: String,
        /// Look the chain up in `[[chains]]` instead of using `coin_info`
        #[arg(long)]
        legacy: bool,
    },
    /// Print the parameter set resolved for a chain id
    Resolve {
        chain_id: u64,
    },
}

/// Install the tracing subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .try_init();
}

pub fn run(cli: Cli) -> Result<(), GateError> {
    match cli.command {
        Command::Init { dir } => {
            init_logging("info");
            let path = GateConfig::init(&dir)?;
            tracing::info!(path = %path.display(), "wrote default config");
            Ok(())
        }
        Command::Apply { config, legacy } => {
            let config = GateConfig::load(&config)?;
            init_logging(&config.logging.level);
            apply(&config, legacy)
        }
        Command::Resolve { chain_id } => {
            init_logging("info");
            let params = resolve(chain_id);
            let fingerprint = params.fingerprint()?;
            let output = serde_json::json!({
                "fingerprint": hex::encode(fingerprint),
                "rules": params.rules(0, 0),
                "chain_parameters": params,
            });
            println!("{:#}", output);
            Ok(())
        }
    }
}

fn apply(config: &GateConfig, legacy: bool) -> Result<(), GateError> {
    let activators = FeatureActivatorTable::new();
    match config.chain_source(legacy)? {
        ChainSource::Dynamic(coin_info) => {
            global::configure_dynamic(config.chain_id, coin_info, &activators)?
        }
        ChainSource::Map(chains) => {
            global::configure_from_map(config.chain_id, &chains, &activators)?
        }
    }

    let gate = global::global();
    let params = gate.engine().chain_parameters()?;
    let fingerprint = match &params {
        Some(p) => Some(hex::encode(p.fingerprint()?)),
        None => None,
    };
    let output = serde_json::json!({
        "sealed": gate.is_sealed()?,
        "base_unit": gate.catalog().base_unit()?,
        "units": gate.catalog().units()?,
        "coin_info": gate.engine().coin_info()?,
        "fingerprint": fingerprint,
        "chain_parameters": params,
    });
    println!("{:#}", output);
    Ok(())
}
