//! Renders manifests of custom resources from the command line:
//! crd-manifests {list, schema, render} [type] [-f file]
//! The configuration is read as YAML or JSON from a file or stdin.
use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use crd_manifests::Provider;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(name = "crd-manifests", version, about)]
struct App {
    /// Provider name, used as the data source type name prefix
    #[arg(long, global = true, default_value = Provider::DEFAULT_NAME)]
    provider_name: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// List the type names of every data source
    List,
    /// Print the schema of a data source as JSON
    Schema {
        /// Data source type name
        type_name: String,
    },
    /// Validate a configuration and print its manifest
    Render {
        /// Data source type name
        type_name: String,
        /// Configuration file, stdin when omitted
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// Print the whole resulting state as JSON instead of the manifest
        #[arg(long)]
        state: bool,
    },
}

impl App {
    fn run(&self, out: &mut impl Write) -> Result<()> {
        let provider = Provider::with_name(&self.provider_name);
        match &self.command {
            Command::List => {
                for type_name in provider.data_sources() {
                    writeln!(out, "{type_name}")?;
                }
            }
            Command::Schema { type_name } => {
                let schema = provider.schema(type_name)?;
                writeln!(out, "{}", serde_json::to_string_pretty(schema)?)?;
            }
            Command::Render {
                type_name,
                file,
                state,
            } => {
                let config = read_config(file.as_ref())?;
                let new_state = provider
                    .read_data_source(type_name, config)
                    .into_result()
                    .with_context(|| format!("failed to read {type_name}"))?;
                if *state {
                    writeln!(out, "{}", serde_json::to_string_pretty(&new_state)?)?;
                } else {
                    let Some(yaml) = new_state.get("yaml").and_then(Value::as_str) else {
                        bail!("{type_name} did not produce a manifest");
                    };
                    write!(out, "{yaml}")?;
                }
            }
        }
        Ok(())
    }
}

fn read_config(file: Option<&PathBuf>) -> Result<Value> {
    let input = match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read configuration from stdin")?;
            buf
        }
    };
    // JSON is valid YAML, one parser covers both
    let config = serde_yaml::from_str(&input).context("configuration is neither YAML nor JSON")?;
    debug!(bytes = input.len(), "read configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let app = <App as clap::Parser>::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out)?;
    out.flush()?;
    Ok(())
}
