//! Command-line interface: `sitelog parse` and `sitelog serve`.

use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use sitelog_core::config::Config;
use sitelog_core::SurveyParser;

#[derive(Debug, Parser)]
#[command(name = "sitelog", version, about = "Extract site-survey records from chat-log exports")]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/sitelog/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a log file (`-` for stdin) and print its records as a JSON array.
    Parse {
        input: PathBuf,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Run the HTTP upload server.
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:8080.
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Port to listen on all interfaces; ignored when --bind is given.
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },
}

/// Execute a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Parse { input, pretty } => parse_command(&config, &input, pretty),
        Command::Serve { bind, port } => {
            if let Some(bind) = resolve_bind(bind, port) {
                config.server.bind = bind;
            }
            serve_command(config)
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("cannot load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to built-in configuration");
            Config::defaults()
        })),
    }
}

/// `--bind` wins over `--port`/`PORT`; neither means "use the config file".
fn resolve_bind(bind: Option<String>, port: Option<u16>) -> Option<String> {
    bind.or_else(|| port.map(|port| format!("0.0.0.0:{port}")))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).context("cannot read stdin")?;
        buf
    } else {
        std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn parse_command(config: &Config, input: &Path, pretty: bool) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let parser = SurveyParser::new(&config.parser)?;
    let records = parser.parse(&text);
    tracing::info!(input = %input.display(), records = records.len(), "parsed");

    let mut out = BufWriter::new(std::io::stdout().lock());
    if pretty {
        serde_json::to_writer_pretty(&mut out, &records)?;
    } else {
        serde_json::to_writer(&mut out, &records)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn serve_command(config: Config) -> anyhow::Result<()> {
    let parser = SurveyParser::new(&config.parser)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(sitelog_server::serve(&config.server, Box::new(parser)))?;
    Ok(())
}
