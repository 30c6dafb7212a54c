//! Command-line front end: translate keys from the shell.

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::Parser;
use topic_i18n::config::{
    self,
    Config,
};
use topic_i18n::{
    Params,
    Translator,
};
use tracing_subscriber::EnvFilter;

/// Translate `topic.field` keys from YAML/JSON topic files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file (defaults to `.topic-i18n.json` in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Translation directory, relative to the working directory
    #[arg(long)]
    path: Option<String>,

    /// Default locale
    #[arg(long)]
    default_locale: Option<String>,

    /// Fallback locale
    #[arg(long)]
    fallback_locale: Option<String>,

    /// Translate into this locale instead of the default one
    #[arg(short, long)]
    locale: Option<String>,

    /// Placeholder value, repeatable
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// Keys to translate
    #[arg(required = true)]
    keys: Vec<String>,
}

/// Splits `NAME=VALUE`.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

/// Builds the config from file and flags; flags win.
///
/// Without `--config`, `.topic-i18n.json` is looked up in `workspace`.
fn resolve_config(cli: &Cli, workspace: &Path) -> anyhow::Result<Config> {
    let base = match &cli.config {
        Some(path) => config::load_from_file(path)?,
        None => config::load_from_workspace(workspace)?.unwrap_or_default(),
    };

    let overrides = Config::empty()
        .translation_path(cli.path.clone().unwrap_or_default())
        .default_locale(cli.default_locale.clone().unwrap_or_default())
        .fallback_locale(cli.fallback_locale.clone().unwrap_or_default());

    Ok(base.merge(overrides))
}

/// Translates every requested key into `out`, one line each.
fn run(cli: &Cli, workspace: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let translator = Translator::new(resolve_config(cli, workspace)?)?;
    let params: Params = cli.params.iter().cloned().collect();
    let locale = cli.locale.as_deref().unwrap_or(translator.config().default_locale.as_str());

    for key in &cli.keys {
        writeln!(out, "{}", translator.translate_by_with(locale, key, &params))?;
    }

    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG`.
fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|workspace| run(&cli, &workspace, &mut std::io::stdout().lock()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
