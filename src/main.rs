// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_yaml::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use text_forge::config::{load_and_validate_recipe, LimitsConfig};
use text_forge::engine::RecipeRunner;
use text_forge::registry::{ToolFactory, ToolOptions};
use text_forge::session::{ConverterSession, GeneratorSession};

#[derive(Parser)]
#[command(name = "text-forge")]
#[command(about = "Text conversion, analysis and generation tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every registered transform and generator
    List,

    /// Apply one transform to TEXT (or stdin)
    Run {
        tool: String,

        /// Tool option as key=value; repeatable
        #[arg(long = "opt", value_name = "KEY=VALUE")]
        opts: Vec<String>,

        /// Print input/output statistics to stderr
        #[arg(long)]
        stats: bool,

        /// Also write the output into DIR under the tool's download name
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Input cap in bytes (clamped to the allowed range)
        #[arg(long)]
        max_input_bytes: Option<usize>,

        text: Option<String>,
    },

    /// Produce a batch of values from a generator
    Generate {
        generator: String,

        #[arg(long = "opt", value_name = "KEY=VALUE")]
        opts: Vec<String>,
    },

    /// Run a YAML or TOML recipe over TEXT (or stdin)
    Recipe {
        config: PathBuf,

        /// Print per-step metadata as JSON to stderr
        #[arg(long)]
        metadata: bool,

        text: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => list_tools(),
        Command::Run {
            tool,
            opts,
            stats,
            output,
            max_input_bytes,
            text,
        } => run_tool(&tool, &opts, stats, output, max_input_bytes, text),
        Command::Generate { generator, opts } => generate(&generator, &opts),
        Command::Recipe {
            config,
            metadata,
            text,
        } => run_recipe(config, metadata, text),
    }
}

fn list_tools() -> Result<()> {
    println!("Transforms:");
    for name in ToolFactory::list_available_transforms() {
        println!("  {}", name);
    }
    println!("Generators:");
    for name in ToolFactory::list_available_generators() {
        println!("  {}", name);
    }
    Ok(())
}

fn run_tool(
    tool: &str,
    opts: &[String],
    show_stats: bool,
    output_dir: Option<PathBuf>,
    max_input_bytes: Option<usize>,
    text: Option<String>,
) -> Result<()> {
    let options = parse_opts(opts)?;
    let transform = ToolFactory::create_transform(tool, &options)?;

    let mut session = ConverterSession::new(transform);
    if let Some(limit) = max_input_bytes {
        session = session.with_max_input_bytes(LimitsConfig::clamp(limit));
    }
    session.set_input(read_input(text)?)?;

    let output = session
        .output()
        .with_context(|| format!("{} failed", session.tool_name()))?;
    println!("{}", output);

    if show_stats {
        if let Some(stats) = session.stats() {
            eprintln!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    if let Some(dir) = output_dir {
        let path = session.download()?.write_to(&dir)?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}

fn generate(generator: &str, opts: &[String]) -> Result<()> {
    let options = parse_opts(opts)?;
    let mut session = GeneratorSession::new(ToolFactory::create_generator(generator, &options)?);
    for value in session.generate()? {
        println!("{}", value);
    }
    Ok(())
}

fn run_recipe(config: PathBuf, show_metadata: bool, text: Option<String>) -> Result<()> {
    let recipe = load_and_validate_recipe(&config)
        .with_context(|| format!("loading recipe {}", config.display()))?;
    let runner = RecipeRunner::from_config(&recipe)?;
    let outcome = runner.run(&read_input(text)?)?;

    println!("{}", outcome.output);
    if show_metadata {
        eprintln!("{}", serde_json::to_string_pretty(&outcome.metadata)?);
    }
    Ok(())
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

/// Parses repeated `key=value` flags. Values become integers, floats or
/// booleans when they parse as one, otherwise strings.
fn parse_opts(opts: &[String]) -> Result<ToolOptions> {
    let mut options = ToolOptions::new();
    for opt in opts {
        let Some((key, raw)) = opt.split_once('=') else {
            bail!("option '{}' is not key=value", opt);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("option '{}' has an empty key", opt);
        }
        options.insert(key.to_string(), option_value(raw));
    }
    Ok(options)
}

fn option_value(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        Value::Number(int.into())
    } else if let Ok(float) = raw.parse::<f64>() {
        Value::Number(float.into())
    } else if let Ok(flag) = raw.parse::<bool>() {
        Value::Bool(flag)
    } else {
        Value::String(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_values_table_driven() {
        let test_cases = vec![
            ("13", Value::Number(13_i64.into())),
            ("-2", Value::Number((-2_i64).into())),
            ("0.5", Value::Number(0.5_f64.into())),
            ("true", Value::Bool(true)),
            ("_", Value::String("_".to_string())),
            ("", Value::String(String::new())),
        ];

        for (raw, expected) in test_cases {
            assert_eq!(option_value(raw), expected, "{:?}", raw);
        }
    }

    #[test]
    fn test_parse_opts() {
        let opts = vec!["shift=3".to_string(), "find=a=b".to_string()];
        let parsed = parse_opts(&opts).unwrap();
        assert_eq!(parsed["shift"], Value::Number(3_i64.into()));
        assert_eq!(parsed["find"], Value::String("a=b".to_string()));

        assert!(parse_opts(&["noequals".to_string()]).is_err());
        assert!(parse_opts(&["=1".to_string()]).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["text-forge", "run", "rot13", "--stats", "hello"]).unwrap();
        assert!(matches!(cli.command, Command::Run { stats: true, .. }));
    }
}
