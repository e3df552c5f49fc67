//! Sprout CLI entry point.

use std::io::Read;

use clap::{Parser, Subcommand, ValueEnum};
use rhizome_sprout_desugar::{desugar_program_with, DesugarOptions, DictValuePolicy};
use rhizome_sprout_ir::Program;
use rhizome_sprout_target_javascript::unparse_program;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sprout")]
#[command(about = "Dictionary desugaring and JavaScript unparsing for L32 programs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Dictionary values must be literals
    Literal,
    /// Quote any dictionary value structurally
    Structural,
}

impl From<PolicyArg> for DictValuePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Literal => DictValuePolicy::Literal,
            PolicyArg::Structural => DictValuePolicy::Structural,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Desugar dictionary literals in a JSON-encoded program
    Desugar {
        /// Input program file (or - for stdin)
        file: String,

        /// Options file
        #[arg(short, long)]
        config: Option<String>,

        /// Override the dictionary value policy
        #[arg(long, value_enum)]
        value_policy: Option<PolicyArg>,

        /// Print Scheme syntax instead of JSON
        #[arg(long)]
        scheme: bool,
    },

    /// Desugar a JSON-encoded program and print it as a single Scheme form
    Run {
        /// Input program file (or - for stdin)
        file: String,

        /// Options file
        #[arg(short, long)]
        config: Option<String>,

        /// Override the dictionary value policy
        #[arg(long, value_enum)]
        value_policy: Option<PolicyArg>,
    },

    /// Unparse a JSON-encoded program to JavaScript
    Unparse {
        /// Input program file (or - for stdin)
        file: String,

        /// Write to stdout instead of file
        #[arg(long)]
        stdout: bool,
    },
}

fn read_input(file: &str) -> std::io::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}

/// Options from `--config`, with `--value-policy` taking precedence.
fn load_options(
    config: Option<&str>,
    value_policy: Option<PolicyArg>,
) -> Result<DesugarOptions, Box<dyn std::error::Error>> {
    let mut options = match config {
        Some(path) => {
            info!("Loading options from {}", path);
            DesugarOptions::from_file(path)?
        }
        None => DesugarOptions::default(),
    };
    if let Some(policy) = value_policy {
        options = options.with_value_policy(policy.into());
    }
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sprout=info".parse()?)
                .add_directive("rhizome_sprout=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Desugar {
            file,
            config,
            value_policy,
            scheme,
        } => {
            let options = load_options(config.as_deref(), value_policy)?;
            let program: Program = serde_json::from_str(&read_input(&file)?)?;
            let desugared = desugar_program_with(&program, &options)?;

            if scheme {
                for form in &desugared.forms {
                    println!("{}", form);
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&desugared)?);
            }
        }

        Commands::Run {
            file,
            config,
            value_policy,
        } => {
            let options = load_options(config.as_deref(), value_policy)?;
            let program: Program = serde_json::from_str(&read_input(&file)?)?;
            let desugared = desugar_program_with(&program, &options)?;
            println!("{}", desugared);
        }

        Commands::Unparse { file, stdout } => {
            let program: Program = serde_json::from_str(&read_input(&file)?)?;
            let js_code = unparse_program(&program)?;

            if stdout {
                println!("{}", js_code);
            } else {
                let out_path = if file == "-" {
                    "output.js".to_string()
                } else {
                    match file.strip_suffix(".json") {
                        Some(stem) => format!("{}.js", stem),
                        None => format!("{}.js", file),
                    }
                };
                std::fs::write(&out_path, &js_code)?;
                println!("Wrote: {}", out_path);
            }
        }
    }

    Ok(())
}
