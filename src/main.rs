use anyhow::Result;
use armid::commands::{
    DecodeCommand, DetectCommand, FormatCommand, NormalizeCommand, ParseCommand, ScopeCommand,
    TypesCommand, ValidateCommand,
};
use armid::config::OutputFormat;
use armid::context::Context;
use armid::output;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "armid")]
#[command(about = "Parse, format and validate Azure resource IDs", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to ./.armid.yaml, then ~/.armid/config.yaml)
    #[arg(long, global = true, env = "ARMID_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an ID and print its segment values
    Parse {
        /// ID type name (see `armid types`)
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// The ID to parse
        id: String,

        /// Ignore the casing of static segments
        #[arg(short, long)]
        insensitive: bool,
    },

    /// Build a canonical ID from segment values
    Format {
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Segment value as LABEL=VALUE (repeatable)
        #[arg(short, long = "set", value_name = "LABEL=VALUE")]
        set: Vec<String>,
    },

    /// Validate a configuration value holding an ID
    Validate {
        /// ID type name, or ResourceId / ResourceIdOrEmpty for any ARM ID
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// The value to check
        value: String,

        /// Name of the configuration key, used in messages
        #[arg(short, long, default_value = "id")]
        key: String,

        /// Read the value as a JSON literal instead of a string
        #[arg(long)]
        json: bool,

        /// Ignore the casing of static segments
        #[arg(short, long)]
        insensitive: bool,
    },

    /// List the ID types an ID matches
    Detect {
        id: String,
    },

    /// Re-case an ID to its canonical form
    Normalize {
        id: String,

        /// ID type name; detected when omitted
        #[arg(short, long = "type", value_name = "TYPE")]
        type_name: Option<String>,
    },

    /// Classify an ID as a management group, subscription, resource group or resource scope
    Scope {
        id: String,
    },

    /// Decode a polymorphic API payload
    Decode {
        /// Union name: TaskStepProperties, ProtectedItem or Format
        union: String,

        /// Read the payload from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List ID types, or show the segments of one
    Types {
        #[arg(value_name = "TYPE")]
        name: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "armid=debug",
        _ => "armid=trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::new(cli.config.as_deref(), cli.output)?;

    match cli.command {
        Commands::Parse {
            type_name,
            id,
            insensitive,
        } => {
            ParseCommand::execute(&ctx, &type_name, &id, insensitive)?;
        }
        Commands::Format { type_name, set } => {
            FormatCommand::execute(&ctx, &type_name, &set)?;
        }
        Commands::Validate {
            type_name,
            value,
            key,
            json,
            insensitive,
        } => {
            ValidateCommand::execute(&ctx, &type_name, &value, &key, json, insensitive)?;
        }
        Commands::Detect { id } => {
            DetectCommand::execute(&ctx, &id)?;
        }
        Commands::Normalize { id, type_name } => {
            NormalizeCommand::execute(&ctx, &id, type_name.as_deref())?;
        }
        Commands::Scope { id } => {
            ScopeCommand::execute(&ctx, &id)?;
        }
        Commands::Decode { union, file } => {
            DecodeCommand::execute(&ctx, &union, file.as_deref())?;
        }
        Commands::Types { name } => {
            TypesCommand::execute(&ctx, name.as_deref())?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        output::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
