//! CLI argument definitions for the catalog tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Normalize, sync and validate B2B catalog products",
    long_about = "Convert product records between the form, canonical, creation and \n\
                  API-response shapes.\n\n\
                  Every alias group (manufacturer/manufacturerName/brand, \n\
                  pricePerUnit/price, currentAvailable/countInStock) is resolved \n\
                  on read and mirrored on write."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML configuration file with [validation] and [output] sections.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Write JSON results to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a product between shapes.
    Normalize(NormalizeArgs),

    /// Merge a server response into a prior record.
    Sync(SyncArgs),

    /// Attach an owner id to a record.
    AttachOwner(AttachOwnerArgs),

    /// Check a record for missing or inconsistent data.
    Validate(InputArgs),

    /// Decide between creating and updating a record.
    Plan(InputArgs),
}

/// A product file and the shape it is written in.
#[derive(Args, Clone)]
pub struct InputArgs {
    /// JSON file holding one product.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Shape of the input file.
    #[arg(long = "from", value_enum, default_value = "document")]
    pub from: InputShape,
}

#[derive(Args, Clone)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Shape to produce.
    #[arg(long = "to", value_enum, default_value = "canonical")]
    pub to: OutputShape,
}

#[derive(Args, Clone)]
pub struct SyncArgs {
    /// JSON file holding the server response body.
    #[arg(value_name = "RESPONSE")]
    pub response: PathBuf,

    /// Canonical record the response applies to (a fresh record when omitted).
    #[arg(long = "prior", value_name = "FILE")]
    pub prior: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct AttachOwnerArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// 24-character hex id of the owning account.
    #[arg(long = "owner", value_name = "ID")]
    pub owner: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputShape {
    /// Edit-screen form (flattened food fields, tolerant input).
    Form,
    /// API document (stored record or server response).
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputShape {
    /// Canonical record with every alias mirrored.
    Canonical,
    /// Form shape for pre-populating an edit screen.
    Form,
    /// Creation payload without server-assigned fields.
    Create,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
