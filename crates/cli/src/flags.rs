//! Command-line flags
//!
//! The flags keep their historical single-dash spelling (`-ns`, `-tob64`,
//! ...). clap only knows single-dash single-letter flags, so
//! [`normalize_args`] rewrites the multi-letter ones before parsing.

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use svckeys_core::constants::{
    DEFAULT_IAM_ENDPOINT, DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_SUFFIX, DEFAULT_PARSER_GROUP,
    DEFAULT_RESOURCE_CONTROLLER_ENDPOINT, DEFAULT_RESOURCE_MANAGER_ENDPOINT, IAM_ENDPOINT_ENV_VAR,
    RESOURCE_CONTROLLER_ENDPOINT_ENV_VAR, RESOURCE_MANAGER_ENDPOINT_ENV_VAR,
};

#[derive(Parser, Debug)]
#[command(name = "svckeys")]
#[command(about = "Write IBM Cloud service keys as Kubernetes Secret manifests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// If provided get secrets in base64
    #[arg(
        long = "tob64",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true"
    )]
    pub to_base64: bool,

    /// Namespace of the generated secrets
    #[arg(long = "ns", default_value = "")]
    pub namespace: String,

    /// Input file
    #[arg(short = 'i', long = "input", default_value = "")]
    pub input_file: String,

    /// API Key can be exported as IC_API_KEY
    #[arg(long = "apikey", default_value = "", hide_default_value = true)]
    pub api_key: String,

    /// Output directory, created if missing
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Suffix output files
    #[arg(long = "suffix", default_value = DEFAULT_OUTPUT_SUFFIX)]
    pub output_suffix: String,

    /// The parser to use
    #[arg(long = "parser", default_value = DEFAULT_PARSER_GROUP)]
    pub parser: String,

    /// Log at debug level unless SVCKEYS_LOG or RUST_LOG say otherwise
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// IAM endpoint
    #[arg(long = "iam-endpoint", env = IAM_ENDPOINT_ENV_VAR, default_value = DEFAULT_IAM_ENDPOINT)]
    pub iam_endpoint: String,

    /// Resource controller endpoint (instances and keys)
    #[arg(
        long = "resource-controller-endpoint",
        env = RESOURCE_CONTROLLER_ENDPOINT_ENV_VAR,
        default_value = DEFAULT_RESOURCE_CONTROLLER_ENDPOINT
    )]
    pub resource_controller_endpoint: String,

    /// Resource manager endpoint (resource groups)
    #[arg(
        long = "resource-manager-endpoint",
        env = RESOURCE_MANAGER_ENDPOINT_ENV_VAR,
        default_value = DEFAULT_RESOURCE_MANAGER_ENDPOINT
    )]
    pub resource_manager_endpoint: String,
}

/// Multi-letter flags accepted with a single leading dash
const SINGLE_DASH_FLAGS: &[&str] = &[
    "tob64",
    "ns",
    "apikey",
    "suffix",
    "parser",
    "input",
    "output",
    "verbose",
    "iam-endpoint",
    "resource-controller-endpoint",
    "resource-manager-endpoint",
];

/// Rewrite `-ns x` / `-tob64=true` style flags to their `--` form.
///
/// The first element is the program name and is left alone, as is anything
/// after a `--` terminator.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut terminated = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if arg == "--" {
                terminated = true;
            }
            if index > 0 && !terminated && is_single_dash_long(&arg) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) if !rest.starts_with('-') => {
            let name = rest.split('=').next().unwrap_or(rest);
            SINGLE_DASH_FLAGS.contains(&name)
        }
        _ => false,
    }
}
