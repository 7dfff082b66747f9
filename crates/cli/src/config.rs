//! Run configuration assembled from flags and environment

use crate::flags::Cli;
use std::fmt;
use std::path::PathBuf;
use svckeys_cloud::Endpoints;
use svckeys_core::constants::{API_KEY_ENV_VAR, DEFAULT_LOG_FILTER};
use svckeys_core::{Error, Result};
use svckeys_transform::FieldEncoding;
use zeroize::Zeroizing;

/// Where and how secrets are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub namespace: String,
    pub output_dir: PathBuf,
    pub output_suffix: String,
    pub parser_group: String,
    pub encoding: FieldEncoding,
}

pub struct Config {
    pub input_file: PathBuf,
    pub api_key: Zeroizing<String>,
    pub endpoints: Endpoints,
    pub output: OutputSettings,
    pub verbose: bool,
}

impl Config {
    /// Validate the parsed flags, falling back to `IC_API_KEY` for the API key
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::from_cli_with_env(cli, |name| std::env::var(name).ok())
    }

    pub fn from_cli_with_env<F>(cli: Cli, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = if cli.api_key.is_empty() {
            env(API_KEY_ENV_VAR).unwrap_or_default()
        } else {
            cli.api_key
        };

        if cli.namespace.is_empty() || cli.input_file.is_empty() || api_key.is_empty() {
            return Err(Error::configuration(
                "namespace, input file or api key can't be empty",
            ));
        }

        let endpoints = Endpoints::parse(
            &cli.iam_endpoint,
            &cli.resource_controller_endpoint,
            &cli.resource_manager_endpoint,
        )?;

        Ok(Self {
            input_file: PathBuf::from(cli.input_file),
            api_key: Zeroizing::new(api_key),
            endpoints,
            output: OutputSettings {
                namespace: cli.namespace,
                output_dir: cli.output_dir,
                output_suffix: cli.output_suffix,
                parser_group: cli.parser,
                encoding: FieldEncoding::from_flag(cli.to_base64),
            },
            verbose: cli.verbose,
        })
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("input_file", &self.input_file)
            .field("api_key", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .field("output", &self.output)
            .field("verbose", &self.verbose)
            .finish()
    }
}
