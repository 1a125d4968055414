// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use std::sync::OnceLock;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::WrapErr;

use crate::{
    config::{self, output::OutputNaming, Config},
    path_utils,
};

pub struct Environment {
    /// Directory holding the configuration file, or the working directory
    /// when running on built-in defaults.
    ///
    /// Relative paths from the configuration are resolved against it.
    pub root: Utf8PathBuf,
    pub config: Config,
    pub quiet: bool,
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

fn get_environment() -> &'static Environment {
    ENVIRONMENT.get().expect("environment must be initialized")
}

fn get_config() -> &'static Config {
    &get_environment().config
}

pub fn init_environment(toml_file: Option<&Utf8Path>, quiet: bool) -> eyre::Result<()> {
    let (root, config) = match config::find_config(toml_file)? {
        Some(toml_file) => {
            let toml = std::fs::read_to_string(&toml_file)
                .wrap_err_with(|| eyre::eyre!("failed to read config file `{}`", toml_file))?;
            let (root, _file_name) = path_utils::split_file_name(&toml_file)
                .ok_or_else(|| eyre::eyre!("invalid config path `{}`", toml_file))?;
            (root.to_owned(), config::parse_config(&toml)?)
        }
        None => (Utf8PathBuf::new(), Config::default()),
    };

    _ = ENVIRONMENT.set(Environment {
        root,
        config,
        quiet,
    });
    Ok(())
}

/// Mock environment for testing purposes.
#[allow(dead_code)]
pub fn mock_environment() -> eyre::Result<()> {
    _ = ENVIRONMENT.set(Environment {
        root: Utf8PathBuf::new(),
        config: Config::default(),
        quiet: true,
    });
    Ok(())
}

pub fn root_dir() -> &'static Utf8Path {
    &get_environment().root
}

pub fn is_quiet() -> bool {
    get_environment().quiet
}

pub fn workers() -> usize {
    get_config().tokenize.workers
}

pub fn output_naming() -> OutputNaming {
    get_config().output.naming
}

pub fn default_output_file() -> Utf8PathBuf {
    root_dir().join(&get_config().output.default_file)
}

/// Where `convert` writes when no output path was given.
pub fn output_path_for(
    input: &Utf8Path,
    naming: OutputNaming,
    default_file: &Utf8Path,
) -> Utf8PathBuf {
    match naming {
        OutputNaming::Derive => input.with_extension("md"),
        OutputNaming::Fixed => default_file.to_owned(),
    }
}
