// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use camino::{Utf8Path, Utf8PathBuf};
use eyre::WrapErr;

use crate::{
    config::{self, Config},
    path_utils,
};

#[derive(clap::Args)]
pub struct InitCommand {
    /// Directory in which to create `Latex2gmd.toml`.
    #[arg(default_value = "./")]
    pub path: Utf8PathBuf,
}

/// Write a default configuration to `--config` if given, else into `command.path`.
pub fn init(command: &InitCommand, config: Option<&Utf8Path>, quiet: bool) -> eyre::Result<()> {
    let config_path = match config {
        Some(config) => config.to_owned(),
        None => {
            let dir = &command.path;
            if !dir.exists() {
                return Err(eyre::eyre!("Does not exist: {}", dir));
            }
            dir.join(config::DEFAULT_CONFIG_PATH)
        }
    };

    write_default_config(&config_path)?;
    if !quiet {
        println!("Created new config at: {}", path_utils::pretty_path(&config_path));
    }
    Ok(())
}

fn write_default_config(config_path: &Utf8Path) -> eyre::Result<()> {
    if config_path.exists() {
        return Err(eyre::eyre!("Already exists: {}", config_path));
    }

    let toml = toml::to_string(&Config::default()).wrap_err("failed to serialize default config")?;
    std::fs::write(config_path, toml)
        .wrap_err_with(|| eyre::eyre!("failed to create config file `{}`", config_path))
}
