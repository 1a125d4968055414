// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

pub mod output;
pub mod tokenize;

use camino::{Utf8Path, Utf8PathBuf};
use output::Output;
use serde::{Deserialize, Serialize};
use tokenize::Tokenize;

pub const DEFAULT_CONFIG_PATH: &str = "./Latex2gmd.toml";

#[derive(Deserialize, Debug, Default, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: Output,

    #[serde(default)]
    pub tokenize: Tokenize,
}

/// Resolve the configuration file to load.
///
/// An explicitly requested file must exist. Without one, the default path is
/// used if present and built-in defaults apply otherwise.
pub fn find_config(toml_file: Option<&Utf8Path>) -> eyre::Result<Option<Utf8PathBuf>> {
    match toml_file {
        Some(toml_file) if toml_file.exists() => Ok(Some(toml_file.to_owned())),
        Some(toml_file) => Err(eyre::eyre!("cannot find configuration file: {}", toml_file)),
        None => {
            let default = Utf8PathBuf::from(DEFAULT_CONFIG_PATH);
            Ok(default.exists().then_some(default))
        }
    }
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre::eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::output::OutputNaming;

    #[test]
    fn test_empty_toml() {
        let config = crate::config::parse_config("").unwrap();

        assert_eq!(config.output.default_file, "GMDoutput.md");
        assert_eq!(config.output.naming, OutputNaming::Derive);
        assert_eq!(config.tokenize.workers, 8);
    }

    #[test]
    fn test_simple_toml() {
        let config = crate::config::parse_config(
            r#"
            [output]
            default-file = "out.md"
            naming = "fixed"

            [tokenize]
            workers = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.output.default_file, "out.md");
        assert_eq!(config.output.naming, OutputNaming::Fixed);
        assert_eq!(config.tokenize.workers, 2);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(crate::config::parse_config("[output]\nnaming = \"random\"").is_err());
        assert!(crate::config::parse_config("[tokenize]\nworkers = -1").is_err());
    }

    #[test]
    fn test_default_config_round_trips() {
        let toml = toml::to_string(&crate::config::Config::default()).unwrap();
        let config = crate::config::parse_config(&toml).unwrap();
        assert_eq!(config.output.default_file, "GMDoutput.md");
        assert_eq!(config.tokenize.workers, 8);
    }

    #[test]
    fn test_find_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = camino::Utf8PathBuf::from_path_buf(dir.path().join("missing.toml")).unwrap();
        assert!(crate::config::find_config(Some(missing.as_path())).is_err());

        let present = camino::Utf8PathBuf::from_path_buf(dir.path().join("Latex2gmd.toml")).unwrap();
        std::fs::write(&present, "").unwrap();
        assert_eq!(
            crate::config::find_config(Some(present.as_path())).unwrap(),
            Some(present.clone())
        );
    }
}
