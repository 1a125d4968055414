// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_FILE: &str = "GMDoutput.md";

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Output {
    /// Used when no output path is given and `naming` is `fixed`.
    pub default_file: String,
    pub naming: OutputNaming,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            default_file: DEFAULT_OUTPUT_FILE.to_string(),
            naming: OutputNaming::default(),
        }
    }
}

/// How the output path is chosen when none is given on the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum, Default, Deserialize, Serialize)]
pub enum OutputNaming {
    /// `paper.tex` is written to `paper.md` beside it.
    #[default]
    #[serde(rename = "derive")]
    Derive,

    /// Always write to `default-file`.
    #[serde(rename = "fixed")]
    Fixed,
}
