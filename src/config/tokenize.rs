// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use serde::{Deserialize, Serialize};

pub const DEFAULT_WORKERS: usize = 8;

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Tokenize {
    /// Tokenizer threads; `0` lets rayon decide.
    pub workers: usize,
}

impl Default for Tokenize {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}
