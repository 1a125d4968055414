// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use serde::{Deserialize, Serialize};

/// One tokenized source line.
///
/// Field names on the wire follow the JSON produced by earlier tokenizer
/// clients: `{"Order": 0, "Data": "...", "ToggleMathMode": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Token {
    pub order: usize,
    pub data: String,
    pub toggle_math_mode: bool,
}

impl Token {
    pub fn new<S: Into<String>>(order: usize, data: S, toggle_math_mode: bool) -> Self {
        Self {
            order,
            data: data.into(),
            toggle_math_mode,
        }
    }

    pub fn blank(order: usize) -> Self {
        Self::new(order, String::new(), false)
    }

    pub fn boundary(order: usize) -> Self {
        Self::new(order, String::new(), true)
    }
}

/// Parallel fragment and boundary streams, equal in length by construction.
#[derive(Debug, Default)]
pub struct TokenStream {
    pub fragments: Vec<String>,
    pub boundaries: Vec<bool>,
}

impl TokenStream {
    pub fn from_tokens(mut tokens: Vec<Token>) -> Self {
        tokens.sort_by_key(|t| t.order);
        let (fragments, boundaries) = tokens
            .into_iter()
            .map(|t| (t.data, t.toggle_math_mode))
            .unzip();
        Self {
            fragments,
            boundaries,
        }
    }

    /// An odd number of boundaries leaves the last math region unclosed.
    pub fn leaves_math_open(&self) -> bool {
        self.boundaries.iter().filter(|b| **b).count() % 2 == 1
    }
}

pub fn parse_tokens(json: &str) -> eyre::Result<Vec<Token>> {
    let tokens: Vec<Token> =
        serde_json::from_str(json).map_err(|e| eyre::eyre!("failed to parse token list: {}", e))?;
    Ok(tokens)
}
