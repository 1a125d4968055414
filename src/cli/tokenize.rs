// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use camino::Utf8PathBuf;
use eyre::{eyre, WrapErr};

use crate::{environment, tokenizer};

#[derive(clap::Args)]
pub struct TokenizeCommand {
    /// Path to the LaTeX source file.
    pub input: Utf8PathBuf,

    /// Path to the JSON token file. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

/// Dump the token list in the JSON wire format accepted by `render`.
pub fn tokenize(command: &TokenizeCommand) -> eyre::Result<()> {
    let source = std::fs::read_to_string(&command.input)
        .wrap_err_with(|| eyre!("failed to read LaTeX file `{}`", command.input))?;

    let tokens = tokenizer::tokenize(&source, environment::workers())?;
    let json = serde_json::to_string_pretty(&tokens).wrap_err("failed to serialize tokens")?;
    super::write_output(command.output.as_deref(), &json)
}
