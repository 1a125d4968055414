// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};

use crate::token::{self, TokenStream};

#[derive(clap::Args)]
pub struct RenderCommand {
    /// Path to a JSON token file, as written by `tokenize`.
    pub tokens: Utf8PathBuf,

    /// Path to the Markdown output file. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

pub fn render(command: &RenderCommand) -> eyre::Result<()> {
    let markdown = render_token_file(&command.tokens)?;
    super::write_output(command.output.as_deref(), &markdown)
}

pub fn render_token_file(path: &Utf8Path) -> eyre::Result<String> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| eyre!("failed to read token file `{}`", path))?;
    let tokens = token::parse_tokens(&json)
        .wrap_err_with(|| eyre!("failed to load tokens from `{}`", path))?;

    let stream = TokenStream::from_tokens(tokens);
    super::warn_if_math_open(&stream, path);
    Ok(crate::render::render(&stream.fragments, &stream.boundaries)?)
}
