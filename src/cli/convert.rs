// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{bail, eyre, WrapErr};

use crate::{
    config::output::OutputNaming, environment, path_utils, render, token::TokenStream, tokenizer,
};

#[derive(clap::Args)]
pub struct ConvertCommand {
    /// Path to the LaTeX source file.
    pub input: Utf8PathBuf,

    /// Path to the Markdown output file.
    ///
    /// Defaults to a path chosen by `output.naming` in the configuration.
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Override how the default output path is chosen.
    #[arg(long, value_enum)]
    pub naming: Option<OutputNaming>,
}

pub fn convert(command: &ConvertCommand) -> eyre::Result<()> {
    let output = resolve_output(
        command,
        environment::output_naming(),
        &environment::default_output_file(),
    )?;

    let markdown = convert_file(&command.input, environment::workers())
        .wrap_err_with(|| eyre!("failed to convert `{}`", command.input))?;
    super::write_output(Some(&output), &markdown)
}

/// Pick the output path: `--output`, else `--naming`, else the configured naming.
///
/// The result never points at the input file.
fn resolve_output(
    command: &ConvertCommand,
    configured: OutputNaming,
    default_file: &Utf8Path,
) -> eyre::Result<Utf8PathBuf> {
    let output = match &command.output {
        Some(output) => output.clone(),
        None => {
            let naming = command.naming.unwrap_or(configured);
            environment::output_path_for(&command.input, naming, default_file)
        }
    };

    if same_file(&output, &command.input) {
        bail!(
            "refusing to overwrite the input file `{}`; pass `--output` or `--naming fixed`",
            command.input
        );
    }
    Ok(output)
}

fn same_file(a: &Utf8Path, b: &Utf8Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Tokenize and render one LaTeX file, returning the Markdown text.
pub fn convert_file(input: &Utf8Path, workers: usize) -> eyre::Result<String> {
    let source = std::fs::read_to_string(input)
        .wrap_err_with(|| eyre!("failed to read LaTeX file `{}`", input))?;

    let tokens = tokenizer::tokenize(&source, workers)?;
    super::progress(format_args!(
        "Tokenized {} lines from: {}",
        tokens.len(),
        path_utils::pretty_path(input)
    ));

    let stream = TokenStream::from_tokens(tokens);
    super::warn_if_math_open(&stream, input);
    Ok(render::render(&stream.fragments, &stream.boundaries)?)
}
