// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

mod cli;
mod config;
mod environment;
mod error;
mod path_utils;
mod render;
mod token;
mod tokenizer;

use camino::Utf8PathBuf;
use clap::Parser;

use crate::cli::{
    convert::ConvertCommand, init::InitCommand, render::RenderCommand,
    tokenize::TokenizeCommand,
};

/// Convert LaTeX documents to GitHub Flavored Markdown with equation images.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the configuration file (default: "./Latex2gmd.toml" if present).
    #[arg(short, long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Suppress progress messages. Warnings are still printed.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Convert a LaTeX file to Markdown.
    #[command(visible_alias = "c")]
    Convert(ConvertCommand),

    /// Write the JSON token list of a LaTeX file.
    #[command(visible_alias = "t")]
    Tokenize(TokenizeCommand),

    /// Render a JSON token list to Markdown.
    #[command(visible_alias = "r")]
    Render(RenderCommand),

    /// Create a default configuration file.
    #[command()]
    Init(InitCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    // `init` creates the config file, so it must not require one to exist.
    if !matches!(cli.command, Command::Init(_)) {
        environment::init_environment(cli.config.as_deref(), cli.quiet)?;
    }

    match &cli.command {
        Command::Convert(command) => crate::cli::convert::convert(command)?,
        Command::Tokenize(command) => crate::cli::tokenize::tokenize(command)?,
        Command::Render(command) => crate::cli::render::render(command)?,
        Command::Init(command) => {
            crate::cli::init::init(command, cli.config.as_deref(), cli.quiet)?
        }
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;

    use crate::config::output::OutputNaming;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "latex2gmd", "convert", "paper.tex", "--naming", "fixed", "-q", "-c", "conf.toml",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config.as_deref(), Some(Utf8Path::new("conf.toml")));
        let Command::Convert(command) = cli.command else {
            panic!("expected the convert command");
        };
        assert_eq!(command.naming, Some(OutputNaming::Fixed));
        assert_eq!(command.output, None);
    }

    #[test]
    fn test_init_accepts_global_flags() {
        let cli = Cli::try_parse_from(["latex2gmd", "-q", "init", "-c", "custom.toml"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config.as_deref(), Some(Utf8Path::new("custom.toml")));
        assert!(matches!(cli.command, Command::Init(_)));
    }
}
