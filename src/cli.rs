// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

pub mod convert;
pub mod init;
pub mod render;
pub mod tokenize;

use std::{fmt, io::Write};

use camino::Utf8Path;
use eyre::{eyre, WrapErr};

use crate::{environment, path_utils, token::TokenStream};

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Utf8Path>, content: &str) -> eyre::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .wrap_err_with(|| eyre!("failed to write output to `{}`", path))?;
            progress(format_args!("Wrote: {}", path_utils::pretty_path(path)));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .wrap_err("failed to write output to stdout")?;
        }
    }
    Ok(())
}

/// Print a progress line on stdout unless `--quiet` was given.
pub fn progress(args: fmt::Arguments<'_>) {
    _ = write_progress(&mut std::io::stdout().lock(), environment::is_quiet(), args);
}

fn write_progress<W: Write>(
    out: &mut W,
    quiet: bool,
    args: fmt::Arguments<'_>,
) -> std::io::Result<()> {
    if quiet {
        return Ok(());
    }
    writeln!(out, "{}", args)
}

pub fn warn_if_math_open(stream: &TokenStream, source: &Utf8Path) {
    if stream.leaves_math_open() {
        color_print::ceprintln!(
            "<y>Warning: `{}` ends inside a math region; the remaining lines were rendered as equations.</>",
            path_utils::pretty_path(source)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_suppresses_progress() {
        let mut out = Vec::new();
        write_progress(&mut out, true, format_args!("Wrote: {}", "a.md")).unwrap();
        assert!(out.is_empty());

        write_progress(&mut out, false, format_args!("Wrote: {}", "a.md")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Wrote: a.md\n");
    }
}
