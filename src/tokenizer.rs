// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use std::sync::LazyLock;

use eyre::WrapErr;
use rayon::prelude::*;
use regex_lite::Regex;

use crate::token::Token;

/// Environments whose begin/end lines delimit a math region.
static MATH_ENVIRONMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(?:begin|end)\{(?:equation|align|flalign|multline|math|center)")
        .expect("math environment pattern must compile")
});

/// Preamble and bookkeeping lines that produce no output.
const IGNORED: &[&str] = &[
    "\\documentclass",
    "\\usepackage",
    "\\begin{document",
    "\\end{document",
    "\\maketitle",
    "\\label",
];

/// Commands rewritten to a Markdown prefix followed by their argument.
const HEADINGS: &[(&str, &str)] = &[
    ("\\title", "# "),
    ("\\author", "By: "),
    ("\\section", "## "),
    ("\\subsection", "### "),
];

/// Classify a single source line.
///
/// Checks run in a fixed order and the first match wins, so a line holding
/// both `\begin{equation}` and `\label{..}` is a math boundary.
pub fn tokenize_line(order: usize, line: &str) -> Token {
    if !line.is_empty() {
        if MATH_ENVIRONMENT.is_match(line) {
            return Token::boundary(order);
        }
        if IGNORED.iter().any(|keyword| line.contains(keyword)) {
            return Token::blank(order);
        }
        if line.contains("\\begin{abstract") {
            return Token::new(order, "## Abstract", false);
        }
        if line.contains("\\end{abstract") {
            return Token::blank(order);
        }
        for (command, prefix) in HEADINGS {
            if line.contains(command) {
                let heading = format!("{}{}", prefix, command_argument(line, command));
                return Token::new(order, heading.trim_matches(' '), false);
            }
        }
        if let Some(pos) = line.find('%') {
            return Token::new(order, line[..pos].trim_matches(' '), false);
        }
    }

    Token::new(order, line.trim_matches(' '), false)
}

/// The text between the first `{` after `command` and the last `}` on the line.
fn command_argument<'a>(line: &'a str, command: &str) -> &'a str {
    let Some(start) = line.find(command) else {
        return "";
    };
    let rest = &line[start + command.len()..];
    let Some(open) = rest.find('{') else {
        return "";
    };
    let inner = &rest[open + 1..];
    match inner.rfind('}') {
        Some(close) => &inner[..close],
        None => inner,
    }
}

/// Tokenize every line of `source` on a pool of `workers` threads.
///
/// Tokens come back in line order. `workers == 0` uses rayon's default.
pub fn tokenize(source: &str, workers: usize) -> eyre::Result<Vec<Token>> {
    let lines: Vec<&str> = source.lines().collect();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .wrap_err("failed to start tokenizer workers")?;

    let tokens: Vec<Token> = pool.install(|| {
        lines
            .par_iter()
            .enumerate()
            .map(|(order, line)| tokenize_line(order, line))
            .collect()
    });
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(line: &str) -> String {
        tokenize_line(0, line).data
    }

    #[test]
    fn test_math_boundaries() {
        for line in [
            "\\begin{equation}",
            "\\end{equation*}",
            "  \\begin{align}",
            "\\end{flalign}",
            "\\begin{multline}",
            "\\begin{math}",
            "\\end{center}",
            "\\begin{equation}\\label{eq:1}",
        ] {
            assert_eq!(tokenize_line(4, line), Token::boundary(4), "{}", line);
        }
        assert!(!tokenize_line(0, "\\begin{itemize}").toggle_math_mode);
    }

    #[test]
    fn test_ignored_lines() {
        for line in [
            "\\documentclass{article}",
            "\\usepackage{amsmath}",
            "\\begin{document}",
            "\\end{document}",
            "\\maketitle",
            "\\label{sec:intro}",
            "\\end{abstract}",
        ] {
            assert_eq!(tokenize_line(1, line), Token::blank(1), "{}", line);
        }
    }

    #[test]
    fn test_headings() {
        assert_eq!(data("\\begin{abstract}"), "## Abstract");
        assert_eq!(data("\\title{On Numbers}"), "# On Numbers");
        assert_eq!(data("\\author{A. Person}"), "By: A. Person");
        assert_eq!(data("\\section{Introduction}"), "## Introduction");
        assert_eq!(data("\\subsection{Details}"), "### Details");
        assert_eq!(data("\\section*{Starred}"), "## Starred");
        assert_eq!(data("\\section{ Padded }"), "##  Padded");
        assert_eq!(data("\\title"), "#");
    }

    #[test]
    fn test_comments() {
        assert_eq!(data("Some text % a remark"), "Some text");
        assert_eq!(data("% whole line"), "");
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(data("   plain prose  "), "plain prose");
        assert_eq!(data("\tindented"), "\tindented");
        assert_eq!(tokenize_line(7, ""), Token::blank(7));
    }

    #[test]
    fn test_tokenize_keeps_line_order() {
        let source = (0..200)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let tokens = tokenize(&source, 4).unwrap();
        assert_eq!(tokens.len(), 200);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.order, i);
            assert_eq!(token.data, format!("line {}", i));
        }
    }

    #[test]
    fn test_tokenize_crlf_and_default_workers() {
        let tokens = tokenize("a\r\n\\begin{equation}\r\nx\r\n", 0).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(0, "a", false),
                Token::boundary(1),
                Token::new(2, "x", false),
            ]
        );
    }
}
