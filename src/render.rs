// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

pub mod escape;

use crate::error::RenderError;

/// Equations are rendered remotely by codecogs and embedded as images.
pub const EQUATION_URL: &str = "http://latex.codecogs.com/gif.latex?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Text,
    Math,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Text => Mode::Math,
            Mode::Math => Mode::Text,
        }
    }
}

#[derive(Debug, Default)]
struct RenderState {
    mode: Mode,

    /// Set after content is emitted; a blank fragment consumes it to emit
    /// a single separating newline.
    pending_blank: bool,
}

impl RenderState {
    fn step(&mut self, fragment: &str, boundary: bool, output: &mut String) {
        if boundary {
            self.mode = self.mode.toggled();
            return;
        }

        if fragment.is_empty() {
            if self.pending_blank {
                output.push('\n');
                self.pending_blank = false;
            }
            return;
        }

        match self.mode {
            Mode::Text => {
                output.push_str(&escape::text_line_breaks(fragment));
                output.push('\n');
            }
            Mode::Math => {
                output.push_str(&equation_image(fragment));
                output.push_str("\n\n");
            }
        }
        self.pending_blank = true;
    }
}

pub fn equation_image(math: &str) -> String {
    format!("![equation]({}{})", EQUATION_URL, escape::escape_math(math))
}

/// Render parallel fragment/boundary streams to Markdown.
///
/// A `true` boundary toggles between prose and math; its fragment is dropped.
/// An input that ends inside a math region is not an error.
pub fn render<S: AsRef<str>>(
    fragments: &[S],
    boundaries: &[bool],
) -> Result<String, RenderError> {
    if fragments.len() != boundaries.len() {
        return Err(RenderError::LengthMismatch {
            fragments: fragments.len(),
            boundaries: boundaries.len(),
        });
    }

    let mut state = RenderState::default();
    let mut output = String::new();
    for (fragment, &boundary) in fragments.iter().zip(boundaries) {
        state.step(fragment.as_ref(), boundary, &mut output);
    }
    Ok(output)
}
