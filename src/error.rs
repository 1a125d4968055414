// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use thiserror::Error;

/// Errors raised by [`crate::render::render`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// The fragment and boundary streams must be paired index-for-index.
    #[error("token streams differ in length: {fragments} fragments, {boundaries} boundary flags")]
    LengthMismatch { fragments: usize, boundaries: usize },
}
