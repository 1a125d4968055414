// Copyright (c) 2025 latex2gmd Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Calvin Liu

use camino::{Utf8Component, Utf8Path};

/// Normalize a path for display: `./a/../b/c` becomes `b/c`.
pub fn pretty_path(path: &Utf8Path) -> String {
    path.components()
        .fold(Vec::new(), |mut kept, component| {
            match component {
                Utf8Component::ParentDir => {
                    kept.pop();
                }
                Utf8Component::Normal(name) => kept.push(name),
                _ => (),
            }
            kept
        })
        .join("/")
}

/// Split a file path into its parent directory and file name.
pub fn split_file_name(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    Some((path.parent()?, path.file_name()?))
}
