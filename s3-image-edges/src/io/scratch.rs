/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Error;

/// Per-invocation scratch location for the image being transformed.
///
/// Every invocation gets its own uniquely named directory, so warm instances
/// that serve invocations back to back (or concurrently) never share a
/// scratch path. The directory and its contents are removed when the value is
/// dropped, on every exit path.
#[derive(Debug)]
pub(crate) struct Scratch {
    // Held for its Drop impl; `path` points inside it.
    _dir: TempDir,
    path: PathBuf,
}

impl Scratch {
    /// Allocate a fresh scratch directory containing a single file slot named
    /// `file_name`.
    pub(crate) fn new(file_name: &str) -> Result<Scratch, Error> {
        let dir = tempfile::Builder::new().prefix("image-edges-").tempdir()?;
        let path = dir.path().join(file_name);
        Ok(Scratch { _dir: dir, path })
    }

    /// Path of the scratch file slot.
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Write `bytes` to the scratch file, replacing any previous contents.
    pub(crate) async fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scratch_paths_are_unique() {
        let a = Scratch::new("object.png").unwrap();
        let b = Scratch::new("object.png").unwrap();
        assert_ne!(a.path(), b.path());

        a.write(b"first").await.unwrap();
        b.write(b"second").await.unwrap();
        assert_eq!(tokio::fs::read(a.path()).await.unwrap(), b"first");
        assert_eq!(tokio::fs::read(b.path()).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn write_replaces_previous_contents() {
        let scratch = Scratch::new("object.png").unwrap();
        scratch.write(b"the original download").await.unwrap();
        scratch.write(b"edges").await.unwrap();
        assert_eq!(tokio::fs::read(scratch.path()).await.unwrap(), b"edges");
    }

    #[tokio::test]
    async fn dropped_scratch_is_removed() {
        let scratch = Scratch::new("object.png").unwrap();
        scratch.write(b"bytes").await.unwrap();
        let path = scratch.path().to_path_buf();
        drop(scratch);
        assert!(!path.exists());
    }
}
