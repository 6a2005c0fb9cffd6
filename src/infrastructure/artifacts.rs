//! Generated artifacts on disk
//!
//! - `ScratchDir`: run-exclusive temporary directory, removed on drop
//! - `write_artifact`: writes a file behind the generated-file header

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::error::{IrmaError, IrmaResult};

/// First line of every generated file
pub const GENERATED_HEADER: &str = "# This file is generated automatically. Do not edit it\n";

/// Write `content` to `path`, prefixed with the generated-file header
pub fn write_artifact(path: &Path, content: &str) -> IrmaResult<()> {
    let mut data = String::with_capacity(GENERATED_HEADER.len() + content.len());
    data.push_str(GENERATED_HEADER);
    data.push_str(content);

    fs::write(path, data).map_err(|source| IrmaError::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "artifact written");
    Ok(())
}

/// Temporary directory owned by one run
///
/// Removed when dropped, so every exit path (including `?` early returns)
/// releases it. `close` does the same explicitly and only logs failures.
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    /// Create a fresh directory, under `root` if given
    pub fn create(root: Option<&Path>) -> IrmaResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("irma-ansible-");
        let dir = match root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(IrmaError::ScratchDir)?;
        debug!(path = %dir.path().display(), "scratch directory created");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Best-effort removal; a directory that is already gone is fine
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        match self.dir.close() {
            Ok(()) => debug!(path = %path.display(), "scratch directory removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "failed to remove scratch directory"),
        }
    }
}
