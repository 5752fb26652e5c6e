//! A medium that keeps one JSON file per key in a directory.
//!
//! Writes never modify the target file in place. The new value goes to a
//! `<key>.json.tmp` sibling, is flushed to disk, and is then renamed over
//! the target, so a reader sees either the old or the new value in full.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::MediumError;
use crate::medium::DurableMedium;

/// Directory-backed durable medium.
#[derive(Debug, Clone)]
pub struct FileMedium {
    dir: PathBuf,
}

impl FileMedium {
    /// A medium rooted at `dir`.
    ///
    /// Nothing touches the filesystem until the first write, which creates
    /// the directory. Until then every key reads as absent.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, MediumError> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if valid {
            Ok(self.dir.join(format!("{key}.json")))
        } else {
            Err(MediumError::InvalidKey(key.to_owned()))
        }
    }
}

impl DurableMedium for FileMedium {
    fn read(&self, key: &str) -> Result<Option<String>, MediumError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(MediumError::Io {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), MediumError> {
        self.write_with(key, value, sync_directory)
    }
}

impl FileMedium {
    fn write_with(
        &self,
        key: &str,
        value: &str,
        sync_dir: fn(&Path) -> std::io::Result<()>,
    ) -> Result<(), MediumError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        let io_error = |source| MediumError::Io {
            key: key.to_owned(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_error)?;
        if let Err(source) = write_and_rename(&tmp, &path, value.as_bytes()) {
            // The target is untouched; drop the partial sibling if one exists.
            let _ = fs::remove_file(&tmp);
            return Err(io_error(source));
        }

        // The value is committed once the rename succeeds.
        if let Err(error) = sync_dir(&self.dir) {
            tracing::warn!(key, %error, "directory sync failed after commit");
        }
        Ok(())
    }
}

fn write_and_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = File::create(tmp)?;
    f.write_all(bytes)?;
    f.sync_all()?;
    fs::rename(tmp, path)
}

#[cfg(unix)]
fn sync_directory(path: &Path) -> std::io::Result<()> {
    File::open(path)?.sync_all()
}

#[cfg(not(unix))]
fn sync_directory(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
