use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{BumperError, Result};

/// Resolves the metadata file to operate on.
///
/// - No path, or an empty one: `./<file_name>`, checked only when it is loaded
/// - A path that cannot be stat'ed: [`BumperError::Path`]
/// - A directory: `<dir>/<file_name>`
/// - Anything else is used as given
pub fn resolve_metadata_path(path: Option<&Path>, file_name: &str) -> Result<PathBuf> {
    let path = match path {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => return Ok(Path::new(".").join(file_name)),
    };

    let metadata = fs::metadata(path).map_err(|source| BumperError::Path {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        debug!(dir = %path.display(), file_name, "metadata path is a directory");
        Ok(path.join(file_name))
    } else {
        Ok(path.to_path_buf())
    }
}

/// Reads the metadata file as UTF-8 text.
pub fn load(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "loaded metadata file");
    Ok(contents)
}

/// Replaces the metadata file with `contents`.
///
/// The new contents are written to a temporary file next to the target and
/// renamed over it, so the target is either fully updated or left as it was.
/// The target's permissions are carried over to the replacement. A symlinked
/// target is written through: the file it points to is replaced, the link stays.
pub fn persist(path: &Path, contents: &str) -> Result<()> {
    let target = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path)?,
        _ => path.to_path_buf(),
    };
    let path = target.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;

    if let Ok(existing) = fs::metadata(path) {
        fs::set_permissions(temp.path(), existing.permissions())?;
    }

    temp.persist(path).map_err(|e| BumperError::Io(e.error))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote metadata file");
    Ok(())
}
