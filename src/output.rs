use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::Error;

/// Replaces `path` with `bytes` in one step.
///
/// The data goes to a temporary file next to `path` which is renamed over it,
/// so Asterisk never sees a half written file. On error the temporary file is
/// removed and an existing `path` keeps its old contents.
///
/// A symlinked `path` is written through to the file it points at. The result
/// keeps the permissions of the file it replaces; a new file gets `0o666`
/// minus the umask, like a plain `open`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let existing = std::fs::metadata(&target)
        .ok()
        .filter(std::fs::Metadata::is_file)
        .map(|m| m.permissions());

    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".agi-google-tts").suffix(".part");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(io_err)?;

    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(io_err)?;
    }

    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;

    Ok(())
}
