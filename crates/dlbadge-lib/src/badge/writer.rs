use super::{BadgeArtifact, BadgeError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write the artifact to `path`, replacing whatever was there
///
/// Missing parent directories are created. The bytes land in a temporary
/// file next to the target which is then renamed over it, so readers never
/// observe a partially written badge.
pub fn write_artifact(path: &Path, artifact: &BadgeArtifact) -> Result<(), BadgeError> {
    let bytes = artifact.to_bytes()?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| BadgeError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let write_err = |source: std::io::Error| BadgeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(&bytes).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    file.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = bytes.len(), "Badge written");
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("writer.test.rs");
}
