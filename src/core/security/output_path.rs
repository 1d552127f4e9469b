use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

/// Errors that can occur during output path validation
#[derive(Debug, thiserror::Error)]
pub enum OutputPathError {
    #[error("Output path '{path}' is outside allowed output root '{root}'")]
    OutsideOutputRoot { path: PathBuf, root: PathBuf },

    #[error("Output directory does not exist: '{path}'")]
    ParentNotFound { path: PathBuf },

    #[error("Output path '{path}' is an existing directory")]
    IsADirectory { path: PathBuf },

    #[error("Output path '{path}' has no file name")]
    MissingFileName { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Validates a path a tool wants to write to.
///
/// The target file usually does not exist yet, so validation works on the
/// parent directory:
/// 1. The parent directory must exist and canonicalize (resolving `.`,
///    `..` and symlinks)
/// 2. If an output root is configured, the canonical parent must be within it
/// 3. The target itself must not be an existing directory
///
/// # Returns
///
/// * `Ok(PathBuf)` - canonical parent joined with the target file name
/// * `Err(OutputPathError)` - if validation fails
pub fn validate_output_path(input_path: &str, config: &Config) -> Result<PathBuf, OutputPathError> {
    let path = Path::new(input_path);

    // file_name() is None for paths ending in ".." or a separator
    let file_name = path
        .file_name()
        .ok_or_else(|| OutputPathError::MissingFileName {
            path: path.to_path_buf(),
        })?;

    if path.is_dir() {
        return Err(OutputPathError::IsADirectory {
            path: path.to_path_buf(),
        });
    }

    // An empty parent means a bare file name: resolve against the cwd.
    let parent = match path.parent() {
        Some(p) if p.components().next().is_some() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            OutputPathError::ParentNotFound { path: parent.clone() }
        } else {
            OutputPathError::IoError {
                path: parent.clone(),
                error: e,
            }
        }
    })?;

    let canonical = canonical_parent.join(file_name);

    if let Some(ref root) = config.security.output_root {
        let canonical_root =
            root.canonicalize()
                .map_err(|e| OutputPathError::IoError {
                    path: root.clone(),
                    error: e,
                })?;

        if !canonical.starts_with(&canonical_root) {
            return Err(OutputPathError::OutsideOutputRoot {
                path: canonical,
                root: canonical_root,
            });
        }
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_with_root(root: Option<PathBuf>) -> Config {
        let mut config = Config::default();
        config.security.output_root = root;
        config
    }

    #[test]
    fn test_no_root_allows_existing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("qr.svg");

        let config = config_with_root(None);
        let result = validate_output_path(target.to_str().unwrap(), &config);

        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_parent_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("no-such-dir").join("qr.svg");

        let config = config_with_root(None);
        let result = validate_output_path(target.to_str().unwrap(), &config);

        assert!(matches!(result, Err(OutputPathError::ParentNotFound { .. })));
    }

    #[test]
    fn test_path_within_root() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("qr.svg");

        let config = config_with_root(Some(root.path().to_path_buf()));
        let result = validate_output_path(target.to_str().unwrap(), &config);

        assert!(result.is_ok());
    }

    #[test]
    fn test_path_outside_root_rejected() {
        let root = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let target = elsewhere.path().join("qr.svg");

        let config = config_with_root(Some(root.path().to_path_buf()));
        let result = validate_output_path(target.to_str().unwrap(), &config);

        assert!(matches!(
            result,
            Err(OutputPathError::OutsideOutputRoot { .. })
        ));
    }

    #[test]
    fn test_traversal_out_of_root_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir(&root).unwrap();

        // root/../qr.svg canonicalizes to temp_dir/qr.svg, outside the root
        let target = root.join("..").join("qr.svg");

        let config = config_with_root(Some(root.clone()));
        let result = validate_output_path(target.to_str().unwrap(), &config);

        assert!(matches!(
            result,
            Err(OutputPathError::OutsideOutputRoot { .. })
        ));
    }

    #[test]
    fn test_existing_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("sub");
        fs::create_dir(&subdir).unwrap();

        let config = config_with_root(None);
        let result = validate_output_path(subdir.to_str().unwrap(), &config);

        assert!(matches!(result, Err(OutputPathError::IsADirectory { .. })));
    }

    #[test]
    fn test_overwriting_existing_file_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("qr.svg");
        fs::write(&target, "old").unwrap();

        let config = config_with_root(Some(temp_dir.path().to_path_buf()));
        let result = validate_output_path(target.to_str().unwrap(), &config);

        assert!(result.is_ok());
    }
}
