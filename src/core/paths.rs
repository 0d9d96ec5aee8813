use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base ruplace config directory (~/.config/ruplace/ on Unix-like systems)
pub fn ruplace() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("ruplace"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("ruplace"))
    }
}

/// Global ruplace.json config file path
pub fn ruplace_json() -> Result<PathBuf> {
    Ok(ruplace()?.join("ruplace.json"))
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path).map_err(|e| {
        Error::validation_invalid_argument(
            "path",
            format!("Cannot expand '{}': {}", path, e),
            None,
            None,
        )
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_unchanged() {
        assert_eq!(expand("src/main.rs").unwrap(), PathBuf::from("src/main.rs"));
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let err = expand("$RUPLACE_TEST_SURELY_UNDEFINED_VAR/x").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[cfg(not(windows))]
    #[test]
    fn config_file_lives_under_config_dir() {
        let path = ruplace_json().unwrap();
        assert!(path.ends_with(".config/ruplace/ruplace.json"));
    }
}
