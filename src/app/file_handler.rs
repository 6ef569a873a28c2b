//! File system checks for the graph input.

use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Validates that `graph_file_path` exists, is a file, and is valid UTF-8,
/// returning it as a string slice for the loader.
///
/// # Errors
/// Returns `AppError::General` if the path is missing or not a file, and
/// `AppError::InvalidPath` if it cannot be represented as UTF-8.
pub fn validate_graph_file(graph_file_path: &Path, quiet_mode: bool) -> Result<&str, AppError> {
    if !graph_file_path.exists() {
        let error_msg = format!("File not found: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !graph_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", graph_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    graph_file_path.to_str().ok_or_else(|| {
        verbose_eprintln!(
            quiet_mode,
            "Input Error: path is not valid UTF-8: {}",
            graph_file_path.display()
        );
        AppError::InvalidPath(graph_file_path.display().to_string())
    })
}
