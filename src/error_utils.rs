//! Shared error utilities

use miette::NamedSource;
use std::path::Path;

/// Format a file path for error display, relative to the working directory when possible
pub fn format_error_path(path: &Path) -> String {
    let display_path = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf());

    display_path.display().to_string()
}

/// Create a NamedSource with proper formatting for error display
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(format_error_path(path), content)
}

/// Convert a 1-based line and column (as reported by serde_json) to a byte offset.
///
/// Column 0 means "before the first character of the line". Positions past the
/// end of the source clamp to its length.
pub fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let target_line = line.saturating_sub(1);
    let mut line_start = source.len();

    if target_line == 0 {
        line_start = 0;
    } else {
        let mut current_line = 0;
        for (idx, ch) in source.char_indices() {
            if ch == '\n' {
                current_line += 1;
                if current_line == target_line {
                    line_start = idx + 1;
                    break;
                }
            }
        }
    }

    (line_start + column.saturating_sub(1)).min(source.len())
}
