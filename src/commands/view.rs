//! Showing the located config file.

use std::path::Path;

/// Header naming the file, then its decoded contents.
pub fn render_view(path: &Path, text: &str) -> String {
    let mut out = format!("Config file: {}\n\n", path.display());
    out.push_str(text);
    if !text.is_empty() && !text.ends_with('\n') {
        out.push('\n');
    }
    out
}
