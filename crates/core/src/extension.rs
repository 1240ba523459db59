// crates/core/src/extension.rs
use std::path::Path;

/// Extension of a file *name*, including the leading dot.
///
/// Last-dot rule: `file.tar.gz` yields `.gz`, a dotless name yields `""`,
/// and a leading-dot-only name such as `.gitignore` yields the whole name.
/// No case normalization.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[pos..],
        None => "",
    }
}

/// [`extension_of`] applied to the file-name component of `path`.
pub fn file_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| extension_of(&name.to_string_lossy()).to_owned())
        .unwrap_or_default()
}
