// crates/core/src/walker.rs
use std::path::Path;

use ignore::WalkBuilder;

use crate::error::Result;

/// Depth-first walk of `root`, invoking `visit` once for every regular
/// file found at any depth. `root` may itself name a single file.
///
/// Symbolic links are not followed, so cyclic link graphs cannot loop the
/// walk. The walker opens no file handles of its own.
///
/// # Errors
///
/// Any enumeration failure (unreadable directory, entry vanished mid-walk)
/// aborts the walk and is returned as [`crate::TallyError::Walk`].
pub fn walk<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Path),
{
    let mut builder = WalkBuilder::new(root);
    // Every regular file participates in the tally: gitignore, hidden-file
    // and parent-ignore filtering would silently shrink the buckets.
    builder.standard_filters(false);
    builder.follow_links(false);

    for entry in builder.build() {
        let entry = entry?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            visit(entry.path());
        }
    }

    Ok(())
}
