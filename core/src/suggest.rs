//! Folder-path autocompletion backing the archive-folder settings field.

use crate::sort::natural_cmp;
use crate::types::FolderMeta;

/// Rank vault folders against the text typed into the settings field.
///
/// Matching is a case-insensitive substring check over the full folder path.
/// Earlier match positions rank first; ties fall back to natural path order.
/// Empty input lists the first `limit` folders in natural order.
pub fn suggest_folders(folders: &[FolderMeta], input: &str, limit: usize) -> Vec<String> {
    let needle = input.trim().to_lowercase();

    let mut ranked: Vec<(usize, String)> = folders
        .iter()
        .filter_map(|folder| {
            let path = folder.path.to_string_lossy().into_owned();
            if needle.is_empty() {
                return Some((0, path));
            }
            path.to_lowercase().find(&needle).map(|position| (position, path))
        })
        .collect();

    ranked.sort_by(|(a_pos, a_path), (b_pos, b_path)| {
        a_pos.cmp(b_pos).then_with(|| natural_cmp(&a_path.to_lowercase(), &b_path.to_lowercase()))
    });

    ranked.into_iter().take(limit).map(|(_, path)| path).collect()
}
