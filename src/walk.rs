use std::fs;
use std::path::{Path, PathBuf};

/// Recursively lists all regular files under `root` whose path satisfies
/// `filter`. Directories are always descended into; the filter only decides
/// which files end up in the result.
///
/// A listing error anywhere in the tree (missing directory, permission)
/// propagates as a fatal failure for the whole walk; there is no retry.
pub fn list_files<F>(root: &Path, filter: &F) -> Result<Vec<PathBuf>, std::io::Error>
where
    F: Fn(&Path) -> bool,
{
    let mut files = Vec::new();
    visit_dir(root, filter, &mut files)?;
    Ok(files)
}

fn visit_dir<F>(dir: &Path, filter: &F, results: &mut Vec<PathBuf>) -> Result<(), std::io::Error>
where
    F: Fn(&Path) -> bool,
{
    for entry_res in fs::read_dir(dir)? {
        let entry = entry_res?;
        let path = entry.path();
        if path.is_dir() {
            visit_dir(&path, filter, results)?;
        } else if path.is_file() && filter(&path) {
            results.push(path);
        }
    }
    Ok(())
}

/// Predicate matching files with the given extension, case-insensitively.
/// `extension("md")` matches `post.md` and `POST.MD` but not `post.mdx`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case(extension))
}
