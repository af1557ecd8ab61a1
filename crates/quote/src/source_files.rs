use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Script files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct SourceFiles {
    pub paths: Vec<PathBuf>,
    pub errors: Vec<anyhow::Error>,
    pub num_skipped: usize,
}

/// Recursively collects the files at or under `file_or_dir_paths` whose
/// extension is one of `exts` (with or without a leading `.`).
///
/// A single file argument is always kept, even when its extension doesn't
/// match.
pub(crate) fn collect_source_files(
    file_or_dir_paths: &[PathBuf],
    exts: &[String],
) -> SourceFiles {
    let exts: HashSet<&str> =
        exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!(
        "Scanning {} input paths...",
        file_or_dir_paths.len(),
    );
    let mut files = SourceFiles::default();
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }
                    let matches_ext =
                        path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| exts.contains(ext.as_ref()));
                    if matches_ext {
                        log::trace!("Found file at {path:#?}.");
                        match canonical(path) {
                            Ok(path) => files.paths.push(path),
                            Err(e) => files.errors.push(e),
                        }
                    } else {
                        files.num_skipped += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    files.errors.push(e.into());
                },
            }
        }
    }

    if files.paths.is_empty()
        && file_or_dir_paths.len() == 1
        && let Some(first_arg_path) = file_or_dir_paths.first()
        && first_arg_path.is_file() {
        match canonical(first_arg_path) {
            Ok(path) => {
                log::warn!(
                    "Proceeding with {path:#?} even though it doesn't match \
                    any of the --script-file-exts ({}).",
                    exts.iter()
                        .map(|ext| format!("`.{ext}`"))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
                files.num_skipped = files.num_skipped.saturating_sub(1);
                files.paths.push(path);
            },
            Err(e) => files.errors.push(e),
        }
    }

    files.paths.sort();
    log::debug!("Found {} script files.", files.paths.len());
    files
}

fn canonical(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("resolving {path:#?}"))
}

/// Reads a file as UTF-8 text.
pub(crate) fn read_source(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading {path:#?}"))
}
