use fixlore_extract::Dialect;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

const MAX_FILE_SIZE_BYTES: u64 = 1_048_576;

/// Scanner for candidate source files under a project root
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Scan for analyzable source files (.gitignore aware), returning paths
    /// relative to the root
    pub fn scan(&self) -> Vec<String> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true) // do not scan hidden files by default
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if let Ok(meta) = entry.metadata() {
                        if meta.len() > MAX_FILE_SIZE_BYTES {
                            log::debug!(
                                "skipping large file {} ({} bytes > {})",
                                path.display(),
                                meta.len(),
                                MAX_FILE_SIZE_BYTES
                            );
                            continue;
                        }
                    }

                    if !Dialect::from_path(path).is_recognized() {
                        continue;
                    }

                    let relative = path.strip_prefix(&self.root).unwrap_or(path);
                    files.push(relative.to_string_lossy().into_owned());
                }
                Err(e) => log::warn!("failed to read entry: {e}"),
            }
        }

        files.sort();
        log::info!("found {} candidate files", files.len());
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn scan_keeps_recognized_dialects_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "def main():\n    pass\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not source").unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();

        let files = FileScanner::new(dir.path()).scan();
        assert_eq!(files, vec!["app.py".to_string(), "src/lib.rs".to_string()]);
    }

    #[test]
    fn scan_skips_oversized_files() {
        let dir = tempfile::tempdir().unwrap();
        let big = "x".repeat((MAX_FILE_SIZE_BYTES + 1) as usize);
        fs::write(dir.path().join("huge.py"), big).unwrap();
        fs::write(dir.path().join("ok.py"), "x = 1\n").unwrap();

        let files = FileScanner::new(dir.path()).scan();
        assert_eq!(files, vec!["ok.py".to_string()]);
    }
}
