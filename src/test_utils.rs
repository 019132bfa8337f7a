#[cfg(test)]
pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Writes `content` to `relative` below `root`, creating parent directories.
    pub fn write_module(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// A small package with one declaration of each kind, a non-source file
    /// and a byte-code cache that must not be scanned.
    pub fn create_package_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_module(
            dir.path(),
            "io_utils.py",
            "StringIO = None\ndef string_io():\n    pass\nclass StringIOWrapper:\n    pass\n",
        );
        write_module(dir.path(), "notes.txt", "StringIO = 1\n");
        write_module(dir.path(), "__pycache__/io_utils.py", "StringIOCached = 1\n");
        dir
    }
}
