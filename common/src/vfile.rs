use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ahash::AHashMap;

/// Whole contents of one file.
#[derive(Default, Clone)]
pub struct VFile {
    pub data: Vec<u8>,
}

/// Files held in memory, keyed by the path they were loaded from.
#[derive(Default, Clone)]
pub struct VFileSystem {
    files: AHashMap<String, VFile>,
}

impl VFileSystem {
    pub fn insert(&mut self, path: impl Into<String>, data: Vec<u8>) {
        self.files.insert(path.into(), VFile { data });
    }

    /// Read a file from disk into the file system, returning its key.
    pub fn load_file(&mut self, path: &Path) -> io::Result<String> {
        let data = fs::read(path)?;
        let key = path.to_string_lossy().into_owned();
        log::debug!("loaded {key} ({} bytes)", data.len());
        self.insert(key.clone(), data);
        Ok(key)
    }

    /// Load every file directly inside `dir` whose extension matches
    /// `extension`, ignoring case. Returns how many files were loaded.
    pub fn load_dir(&mut self, dir: &Path, extension: &str) -> io::Result<usize> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && has_extension(path, extension))
            .collect();
        paths.sort();

        for path in &paths {
            self.load_file(path)?;
        }
        Ok(paths.len())
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.get_str(&path.to_string_lossy())
    }

    pub fn get_str(&self, path: &str) -> Option<&[u8]> {
        match self.files.get(path) {
            Some(file) => Some(&file.data),
            None => {
                log::error!("{:?} file not found", path);
                None
            }
        }
    }

    /// All files, sorted by path.
    pub fn files_sorted(&self) -> Vec<(&str, &[u8])> {
        let mut files: Vec<(&str, &[u8])> = self
            .files
            .iter()
            .map(|(path, file)| (path.as_str(), file.data.as_slice()))
            .collect();
        files.sort_by_key(|(path, _)| *path);
        files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}
