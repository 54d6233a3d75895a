//! Puzzle input files on disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Locates and loads puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. A single
/// `(year, day)` may be redirected to an explicit file.
pub struct InputStore {
    input_dir: PathBuf,
    override_file: Option<((u16, u8), PathBuf)>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            override_file: None,
        }
    }

    /// Read `year`/`day` from `path` instead of the input directory
    pub fn with_override(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.override_file = Some(((year, day), path));
        self
    }

    /// Where the input for a specific year/day is expected
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some((key, path)) if *key == (year, day) => path.clone(),
            _ => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Load an input with `\r\n` normalized to `\n` and surrounding
    /// whitespace trimmed
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content.replace("\r\n", "\n").trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(InputError::Missing(path)),
            Err(source) => Err(InputError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert_eq!(store.path(2024, 1), temp.path().join("2024_day01.txt"));
        assert_eq!(store.path(2024, 25), temp.path().join("2024_day25.txt"));
    }

    #[test]
    fn test_read_normalizes() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 7));
        assert!(matches!(store.read(2024, 7), Err(InputError::Missing(_))));

        fs::write(store.path(2024, 7), "190: 10 19\r\n3267: 81 40 27\r\n\r\n").unwrap();
        assert!(store.contains(2024, 7));
        assert_eq!(store.read(2024, 7).unwrap(), "190: 10 19\n3267: 81 40 27");
    }

    #[test]
    fn test_override_applies_to_one_day() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.txt");
        fs::write(&custom, "  125 17\n").unwrap();

        let store = InputStore::new(temp.path().join("inputs")).with_override(2024, 11, custom.clone());
        assert_eq!(store.path(2024, 11), custom);
        assert_eq!(store.read(2024, 11).unwrap(), "125 17");
        assert_eq!(store.path(2024, 12), temp.path().join("inputs").join("2024_day12.txt"));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(store.path(2024, 2)).unwrap();

        assert!(!store.contains(2024, 2));
        assert!(matches!(store.read(2024, 2), Err(InputError::Io { .. })));
    }
}
