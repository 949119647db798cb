use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::buckets::{default_buckets, DEFAULT_BUCKET, TRACKED_PILE_MAX};

/// On-disk record of learned move distributions.
///
/// One line per tracked pile size in order from 1, each line the bucket
/// contents as comma-separated integers. No header, no metadata. An
/// absent file is not an error; it yields the default table. The path is
/// supplied at construction so tests can point the store anywhere.
pub struct MoveStore {
    path: PathBuf,
}

impl MoveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MoveStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the bucket table.
    ///
    /// A file with fewer than [`TRACKED_PILE_MAX`] lines is completed with
    /// default buckets; lines beyond the tracked range are ignored. A line
    /// that fails integer parsing is a hard error — silently substituting
    /// defaults would mask corrupted learned state.
    pub fn load(&self) -> Result<Vec<Vec<u32>>, StoreError> {
        if !self.path.exists() {
            return Ok(default_buckets());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let mut buckets = Vec::with_capacity(TRACKED_PILE_MAX);
        for (line_no, raw) in content.lines().enumerate() {
            if buckets.len() == TRACKED_PILE_MAX {
                break;
            }
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let mut bucket = Vec::new();
            for field in line.split(',') {
                let take =
                    field
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| StoreError::MalformedLine {
                            path: self.path.clone(),
                            line: line_no + 1,
                            content: raw.to_string(),
                        })?;
                bucket.push(take);
            }
            buckets.push(bucket);
        }

        while buckets.len() < TRACKED_PILE_MAX {
            buckets.push(DEFAULT_BUCKET.to_vec());
        }
        Ok(buckets)
    }

    /// Persist the bucket table, one comma-separated line per pile size.
    ///
    /// Writes to a sibling temp file and renames it over the target, so a
    /// failed write never leaves a half-written record behind. The caller's
    /// in-memory table is untouched either way.
    pub fn save(&self, buckets: &[Vec<u32>]) -> Result<(), StoreError> {
        let mut out = String::new();
        for bucket in buckets {
            let line: Vec<String> = bucket.iter().map(u32::to_string).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, out).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> MoveStore {
        MoveStore::new(dir.path().join("moves.txt"))
    }

    #[test]
    fn test_absent_file_yields_default_table() {
        let dir = tempfile::tempdir().unwrap();
        let buckets = store_in(&dir).load().unwrap();
        assert_eq!(buckets.len(), TRACKED_PILE_MAX);
        assert!(buckets.iter().all(|b| b == &[1, 2, 3]));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut table = default_buckets();
        table[8] = vec![1, 2, 2, 3];
        table[19] = vec![1, 1, 1, 2, 3, 3];

        store.save(&table).unwrap();
        assert_eq!(store.load().unwrap(), table);

        // A second save/load cycle reproduces the table exactly.
        store.save(&store.load().unwrap()).unwrap();
        assert_eq!(store.load().unwrap(), table);
    }

    #[test]
    fn test_short_file_is_padded_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "1,1,2,3\n1,2,3\n2,2\n1,3\n3\n").unwrap();

        let buckets = store.load().unwrap();
        assert_eq!(buckets.len(), TRACKED_PILE_MAX);
        assert_eq!(buckets[0], vec![1, 1, 2, 3]);
        assert_eq!(buckets[4], vec![3]);
        assert!(buckets[5..].iter().all(|b| b == &[1, 2, 3]));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "1,2,3\n\n1,2,2,3\n").unwrap();

        let buckets = store.load().unwrap();
        assert_eq!(buckets[0], vec![1, 2, 3]);
        assert_eq!(buckets[1], vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_extra_lines_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut content = "1,2,3\n".repeat(TRACKED_PILE_MAX);
        content.push_str("9,9,9\n");
        fs::write(store.path(), content).unwrap();

        let buckets = store.load().unwrap();
        assert_eq!(buckets.len(), TRACKED_PILE_MAX);
        assert!(buckets.iter().all(|b| b == &[1, 2, 3]));
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "1,2,3\n1,x,3\n").unwrap();

        let err = store.load().unwrap_err();
        match err {
            StoreError::MalformedLine { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "1,x,3");
            }
            other => panic!("expected MalformedLine, got: {other}"),
        }
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&default_buckets()).unwrap();
        let mut table = default_buckets();
        table[0] = vec![1, 1, 1];
        store.save(&table).unwrap();

        assert_eq!(store.load().unwrap()[0], vec![1, 1, 1]);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&default_buckets()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["moves.txt".to_string()]);
    }
}
