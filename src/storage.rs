//! ScoreStore: the persisted leaderboard.
//!
//! Past final scores live in a JSON file as a bare array, append-only in play
//! order; the leaderboard reads them sorted descending. A missing or corrupt
//! file reads as an empty list rather than failing the game.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// On-disk format: a plain JSON array of integers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct ScoreList(Vec<u32>);

#[derive(Debug)]
pub struct ScoreStore {
    path: PathBuf,
    scores: ScoreList,
}

impl ScoreStore {
    /// Open a store at `path`, loading whatever valid data is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let scores = load_scores(&path);
        Self { path, scores }
    }

    /// Default store location: `.tui-snake-scores.json` in the home directory,
    /// falling back to the current directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".tui-snake-scores.json")
    }

    /// All recorded scores, in play order
    pub fn scores(&self) -> &[u32] {
        &self.scores.0
    }

    /// The best `n` scores, descending
    pub fn top(&self, n: usize) -> Vec<u32> {
        let mut sorted = self.scores.0.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.truncate(n);
        sorted
    }

    /// Record a final score and persist the list
    pub fn append(&mut self, score: u32) -> Result<()> {
        self.scores.0.push(score);
        self.save()
    }

    /// Empty the list and remove the file
    pub fn clear(&mut self) -> Result<()> {
        self.scores.0.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("removing score file {}", self.path.display()))?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&self.scores)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing score file {}", self.path.display()))?;
        Ok(())
    }
}

fn load_scores(path: &Path) -> ScoreList {
    // Missing or malformed data degrades to an empty list.
    let Ok(raw) = fs::read_to_string(path) else {
        return ScoreList::default();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!(
            "tui-snake-test-{}-{}.json",
            std::process::id(),
            n
        ))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = ScoreStore::open(temp_path());
        assert!(store.scores().is_empty());
        assert!(store.top(5).is_empty());
    }

    #[test]
    fn test_append_persists_across_reopen() {
        let path = temp_path();
        {
            let mut store = ScoreStore::open(&path);
            store.append(3).unwrap();
            store.append(1).unwrap();
            store.append(7).unwrap();
        }

        let store = ScoreStore::open(&path);
        assert_eq!(store.scores(), &[3, 1, 7]); // play order on disk
        assert_eq!(store.top(5), vec![7, 3, 1]); // descending for display

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_top_truncates() {
        let path = temp_path();
        let mut store = ScoreStore::open(&path);
        for s in [5, 9, 2, 9, 1, 4, 8] {
            store.append(s).unwrap();
        }
        assert_eq!(store.top(5), vec![9, 9, 8, 5, 4]);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let path = temp_path();
        fs::write(&path, "{not json!").unwrap();

        let store = ScoreStore::open(&path);
        assert!(store.scores().is_empty());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_wrong_shape_reads_as_empty() {
        let path = temp_path();
        fs::write(&path, r#"{"scores": [1, 2]}"#).unwrap();

        let store = ScoreStore::open(&path);
        assert!(store.scores().is_empty());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_clear_removes_file() {
        let path = temp_path();
        let mut store = ScoreStore::open(&path);
        store.append(10).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(store.scores().is_empty());
        assert!(!path.exists());

        // Clearing again is fine.
        store.clear().unwrap();
    }
}
