use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::Int;
use crate::learning::state::{KeyShapeError, StateActionKey};

/// Sparse learned value function: state-action key -> scalar. Keys never
/// written read back as 0. One table per agent, no sharing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QTable {
    tab: HashMap<StateActionKey, f32>,
}

#[derive(Debug, Error)]
pub enum QTableError {
    #[error("q-table file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("q-table file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("q-table file holds a bad key: {0}")]
    KeyShape(#[from] KeyShapeError),
}

impl QTable {
    pub fn new() -> Self {
        QTable::default()
    }

    pub fn get(&self, key: &StateActionKey) -> f32 {
        self.tab.get(key).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, key: StateActionKey, value: f32) {
        self.tab.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    /// Write the whole table as a flat JSON array of `[key, value]` pairs,
    /// each key a literal list of 17 integers. Order-independent and
    /// readable with any text editor.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), QTableError> {
        let entries: Vec<(Vec<Int>, f32)> = self
            .tab
            .iter()
            .map(|(key, value)| (key.to_vec(), *value))
            .collect();
        fs::write(path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }

    /// Read entries saved by [`QTable::save`] into this table, overwriting
    /// any matching keys. The file is parsed and validated in full before a
    /// single entry is installed; a corrupt file changes nothing.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), QTableError> {
        let raw = fs::read_to_string(path)?;
        let entries: Vec<(Vec<Int>, f32)> = serde_json::from_str(&raw)?;
        let mut parsed = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            parsed.push((StateActionKey::try_from(key)?, value));
        }
        self.tab.extend(parsed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::action::ActionId;
    use crate::learning::state::StateVec;

    fn key(fill: Int, action: ActionId) -> StateActionKey {
        StateVec([fill; 16]).key(action)
    }

    #[test]
    fn test_unseen_key_defaults_to_zero() {
        let tab = QTable::new();
        assert_eq!(tab.get(&key(3, ActionId::Port1)), 0.0);
        assert!(tab.is_empty());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut tab = QTable::new();
        let k = key(1, ActionId::Ship3);
        tab.set(k, -0.125);
        assert_eq!(tab.get(&k), -0.125);
        tab.set(k, 2.5);
        assert_eq!(tab.get(&k), 2.5);
        assert_eq!(tab.len(), 1);
    }

    #[test]
    fn test_save_load_round_trip_is_exact() {
        let mut tab = QTable::new();
        tab.set(key(1, ActionId::Port2), 0.5);
        tab.set(key(2, ActionId::Skip), -3.25);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qtable.json");
        tab.save(&path).unwrap();

        let mut fresh = QTable::new();
        fresh.load(&path).unwrap();
        assert_eq!(fresh.get(&key(1, ActionId::Port2)), 0.5);
        assert_eq!(fresh.get(&key(2, ActionId::Skip)), -3.25);
        assert_eq!(fresh, tab);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut tab = QTable::new();
        let err = tab.load("/nonexistent/qtable.json").unwrap_err();
        assert!(matches!(err, QTableError::Io(_)));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qtable.json");
        std::fs::write(&path, "[[1, 2, 3], not json").unwrap();

        let mut tab = QTable::new();
        tab.set(key(9, ActionId::Skip), 7.0);
        let err = tab.load(&path).unwrap_err();
        assert!(matches!(err, QTableError::Malformed(_)));
        // Nothing was installed from the bad file.
        assert_eq!(tab.len(), 1);
    }

    #[test]
    fn test_load_rejects_short_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qtable.json");
        std::fs::write(&path, "[[[1, 2, 3], 0.5]]").unwrap();

        let mut tab = QTable::new();
        let err = tab.load(&path).unwrap_err();
        assert!(matches!(err, QTableError::KeyShape(_)));
        assert!(tab.is_empty());
    }
}
