use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::DashboardError;
use super::loader::load_file;
use super::model::Table;
use super::normalize::normalize_categorical;

/// Session-scoped cache for the one input table.
///
/// The first `load` reads and normalizes the file; later calls with the same
/// path hand back the same `Arc` without touching the disk until
/// [`DatasetCache::invalidate`] or [`DatasetCache::reload`] is called.
#[derive(Debug, Default)]
pub struct DatasetCache {
    categorical_columns: Vec<String>,
    normalize: bool,
    entry: Option<(PathBuf, Arc<Table>)>,
}

impl DatasetCache {
    pub fn new(categorical_columns: Vec<String>, normalize: bool) -> Self {
        Self {
            categorical_columns,
            normalize,
            entry: None,
        }
    }

    pub fn load(&mut self, path: &Path) -> Result<Arc<Table>, DashboardError> {
        if let Some((cached_path, table)) = &self.entry {
            if cached_path == path {
                log::debug!("Serving {} from cache", path.display());
                return Ok(Arc::clone(table));
            }
        }
        self.read(path)
    }

    /// Re-read the cached path, bypassing the cache.
    pub fn reload(&mut self) -> Result<Option<Arc<Table>>, DashboardError> {
        match self.entry.take() {
            Some((path, _)) => self.read(&path).map(Some),
            None => Ok(None),
        }
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    fn read(&mut self, path: &Path) -> Result<Arc<Table>, DashboardError> {
        let mut table = load_file(path)?;
        if self.normalize {
            normalize_categorical(&mut table, &self.categorical_columns);
        }
        let table = Arc::new(table);
        self.entry = Some((path.to_path_buf(), Arc::clone(&table)));
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::data::model::CellValue;

    fn write_csv(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("sindicatos.csv");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn second_load_is_served_from_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Legitimados\nsi\n");
        let mut cache = DatasetCache::new(vec!["Legitimados".into()], true);

        let first = cache.load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.rows[0][0], CellValue::from("Sí"));
    }

    #[test]
    fn reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Legitimados\nsi\n");
        let mut cache = DatasetCache::new(vec!["Legitimados".into()], true);
        cache.load(&path).unwrap();

        write_csv(dir.path(), "Legitimados\nno\nno\n");
        let reloaded = cache.reload().unwrap().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(Arc::ptr_eq(&reloaded, &cache.load(&path).unwrap()));
    }

    #[test]
    fn invalidate_forces_a_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Legitimados\nsi\n");
        let mut cache = DatasetCache::new(Vec::new(), false);
        cache.load(&path).unwrap();
        cache.invalidate();
        fs::remove_file(&path).unwrap();

        assert!(matches!(
            cache.load(&path).unwrap_err(),
            DashboardError::FileNotFound { .. }
        ));
    }

    #[test]
    fn normalization_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "Legitimados\n si\n");
        let mut cache = DatasetCache::new(vec!["Legitimados".into()], false);
        assert_eq!(cache.load(&path).unwrap().rows[0][0], CellValue::from(" si"));
    }
}
