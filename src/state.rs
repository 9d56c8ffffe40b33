use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::cache::DatasetCache;
use crate::data::error::DashboardError;
use crate::data::export;
use crate::data::filter::{FilterSelection, default_selection};
use crate::data::model::{CellValue, Table};
use crate::data::pipeline::{self, PipelineOutput};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Session cache owning the loaded table.
    cache: DatasetCache,

    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<Arc<Table>>,

    /// Per-column filter selections.
    pub filters: FilterSelection,

    /// Filtered rows and chart counts for the current filters (cached).
    pub view: PipelineOutput,

    /// Bucket colours for charts and filter labels.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let cache = DatasetCache::new(config.categorical_columns.clone(), config.normalize);
        let color_map = ColorMap::new(&config.order());
        Self {
            config,
            cache,
            dataset: None,
            filters: FilterSelection::new(),
            view: PipelineOutput::default(),
            color_map,
            status_message: None,
        }
    }

    /// Load `path` through the cache and make it the active dataset.
    pub fn load(&mut self, path: &Path) {
        self.config.data_path = path.to_path_buf();
        let result = self.cache.load(path);
        self.ingest(result);
    }

    /// Re-read the active file from disk.
    pub fn reload(&mut self) {
        let result = match self.cache.reload() {
            Ok(Some(table)) => Ok(table),
            Ok(None) => {
                let path = self.config.data_path.clone();
                self.cache.load(&path)
            }
            Err(e) => Err(e),
        };
        self.ingest(result);
    }

    fn ingest(&mut self, result: Result<Arc<Table>, DashboardError>) {
        match result {
            Ok(table) => self.set_dataset(table),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                self.cache.invalidate();
                self.dataset = None;
                self.filters.clear();
                self.view = PipelineOutput::default();
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and reset filters to "everything selected".
    pub fn set_dataset(&mut self, dataset: Arc<Table>) {
        let missing: Vec<&String> = self
            .config
            .categorical_columns
            .iter()
            .filter(|c| !dataset.has_column(c))
            .collect();
        if !missing.is_empty() {
            log::warn!("Configured columns not in dataset, skipping: {missing:?}");
        }

        self.filters = default_selection(&dataset, &self.config.categorical_columns);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Configured categorical columns that exist in the loaded dataset.
    pub fn filter_columns(&self) -> Vec<String> {
        let Some(ds) = &self.dataset else {
            return Vec::new();
        };
        self.config
            .categorical_columns
            .iter()
            .filter(|c| ds.has_column(c))
            .cloned()
            .collect()
    }

    /// Every distinct value a column's filter can offer.
    pub fn options(&self, column: &str) -> BTreeSet<CellValue> {
        self.dataset
            .as_ref()
            .map(|ds| ds.unique_values(column))
            .unwrap_or_default()
    }

    /// Recompute the view after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.view = pipeline::run(
                ds,
                &self.filters,
                &self.config.categorical_columns,
                &self.config.order(),
            );
        }
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: &str, value: &CellValue) {
        let selected = self.filters.entry(column.to_string()).or_default();
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.clone());
        }
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: &str) {
        let all_vals = self.options(column);
        self.filters.insert(column.to_string(), all_vals);
        self.refilter();
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: &str) {
        self.filters.insert(column.to_string(), BTreeSet::new());
        self.refilter();
    }

    /// Write the currently filtered rows to `path`.
    pub fn export_to(&mut self, path: &Path) {
        match export::save(&self.view.filtered, &self.config.sheet_name, path) {
            Ok(()) => {
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
