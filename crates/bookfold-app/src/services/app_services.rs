// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the fold planner and the persisted settings,
// and runs PDF export off the UI thread.
//
// Generation is synchronous: the UI calls `generate` with the session it owns
// and the new plan is visible as soon as the call returns. Export takes an
// owned snapshot of the plan so a later generation cannot change what is
// being written.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bookfold_core::AppConfig;
use bookfold_core::error::{BookfoldError, Result};
use bookfold_core::session::Session;
use bookfold_core::types::{FoldPlan, FoldRequest};
use bookfold_document::{InstructionExporter, TextFoldPlanner};
use tracing::{info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    planner: Arc<Mutex<TextFoldPlanner>>,
    data_dir: PathBuf,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise services from the default data directory.
    pub fn init() -> Result<Self> {
        Self::with_data_dir(data_dir::data_dir())
    }

    /// Initialise services rooted at `dir`. Missing or unreadable settings
    /// fall back to defaults.
    pub fn with_data_dir(dir: PathBuf) -> Result<Self> {
        info!(path = %dir.display(), "initialising app services");
        std::fs::create_dir_all(&dir)?;

        let config = match load_config(&dir) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "settings unavailable — using defaults");
                AppConfig::default()
            }
        };
        let planner = TextFoldPlanner::new(config.raster.clone())?;

        Ok(Self {
            planner: Arc::new(Mutex::new(planner)),
            data_dir: dir,
            config: Arc::new(Mutex::new(config)),
        })
    }

    // -- Generation ----------------------------------------------------------

    /// Plan `request` into `session`. Returns the number of pages planned.
    pub fn generate(&self, session: &mut Session, request: &FoldRequest) -> Result<usize> {
        let planner = self.planner.lock().expect("planner lock poisoned");
        let plan = session.generate(&*planner, request)?;
        Ok(plan.len())
    }

    // -- Export --------------------------------------------------------------

    /// Write `plan` as a PDF on a blocking worker.
    pub async fn export_pdf(&self, plan: FoldPlan, path: PathBuf) -> Result<()> {
        let export = self.config().export;
        tokio::task::spawn_blocking(move || {
            let mut exporter = InstructionExporter::new(export);
            exporter.set_title(format!("Book Folding Instructions ({} pages)", plan.len()));
            exporter.write_to_file(&plan, &path)
        })
        .await
        .map_err(|e| BookfoldError::PdfError(format!("export task failed: {e}")))?
    }

    // -- Configuration -------------------------------------------------------

    /// Return a copy of the current application config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Persist `config` and rebuild the planner if rasterization changed.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let raster_changed = self.config().raster != config.raster;
        if raster_changed {
            let planner = TextFoldPlanner::new(config.raster.clone())?;
            *self.planner.lock().expect("planner lock poisoned") = planner;
        }

        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)?;
        info!(raster_changed, "settings saved");
        Ok(())
    }
}

fn load_config(data_dir: &Path) -> Result<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&data)?)
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use bookfold_core::types::{FoldMethod, PageGeometry};

    use super::*;

    #[test]
    fn settings_round_trip_through_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::with_data_dir(dir.path().to_path_buf()).unwrap();

        let mut config = svc.config();
        config.default_page_count = 321;
        config.raster.ink_threshold = 100;
        svc.save_config(&config).unwrap();

        let reopened = AppServices::with_data_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.config(), config);
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").unwrap();
        let svc = AppServices::with_data_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(svc.config(), AppConfig::default());
    }

    #[test]
    fn unusable_data_dir_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let result = AppServices::with_data_dir(blocker.join("bookfold"));
        assert!(matches!(result, Err(BookfoldError::Io(_))));
    }

    #[test]
    fn generate_fills_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::with_data_dir(dir.path().to_path_buf()).unwrap();
        let mut session = Session::new();
        let request = FoldRequest::new(
            PageGeometry::new(200.0, 130.0, 40).unwrap(),
            "Hi",
            FoldMethod::SingleBand,
        );

        assert_eq!(svc.generate(&mut session, &request).unwrap(), 40);
        assert_eq!(session.current().unwrap().total, 40);
    }
}
