use super::traits::ConfigSection;
use crate::error::SidelobeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    /// Print a progress line every `report_every` generations.
    pub report_every: usize,
    /// Where to write the fitness history as JSON at the end of a run.
    pub history_path: Option<PathBuf>,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            report_every: 1,
            history_path: None,
            plot: true,
            plot_width: 72,
            plot_height: 16,
        }
    }
}

impl ConfigSection for ReportingConfig {
    fn section_name() -> &'static str {
        "reporting"
    }

    fn validate(&self) -> Result<(), SidelobeError> {
        if self.report_every == 0 {
            return Err(SidelobeError::Configuration(
                "report_every must be at least 1".to_string(),
            ));
        }
        if self.plot && (self.plot_width < 2 || self.plot_height < 2) {
            return Err(SidelobeError::Configuration(format!(
                "Plot must be at least 2x2, got {}x{}",
                self.plot_width, self.plot_height
            )));
        }
        Ok(())
    }
}
