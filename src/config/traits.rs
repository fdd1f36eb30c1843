use crate::error::SidelobeError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), SidelobeError>;
}

pub(crate) fn check_probability(section: &str, name: &str, value: f64) -> Result<(), SidelobeError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SidelobeError::Configuration(format!(
            "{}.{} must be between 0 and 1, got {}",
            section, name, value
        )));
    }
    Ok(())
}
