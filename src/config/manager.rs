use super::{evolution::EvolutionConfig, reporting::ReportingConfig, traits::ConfigSection};
use crate::error::SidelobeError;
use ::config::{Config, Environment, Map};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables that override defaults, e.g.
/// `SIDELOBE_EVOLUTION__POPULATION_SIZE=40`.
pub const ENV_PREFIX: &str = "SIDELOBE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub reporting: ReportingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), SidelobeError> {
        self.evolution.validate()?;
        self.reporting.validate()?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, SidelobeError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    /// Defaults overridden by `SIDELOBE_*` process environment variables.
    pub fn from_env() -> Result<Self, SidelobeError> {
        Self::load(Self::environment())
    }

    /// Same as [`ConfigManager::from_env`] but reads variables from `vars`
    /// instead of the process environment.
    pub fn from_env_map(vars: Map<String, String>) -> Result<Self, SidelobeError> {
        Self::load(Self::environment().source(Some(vars)))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load(environment: Environment) -> Result<Self, SidelobeError> {
        let config: AppConfig = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!(
            "Loaded {} and {} sections",
            EvolutionConfig::section_name(),
            ReportingConfig::section_name()
        );

        Ok(Self { config })
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply `f` and keep the result only if it validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), SidelobeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let manager = ConfigManager::from_env_map(vars(&[])).unwrap();
        let config = manager.get();

        assert_eq!(config.evolution.population_size, 30);
        assert_eq!(config.evolution.genotype_length, 300);
        assert_eq!(config.evolution.seed, None);
        assert_eq!(config.reporting.report_every, 1);
    }

    #[test]
    fn test_environment_overrides() {
        let manager = ConfigManager::from_env_map(vars(&[
            ("SIDELOBE_EVOLUTION__POPULATION_SIZE", "40"),
            ("SIDELOBE_EVOLUTION__GENOTYPE_LENGTH", "64"),
            ("SIDELOBE_EVOLUTION__MUTATION_PROBABILITY", "0.5"),
            ("SIDELOBE_EVOLUTION__SEED", "42"),
            ("SIDELOBE_REPORTING__REPORT_EVERY", "10"),
        ]))
        .unwrap();
        let config = manager.get();

        assert_eq!(config.evolution.population_size, 40);
        assert_eq!(config.evolution.genotype_length, 64);
        assert_eq!(config.evolution.mutation_probability, 0.5);
        assert_eq!(config.evolution.seed, Some(42));
        assert_eq!(config.reporting.report_every, 10);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let result = ConfigManager::from_env_map(vars(&[(
            "SIDELOBE_EVOLUTION__POPULATION_SIZE",
            "7",
        )]));
        assert!(matches!(result, Err(SidelobeError::Configuration(_))));
    }

    #[test]
    fn test_update_keeps_previous_config_on_failure() {
        let mut manager = ConfigManager::from_env_map(vars(&[])).unwrap();

        assert!(manager
            .update(|c| c.evolution.genotype_length = 0)
            .is_err());
        assert_eq!(manager.get().evolution.genotype_length, 300);

        manager.update(|c| c.evolution.genotype_length = 13).unwrap();
        assert_eq!(manager.get().evolution.genotype_length, 13);
    }

    #[test]
    fn test_config_renders_as_toml() {
        let text = AppConfig::default().to_toml_string().unwrap();
        assert!(text.contains("[evolution]"));
        assert!(text.contains("population_size = 30"));
    }
}
