// ⚙️ Runtime configuration
//
// Read from the environment:
// - CLINIC_SCHEDULE: CSV schedule to seed from (default: built-in demo schedule)
// - HOST: server host (default: 0.0.0.0)
// - PORT: server port (default: 3000)
// - RUST_LOG: log level, read by the binaries when installing the subscriber

use crate::registry::Registry;
use crate::schedule::{load_schedule_file, seed_demo, SeedReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    pub schedule_file: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        ClinicConfig {
            schedule_file: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ClinicConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let schedule_file = lookup("CLINIC_SCHEDULE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number between 0 and 65535 (got {:?})", raw))?,
            None => defaults.port,
        };

        Ok(ClinicConfig {
            schedule_file,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build a registry seeded from the configured schedule
    pub fn build_registry(&self) -> Result<(Registry, SeedReport)> {
        let mut registry = Registry::new();

        let report = match &self.schedule_file {
            Some(path) => load_schedule_file(&mut registry, path)?,
            None => seed_demo(&mut registry),
        };

        Ok((registry, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClinicConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, ClinicConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ClinicConfig::from_lookup(lookup_from(&[
            ("CLINIC_SCHEDULE", "/tmp/schedule.csv"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.schedule_file, Some(PathBuf::from("/tmp/schedule.csv")));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_blank_schedule_means_demo() {
        let config = ClinicConfig::from_lookup(lookup_from(&[("CLINIC_SCHEDULE", "  ")])).unwrap();
        assert!(config.schedule_file.is_none());

        let (registry, report) = config.build_registry().unwrap();
        assert_eq!(report.doctors, 3);
        assert_eq!(registry.doctor_count(), 3);
    }

    #[test]
    fn test_bad_port() {
        let result = ClinicConfig::from_lookup(lookup_from(&[("PORT", "http")]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("PORT"));
    }
}
