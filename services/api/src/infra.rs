use bloodlink::config::RegistryConfig;
use bloodlink::workflows::donors::{DonorRegistry, RegistryImportError};
use bloodlink::workflows::inventory::{StockThresholds, ThresholdError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the donor registry from an explicit path, the configured path, or
/// falls back to the built-in seed.
pub(crate) fn load_registry(
    override_path: Option<PathBuf>,
    config: &RegistryConfig,
) -> Result<DonorRegistry, RegistryImportError> {
    match override_path.or_else(|| config.donor_csv.clone()) {
        Some(path) => DonorRegistry::from_path(path),
        None => Ok(DonorRegistry::seed()),
    }
}

/// Applies per-invocation overrides on top of the configured thresholds.
pub(crate) fn merge_thresholds(
    base: &StockThresholds,
    critical_max: Option<u32>,
    low_max: Option<u32>,
    medium_max: Option<u32>,
) -> Result<StockThresholds, ThresholdError> {
    StockThresholds::new(
        critical_max.unwrap_or(base.critical_max()),
        low_max.unwrap_or(base.low_max()),
        medium_max.unwrap_or(base.medium_max()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_defaults_to_seed() {
        let config = RegistryConfig { donor_csv: None };
        let registry = load_registry(None, &config).expect("seed loads");
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn override_path_wins_over_config() {
        let config = RegistryConfig {
            donor_csv: Some(PathBuf::from("configured.csv")),
        };
        let missing = std::env::temp_dir().join("bloodlink-api-missing.csv");
        assert!(matches!(
            load_registry(Some(missing), &config),
            Err(RegistryImportError::Io(_))
        ));
    }

    #[test]
    fn partial_overrides_keep_other_bounds() {
        let merged = merge_thresholds(&StockThresholds::default(), None, Some(10), None)
            .expect("still ascending");
        assert_eq!(merged.critical_max(), 3);
        assert_eq!(merged.low_max(), 10);
        assert_eq!(merged.medium_max(), 15);
    }

    #[test]
    fn overrides_must_stay_ascending() {
        assert!(merge_thresholds(&StockThresholds::default(), Some(20), None, None).is_err());
    }
}
