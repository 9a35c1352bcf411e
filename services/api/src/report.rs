use crate::infra::{load_registry, merge_thresholds};
use bloodlink::config::{AppConfig, ConfigError};
use bloodlink::error::AppError;
use bloodlink::workflows::donors::{DonorCriteria, DonorSearchResult};
use bloodlink::workflows::inventory::{AvailabilityEntry, HospitalInventory, InventorySnapshot};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DonorSearchArgs {
    /// Exact blood group, e.g. "O-" or "AB+"
    #[arg(long)]
    pub(crate) blood_group: Option<String>,
    /// Case-insensitive substring of the donor location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Donor registry CSV (defaults to APP_DONOR_REGISTRY, then the seed registry)
    #[arg(long)]
    pub(crate) registry: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InventoryReportArgs {
    /// Highest unit count still classified as critical
    #[arg(long)]
    pub(crate) critical_max: Option<u32>,
    /// Highest unit count still classified as low stock
    #[arg(long)]
    pub(crate) low_max: Option<u32>,
    /// Highest unit count still classified as medium
    #[arg(long)]
    pub(crate) medium_max: Option<u32>,
}

pub(crate) fn run_donor_search(args: DonorSearchArgs) -> Result<(), AppError> {
    let DonorSearchArgs {
        blood_group,
        location,
        registry,
    } = args;

    let config = AppConfig::load()?;
    let registry = load_registry(registry, &config.registry)?;
    let criteria = DonorCriteria {
        blood_group,
        location,
    };

    let result = registry.search(&criteria);
    print!("{}", render_donor_search(&result));
    Ok(())
}

pub(crate) fn run_inventory_report(args: InventoryReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    print!("{}", build_inventory_report(&config, &args)?);
    Ok(())
}

/// Renders the stock, request and availability boards. Only the inventory
/// and thresholds are read; the donor registry plays no part.
pub(crate) fn build_inventory_report(
    config: &AppConfig,
    args: &InventoryReportArgs,
) -> Result<String, AppError> {
    let thresholds = merge_thresholds(
        &config.inventory.thresholds,
        args.critical_max,
        args.low_max,
        args.medium_max,
    )
    .map_err(ConfigError::Thresholds)?;

    let inventory = HospitalInventory::seed();
    Ok(render_inventory_report(
        &inventory.snapshot(&thresholds),
        &inventory.availability(&thresholds),
    ))
}

pub(crate) fn render_donor_search(result: &DonorSearchResult) -> String {
    let group = result.criteria.blood_group.as_deref().unwrap_or("any");
    let location = result.criteria.location.as_deref().unwrap_or("any");

    let mut lines = vec![
        "Donor search".to_string(),
        format!("Criteria: blood group {group}, location {location}"),
        format!(
            "{} (registry holds {})",
            result.headline, result.registry_size
        ),
    ];

    for donor in &result.donors {
        lines.push(format!(
            "- {} | {} | {} | {} | last donation {}",
            donor.name, donor.blood_group, donor.location, donor.phone, donor.last_donation
        ));
    }

    finish(lines)
}

pub(crate) fn render_inventory_report(
    snapshot: &InventorySnapshot,
    availability: &[AvailabilityEntry],
) -> String {
    let mut lines = vec![
        format!("Hospital inventory: {}", snapshot.hospital),
        format!(
            "Thresholds: critical <= {}, low <= {}, medium <= {}",
            snapshot.thresholds.critical_max(),
            snapshot.thresholds.low_max(),
            snapshot.thresholds.medium_max()
        ),
    ];

    lines.push("\nCurrent blood stock".to_string());
    for view in &snapshot.stock {
        lines.push(format!(
            "- {}: {} units [{}]",
            view.blood_group, view.units, view.level_label
        ));
    }

    lines.push("\nStock levels".to_string());
    for entry in &snapshot.level_counts {
        lines.push(format!("- {}: {}", entry.level_label, entry.count));
    }

    if snapshot.shortages.is_empty() {
        lines.push("\nShortages: none".to_string());
    } else {
        let groups: Vec<String> = snapshot
            .shortages
            .iter()
            .map(|group| group.to_string())
            .collect();
        lines.push(format!("\nShortages: {}", groups.join(", ")));
    }

    if snapshot.requests.is_empty() {
        lines.push("\nIncoming requests: none".to_string());
    } else {
        lines.push("\nIncoming requests".to_string());
        for request in &snapshot.requests {
            lines.push(format!(
                "- [{}] {} | {} | {}",
                request.urgency_label, request.patient, request.blood_group, request.units_label
            ));
        }
    }

    lines.push("\nBlood group availability".to_string());
    for entry in availability {
        lines.push(format!("- {}: {}", entry.blood_group, entry.availability));
    }

    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloodlink::config::{
        AppEnvironment, InventoryConfig, RegistryConfig, ServerConfig, TelemetryConfig,
    };
    use bloodlink::workflows::donors::DonorRegistry;
    use bloodlink::workflows::inventory::StockThresholds;
    use bloodlink::workflows::BloodBankService;

    fn config_with_registry(donor_csv: Option<PathBuf>) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            inventory: InventoryConfig {
                thresholds: StockThresholds::default(),
            },
            registry: RegistryConfig { donor_csv },
        }
    }

    #[test]
    fn donor_search_output_lists_matches() {
        let result = DonorRegistry::seed().search(&DonorCriteria::blood_group("O-"));
        let output = render_donor_search(&result);

        assert!(output.contains("Criteria: blood group O-, location any"));
        assert!(output.contains("1 Donor Found (registry holds 6)"));
        assert!(output.contains("- Emily Davis | O- | Chicago |"));
    }

    #[test]
    fn inventory_output_includes_every_board() {
        let service = BloodBankService::seeded(StockThresholds::default());
        let output =
            render_inventory_report(&service.inventory_snapshot(), &service.availability());

        assert!(output.contains("Hospital inventory: City General Hospital"));
        assert!(output.contains("- O-: 3 units [Critical]"));
        assert!(output.contains("- B-: 5 units [Low Stock]"));
        assert!(output.contains("Shortages: A-, B-, O-, AB-"));
        assert!(output.contains("- [Critical] John Doe | O- | 2 units"));
        assert!(output.contains("- O-: Critical Need"));
    }

    #[test]
    fn inventory_report_ignores_unreadable_donor_registry() {
        let missing = std::env::temp_dir().join("bloodlink-report-missing-donors.csv");
        let config = config_with_registry(Some(missing));

        let output = build_inventory_report(&config, &InventoryReportArgs::default())
            .expect("inventory report does not read the donor registry");

        assert!(output.contains("Hospital inventory: City General Hospital"));
        assert!(output.contains("- O-: 3 units [Critical]"));
    }

    #[test]
    fn inventory_report_applies_threshold_overrides() {
        let config = config_with_registry(None);
        let args = InventoryReportArgs {
            critical_max: Some(5),
            ..InventoryReportArgs::default()
        };

        let output = build_inventory_report(&config, &args).expect("report builds");

        assert!(output.contains("Thresholds: critical <= 5, low <= 8, medium <= 15"));
        assert!(output.contains("- B-: 5 units [Critical]"));
    }

    #[test]
    fn inventory_report_rejects_unordered_overrides() {
        let config = config_with_registry(None);
        let args = InventoryReportArgs {
            low_max: Some(2),
            ..InventoryReportArgs::default()
        };

        assert!(matches!(
            build_inventory_report(&config, &args),
            Err(AppError::Config(ConfigError::Thresholds(_)))
        ));
    }
}
