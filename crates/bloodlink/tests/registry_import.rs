use bloodlink::workflows::donors::{BloodGroup, DonorCriteria, DonorRegistry, RegistryImportError};
use chrono::NaiveDate;

#[test]
fn registry_imports_csv_fixture() {
    let data = include_bytes!("fixtures/donors.csv");
    let registry = DonorRegistry::from_reader(&data[..]).expect("fixture imports");

    assert_eq!(registry.len(), 5);
    let first = &registry.donors()[0];
    assert_eq!(first.name, "Maria Garcia");
    assert_eq!(first.blood_group, BloodGroup::ONegative);
    assert_eq!(
        first.last_donation,
        NaiveDate::from_ymd_opt(2024, 4, 2).expect("valid date")
    );
}

#[test]
fn imported_registry_searches_like_the_seed() {
    let data = include_bytes!("fixtures/donors.csv");
    let registry = DonorRegistry::from_reader(&data[..]).expect("fixture imports");

    let result = registry.search(&DonorCriteria::new(Some("O-"), Some("san")));
    let names: Vec<&str> = result.donors.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Maria Garcia", "Tom Becker"]);
    assert_eq!(result.headline, "2 Donors Found");
}

#[test]
fn registry_from_path_reports_missing_file() {
    let missing = std::env::temp_dir().join("bloodlink-missing-registry.csv");
    assert!(matches!(
        DonorRegistry::from_path(&missing),
        Err(RegistryImportError::Io(_))
    ));
}

#[test]
fn registry_rejects_rows_missing_columns() {
    let csv = "id,name,blood_group,location,phone,last_donation\n21,Ana Ruiz,O+\n";
    assert!(matches!(
        DonorRegistry::from_reader(csv.as_bytes()),
        Err(RegistryImportError::Csv(_))
    ));
}
