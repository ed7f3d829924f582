use bookkeeping_core::{
    config::{Config, ConfigManager},
    domain::CategoryBudget,
    LedgerError,
};
use rust_decimal_macros::dec;
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(dir.path().join("config.json"));
    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.firm_label, "Geral");
    assert_eq!(config.category_budgets.len(), 8);
}

#[test]
fn partial_file_is_filled_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "firm_label": "Escritório Central", "urgency_window_days": 7 }"#)
        .unwrap();
    let config = ConfigManager::new(&path).load().unwrap();
    assert_eq!(config.firm_label, "Escritório Central");
    assert_eq!(config.urgency_window_days, 7);
    assert_eq!(config.currency, "BRL");
}

#[test]
fn saved_config_survives_reload() {
    let dir = TempDir::new().unwrap();
    let manager = ConfigManager::new(dir.path().join("settings").join("config.json"));
    let mut config = Config::default();
    config.category_budgets = vec![
        CategoryBudget::new("Marketing", dec!(1250.75)),
        CategoryBudget::new("Software", dec!(480)),
    ];
    manager.save(&config).unwrap();
    let reloaded = manager.load().unwrap();
    assert_eq!(reloaded.category_budgets, config.category_budgets);
}

#[test]
fn non_positive_limits_are_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "category_budgets": [ { "name": "Software", "limit": "0" } ] }"#,
    )
    .unwrap();
    let err = ConfigManager::new(&path).load().unwrap_err();
    assert!(matches!(err, LedgerError::InvalidConfig(_)));
}

#[test]
fn malformed_json_surfaces_a_serde_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        ConfigManager::new(&path).load(),
        Err(LedgerError::Serde(_))
    ));
}
