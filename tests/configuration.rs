use std::path::PathBuf;

use chrono::Duration;
use rounding::configuration::Configuration;
use rounding::manager::manager::IManager;
use rounding::manager::managererror::ManagerError;
use rounding::roundingrule::RoundingRule;
use rounding::roundingrulemanager::RoundingRuleManager;

fn data_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(file_name)
}

#[test]
fn configuration_from_file() {
    let mut config = Configuration::new();
    config.from_reader(data_path("rounding.json")).unwrap();

    assert_eq!(config.rounding_rule_manager().names(), vec!["bytes", "count", "latency", "uptime"]);
    assert_eq!(config.rounding_rule("bytes").unwrap(), RoundingRule::Step { step: 1024 });

    let latency = config.rounding_rule("latency").unwrap();
    assert_eq!(latency.round_duration(Duration::microseconds(1_567)), Duration::microseconds(1_570));

    let uptime = config.rounding_rule("uptime").unwrap();
    let d = Duration::hours(1) + Duration::minutes(35) + Duration::milliseconds(42_567);
    assert_eq!(uptime.round_duration(d), Duration::hours(1) + Duration::minutes(40));

    assert_eq!(config.rounding_rule("count").unwrap().round_u64(12_895), 13_000);
}

#[test]
fn configuration_missing_file() {
    let mut config = Configuration::new();
    let result = config.from_reader(data_path("missing.json"));
    assert!(matches!(result, Err(ManagerError::IOError(_))));
}

#[test]
fn rule_array_from_file() {
    let mut manager = RoundingRuleManager::new();
    manager.from_reader(data_path("rules.json")).unwrap();

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.get("quarter").unwrap().round_i64(-420), -425);
    assert_eq!(manager.get("leading").unwrap().round_i64(4_213), 4_000);
}

#[test]
fn configuration_file_is_not_a_rule_list() {
    let mut manager = RoundingRuleManager::new();
    let result = manager.from_reader(data_path("rounding.json"));
    assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
}
