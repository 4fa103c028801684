use log::warn;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::roundingrule::RoundingRule;

fn get_rounding_rule_from_json(json_value: serde_json::Value) -> Result<RoundingRule, ManagerError> {
    let rule: RoundingRule = parse_json_value(json_value.clone())?;
    if rule.is_noop() {
        let named_object: NamedJsonObject = parse_json_value(json_value)?;
        warn!("rounding rule '{}' leaves every value unchanged", named_object.name());
    }
    Ok(rule)
}

pub struct RoundingRuleManager;

impl RoundingRuleManager {
    pub fn new() -> Manager<RoundingRule> {
        Manager::new(get_rounding_rule_from_json)
    }
}
