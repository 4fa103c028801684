use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::roundingrule::RoundingRule;
use crate::roundingrulemanager::RoundingRuleManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    rounding_rule: Vec<serde_json::Value>
}

/// Named rounding rules loaded from a `{"rounding_rule": [...]}` JSON document.
pub struct Configuration {
    rounding_rule_manager: Manager<RoundingRule>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            rounding_rule_manager: RoundingRuleManager::new()
        }
    }

    pub fn rounding_rule_manager(&self) -> &Manager<RoundingRule> {
        &self.rounding_rule_manager
    }

    pub fn rounding_rule(&self, name: &str) -> Result<RoundingRule, ManagerError> {
        self.rounding_rule_manager.get(name)
    }

    pub fn from_reader<P: AsRef<Path>>(&mut self, file_path: P) -> Result<(), ManagerError> {
        let file_path = file_path.as_ref();
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)?;
        info!("loaded {} rounding rules from {}", self.rounding_rule_manager.len(), file_path.display());
        Ok(())
    }

    pub fn from_json_str(&mut self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&mut self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.rounding_rule_manager.insert_obj_from_json_vec(&json_prop.rounding_rule)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
