use anyhow::Result;

use crate::logic::session::Session;

pub mod catalog;

/// One scripted action, given its index and the session length.
pub type Step = fn(&mut Session, usize, usize) -> Result<()>;

#[derive(Clone)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub step: Step,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("key", &self.key).finish()
    }
}

pub fn get_scenario(name: &str) -> Option<Scenario> {
    let name = name.to_lowercase();
    catalog::scenarios()
        .into_iter()
        .find(|scenario| scenario.key == name)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog::scenarios()
        .into_iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

/// Expand a `--scenarios` list, replacing `all` with every known key.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for token in requested {
        if token.eq_ignore_ascii_case("all") {
            for scenario in catalog::scenarios() {
                keys.push(scenario.key.to_string());
            }
        } else {
            keys.push(token.to_lowercase());
        }
    }
    let mut seen = std::collections::HashSet::new();
    keys.retain(|key| seen.insert(key.clone()));
    keys
}
