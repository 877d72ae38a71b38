use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named on/off switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lightbulb {
    pub name: String,
    #[serde(default)]
    pub on: bool,
}

impl Lightbulb {
    pub fn new(name: impl Into<String>, on: bool) -> Self {
        Self {
            name: name.into(),
            on,
        }
    }

    /// Flips the switch and returns the new state
    pub fn toggle(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }
}

/// Wire shape of a whole collection: `{"<name>": <on>, ...}`.
///
/// Ordered so responses are stable between calls.
pub type LightbulbStates = BTreeMap<String, bool>;

/// Folds a list of lightbulbs into the name -> state mapping returned by the API.
pub fn to_states(lightbulbs: impl IntoIterator<Item = Lightbulb>) -> LightbulbStates {
    lightbulbs
        .into_iter()
        .map(|lightbulb| (lightbulb.name, lightbulb.on))
        .collect()
}
