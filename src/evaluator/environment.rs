use std::collections::HashMap;

/// Variable values visible to an evaluation.
///
/// Evaluation only reads the environment, so one environment can be shared
/// by evaluations on several threads as long as nobody writes to it
/// meanwhile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variable_lookup: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.variable_lookup.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variable_lookup.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.variable_lookup.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variable_lookup.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variable_lookup
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn clear(&mut self) {
        self.variable_lookup.clear();
    }
}
