use std::collections::HashMap;

use crate::ports::EnvironmentReader;

/// Environment reader over a fixed set of variables.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
}

impl FixedEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvironmentReader for FixedEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
