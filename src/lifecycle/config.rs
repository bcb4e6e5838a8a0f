//! Store configuration.

/// Settings applied when an [`InMemoryStore`](crate::framework::InMemoryStore) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of entries to reserve up front.
    pub initial_capacity: usize,
    /// Label used as `entity_type` in logs. Defaults to the entity's `NAME`.
    pub label: Option<&'static str>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 32,
            label: None,
        }
    }
}

impl StoreConfig {
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = StoreConfig::default().with_capacity(4).with_label("staff");
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.label, Some("staff"));
    }
}
