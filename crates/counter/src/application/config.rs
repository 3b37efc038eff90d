//! Application Configuration
//!
//! Configuration for the counter application layer.

/// Counter application configuration
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// Collection holding one counter document per principal
    pub collection: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            collection: "users".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collection() {
        assert_eq!(CounterConfig::default().collection, "users");
    }
}
