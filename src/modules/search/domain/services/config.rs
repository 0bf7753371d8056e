/// Configuration for query matching
///
/// Externalizes the fuzzy threshold and the per-test score weights so the
/// matcher can be tuned and tested in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Minimum similarity (0..=100) for a word to count as a fuzzy match
    pub fuzzy_threshold: u8,

    /// Score scale for a word that starts with the query
    pub prefix_weight: f64,

    /// Score scale for a word that contains the query elsewhere
    pub contains_weight: f64,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            fuzzy_threshold: 60,
            prefix_weight: 100.0,
            contains_weight: 90.0,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.fuzzy_threshold > 100 {
            return Err(format!(
                "fuzzy_threshold must be within 0..=100, got {}",
                self.fuzzy_threshold
            ));
        }

        for (name, weight) in [
            ("prefix_weight", self.prefix_weight),
            ("contains_weight", self.contains_weight),
        ] {
            if !(0.0..=100.0).contains(&weight) {
                return Err(format!("{} must be within 0..=100, got {}", name, weight));
            }
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for SearchConfig to make test setup easier
#[derive(Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::new(),
        }
    }

    pub fn fuzzy_threshold(mut self, threshold: u8) -> Self {
        self.config.fuzzy_threshold = threshold;
        self
    }

    pub fn prefix_weight(mut self, weight: f64) -> Self {
        self.config.prefix_weight = weight;
        self
    }

    pub fn contains_weight(mut self, weight: f64) -> Self {
        self.config.contains_weight = weight;
        self
    }

    pub fn build(self) -> Result<SearchConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fuzzy_threshold, 60);
        assert_eq!(config.prefix_weight, 100.0);
        assert_eq!(config.contains_weight, 90.0);
    }

    #[test]
    fn test_threshold_above_hundred_is_invalid() {
        let config = SearchConfigBuilder::new().fuzzy_threshold(101).build();
        assert!(config.unwrap_err().contains("fuzzy_threshold"));
    }

    #[test]
    fn test_negative_weight_is_invalid() {
        let config = SearchConfigBuilder::new().contains_weight(-1.0).build();
        assert!(config.unwrap_err().contains("contains_weight"));
    }

    #[test]
    fn test_builder_chaining() {
        let config = SearchConfigBuilder::new()
            .contains_weight(80.0)
            .fuzzy_threshold(75)
            .prefix_weight(95.0)
            .build()
            .unwrap();

        assert_eq!(config.fuzzy_threshold, 75);
        assert_eq!(config.prefix_weight, 95.0);
        assert_eq!(config.contains_weight, 80.0);
    }
}
