use std::time::Duration;

pub(crate) const RESTAURANT_NAME: &str = "Little Lemon";
pub(crate) const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Page-wide settings, provided once at the root through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub restaurant_name: String,
    /// How long the fake booking request takes.
    pub submit_delay: Duration,
}

impl AppConfig {
    pub fn page_title(&self) -> String {
        format!("Reserve at {}", self.restaurant_name)
    }

    pub fn logo_label(&self) -> String {
        format!("{} Restaurant Logo", self.restaurant_name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: RESTAURANT_NAME.to_string(),
            submit_delay: SUBMIT_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.page_title(), "Reserve at Little Lemon");
        assert_eq!(config.logo_label(), "Little Lemon Restaurant Logo");
        assert_eq!(config.submit_delay, Duration::from_secs(1));
    }
}
