//! Tracker settings
//!
//! Holds the closed set of expense categories. The set is fixed for the
//! interactive program but can be swapped out for tests or embedding.

/// Categories accepted when none are configured explicitly
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Food", "Transportation", "Entertainment", "Miscellaneous"];

/// Settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Allowed category names, matched exactly after title-casing
    pub categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Create settings with a custom category set
    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a (normalized) category name is allowed
    pub fn is_valid_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Comma-separated list of categories for prompts and messages
    pub fn category_list(&self) -> String {
        self.categories.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.categories.len(), 4);
        assert!(settings.is_valid_category("Food"));
        assert!(settings.is_valid_category("Miscellaneous"));
        assert!(!settings.is_valid_category("food"));
        assert!(!settings.is_valid_category("Rent"));
    }

    #[test]
    fn test_category_list() {
        let settings = Settings::default();
        assert_eq!(
            settings.category_list(),
            "Food, Transportation, Entertainment, Miscellaneous"
        );
    }

    #[test]
    fn test_custom_categories() {
        let settings = Settings::with_categories(["Rent", "Travel"]);
        assert!(settings.is_valid_category("Rent"));
        assert!(!settings.is_valid_category("Food"));
        assert_eq!(settings.category_list(), "Rent, Travel");
    }
}
