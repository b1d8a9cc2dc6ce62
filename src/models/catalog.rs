use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single event category: a stable key, a display name, and the set of
/// tithis (1-30) considered favorable for it.
///
/// The catalog is static configuration, not user data; entries can be
/// overridden or extended from the engine configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCategory {
    /// Stable lookup key, e.g. "wedding".
    pub key: String,
    /// Display name for the UI collaborator.
    pub name: String,
    /// Favorable tithi numbers, each in 1..=30.
    pub favorable_tithi: Vec<u8>,
}

impl EventCategory {
    pub fn new(key: impl Into<String>, name: impl Into<String>, favorable_tithi: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            favorable_tithi,
        }
    }

    /// Whether the given tithi number is in this category's favorable set.
    pub fn favors_tithi(&self, tithi_number: u8) -> bool {
        self.favorable_tithi.contains(&tithi_number)
    }
}

/// The catalog of event categories known to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<EventCategory>,
}

impl CategoryCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                EventCategory::new("wedding", "Wedding", vec![2, 3, 5, 7, 10, 11, 12, 13]),
                EventCategory::new("travel", "Travel", vec![2, 3, 5, 7, 10, 11, 13]),
                EventCategory::new("business", "New Business", vec![1, 2, 3, 5, 10, 11]),
                EventCategory::new("property", "Property Purchase", vec![6, 10, 11, 15]),
                EventCategory::new("education", "Education", vec![2, 3, 5, 6, 10, 11, 12]),
            ],
        }
    }

    /// Look up a category by key.
    ///
    /// # Returns
    /// * `Ok(&EventCategory)` if the key exists
    /// * `Err(EngineError::UnknownCategory)` listing the known keys otherwise
    pub fn get(&self, key: &str) -> EngineResult<&EventCategory> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| EngineError::UnknownCategory {
                key: key.to_string(),
                known: self.keys().join(", "),
            })
    }

    /// Replace an existing entry with the same key, or append a new one.
    pub fn upsert(&mut self, category: EventCategory) {
        match self.categories.iter_mut().find(|c| c.key == category.key) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    /// All known category keys, in catalog order.
    pub fn keys(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.key.as_str()).collect()
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[EventCategory] {
        &self.categories
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = CategoryCatalog::builtin();
        let wedding = catalog.get("wedding").unwrap();
        assert_eq!(wedding.name, "Wedding");
        assert!(wedding.favors_tithi(10));
        assert!(!wedding.favors_tithi(4));
    }

    #[test]
    fn test_unknown_key_lists_known() {
        let catalog = CategoryCatalog::builtin();
        let err = catalog.get("housewarming").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("housewarming"));
        assert!(msg.contains("wedding"));
    }

    #[test]
    fn test_upsert_replaces_and_appends() {
        let mut catalog = CategoryCatalog::builtin();
        let count = catalog.categories().len();

        catalog.upsert(EventCategory::new("wedding", "Marriage", vec![3]));
        assert_eq!(catalog.categories().len(), count);
        assert_eq!(catalog.get("wedding").unwrap().name, "Marriage");

        catalog.upsert(EventCategory::new("housewarming", "Housewarming", vec![5, 10]));
        assert_eq!(catalog.categories().len(), count + 1);
        assert!(catalog.get("housewarming").is_ok());
    }

    #[test]
    fn test_builtin_tithi_numbers_in_range() {
        for category in CategoryCatalog::builtin().categories() {
            for &t in &category.favorable_tithi {
                assert!((1..=30).contains(&t), "{}: tithi {}", category.key, t);
            }
        }
    }
}
