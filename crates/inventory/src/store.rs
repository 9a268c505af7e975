use crate::error::{StoreError, StoreResult};
use crate::medicine::{self, Medicine};

/// Authoritative in-process collection of medicines.
///
/// Names are the identity. The original casing is kept for display, but
/// every lookup lowercases both sides, so `create("Aspirin")` followed by
/// `get("aspirin")` finds the same record and a second `create("ASPIRIN")`
/// is a duplicate. Items are held in insertion order; `list` is stable
/// across calls absent mutation.
#[derive(Debug, Default)]
pub struct Store {
    items: Vec<Medicine>,
}

impl Store {
    /// An empty store. There is no implicit global instance; whoever serves
    /// the API constructs one and owns it.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim().to_lowercase();
        self.items.iter().position(|m| m.key() == key)
    }

    /// Insert a new medicine. Rejects duplicates of any case variant.
    pub fn create(&mut self, name: &str, price: f64) -> StoreResult<Medicine> {
        let med = Medicine::new(name, price)?;
        if self.position(&med.name).is_some() {
            return Err(StoreError::already_exists(med.name));
        }
        self.items.push(med.clone());
        Ok(med)
    }

    /// Replace the price of an existing medicine. The stored name, casing
    /// included, is left untouched.
    pub fn update(&mut self, name: &str, price: f64) -> StoreResult<Medicine> {
        let trimmed = medicine::validate_name(name)?;
        medicine::validate_price(price)?;
        match self.position(&trimmed) {
            Some(idx) => {
                self.items[idx].price = price;
                Ok(self.items[idx].clone())
            }
            None => Err(StoreError::not_found(trimmed)),
        }
    }

    /// Remove a medicine, returning the removed record.
    pub fn delete(&mut self, name: &str) -> StoreResult<Medicine> {
        let trimmed = medicine::validate_name(name)?;
        match self.position(&trimmed) {
            Some(idx) => Ok(self.items.remove(idx)),
            None => Err(StoreError::not_found(trimmed)),
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> StoreResult<Medicine> {
        let trimmed = medicine::validate_name(name)?;
        match self.position(&trimmed) {
            Some(idx) => Ok(self.items[idx].clone()),
            None => Err(StoreError::not_found(trimmed)),
        }
    }

    /// All medicines in insertion order.
    pub fn list(&self) -> &[Medicine] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Arithmetic mean of all prices, unrounded. Rounding for display is
    /// the presentation client's concern.
    pub fn average_price(&self) -> StoreResult<f64> {
        if self.items.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        let total: f64 = self.items.iter().map(|m| m.price).sum();
        Ok(total / self.items.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get_roundtrips() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();

        let med = store.get("Aspirin").unwrap();
        assert_eq!(med.name, "Aspirin");
        assert_eq!(med.price, 5.5);
    }

    #[test]
    fn get_is_case_insensitive() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();

        let med = store.get("aspirin").unwrap();
        assert_eq!(med.name, "Aspirin");
        assert_eq!(med.price, 5.5);
    }

    #[test]
    fn create_rejects_duplicate_of_any_case() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();

        let err = store.create("ASPIRIN", 9.99).unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists("ASPIRIN".to_string()));

        // The original record is untouched.
        assert_eq!(store.get("aspirin").unwrap().price, 5.5);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_twice_with_same_name_fails() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();
        let err = store.create("Aspirin", 5.5).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[test]
    fn create_rejects_invalid_input() {
        let mut store = Store::new();
        assert!(matches!(
            store.create("", 1.0).unwrap_err(),
            StoreError::InvalidInput(_)
        ));
        assert!(matches!(
            store.create("Aspirin", -1.0).unwrap_err(),
            StoreError::InvalidInput(_)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn update_changes_price_only() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();

        let med = store.update("aspirin", 6.75).unwrap();
        assert_eq!(med.name, "Aspirin");
        assert_eq!(med.price, 6.75);
        assert_eq!(store.get("Aspirin").unwrap().price, 6.75);
    }

    #[test]
    fn update_missing_medicine_fails_not_found() {
        let mut store = Store::new();
        let err = store.update("Ibuprofen", 7.25).unwrap_err();
        assert_eq!(err, StoreError::NotFound("Ibuprofen".to_string()));
    }

    #[test]
    fn delete_then_get_fails_not_found() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();
        store.delete("aspirin").unwrap();

        assert!(matches!(
            store.get("Aspirin").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[test]
    fn delete_removes_from_list() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();
        store.create("Ibuprofen", 7.25).unwrap();
        store.delete("Aspirin").unwrap();

        let names: Vec<_> = store.list().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ibuprofen"]);
    }

    #[test]
    fn delete_missing_medicine_fails_not_found() {
        let mut store = Store::new();
        assert!(matches!(
            store.delete("Aspirin").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[test]
    fn list_is_empty_on_fresh_store() {
        let store = Store::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = Store::new();
        store.create("Aspirin", 5.5).unwrap();
        store.create("Ibuprofen", 7.25).unwrap();
        store.create("Paracetamol", 3.0).unwrap();

        let names: Vec<_> = store.list().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Aspirin", "Ibuprofen", "Paracetamol"]);

        // Stable across repeated calls absent mutation.
        let again: Vec<_> = store.list().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn average_of_empty_store_fails() {
        let store = Store::new();
        assert_eq!(store.average_price().unwrap_err(), StoreError::EmptyCollection);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let mut store = Store::new();
        store.create("A", 10.0).unwrap();
        store.create("B", 20.0).unwrap();
        store.create("C", 30.0).unwrap();

        assert_eq!(store.average_price().unwrap(), 20.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn price_strategy() -> impl Strategy<Value = f64> {
            // Realistic price range; finite and non-negative by construction.
            0.0f64..10_000.0
        }

        proptest! {
            /// Create followed by get returns the created name and price.
            #[test]
            fn create_then_get_returns_created_item(
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                price in price_strategy()
            ) {
                let mut store = Store::new();
                store.create(&name, price).unwrap();

                let med = store.get(&name).unwrap();
                prop_assert_eq!(med.name.as_str(), name.trim());
                prop_assert_eq!(med.price, price);
            }

            /// Lookup succeeds regardless of query casing.
            #[test]
            fn lookup_ignores_case(
                name in "[A-Za-z]{1,20}",
                price in price_strategy()
            ) {
                let mut store = Store::new();
                store.create(&name, price).unwrap();

                prop_assert!(store.get(&name.to_lowercase()).is_ok());
                prop_assert!(store.get(&name.to_uppercase()).is_ok());
            }

            /// N distinct creates yield exactly N listed items; delete brings
            /// the count back down and removes the name.
            #[test]
            fn list_tracks_creates_and_deletes(
                names in proptest::collection::hash_set("[a-z]{1,12}", 1..8),
                price in price_strategy()
            ) {
                let mut store = Store::new();
                let names: Vec<String> = names.into_iter().collect();
                for name in &names {
                    store.create(name, price).unwrap();
                }
                prop_assert_eq!(store.len(), names.len());

                store.delete(&names[0]).unwrap();
                prop_assert_eq!(store.len(), names.len() - 1);
                prop_assert!(store.list().iter().all(|m| m.name != names[0]));
            }

            /// The average lies within the range of stored prices.
            #[test]
            fn average_is_bounded_by_extremes(
                prices in proptest::collection::vec(price_strategy(), 1..10)
            ) {
                let mut store = Store::new();
                for (i, price) in prices.iter().enumerate() {
                    store.create(&format!("med{i}"), *price).unwrap();
                }

                let avg = store.average_price().unwrap();
                let min = prices.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = prices.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(avg >= min - 1e-9 && avg <= max + 1e-9);
            }
        }
    }
}
