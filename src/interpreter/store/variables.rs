use std::collections::HashMap;

/// A handle to a variable's storage.
///
/// Obtained from [`VariableTable::slot`]. A slot stays valid until the table
/// is cleared, so it can be held across the evaluation of an assignment's
/// right-hand side even when that evaluation creates more variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(usize);

/// Stores named numeric variables.
///
/// # Example
/// ```
/// use bincalc::interpreter::store::variables::VariableTable;
///
/// let mut table = VariableTable::new();
/// let x = table.slot("x");
/// assert_eq!(table.get("x"), Some(0.0));
///
/// table.store(x, 4.0);
/// assert_eq!(table.get("x"), Some(4.0));
/// assert_eq!(table.get("y"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    slots:  HashMap<String, Slot>,
    values: Vec<f64>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for `name`, creating it with value `0` if needed.
    pub fn slot(&mut self, name: &str) -> Slot {
        if let Some(slot) = self.slots.get(name) {
            return *slot;
        }
        let slot = Slot(self.values.len());
        self.values.push(0.0);
        self.slots.insert(name.to_string(), slot);
        slot
    }

    /// Writes `value` into `slot` and returns it.
    pub fn store(&mut self, slot: Slot, value: f64) -> f64 {
        self.values[slot.0] = value;
        value
    }

    /// Assigns `value` to `name`, creating the variable if needed.
    pub fn set(&mut self, name: &str, value: f64) -> f64 {
        let slot = self.slot(name);
        self.store(slot, value)
    }

    /// Looks up the current value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.slots.get(name).map(|slot| self.values[slot.0])
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Removes every variable, invalidating all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.values.clear();
    }
}
