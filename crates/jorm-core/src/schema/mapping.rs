use std::collections::HashMap;

/// Maps a table's columns back onto the fields of its record.
///
/// Every column maps to exactly one field and every field to exactly one
/// column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    columns: HashMap<String, usize>,
}

impl Model {
    /// Registers `column` as the storage of `field`. Returns `false` if the
    /// column is already mapped.
    pub(crate) fn insert(&mut self, column: String, field: usize) -> bool {
        use std::collections::hash_map::Entry;

        match self.columns.entry(column) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(field);
                true
            }
        }
    }

    /// Returns the index of the field stored in `column`.
    pub fn field_for(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
