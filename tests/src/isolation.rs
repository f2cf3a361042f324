use std::sync::atomic::{AtomicU32, Ordering};

/// Generates unique table prefixes for test isolation.
///
/// Each test gets a prefix of the form `test_{process_id}_{test_counter}_`,
/// so tests running in parallel against one database never share tables.
#[derive(Clone)]
#[allow(dead_code)] // Only used when database features are enabled
pub struct TestIsolation {
    process_id: u32,
    test_counter: u32,
}

#[allow(dead_code)]
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

#[allow(dead_code)] // Only used when database features are enabled
impl TestIsolation {
    pub fn new() -> Self {
        Self {
            process_id: std::process::id(),
            test_counter: TEST_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn table_prefix(&self) -> String {
        format!("test_{}_{}_", self.process_id, self.test_counter)
    }

    /// Check if a table name belongs to this test isolation instance.
    pub fn owns_table(&self, table_name: &str) -> bool {
        table_name.starts_with(&self.table_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let a = TestIsolation::new();
        let b = TestIsolation::new();

        assert_ne!(a.table_prefix(), b.table_prefix());
        assert!(a.table_prefix().starts_with("test_"));
    }

    #[test]
    fn owns_only_its_tables() {
        let isolation = TestIsolation::new();
        let table_name = format!("{}album", isolation.table_prefix());

        assert!(isolation.owns_table(&table_name));
        assert!(!TestIsolation::new().owns_table(&table_name));
    }
}
