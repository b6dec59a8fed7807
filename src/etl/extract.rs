//! Extractor trait for snapshot retrieval

use eyre::Result;

/// Extractor trait for pulling the record snapshot from a source
///
/// The table takes exactly one snapshot at construction. Implementors decide
/// where it comes from:
/// - Snapshot files on disk
/// - In-memory fixtures
/// - A database export
///
/// # Example
/// ```
/// use workflow_organizer::etl::Extractor;
/// use workflow_organizer::record::WorkflowRecord;
/// use eyre::Result;
///
/// struct Fixture(Vec<WorkflowRecord>);
///
/// impl Extractor for Fixture {
///     type Item = WorkflowRecord;
///
///     fn extract(&self) -> Result<Vec<Self::Item>> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let source = Fixture(vec![WorkflowRecord::new("wf-1", "Sync CRM")]);
/// assert_eq!(source.extract().unwrap().len(), 1);
/// ```
pub trait Extractor {
    /// The type of items extracted
    type Item;

    /// Extract every item from the source
    ///
    /// # Errors
    /// Returns an error if extraction fails (I/O, parsing, etc.)
    fn extract(&self) -> Result<Vec<Self::Item>>;
}

impl<T: Clone> Extractor for Vec<T> {
    type Item = T;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_extractor() {
        let source = vec![1, 2, 3];
        assert_eq!(source.extract().unwrap(), vec![1, 2, 3]);
    }
}
