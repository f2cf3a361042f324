use super::Error;

/// Error when every field of a record is zero, leaving nothing to filter on.
#[derive(Debug)]
pub(super) struct EmptyPredicateError {
    model: Box<str>,
}

impl std::error::Error for EmptyPredicateError {}

impl core::fmt::Display for EmptyPredicateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "empty predicate: every field of `{}` is zero", self.model)
    }
}

impl Error {
    /// Creates an empty predicate error for the named model.
    ///
    /// Returned before any statement is submitted.
    pub fn empty_predicate(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyPredicate(EmptyPredicateError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is an empty predicate error.
    pub fn is_empty_predicate(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyPredicate(_))
    }
}
