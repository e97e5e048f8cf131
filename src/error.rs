use thiserror::Error;

/// Everything that can go wrong when grouping. All variants are raised when a call is entered, before any
/// trial has run, so there is never a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupingError {
    /// A configuration value or the requested group count is below its minimum
    #[error("invalid configuration: `{parameter}` must be at least 1, got {value}")]
    InvalidConfiguration { parameter: &'static str, value: usize },

    /// No values were given
    #[error("input has no values")]
    EmptyInput,

    /// Fewer values than requested groups
    #[error("cannot build {k} groups from {len} values")]
    TooFewElements { len: usize, k: usize },

    /// Fewer distinct values than requested groups
    #[error("cannot build {k} groups from {distinct} distinct values")]
    TooFewDistinctValues { distinct: usize, k: usize },
}

pub type Result<T> = std::result::Result<T, GroupingError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GroupingError::InvalidConfiguration { parameter: "iterations", value: 0 }.to_string(),
            "invalid configuration: `iterations` must be at least 1, got 0"
        );
        assert_eq!(GroupingError::EmptyInput.to_string(), "input has no values");
        assert_eq!(GroupingError::TooFewElements { len: 2, k: 3 }.to_string(), "cannot build 3 groups from 2 values");
        assert_eq!(
            GroupingError::TooFewDistinctValues { distinct: 2, k: 3 }.to_string(),
            "cannot build 3 groups from 2 distinct values"
        );
    }
}
