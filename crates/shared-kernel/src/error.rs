// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntervalError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<IntervalError>,
    },

    /// An explicitly supplied comparator was absent.
    #[error("a comparator is required to order limit points")]
    MissingComparator,
}

impl IntervalError {
    /// Strips any context layers and returns the underlying error.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    #[inline]
    pub fn is_missing_comparator(&self) -> bool {
        matches!(self.root_cause(), Self::MissingComparator)
    }
}

pub type IntervalResult<T> = std::result::Result<T, IntervalError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> IntervalResult<T>;
    fn with_context<F>(self, f: F) -> IntervalResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<IntervalError>,
{
    fn context(self, context: impl Into<String>) -> IntervalResult<T> {
        self.map_err(|e| IntervalError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> IntervalResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| IntervalError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
