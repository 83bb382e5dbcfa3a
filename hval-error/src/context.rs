use crate::{BoxError, OpaqueError};
use std::fmt::{self, Debug, Display};

/// Extends the `Result` and `Option` types with methods for adding context to errors.
pub trait ErrorContext {
    /// The resulting context type after adding context to the contained error.
    type Context;

    /// Add a static context to the contained error.
    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Debug + Send + Sync + 'static;

    /// Lazily add a context to the contained error, if it exists.
    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Debug + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: Into<BoxError>,
{
    type Context = Result<T, OpaqueError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        self.map_err(|error| {
            let error: BoxError = error.into();
            error.context(context)
        })
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Debug + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| {
            let error: BoxError = error.into();
            error.context(context())
        })
    }
}

impl<T> ErrorContext for Option<T> {
    type Context = Result<T, OpaqueError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        self.ok_or_else(|| OpaqueError::from_display(context))
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Debug + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| OpaqueError::from_display(context()))
    }
}

/// Extends the [`BoxError`] type with methods for working with errors.
pub trait ErrorExt {
    /// Wrap the error in a context.
    fn context<M>(self, context: M) -> OpaqueError
    where
        M: Display + Debug + Send + Sync + 'static;
}

impl<E> ErrorExt for E
where
    E: Into<BoxError>,
{
    fn context<M>(self, context: M) -> OpaqueError
    where
        M: Display + Debug + Send + Sync + 'static,
    {
        OpaqueError::from_std(ContextError {
            context,
            source: self.into(),
        })
    }
}

struct ContextError<C> {
    context: C,
    source: BoxError,
}

impl<C: Display> Debug for ContextError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.context, self.source)
    }
}

impl<C: Display> Display for ContextError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl<C: Display> std::error::Error for ContextError<C> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}
