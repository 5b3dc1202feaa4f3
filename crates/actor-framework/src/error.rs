//! # Framework Errors
//!
//! Errors raised by the store plumbing itself, as opposed to the business errors each
//! record type defines. Business errors travel inside [`FrameworkError::EntityError`] and
//! can be recovered with [`FrameworkError::downcast_entity`].

use crate::query::QueryError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// `confirm_delete` was called without a pending `request_delete`.
    #[error("Deletion of {0} was not requested")]
    DeleteNotRequested(String),
    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed business error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns the original `FrameworkError` unchanged if it is a different variant or
    /// carries a different error type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("out of stock")]
    struct OutOfStock;

    #[test]
    fn downcast_recovers_entity_error() {
        let err = FrameworkError::EntityError(Box::new(OutOfStock));
        assert_eq!(err.downcast_entity::<OutOfStock>().unwrap(), OutOfStock);
    }

    #[test]
    fn downcast_keeps_other_variants() {
        let err = FrameworkError::NotFound("order_7".to_string());
        match err.downcast_entity::<OutOfStock>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "order_7"),
            other => panic!("unexpected: {:?}", other),
        }

        let err = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert!(matches!(
            err.downcast_entity::<OutOfStock>(),
            Err(FrameworkError::EntityError(_))
        ));
    }
}
