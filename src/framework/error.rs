//! # Framework Errors
//!
//! Failures that belong to the actor plumbing rather than to any one entity.
//! Entity errors travel boxed inside [`FrameworkError::EntityError`];
//! [`FrameworkError::into_entity_error`] recovers the concrete type.

use std::error::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's receiver is gone; the request was never delivered.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor took the request but dropped the reply channel.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity has the requested id.
    #[error("Item not found: {0}")]
    NotFound(String),
    /// An entity hook rejected the request.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Unboxes an [`EntityError`](FrameworkError::EntityError) of type `E`.
    ///
    /// Any other variant, or an entity error of a different type, is handed
    /// back unchanged.
    pub fn into_entity_error<E: Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("sold out")]
    struct SoldOut;

    #[test]
    fn test_into_entity_error_recovers_concrete_type() {
        let err = FrameworkError::EntityError(Box::new(SoldOut));
        assert_eq!(err.into_entity_error::<SoldOut>().unwrap(), SoldOut);
    }

    #[test]
    fn test_into_entity_error_returns_other_errors() {
        let foreign = FrameworkError::EntityError("boom".into());
        match foreign.into_entity_error::<SoldOut>() {
            Err(FrameworkError::EntityError(e)) => assert_eq!(e.to_string(), "boom"),
            other => panic!("unexpected: {other:?}"),
        }

        assert!(matches!(
            FrameworkError::ActorClosed.into_entity_error::<SoldOut>(),
            Err(FrameworkError::ActorClosed)
        ));
    }
}
