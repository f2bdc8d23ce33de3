//! # Generic Messages
//!
//! The request type sent from [`ResourceClient`](crate::framework::ResourceClient)
//! to [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the resource lifecycle:
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and returns it.
/// - **List**: every stored entity, in insertion order.
/// - **Get**: the current state of one entity, or `None`.
/// - **Update**: applies [`ActorEntity::Update`] and returns the new state.
/// - **Delete**: removes the entity if its `on_delete` hook allows it.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
