//! Shared read/delete operations for typed resource clients.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Implemented by every typed client sitting on a [`ResourceClient`].
///
/// A client supplies its inner handle and two error constructors; the
/// lookups, listing and deletion below are then shared.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    /// Translates a plumbing or entity failure into the client's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// The error returned by [`find`](ActorClient::find) for an absent id.
    fn not_found(id: &T::Id) -> Self::Error;

    #[instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        debug!("Sending get");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Like [`get`](ActorClient::get), but absence is an error.
    async fn find(&self, id: T::Id) -> Result<T, Self::Error> {
        match self.get(id.clone()).await? {
            Some(item) => Ok(item),
            None => Err(Self::not_found(&id)),
        }
    }

    /// Every entity, in insertion order.
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        debug!("Sending list");
        self.inner().list().await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        debug!("Sending delete");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
