//! # ActorEntity Trait
//!
//! The contract every resource must satisfy to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). Associated types pin
//! down the id, the create/update payloads, the injected context and the
//! error type, so an `Order` actor can only ever receive order payloads.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to
//! `Ok(())`. Implement them when a resource has rules to enforce at those
//! points in its lifecycle.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors, and each receives the
/// `Context` passed to `run()` ("late binding" of dependencies).
///
/// # Atomicity
/// Hooks run inside the actor task, one request at a time. A hook that
/// checks the current state and then mutates it cannot interleave with any
/// other request for the same store.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than per operation: clients match on a
    /// single type no matter which request failed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance. The actor looks entities up by it.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// The actor hands the hook a working copy; the stored entity is only
    /// replaced when the hook returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Returning an error
    /// vetoes the removal.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
