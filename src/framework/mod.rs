//! Generic actor framework for resource management.
//!
//! A [`ResourceActor`] owns the store for one entity type and serves CRUD
//! requests sent through a [`ResourceClient`]. Entities plug in by
//! implementing [`ActorEntity`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait resource types implement to be managed by an actor
//! - [`ResourceActor`] - the task that owns the store
//! - [`ResourceClient`] - cloneable handle that sends requests
//! - [`FrameworkError`] - plumbing failures
//!
//! # Testing
//!
//! See the [`mock`] module for a client that answers from canned expectations.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::{IdGenerator, ResourceActor};
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
