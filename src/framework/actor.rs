//! # Generic Actor Server
//!
//! The `ResourceActor` owns the entity store and the receiving end of the
//! request channel. It processes messages one at a time, so the store needs
//! no lock: exclusive ownership inside a single task is the synchronization.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Produces ids for newly created entities.
pub type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// The generic actor that manages an ordered collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and a client.
/// 2.  **Seed** (optional): `with_entities()` preloads existing records.
/// 3.  **Run**: spawn `actor.run(context)` on the runtime.
///
/// # Implementation Details
///
/// The store is a `Vec` in insertion order; lookups are linear scans by
/// [`ActorEntity::id`].
///
/// * **Create**: draws ids from the generator until one is unused, builds the
///   entity with `from_create_params`, runs `on_create`, appends it.
/// * **List**: clones the whole store.
/// * **Get**: clones the matching entity, if any.
/// * **Update**: runs `on_update` against a copy and swaps it in on success,
///   so a rejected update leaves the stored entity untouched.
/// * **Delete**: runs `on_delete`, then removes the entity preserving the
///   order of the rest.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - capacity of the request channel. When it is full,
    ///   client calls wait for space.
    /// * `next_id` - id generator consulted on every create.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Preloads entities into the store before the actor starts.
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = T>) -> Self {
        self.store.extend(entities);
        self
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn fresh_id(&self) -> T::Id {
        loop {
            let id = (self.next_id)();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Runs the actor's event loop, processing messages until every client
    /// has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, "Create");
                    let id = self.fresh_id();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, "Update");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut updated = self.store[index].clone();
                    if let Err(e) = updated.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store[index] = updated.clone();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = self.store[index].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(index);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
