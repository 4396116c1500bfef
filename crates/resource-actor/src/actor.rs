//! # Resource Actor
//!
//! The server half of the framework. A `ResourceActor<T>` owns every `T` it manages and
//! drains its mailbox one request at a time. Because a request runs to completion
//! before the next is received, any read-check-write sequence inside a single request
//! (an entity hook or action) is atomic with respect to all other requests on that
//! actor. No lock guards the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Actor that owns a collection of `T` and serves [`ResourceRequest`]s for it.
///
/// # Usage
///
/// 1. `ResourceActor::new(capacity)` returns the actor and a [`ResourceClient`].
/// 2. `tokio::spawn(actor.run(context))` starts the loop with its collaborators.
/// 3. Clone the client wherever requests are issued. When every client is dropped the
///    mailbox closes and `run` returns.
///
/// # Ids
/// Ids are taken from an internal `u32` counter starting at 1. The counter advances on
/// every create request, successful or not, so an id is never handed out twice.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` bounds the mailbox; senders wait while it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Restaurant" rather than "table_booking::model::restaurant::Restaurant"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                ResourceRequest::Create { params, respond_to } => {
                    self.create(params, respond_to, &context).await
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => self.update(id, update, respond_to, &context).await,
                ResourceRequest::Delete { id, respond_to } => {
                    self.delete(id, respond_to, &context).await
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => self.action(id, action, respond_to, &context).await,
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, respond_to: Response<T::Id>, ctx: &T::Context) {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                return;
            }
        };

        if let Some(key) = item.unique_key() {
            let taken = self
                .store
                .values()
                .any(|existing| existing.unique_key().as_deref() == Some(key.as_str()));
            if taken {
                warn!(entity_type, %key, "Duplicate key");
                let _ = respond_to.send(Err(FrameworkError::AlreadyExists(key)));
                return;
            }
        }

        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type, error = %e, "on_create failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }

        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        let _ = respond_to.send(Ok(id));
    }

    async fn update(&mut self, id: T::Id, update: T::Update, respond_to: Response<T>, ctx: &T::Context) {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?update, "Update");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        match item.on_update(update, ctx).await {
            Ok(()) => {
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(item.clone()));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Update failed");
                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            }
        }
    }

    async fn delete(&mut self, id: T::Id, respond_to: Response<()>, ctx: &T::Context) {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, "Delete");
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
            return;
        }

        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        let _ = respond_to.send(Ok(()));
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
        ctx: &T::Context,
    ) {
        let entity_type = self.entity_type;
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        let result = item
            .handle_action(action, ctx)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        let _ = respond_to.send(result);
    }
}
