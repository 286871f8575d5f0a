//! Blog state management using actor pattern.
//!
//! One owner holds the post store and the search query. It tracks:
//! - The canonical post list ([`PostStore`])
//! - The current search query
//! - The derived [`VisiblePosts`] snapshot
//!
//! # Architecture
//!
//! - Commands are sent via an mpsc channel
//! - A dedicated task applies them sequentially
//! - After every command the task re-runs the search filter and publishes the
//!   result on a `watch` channel, so display code subscribes instead of polling
//! - Reads use Arc<RwLock<T>> and never touch the command channel

mod snapshot;
mod view;

pub use snapshot::VisiblePosts;
pub use view::BlogView;

use crate::error::state::StateError;
use crate::store::PostStore;

use common::ErrorLocation;
use models::Post;

use std::panic::Location;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{Mutex, RwLock, mpsc, oneshot, watch};

const COMMAND_CHANNEL_CAPACITY: usize = 100;

/// Commands that mutate blog state.
///
/// All state mutations go through the state actor via these commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateCommand {
    /// Prepend a post (form submission or archive copy)
    AddPost(Post),

    /// Empty the post list
    ClearPosts,

    /// Replace the search query
    SetQuery(String),
}

/// A command plus an optional channel to acknowledge it with the new snapshot.
struct Envelope {
    command: StateCommand,
    ack: Option<oneshot::Sender<VisiblePosts>>,
}

/// Blog state manager.
///
/// # Thread Safety
///
/// This type is `Clone`; all clones share the same store, query and actor.
#[derive(Clone)]
pub struct BlogState {
    /// Channel to send state mutation commands to the actor
    command_tx: Arc<Mutex<Option<mpsc::Sender<Envelope>>>>,

    /// Shared read-only access to the post store
    store: Arc<RwLock<PostStore>>,

    /// Shared read-only access to the search query
    query: Arc<RwLock<String>>,

    /// Publishes the derived view after every command
    visible_tx: Arc<watch::Sender<VisiblePosts>>,

    /// Track if actor has been initialized
    actor_init: Arc<Mutex<bool>>,
}

impl BlogState {
    /// Create a state manager with an empty store.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Create a state manager seeded with `posts` (first element shown first).
    ///
    /// The actor will be lazily spawned on first update within an async context.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let initial = VisiblePosts::derive(&posts, "", 0);
        let (visible_tx, _) = watch::channel(initial);

        Self {
            command_tx: Arc::new(Mutex::new(None)),
            store: Arc::new(RwLock::new(PostStore::with_posts(posts))),
            query: Arc::new(RwLock::new(String::new())),
            visible_tx: Arc::new(visible_tx),
            actor_init: Arc::new(Mutex::new(false)),
        }
    }

    /// Send a state update command without waiting for it to be applied.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Actor`] if the state actor has died.
    pub async fn update(&self, command: StateCommand) -> Result<(), StateError> {
        self.send(Envelope { command, ack: None }).await
    }

    /// Send a state update command and wait for the recomputed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Actor`] if the actor has died, or
    /// [`StateError::Acknowledge`] if it stopped before replying.
    pub async fn apply(&self, command: StateCommand) -> Result<VisiblePosts, StateError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(Envelope {
            command,
            ack: Some(ack_tx),
        })
        .await?;

        ack_rx.await.map_err(|e| StateError::Acknowledge {
            message: format!("State actor dropped acknowledgement: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Latest published snapshot of the visible posts.
    pub fn visible_posts(&self) -> VisiblePosts {
        self.visible_tx.borrow().clone()
    }

    /// Full, unfiltered post list.
    pub async fn posts(&self) -> Vec<Post> {
        self.store.read().await.posts().to_vec()
    }

    /// Current search query.
    pub async fn query(&self) -> String {
        self.query.read().await.clone()
    }

    /// Receiver notified whenever a new snapshot is published.
    pub fn subscribe(&self) -> watch::Receiver<VisiblePosts> {
        self.visible_tx.subscribe()
    }

    /// Read-only handle for display code.
    pub fn view(&self) -> BlogView {
        BlogView::new(self.visible_tx.subscribe())
    }

    async fn send(&self, envelope: Envelope) -> Result<(), StateError> {
        self.ensure_actor().await;

        let tx_guard = self.command_tx.lock().await;
        let tx = tx_guard.as_ref().ok_or_else(|| StateError::Actor {
            message: "State actor not initialized".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        tx.send(envelope).await.map_err(|e| StateError::Actor {
            message: format!("State actor died: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Ensure actor is spawned (called lazily from async context).
    async fn ensure_actor(&self) {
        let mut init_guard = self.actor_init.lock().await;
        if !*init_guard {
            let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);

            // Store tx BEFORE spawning to avoid race
            let mut tx_guard = self.command_tx.lock().await;
            *tx_guard = Some(tx);
            drop(tx_guard);

            tokio::spawn(state_actor(
                rx,
                Arc::clone(&self.store),
                Arc::clone(&self.query),
                Arc::clone(&self.visible_tx),
            ));
            *init_guard = true;
            info!("Blog state actor spawned");
        }
    }
}

impl Default for BlogState {
    fn default() -> Self {
        Self::new()
    }
}

/// The state actor task.
///
/// Owns mutation of the store and query, applies commands in arrival order and
/// republishes the filtered view after each one. Runs until every sender is dropped.
async fn state_actor(
    mut command_rx: mpsc::Receiver<Envelope>,
    store: Arc<RwLock<PostStore>>,
    query: Arc<RwLock<String>>,
    visible_tx: Arc<watch::Sender<VisiblePosts>>,
) {
    info!("Blog state actor started");

    let mut revision = visible_tx.borrow().revision;

    while let Some(Envelope { command, ack }) = command_rx.recv().await {
        match command {
            StateCommand::AddPost(post) => {
                let mut store_write = store.write().await;
                info!(
                    "Adding post \"{}\" ({} posts before)",
                    post.title,
                    store_write.len()
                );
                store_write.add_post(post);
            }
            StateCommand::ClearPosts => {
                let mut store_write = store.write().await;

                if store_write.is_empty() {
                    warn!("Clear posts requested but the store is already empty");
                } else {
                    info!("Clearing {} posts", store_write.len());
                }

                store_write.clear_posts();
            }
            StateCommand::SetQuery(new_query) => {
                let mut query_write = query.write().await;
                debug!("Search query changed: {:?} -> {:?}", *query_write, new_query);
                *query_write = new_query;
            }
        }

        revision += 1;
        let snapshot = {
            let store_read = store.read().await;
            let query_read = query.read().await;
            VisiblePosts::derive(store_read.posts(), &query_read, revision)
        };
        debug!(
            "Visible posts recomputed: {} of {} (revision {})",
            snapshot.count(),
            snapshot.total,
            revision
        );

        visible_tx.send_replace(snapshot.clone());

        if let Some(ack) = ack {
            if ack.send(snapshot).is_err() {
                debug!("Command sender stopped waiting for acknowledgement");
            }
        }
    }

    warn!("Blog state actor stopped - all state handles dropped");
}
