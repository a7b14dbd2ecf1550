//! # Studio Entities
//!
//! The generic CRUD engine behind every screen of the studio, the
//! administration console of a fact-checking publication platform.
//!
//! Every entity screen (formats, tags, policies, media, posts, ratings,
//! claimants, claims) follows the same cycle: dispatch a command, mark the
//! store loading, call the CMS REST API, merge the normalized result, and
//! surface failures as one notification. Instead of one hand-written
//! action/reducer pair per entity, this crate provides a single pair
//! parameterized by the record type:
//!
//! - [`EntityState<T>`](state::EntityState): request descriptors + detail
//!   cache + loading flag
//! - [`EntityAction<T>`](actions::EntityAction): commands and events for
//!   one entity type
//! - [`EntityReducer<T>`](reducer::EntityReducer): the state machine,
//!   issuing HTTP calls as effects
//! - [`RestClient`](client::RestClient): the HTTP adapter with uniform
//!   error normalization
//!
//! ## Composition
//!
//! ```ignore
//! use std::sync::Arc;
//! use studio_entities::{
//!     EntityAction, EntityEnvironment, EntityReducer, EntityState, EntityStore,
//!     ListQuery, RestClient, TracingNotifier, model::Format,
//! };
//! use studio_runtime::Store;
//!
//! let env = EntityEnvironment::new(
//!     RestClient::new("http://localhost:8000").with_space(1),
//!     Arc::new(TracingNotifier),
//! );
//!
//! let formats: EntityStore<Format> =
//!     Store::new(EntityState::default(), EntityReducer::new(), env);
//!
//! formats
//!     .send(EntityAction::FetchList { query: ListQuery::default() })
//!     .await?;
//! ```
//!
//! The external fact-check aggregation search, which stores results inline
//! rather than normalized, lives in [`fact_checks`].

pub mod actions;
pub mod client;
pub mod environment;
pub mod error;
pub mod fact_checks;
pub mod mocks;
pub mod model;
pub mod notifications;
pub mod reducer;
pub mod state;

pub use actions::EntityAction;
pub use client::{Paged, RestClient};
pub use environment::EntityEnvironment;
pub use error::ApiError;
pub use notifications::{NotificationSink, TracingNotifier};
pub use reducer::EntityReducer;
pub use state::{Entity, EntityId, EntityState, ListQuery, RequestDescriptor, RequestToken};

/// A fully composed store for one entity type.
pub type EntityStore<T> =
    studio_runtime::Store<EntityState<T>, EntityAction<T>, EntityEnvironment, EntityReducer<T>>;
