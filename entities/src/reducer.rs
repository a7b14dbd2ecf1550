//! Generic reducer for entity stores.

use crate::actions::EntityAction;
use crate::environment::EntityEnvironment;
use crate::state::{Entity, EntityState, RequestDescriptor};
use std::marker::PhantomData;
use studio_core::effect::Effect;
use studio_core::reducer::Reducer;
use studio_core::{SmallVec, smallvec};

/// Reducer driving one entity's CRUD store.
///
/// One instance per entity type, created at composition time; the REST base
/// path and notification label come from the [`Entity`] implementation, so
/// this single module replaces the per-entity action/reducer copies a
/// hand-written studio would accumulate.
///
/// Commands mark the store loading, capture a request token, and return one
/// [`Effect::Future`] performing the HTTP call; the future resolves to an
/// outcome event carrying the token. Outcome events apply the store
/// transitions and settle the loading flag only when their token is still
/// the latest issued.
#[derive(Debug, Clone)]
pub struct EntityReducer<T> {
    _phantom: PhantomData<T>,
}

impl<T> EntityReducer<T> {
    /// Create a new reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for EntityReducer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Reducer for EntityReducer<T> {
    type State = EntityState<T>;
    type Action = EntityAction<T>;
    type Environment = EntityEnvironment;

    #[allow(clippy::too_many_lines)] // one arm per operation of the contract
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            EntityAction::SeedDefaults { query } => {
                let token = state.begin_request();
                let api = env.api.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.seed_defaults::<T>(T::BASE_PATH).await {
                        Ok(page) => {
                            let descriptor = RequestDescriptor {
                                data: page.nodes.iter().map(Entity::id).collect(),
                                query,
                                total: page.total,
                            };
                            EntityAction::ListLoaded {
                                token,
                                records: page.nodes,
                                descriptor,
                            }
                        },
                        Err(error) => EntityAction::Failed {
                            token,
                            message: error.user_message(),
                        },
                    })
                }))]
            },

            EntityAction::FetchList { query } => {
                let token = state.begin_request();
                let api = env.api.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.list::<T>(T::BASE_PATH, &query.params()).await {
                        Ok(page) => {
                            let descriptor = RequestDescriptor {
                                data: page.nodes.iter().map(Entity::id).collect(),
                                query,
                                total: page.total,
                            };
                            EntityAction::ListLoaded {
                                token,
                                records: page.nodes,
                                descriptor,
                            }
                        },
                        Err(error) => EntityAction::Failed {
                            token,
                            message: error.user_message(),
                        },
                    })
                }))]
            },

            EntityAction::FetchById { id } => {
                let token = state.begin_request();
                let api = env.api.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.get::<T>(T::BASE_PATH, id).await {
                        Ok(record) => EntityAction::RecordLoaded { token, record },
                        Err(error) => EntityAction::Failed {
                            token,
                            message: error.user_message(),
                        },
                    })
                }))]
            },

            EntityAction::Create { data } => {
                let token = state.begin_request();
                let api = env.api.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.create(T::BASE_PATH, &data).await {
                        Ok(()) => EntityAction::Created { token },
                        Err(error) => EntityAction::Failed {
                            token,
                            message: error.user_message(),
                        },
                    })
                }))]
            },

            EntityAction::Update { data } => {
                let token = state.begin_request();
                let api = env.api.clone();
                let id = data.id();

                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.update(T::BASE_PATH, id, &data).await {
                        Ok(record) => EntityAction::Updated { token, record },
                        Err(error) => EntityAction::Failed {
                            token,
                            message: error.user_message(),
                        },
                    })
                }))]
            },

            EntityAction::Delete { id } => {
                let token = state.begin_request();
                let api = env.api.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    Some(match api.delete(T::BASE_PATH, id).await {
                        Ok(()) => EntityAction::Deleted { token },
                        Err(error) => EntityAction::Failed {
                            token,
                            message: error.user_message(),
                        },
                    })
                }))]
            },

            // ========== Outcome events ==========
            EntityAction::ListLoaded {
                token,
                records,
                descriptor,
            } => {
                state.merge(records);
                state.record_request(descriptor);
                state.settle(token);
                smallvec![Effect::None]
            },

            EntityAction::RecordLoaded { token, record } => {
                state.merge_one(record);
                state.settle(token);
                smallvec![Effect::None]
            },

            EntityAction::Created { token } => {
                state.reset();
                state.settle(token);
                env.notifier.success(&format!("{} added", T::LABEL));
                smallvec![Effect::None]
            },

            EntityAction::Updated { token, record } => {
                state.merge_one(record);
                state.settle(token);
                env.notifier.success(&format!("{} updated", T::LABEL));
                smallvec![Effect::None]
            },

            EntityAction::Deleted { token } => {
                state.reset();
                state.settle(token);
                env.notifier.success(&format!("{} deleted", T::LABEL));
                smallvec![Effect::None]
            },

            EntityAction::Failed { token, message } => {
                state.settle(token);
                env.notifier.error(&message);
                smallvec![Effect::None]
            },

            // ========== Direct store events ==========
            EntityAction::RecordsArrived { records } => {
                state.merge(records);
                smallvec![Effect::None]
            },

            EntityAction::RecordArrived { record } => {
                state.merge_one(record);
                smallvec![Effect::None]
            },

            EntityAction::RequestRecorded { descriptor } => {
                state.record_request(descriptor);
                smallvec![Effect::None]
            },

            EntityAction::Reset => {
                state.reset();
                smallvec![Effect::None]
            },
        }
    }
}
