//! External fact-check aggregation search.
//!
//! The studio lets editors search an external fact-check aggregation API
//! while drafting a claim. Unlike CMS entities, aggregator results carry no
//! CMS ids: the request descriptor embeds the returned claims inline and
//! there is no detail cache to normalize into.

use crate::environment::EntityEnvironment;
use crate::state::RequestToken;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use studio_core::effect::Effect;
use studio_core::reducer::Reducer;
use studio_core::{SmallVec, smallvec};

/// Aggregator search endpoint, relative to the API root.
pub const FACT_CHECKS_PATH: &str = "/fact-check/google";

/// Parameters for one aggregator search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckQuery {
    /// Free-text claim search.
    pub query: String,
    /// BCP-47 language filter.
    pub language: Option<String>,
    /// Page number, 1-based.
    pub page: Option<u32>,
}

impl FactCheckQuery {
    /// Flatten the query into wire parameters.
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("query".to_owned(), self.query.clone())];
        if let Some(language) = &self.language {
            params.push(("language".to_owned(), language.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page".to_owned(), page.to_string()));
        }
        params
    }
}

/// One claim review from an aggregator publisher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimReview {
    /// Publisher name.
    #[serde(default)]
    pub publisher: String,
    /// URL of the published review.
    #[serde(default)]
    pub url: String,
    /// Review headline.
    #[serde(default)]
    pub title: String,
    /// Textual verdict ("False", "Misleading", ...).
    #[serde(default)]
    pub rating: String,
}

/// One aggregated claim with its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheck {
    /// The claim text.
    pub text: String,
    /// Who made the claim, as reported by the aggregator.
    #[serde(default)]
    pub claimant: String,
    /// When the claim was made.
    #[serde(default)]
    pub claim_date: Option<DateTime<Utc>>,
    /// Published reviews of the claim.
    #[serde(default)]
    pub review: Vec<ClaimReview>,
}

/// Record of one executed search: parameters, inline results, total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckRequest {
    /// The parameters the search ran with.
    pub query: FactCheckQuery,
    /// Returned claims, inline and in server order.
    pub data: Vec<FactCheck>,
    /// Aggregator-side count of matching claims.
    pub total: i64,
}

/// Store for aggregator searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckState {
    /// Executed searches, in dispatch order.
    pub req: Vec<FactCheckRequest>,
    /// True while a search is outstanding.
    pub loading: bool,
    #[serde(skip)]
    last_issued: RequestToken,
}

impl Default for FactCheckState {
    fn default() -> Self {
        Self {
            req: Vec::new(),
            loading: false,
            last_issued: RequestToken::default(),
        }
    }
}

impl FactCheckState {
    /// Mark a new search as in flight and return its token.
    pub fn begin_request(&mut self) -> RequestToken {
        self.last_issued = self.last_issued.next();
        self.loading = true;
        self.last_issued
    }

    /// Settle the loading flag, but only for the latest issued search.
    pub fn settle(&mut self, token: RequestToken) {
        if token == self.last_issued {
            self.loading = false;
        }
    }

    /// Drop all cached searches; leaves the loading flag untouched.
    pub fn reset(&mut self) {
        self.req.clear();
    }
}

/// Action type for the aggregator search store.
#[derive(Debug, Clone, PartialEq)]
pub enum FactCheckAction {
    /// Run a search (GET the aggregator endpoint).
    Search {
        /// Search parameters.
        query: FactCheckQuery,
    },

    /// A search settled successfully.
    SearchLoaded {
        /// Token of the search that produced this outcome.
        token: RequestToken,
        /// Descriptor with the results embedded inline.
        descriptor: FactCheckRequest,
    },

    /// A search settled with a failure; `message` is already normalized.
    Failed {
        /// Token of the search that produced this outcome.
        token: RequestToken,
        /// User-displayable message.
        message: String,
    },

    /// Drop all cached searches.
    Reset,
}

/// Reducer driving the aggregator search store.
///
/// Shares [`EntityEnvironment`] with the entity reducers; failures go
/// through the same error normalization and notification sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactCheckReducer;

impl FactCheckReducer {
    /// Create a new reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for FactCheckReducer {
    type State = FactCheckState;
    type Action = FactCheckAction;
    type Environment = EntityEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FactCheckAction::Search { query } => {
                let token = state.begin_request();
                let api = env.api.clone();

                smallvec![Effect::Future(Box::pin(async move {
                    Some(
                        match api.list::<FactCheck>(FACT_CHECKS_PATH, &query.params()).await {
                            Ok(page) => FactCheckAction::SearchLoaded {
                                token,
                                descriptor: FactCheckRequest {
                                    query,
                                    data: page.nodes,
                                    total: page.total,
                                },
                            },
                            Err(error) => FactCheckAction::Failed {
                                token,
                                message: error.user_message(),
                            },
                        },
                    )
                }))]
            },

            FactCheckAction::SearchLoaded { token, descriptor } => {
                state.req.push(descriptor);
                state.settle(token);
                smallvec![Effect::None]
            },

            FactCheckAction::Failed { token, message } => {
                state.settle(token);
                env.notifier.error(&message);
                smallvec![Effect::None]
            },

            FactCheckAction::Reset => {
                state.reset();
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RestClient;
    use crate::mocks::{Notification, RecordingNotifier};
    use std::sync::Arc;
    use studio_testing::{ReducerTest, assertions};

    fn test_env() -> (EntityEnvironment, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let env = EntityEnvironment::new(
            RestClient::new("http://localhost:0"),
            Arc::new(notifier.clone()),
        );
        (env, notifier)
    }

    fn search_result(text: &str) -> FactCheck {
        FactCheck {
            text: text.to_owned(),
            claimant: "someone".to_owned(),
            claim_date: None,
            review: vec![ClaimReview {
                publisher: "Checker".to_owned(),
                url: "https://example.com/review".to_owned(),
                title: "Checked".to_owned(),
                rating: "False".to_owned(),
            }],
        }
    }

    #[test]
    fn search_sets_loading_and_spawns_one_call() {
        let (env, _) = test_env();

        ReducerTest::new(FactCheckReducer::new())
            .with_env(env)
            .given_state(FactCheckState::default())
            .when_action(FactCheckAction::Search {
                query: FactCheckQuery {
                    query: "vaccines".to_owned(),
                    ..FactCheckQuery::default()
                },
            })
            .then_state(|state| assert!(state.loading))
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn search_loaded_embeds_results_inline() {
        let (env, _) = test_env();
        let mut state = FactCheckState::default();
        let token = state.begin_request();

        ReducerTest::new(FactCheckReducer::new())
            .with_env(env)
            .given_state(state)
            .when_action(FactCheckAction::SearchLoaded {
                token,
                descriptor: FactCheckRequest {
                    query: FactCheckQuery::default(),
                    data: vec![search_result("the moon is cheese")],
                    total: 1,
                },
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert_eq!(state.req.len(), 1);
                assert_eq!(state.req[0].data[0].text, "the moon is cheese");
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn failed_search_notifies_through_shared_sink() {
        let (env, notifier) = test_env();
        let mut state = FactCheckState::default();
        let token = state.begin_request();

        ReducerTest::new(FactCheckReducer::new())
            .with_env(env)
            .given_state(state)
            .when_action(FactCheckAction::Failed {
                token,
                message: "quota exceeded".to_owned(),
            })
            .then_state(|state| assert!(!state.loading))
            .run();

        assert_eq!(
            notifier.log(),
            vec![Notification::Error("quota exceeded".to_owned())]
        );
    }

    #[test]
    fn reset_drops_searches_but_not_loading() {
        let (env, _) = test_env();
        let mut state = FactCheckState::default();
        let _ = state.begin_request();
        state.req.push(FactCheckRequest {
            query: FactCheckQuery::default(),
            data: Vec::new(),
            total: 0,
        });

        ReducerTest::new(FactCheckReducer::new())
            .with_env(env)
            .given_state(state)
            .when_action(FactCheckAction::Reset)
            .then_state(|state| {
                assert!(state.req.is_empty());
                assert!(state.loading);
            })
            .run();
    }
}
