//! # Studio Testing
//!
//! Testing utilities for studio reducers.
//!
//! Provides a fluent Given-When-Then API for exercising a reducer as a pure
//! function, without a runtime or network:
//!
//! ```ignore
//! use studio_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(EntityReducer::<Format>::new())
//!     .with_env(test_environment())
//!     .given_state(EntityState::default())
//!     .when_action(EntityAction::Reset)
//!     .then_state(|state| assert!(state.details.is_empty()))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};
