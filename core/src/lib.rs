//! # Studio Core
//!
//! Core traits and types for the studio state engine.
//!
//! The studio is the administration console of a fact-checking publication
//! platform. Every screen in it reads from a normalized store and dispatches
//! actions against a CMS API; this crate provides the two abstractions that
//! whole pattern is built on:
//!
//! - **Reducer**: pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: a *description* of a side effect (an HTTP call, a delay),
//!   executed by the store runtime, feeding resulting actions back in
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use studio_core::{reducer::Reducer, effect::Effect, smallvec, SmallVec};
//!
//! impl Reducer for FormatReducer {
//!     type State = EntityState<Format>;
//!     type Action = EntityAction<Format>;
//!     type Environment = EntityEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Self::State,
//!         action: Self::Action,
//!         env: &Self::Environment,
//!     ) -> SmallVec<[Effect<Self::Action>; 4]> {
//!         // state transitions here, network calls as Effect::Future
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export the effect buffer type so reducer impls don't need a direct
// smallvec dependency.
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - the core trait for store logic.
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They contain all state-transition logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for store logic.
    ///
    /// # Type Parameters
    ///
    /// - `State`: the store state this reducer operates on
    /// - `Action`: the action type this reducer processes
    /// - `Environment`: the injected dependencies this reducer needs
    ///
    /// A reducer mutates state in place and returns *descriptions* of the
    /// side effects to run; it never performs I/O itself. Effects are
    /// executed by the runtime and may feed further actions back into the
    /// same reducer.
    pub trait Reducer {
        /// The state type this reducer operates on.
        type State;

        /// The action type this reducer processes.
        type Action;

        /// The environment type with injected dependencies.
        type Environment;

        /// Reduce an action into state changes and effects.
        ///
        /// The returned buffer is a [`SmallVec`] because almost every action
        /// produces zero or one effect; four slots keeps the common cases
        /// off the heap.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - side effect descriptions.
///
/// Effects are values, not execution. A reducer returns them; the store
/// runtime interprets them, and any action they produce is dispatched back
/// through the reducer.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// A side effect to be executed by the store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: the action type an effect can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect.
        None,

        /// Run effects concurrently.
        Parallel(Vec<Effect<Action>>),

        /// Run effects in order, waiting for each to complete.
        Sequential(Vec<Effect<Action>>),

        /// Dispatch an action after a delay.
        Delay {
            /// How long to wait.
            duration: Duration,
            /// Action to dispatch after the delay.
            action: Box<Action>,
        },

        /// Arbitrary async computation.
        ///
        /// Resolves to `Option<Action>` - if `Some`, the action is fed back
        /// into the reducer.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug.
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run concurrently.
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially.
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }
    }
}
