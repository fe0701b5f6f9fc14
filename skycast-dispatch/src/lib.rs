//! Redux-style runtime for the skycast dashboard
//!
//! The dashboard keeps one state value and changes it only through actions:
//!
//! 1. A terminal event is mapped to actions by the components
//! 2. Actions go through the [`EffectStore`]; the reducer mutates state and
//!    returns [`DispatchResult`] with any effects
//! 3. Effects are handed to the app, which spawns work on the [`TaskManager`]
//! 4. Finished tasks send result actions back into the same queue
//! 5. If state changed, the frame is redrawn
//!
//! Reducers never do I/O; all async work lives in effect handlers.
//!
//! ```ignore
//! fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::SearchSubmit => {
//!             state.pending = true;
//!             DispatchResult::changed_with(Effect::Fetch(state.query.clone()))
//!         }
//!         Action::FetchDidLoad(data) => {
//!             state.pending = false;
//!             state.data = Some(data);
//!             DispatchResult::changed()
//!         }
//!         _ => DispatchResult::unchanged(),
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod runtime;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use effect::{DispatchResult, EffectReducer, EffectStore, Middleware, TracingMiddleware};
pub use event::EventKind;
pub use runtime::{EffectContext, EffectRuntime, EventOutcome};
pub use tasks::{TaskKey, TaskManager};
