//! Global search: dispatch, scoring, debouncing and the surface state machine

pub mod controller;
pub mod debounce;
pub mod dispatcher;
pub mod navigation;
pub mod scorer;
pub mod state;

pub use controller::{KeyOutcome, SearchController};
pub use debounce::Debouncer;
pub use dispatcher::Dispatcher;
pub use navigation::navigation_target;
pub use scorer::score;
pub use state::{SearchAction, SearchState, SurfacePhase, Transition};
