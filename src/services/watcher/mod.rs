pub mod engine;

pub use engine::{WatchError, WatchState, WatcherEngine};
