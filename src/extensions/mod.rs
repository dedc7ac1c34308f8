pub mod observers;

pub use observers::{InteractionEvent, InteractionObserver, ObserverContext};
