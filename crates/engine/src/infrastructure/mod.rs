//! Infrastructure - adapters behind the port traits.

pub mod clock;
pub mod draft_store;
pub mod observer;
pub mod ports;

pub use clock::SystemClock;
pub use draft_store::FileDraftStore;
pub use observer::TracingObserver;
pub use ports::{ClockPort, DraftStore, DraftStoreError};
