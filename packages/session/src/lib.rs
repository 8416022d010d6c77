//! # shotrecall-session - Session Aggregate
//!
//! Single-owner controller around the [`shotrecall_algo`] engine. A
//! `SessionState` owns every mutable piece of a training run: frozen base
//! anchors, per-side order permutations, the hidden truth vectors, the RNG
//! streams, the attempt counter and the append-only attempt history.
//!
//! All mutation flows through `&mut self` methods, so the borrow checker
//! enforces the single-writer discipline: a submission (validate, score,
//! record, maybe drift) runs to completion before any other read or write
//! can observe the state.

pub mod config;
pub mod error;
pub mod record;
pub mod shot;
pub mod state;

pub use config::SessionConfig;
pub use error::SessionError;
pub use record::{AttemptRecord, SessionStats};
pub use shot::Shot;
pub use state::SessionState;
