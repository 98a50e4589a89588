//! Wire types shared with the PMM Companion backend.
//!
//! Every struct here mirrors a JSON payload produced (or accepted) by the
//! backend HTTP/WebSocket API. The frontend never computes these values,
//! it only deserializes and displays them.

pub mod chat;
pub mod commitments;
pub mod consciousness;
pub mod events;
pub mod live;
pub mod metrics;
pub mod reflections;
pub mod sql;
pub mod traces;
