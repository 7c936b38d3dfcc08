//! Photomerge Tasks - Background execution for decode and composite
//!
//! Decoding and compositing are CPU- and memory-bound; running them on an
//! interactive thread freezes the UI for their whole duration. This crate
//! runs each `photomerge-core` operation on its own worker thread and hands
//! the caller a [`TaskHandle`] that delivers the single result and supports
//! cancellation.
//!
//! # Cancellation
//!
//! Cancelling a handle is permanent: a cancelled task never invokes its
//! completion path, even if the worker had already finished computing. For
//! UIs that re-trigger work on every slider tick, [`TaskSlot`] implements
//! the last-request-wins policy - installing a new task cancels the one it
//! supersedes.

mod handle;
mod slot;

pub use handle::TaskHandle;
pub use slot::TaskSlot;

use log::debug;
use photomerge_core::composite::{CompositeError, CompositeRequest};
use photomerge_core::decode::{DecodeError, DecodeRequest, DecodedPhoto, RasterImage};

/// Decode on a worker thread.
///
/// The request moves into the worker; the handle delivers the decode
/// result exactly once, unless cancelled first.
pub fn spawn_decode(request: DecodeRequest) -> TaskHandle<Result<DecodedPhoto, DecodeError>> {
    debug!("spawning decode task ({}x{} box)", request.req_width, request.req_height);
    TaskHandle::spawn(move || photomerge_core::decode(&request))
}

/// Composite on a worker thread.
///
/// Image buffers travel by `Arc`, so spawning a composite per slider tick
/// does not copy pixels.
pub fn spawn_composite(
    request: CompositeRequest,
) -> TaskHandle<Result<RasterImage, CompositeError>> {
    debug!("spawning composite task (scale {})", request.scale);
    TaskHandle::spawn(move || photomerge_core::composite(&request))
}
