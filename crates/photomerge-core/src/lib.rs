//! Photomerge Core - Image decoding and compositing library
//!
//! This crate provides the processing core for Photomerge: bounded-memory
//! subsampled decoding of picked photos, and bitmap compositing that draws
//! a scaled overlay image onto a base image in one of three placement
//! modes.
//!
//! Both entry points are pure, synchronous, per-call transformations with
//! no shared state. Callers that need to keep an interactive thread
//! responsive run them through the `photomerge-tasks` crate instead of
//! calling them inline.

pub mod composite;
pub mod decode;

pub use composite::{composite, CompositeError, CompositeRequest, PlacementMode, DEFAULT_SCALE};
pub use decode::{
    decode, sample_factor, DecodeError, DecodeRequest, DecodedPhoto, FilterType, ImageSource,
    Orientation, RasterImage,
};
