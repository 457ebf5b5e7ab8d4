#![deny(unsafe_code)]
//! Core of the lumen shader demo.
//!
//! Builds a shader program for one of two variants (a static solid fill or a
//! pointer-reactive gradient), uploads a fullscreen triangle and drives the
//! draw/update cycle through [`FrameLoop`]. Rendering goes through the
//! [`render::GraphicsContext`] trait; enable the `glow` feature for the
//! `glow::Context` implementation.

pub mod color;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod input;
pub mod params;
pub mod pointer;
pub mod render;
pub mod shade;
pub mod surface;

pub use color::Rgba;
pub use config::{SessionConfig, Variant};
pub use error::LumenError;
pub use frame_loop::{FrameLoop, LoopState, Schedule};
pub use input::{input_queue, InputEvent, InputReceiver, InputSender};
pub use pointer::{PointerEvent, PointerState, MIN_DIAGONAL};
pub use surface::SurfaceSize;
