//! The per-session draw/update cycle.
//!
//! `FrameLoop` owns the rendering context, the renderer, the pointer state
//! and the consumer end of the input queue. The host drives it: call
//! [`FrameLoop::start`] once, then [`FrameLoop::tick`] on every display
//! refresh for as long as the returned [`Schedule`] says `NextFrame`.

use crate::config::{SessionConfig, Variant};
use crate::error::LumenError;
use crate::input::{input_queue, InputEvent, InputReceiver, InputSender};
use crate::pointer::PointerState;
use crate::render::{GraphicsContext, Renderer};
use crate::surface::SurfaceSize;

/// Lifecycle of a frame loop. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Built, no frame requested yet. The static variant stays here.
    Idle,
    /// A next frame is requested after every tick.
    Running,
}

/// What the host should do after `start` or `tick` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Request another animation frame and call `tick` from it.
    NextFrame,
    /// Do not request another frame.
    Stop,
}

pub struct FrameLoop<G: GraphicsContext> {
    gl: G,
    renderer: Renderer<G>,
    config: SessionConfig,
    pointer: PointerState,
    sender: InputSender,
    input: InputReceiver,
    state: LoopState,
    frames: u64,
}

impl<G: GraphicsContext> FrameLoop<G> {
    /// Builds the renderer for `config` on `gl`.
    ///
    /// # Errors
    ///
    /// Propagates renderer setup failures; the context is dropped with them
    /// and no draw call has been issued.
    pub fn new(gl: G, config: SessionConfig, surface: SurfaceSize) -> Result<Self, LumenError> {
        let renderer = Renderer::new(&gl, &config, surface)?;
        let (sender, input) = input_queue();

        Ok(Self {
            gl,
            renderer,
            config,
            pointer: PointerState::new(),
            sender,
            input,
            state: LoopState::Idle,
            frames: 0,
        })
    }

    /// A sender for host event listeners.
    pub fn input(&self) -> InputSender {
        self.sender.clone()
    }

    /// Starts the session.
    ///
    /// The static variant draws exactly once and returns `Stop`. The
    /// interactive variant moves to `Running` and returns `NextFrame`.
    /// Calling this again has no further effect.
    pub fn start(&mut self) -> Schedule {
        match (self.config.variant, self.state) {
            (_, LoopState::Running) => Schedule::NextFrame,
            (Variant::Static, LoopState::Idle) => {
                if self.frames == 0 {
                    self.renderer.draw(&self.gl);
                    self.frames = 1;
                    log::debug!("static frame drawn");
                }
                Schedule::Stop
            }
            (Variant::Interactive, LoopState::Idle) => {
                self.state = LoopState::Running;
                log::debug!("frame loop running");
                Schedule::NextFrame
            }
        }
    }

    /// Renders one frame: applies queued input, pushes uniforms, clears
    /// and draws. Does nothing unless the loop is running.
    pub fn tick(&mut self) -> Schedule {
        if self.state != LoopState::Running {
            return Schedule::Stop;
        }

        self.apply_input();
        self.renderer
            .set_pointer(&self.gl, &self.pointer, self.config.min_diagonal);
        self.renderer.draw(&self.gl);
        self.frames += 1;

        Schedule::NextFrame
    }

    fn apply_input(&mut self) {
        for event in self.input.drain() {
            match event {
                InputEvent::PointerMoved(e) => self.pointer.apply(&e),
                InputEvent::Resized(surface) => {
                    log::debug!("resized to {}x{}", surface.width(), surface.height());
                    self.renderer.resize(&self.gl, surface);
                }
            }
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> SurfaceSize {
        self.renderer.surface()
    }

    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Releases GPU resources and hands back the context.
    pub fn destroy(self) -> G {
        self.renderer.destroy(&self.gl);
        self.gl
    }
}
