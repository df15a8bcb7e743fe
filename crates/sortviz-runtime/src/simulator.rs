#![forbid(unsafe_code)]

//! Deterministic program simulator for testing.
//!
//! [`ProgramSimulator`] runs a [`Model`] without a real terminal, enabling
//! event injection and frame capture in unit and integration tests. It
//! executes commands with the same semantics as the live runtime (a `Quit`
//! inside a batch stops the remaining commands).

use sortviz_core::event::Event;
use sortviz_render::buffer::Buffer;
use sortviz_render::frame::Frame;

use crate::program::{Cmd, Model};

/// Drives a model through messages and renders without a terminal.
pub struct ProgramSimulator<M: Model> {
    model: M,
    running: bool,
    last_frame: Option<Buffer>,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a simulator around a model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            running: true,
            last_frame: None,
        }
    }

    /// Run the model's `init`, executing any startup commands.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Inject a terminal event, converting it to the model's message type.
    pub fn inject_event(&mut self, event: Event) {
        self.send(M::Message::from(event));
    }

    /// Inject a sequence of terminal events in order.
    pub fn inject_events(&mut self, events: &[Event]) {
        for &event in events {
            self.inject_event(event);
        }
    }

    /// Send a message directly to the model.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    /// Render the model into a fresh buffer of the given size.
    pub fn capture_frame(&mut self, width: u16, height: u16) -> &Buffer {
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);
        self.last_frame = Some(frame.into_buffer());
        self.last_frame.as_ref().expect("frame just captured")
    }

    /// The most recently captured frame, if any.
    pub fn last_frame(&self) -> Option<&Buffer> {
        self.last_frame.as_ref()
    }

    /// Immutable access to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model (for test setup).
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Whether the model has quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let next = self.model.update(m);
                self.execute_cmd(next);
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    if !self.running {
                        break;
                    }
                    self.execute_cmd(c);
                }
            }
        }
    }
}
