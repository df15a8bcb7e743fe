#![forbid(unsafe_code)]

//! Elm-style runtime for the animator.
//!
//! The program runtime manages the update/view loop: it owns the frame
//! clock, drains terminal events every iteration, delivers a tick message
//! on the fixed frame interval, and presents the view through the
//! double-buffered diff pipeline.
//!
//! This is the cooperative-stepping interleave: the model performs at most
//! one unit of animation work per tick (inside `update(Tick)`), then yields
//! back to the loop, which redraws and keeps input responsive regardless of
//! how long the animation runs.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use tracing::{debug, info};

use sortviz_core::event::Event;
use sortviz_core::terminal_session::{SessionOptions, TerminalSession};
use sortviz_render::buffer::Buffer;
use sortviz_render::diff::BufferDiff;
use sortviz_render::frame::Frame;
use sortviz_render::presenter::Presenter;

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model.
    ///
    /// Messages represent actions that update the model state.
    /// Must be convertible from terminal events.
    type Message: From<Event>;

    /// Initialize the model with startup commands.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// This is the core state transition function.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Commands represent effects to be executed by the runtime.
#[derive(Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Quit the application.
    Quit,
    /// Send a message back to the model.
    Msg(M),
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a batch of commands, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Self::None))
            .collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }

    /// Count the number of atomic commands in this command.
    pub fn count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Batch(cmds) => cmds.iter().map(Self::count).sum(),
            _ => 1,
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Frame clock rate: ticks delivered to the model per second.
    pub frame_rate: u32,
    /// Upper bound on a single event poll, so the loop keeps servicing the
    /// frame clock even if the terminal goes quiet.
    pub poll_cap: Duration,
    /// Run in the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            poll_cap: Duration::from_millis(100),
            alternate_screen: true,
        }
    }
}

impl ProgramConfig {
    /// Interval between ticks. A zero frame rate is clamped to one tick
    /// per second rather than a busy loop.
    pub fn tick_interval(&self) -> Duration {
        let fps = self.frame_rate.max(1);
        Duration::from_nanos(1_000_000_000 / u64::from(fps))
    }
}

/// The program runtime: terminal session, frame clock, and render pipeline.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    session: TerminalSession,
    presenter: Presenter<Stdout>,
    /// Last presented buffer; the next frame is diffed against it.
    presented: Buffer,
    width: u16,
    height: u16,
    last_tick: Instant,
    running: bool,
    dirty: bool,
    /// Force a full repaint on the next render (after resize/clear).
    repaint: bool,
}

impl<M: Model> Program<M> {
    /// Create a program with the default configuration.
    pub fn new(model: M) -> io::Result<Self> {
        Self::with_config(model, ProgramConfig::default())
    }

    /// Create a program, entering the terminal session immediately.
    pub fn with_config(model: M, config: ProgramConfig) -> io::Result<Self> {
        let session = TerminalSession::new(SessionOptions {
            alternate_screen: config.alternate_screen,
            hide_cursor: true,
        })?;
        let (width, height) = session.size()?;
        let width = width.max(1);
        let height = height.max(1);
        info!(width, height, fps = config.frame_rate, "program starting");

        Ok(Self {
            model,
            config,
            session,
            presenter: Presenter::new(io::stdout()),
            presented: Buffer::new(width, height),
            width,
            height,
            last_tick: Instant::now(),
            running: true,
            dirty: true,
            repaint: true,
        })
    }

    /// Run the event loop until the model quits.
    pub fn run(&mut self) -> io::Result<()> {
        let cmd = self.model.init();
        self.execute_cmd(cmd);

        // Deliver the initial surface size before the first frame so the
        // model can derive its layout.
        self.handle_event(Event::Resize {
            width: self.width,
            height: self.height,
        });

        self.presenter.clear_screen()?;
        self.render_frame()?;
        self.last_tick = Instant::now();

        while self.running {
            // Poll for input until the next tick is due, bounded so a quiet
            // terminal cannot stall the frame clock.
            let timeout = self.time_until_tick().min(self.config.poll_cap);
            if self.session.poll_event(timeout)? {
                // Drain all pending events before doing anything else.
                loop {
                    if let Some(event) = self.session.read_event()? {
                        self.handle_event(event);
                    }
                    if !self.session.poll_event(Duration::ZERO)? {
                        break;
                    }
                }
            }

            // Deliver the frame tick: at most one resume-and-redraw cycle.
            if self.last_tick.elapsed() >= self.config.tick_interval() {
                self.last_tick = Instant::now();
                let cmd = self.model.update(M::Message::from(Event::Tick));
                self.dirty = true;
                self.execute_cmd(cmd);
            }

            if self.dirty {
                self.render_frame()?;
            }
        }

        info!("program exiting");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            self.apply_resize(width.max(1), height.max(1));
        }
        let cmd = self.model.update(M::Message::from(event));
        self.dirty = true;
        self.execute_cmd(cmd);
    }

    fn apply_resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        debug!(width, height, "terminal resized");
        self.width = width;
        self.height = height;
        self.presented = Buffer::new(width, height);
        self.repaint = true;
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => self.running = false,
            Cmd::Msg(m) => {
                let next = self.model.update(m);
                self.dirty = true;
                self.execute_cmd(next);
            }
            Cmd::Batch(cmds) => {
                // A Quit anywhere in the batch stops the remaining commands.
                for c in cmds {
                    if !self.running {
                        break;
                    }
                    self.execute_cmd(c);
                }
            }
        }
    }

    /// Render the model into a fresh frame and present the diff.
    fn render_frame(&mut self) -> io::Result<()> {
        let mut frame = Frame::new(self.width, self.height);
        self.model.view(&mut frame);
        let next = frame.into_buffer();

        let diff = if self.repaint {
            self.presenter.clear_screen()?;
            self.repaint = false;
            BufferDiff::full(&next)
        } else {
            BufferDiff::compute(&self.presented, &next)
        };

        self.presenter.present(&next, &diff)?;
        self.presented = next;
        self.dirty = false;
        Ok(())
    }

    fn time_until_tick(&self) -> Duration {
        self.config.tick_interval().saturating_sub(self.last_tick.elapsed())
    }

    /// Access the model (used by tests and teardown paths).
    pub fn model(&self) -> &M {
        &self.model
    }
}
