//! In-memory display surface
//!
//! Records every draw call instead of rendering. Events are queued by the
//! caller; an optional frame limit injects a `Quit` once that many frames
//! have been presented.

use std::collections::VecDeque;

use super::{Bounds, Color, DisplaySurface, InputEvent, Rect};

/// A recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    SetColor(Color),
    Clear,
    FillRect(Rect),
    Present,
}

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    size: Bounds,
    events: VecDeque<InputEvent>,
    commands: Vec<DrawCommand>,
    frames_presented: u64,
    frame_limit: Option<u64>,
    quit_sent: bool,
}

impl HeadlessSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Bounds::new(width, height),
            events: VecDeque::new(),
            commands: Vec::new(),
            frames_presented: 0,
            frame_limit: None,
            quit_sent: false,
        }
    }

    /// Deliver a `Quit` on the first poll after `frames` presents
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Queue an event for the next drain
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Simulate the user resizing the window
    pub fn resize(&mut self, width: i32, height: i32) {
        self.size = Bounds::new(width, height);
        self.events.push_back(InputEvent::Other);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget recorded commands (keeps counters)
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Last rectangle filled, if any
    pub fn last_fill(&self) -> Option<(Color, Rect)> {
        let mut color = None;
        let mut last = None;
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::SetColor(c) => color = Some(c),
                DrawCommand::FillRect(r) => last = color.map(|c| (c, r)),
                _ => {}
            }
        }
        last
    }
}

impl DisplaySurface for HeadlessSurface {
    fn size(&self) -> Bounds {
        self.size
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        if let Some(event) = self.events.pop_front() {
            return Some(event);
        }
        match self.frame_limit {
            Some(limit) if !self.quit_sent && self.frames_presented >= limit => {
                self.quit_sent = true;
                Some(InputEvent::Quit)
            }
            _ => None,
        }
    }

    fn set_draw_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.frames_presented += 1;
    }
}
