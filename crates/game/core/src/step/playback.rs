//! Forward-only playback for demonstration drivers.
//!
//! The driver decides the pace; playback only reports where the deterministic
//! pause points (interactive steps) are. Dropping a `Playback` is the only
//! cancellation there is.

use super::{Step, Trace};

/// One step handed to the driver.
#[derive(Clone, Copy, Debug)]
pub struct PlaybackFrame<'a> {
    pub index: usize,
    pub step: &'a Step,
    /// True when a player would have to act before this step takes effect.
    pub pause: bool,
}

#[derive(Clone, Debug)]
pub struct Playback<'a> {
    trace: &'a Trace,
    position: usize,
}

impl<'a> Playback<'a> {
    pub fn new(trace: &'a Trace) -> Self {
        Self { trace, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.position >= self.trace.len()
    }

    /// Array state as of the last frame handed out.
    pub fn current_array(&self) -> &'a [i32] {
        match self.position.checked_sub(1).and_then(|last| self.trace.get(last)) {
            Some(step) => &step.snapshot,
            None => self.trace.input(),
        }
    }

    /// Emits every frame up to, but not including, the next pause point.
    pub fn run_to_pause(&mut self) -> Vec<PlaybackFrame<'a>> {
        let mut frames = Vec::new();
        while let Some(step) = self.trace.get(self.position) {
            if step.requires_user_action {
                break;
            }
            frames.push(self.frame(self.position));
            self.position += 1;
        }
        frames
    }

    fn frame(&self, index: usize) -> PlaybackFrame<'a> {
        let step = &self.trace.steps()[index];
        PlaybackFrame {
            index,
            step,
            pause: step.requires_user_action,
        }
    }
}

impl<'a> Iterator for Playback<'a> {
    type Item = PlaybackFrame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        let frame = self.frame(self.position);
        self.position += 1;
        Some(frame)
    }
}
