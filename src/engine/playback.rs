//! Playback cursor over a finished step log.

use std::time::Duration;

use serde::Serialize;

use crate::types::{
    Step, TraversalResult, DEFAULT_STEP_INTERVAL, MAX_STEP_INTERVAL, MIN_STEP_INTERVAL,
};

use super::StepLog;

/// Whether playback is advancing on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Not advancing; the cursor is wherever it was left.
    Stopped,
    /// Advancing one step per tick.
    Playing,
    /// Suspended by `pause`; `play` resumes from the cursor.
    Paused,
}

/// A read-only cursor that walks a step log forward and backward.
///
/// The cursor starts before the first step. Timing is left to the caller:
/// it calls [`Playback::tick`] once every [`Playback::interval`].
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    log: &'a StepLog,
    cursor: Option<usize>,
    state: PlaybackState,
    interval: Duration,
}

impl<'a> Playback<'a> {
    /// Create a stopped cursor positioned before the first step.
    pub fn new(log: &'a StepLog) -> Self {
        Self {
            log,
            cursor: None,
            state: PlaybackState::Stopped,
            interval: DEFAULT_STEP_INTERVAL,
        }
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the step currently shown.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// The step currently shown.
    pub fn current(&self) -> Option<&'a Step> {
        self.cursor.and_then(|i| self.log.get(i))
    }

    /// Whether the last step is shown.
    pub fn is_at_end(&self) -> bool {
        !self.log.is_empty() && self.cursor == Some(self.log.len() - 1)
    }

    /// Steps left after the current one.
    pub fn remaining(&self) -> usize {
        match self.cursor {
            Some(i) => self.log.len().saturating_sub(i + 1),
            None => self.log.len(),
        }
    }

    /// Start or resume automatic playback. Restarts from the beginning
    /// when the end was reached.
    pub fn play(&mut self) {
        if self.is_at_end() {
            self.cursor = None;
        }
        self.state = PlaybackState::Playing;
    }

    /// Suspend automatic playback, keeping the position.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Stop playback and return before the first step.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.cursor = None;
    }

    /// Advance one step if playing. Playback stops once the last step is shown.
    pub fn tick(&mut self) -> Option<&'a Step> {
        if self.state != PlaybackState::Playing {
            return None;
        }
        let step = self.step_forward();
        if step.is_none() || self.is_at_end() {
            self.state = PlaybackState::Stopped;
        }
        step
    }

    /// Show the next step.
    pub fn step_forward(&mut self) -> Option<&'a Step> {
        let next = self.cursor.map_or(0, |i| i + 1);
        let step = self.log.get(next)?;
        self.cursor = Some(next);
        Some(step)
    }

    /// Show the previous step. Never moves before the first step.
    pub fn step_backward(&mut self) -> Option<&'a Step> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.log.get(i - 1)
            }
            _ => None,
        }
    }

    /// Show the step at `index`.
    pub fn seek(&mut self, index: usize) -> TraversalResult<&'a Step> {
        let step = self.log.step(index)?;
        self.cursor = Some(index);
        Ok(step)
    }

    /// Return before the first step without changing the playback state.
    pub fn rewind(&mut self) {
        self.cursor = None;
    }

    /// Show the step on which the target was found.
    pub fn jump_to_target(&mut self) -> Option<&'a Step> {
        let index = self.log.iter().position(|s| s.found_target)?;
        self.cursor = Some(index);
        self.log.get(index)
    }

    /// Show the last step.
    pub fn jump_to_end(&mut self) -> Option<&'a Step> {
        let index = self.log.len().checked_sub(1)?;
        self.cursor = Some(index);
        self.log.get(index)
    }

    /// Delay between two ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Set the delay between two ticks, clamped to the supported range.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_STEP_INTERVAL, MAX_STEP_INTERVAL);
    }
}
