use crate::model::seat::Seat;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

const DEFAULT_AI_DELAY_MS: u64 = 2_000;
const DEFAULT_TRICK_DELAY_MS: u64 = 3_000;

/// Pauses an observer should see before automated actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    #[serde(default = "default_ai_delay_ms")]
    pub ai_delay_ms: u64,
    #[serde(default = "default_trick_delay_ms")]
    pub trick_delay_ms: u64,
}

impl Pacing {
    pub const INSTANT: Pacing = Pacing {
        ai_delay_ms: 0,
        trick_delay_ms: 0,
    };

    pub const fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    pub const fn trick_delay(&self) -> Duration {
        Duration::from_millis(self.trick_delay_ms)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            trick_delay_ms: DEFAULT_TRICK_DELAY_MS,
        }
    }
}

fn default_ai_delay_ms() -> u64 {
    DEFAULT_AI_DELAY_MS
}

fn default_trick_delay_ms() -> u64 {
    DEFAULT_TRICK_DELAY_MS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AutoPlay(Seat),
    ResolveTrick,
}

/// A continuation waiting for its delay to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub action: Action,
    pub delay: Duration,
}

/// FIFO of pending continuations. Runs one at a time, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    queue: VecDeque<Scheduled>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action, delay: Duration) {
        self.queue.push_back(Scheduled { action, delay });
    }

    pub fn pop(&mut self) -> Option<Scheduled> {
        self.queue.pop_front()
    }

    pub fn peek(&self) -> Option<&Scheduled> {
        self.queue.front()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scheduled> {
        self.queue.iter()
    }
}

/// How the driver honours a continuation's delay.
pub trait Clock {
    fn wait(&mut self, delay: Duration);
}

/// Skips every delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantClock;

impl Clock for InstantClock {
    fn wait(&mut self, _delay: Duration) {}
}

/// Blocks the calling thread for the full delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepClock;

impl Clock for SleepClock {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}
