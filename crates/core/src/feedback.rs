//! Feedback sink - the side channel for munch/error/step sounds
//!
//! The session never plays anything itself. It reports discrete outcomes to a
//! sink it owns; the terminal front end rings the bell, tests record them.

/// One feedback event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// A correct cell was eaten.
    Correct,
    /// A wrong cell was picked.
    Incorrect,
    /// The muncher moved. `step` cycles through the step sounds.
    Moved { step: u8 },
}

/// Receives feedback events from a session.
pub trait FeedbackSink {
    fn feedback(&mut self, event: Feedback);
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for Box<S> {
    fn feedback(&mut self, event: Feedback) {
        (**self).feedback(event);
    }
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for &mut S {
    fn feedback(&mut self, event: Feedback) {
        (**self).feedback(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {
    fn feedback(&mut self, _event: Feedback) {}
}

/// Keeps every event, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<Feedback>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Feedback] {
        &self.events
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.events)
    }
}

impl FeedbackSink for RecordingSink {
    fn feedback(&mut self, event: Feedback) {
        self.events.push(event);
    }
}
