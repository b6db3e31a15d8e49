//! Terminal bell feedback.

use std::io::{self, Write};

use log::warn;

use crate::core::{Feedback, FeedbackSink};

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell on a wrong pick. Correct picks are shown by the
/// flash; steps are silent.
pub struct BellSink<W: Write = io::Stdout> {
    out: W,
}

impl BellSink {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FeedbackSink for BellSink<W> {
    fn feedback(&mut self, event: Feedback) {
        if event != Feedback::Incorrect {
            return;
        }
        if let Err(e) = self.out.write_all(BEL).and_then(|_| self.out.flush()) {
            warn!("bell failed: {}", e);
        }
    }
}
