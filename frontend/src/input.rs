//! Send gating for the message input.
//!
//! Every send trigger (send button, Enter, quick reply) goes through
//! [`InputController::begin`], so at most one chat request is in flight.

/// Whether a chat request is currently outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
}

/// Why a send trigger was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// Input was empty after trimming
    Empty,
    /// A request is already in flight
    Busy,
}

#[derive(Debug, Default)]
pub struct InputController {
    state: SendState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == SendState::Sending
    }

    /// Validate `raw` and claim the in-flight slot.
    ///
    /// Returns the trimmed text to send. The state is left untouched when the
    /// trigger is rejected.
    pub fn begin(&mut self, raw: &str) -> Result<String, SendRejected> {
        if self.is_sending() {
            return Err(SendRejected::Busy);
        }
        let text = raw.trim();
        if text.is_empty() {
            return Err(SendRejected::Empty);
        }
        self.state = SendState::Sending;
        Ok(text.to_string())
    }

    /// Release the in-flight slot once the request settles.
    pub fn finish(&mut self) {
        self.state = SendState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_claims() {
        let mut ctl = InputController::new();
        assert_eq!(ctl.begin("  when is the deadline?\n"), Ok("when is the deadline?".to_string()));
        assert_eq!(ctl.state(), SendState::Sending);
    }

    #[test]
    fn empty_and_whitespace_rejected() {
        let mut ctl = InputController::new();
        for raw in ["", "   ", "\t\n "] {
            assert_eq!(ctl.begin(raw), Err(SendRejected::Empty));
        }
        assert_eq!(ctl.state(), SendState::Idle);
    }

    #[test]
    fn second_trigger_while_in_flight_is_busy() {
        let mut ctl = InputController::new();
        assert!(ctl.begin("hello").is_ok());
        assert_eq!(ctl.begin("hello"), Err(SendRejected::Busy));
        assert_eq!(ctl.begin(""), Err(SendRejected::Busy));
    }

    #[test]
    fn finish_reopens_the_slot() {
        let mut ctl = InputController::new();
        ctl.begin("one").unwrap();
        ctl.finish();
        assert!(!ctl.is_sending());
        assert_eq!(ctl.begin("two"), Ok("two".to_string()));
    }
}
