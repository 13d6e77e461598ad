/// Bot message shown whenever a chat request fails for any reason.
pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting right now. Please try again in a moment.";

/// Local notice shown when the user tries to send an empty message.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a message";

/// Label of the positive vote button on bot messages.
pub const VOTE_HELPFUL_LABEL: &str = "Helpful 👍";

/// Label of the negative vote button on bot messages.
pub const VOTE_NOT_HELPFUL_LABEL: &str = "Not helpful 👎";
