//! Open/closed state of the widget panel

/// Class set on `document.body` while the widget is open
pub const OPEN_BODY_CLASS: &str = "widget-open";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

impl WidgetState {
    pub fn is_open(self) -> bool {
        self == WidgetState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            WidgetState::Open => WidgetState::Closed,
            WidgetState::Closed => WidgetState::Open,
        }
    }

    /// State after a document-level keydown
    pub fn after_key(self, key: &str) -> Self {
        match (self, key) {
            (WidgetState::Open, "Escape") => WidgetState::Closed,
            _ => self,
        }
    }

    /// State after a document-level click.
    ///
    /// Clicks on the toggle control are left to the toggle's own handler.
    pub fn after_click(self, inside_widget: bool, on_toggle: bool) -> Self {
        if self.is_open() && !inside_widget && !on_toggle {
            WidgetState::Closed
        } else {
            self
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            WidgetState::Open => "Close chat",
            WidgetState::Closed => "Open chat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_state() {
        for start in [WidgetState::Closed, WidgetState::Open] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn escape_closes_only_when_open() {
        assert_eq!(WidgetState::Open.after_key("Escape"), WidgetState::Closed);
        assert_eq!(WidgetState::Closed.after_key("Escape"), WidgetState::Closed);
        assert_eq!(WidgetState::Open.after_key("Enter"), WidgetState::Open);
    }

    #[test]
    fn outside_click_closes() {
        assert_eq!(WidgetState::Open.after_click(false, false), WidgetState::Closed);
    }

    #[test]
    fn inside_or_toggle_click_keeps_open() {
        assert_eq!(WidgetState::Open.after_click(true, false), WidgetState::Open);
        assert_eq!(WidgetState::Open.after_click(false, true), WidgetState::Open);
        assert_eq!(WidgetState::Closed.after_click(false, false), WidgetState::Closed);
    }

    #[test]
    fn aria_label_follows_state() {
        assert_eq!(WidgetState::Closed.aria_label(), "Open chat");
        assert_eq!(WidgetState::Open.aria_label(), "Close chat");
    }
}
