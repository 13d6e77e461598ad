use chrono::NaiveTime;
use web_sys::window;

/// Get the base HTTP URL (e.g., "http://localhost:5000" or "https://college.example")
pub fn get_base_url() -> String {
    let Some(window) = window() else {
        return String::new();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:5000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/chat" -> "http://localhost:5000/chat").
/// Absolute URLs are passed through untouched.
pub fn api_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}{}", get_base_url(), path)
}

/// Format a wall-clock time as a 12-hour "hh:mm AM" label
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Prepare bot markup for insertion: line breaks become `<br>`.
///
/// The markup itself is trusted as delivered by the backend and is not
/// sanitized here.
pub fn bot_markup(html: &str) -> String {
    html.replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(t(0, 5)), "12:05 AM");
        assert_eq!(format_clock(t(9, 30)), "09:30 AM");
        assert_eq!(format_clock(t(12, 0)), "12:00 PM");
        assert_eq!(format_clock(t(23, 59)), "11:59 PM");
    }

    #[test]
    fn test_bot_markup_line_breaks() {
        assert_eq!(bot_markup("a\nb"), "a<br>b");
        assert_eq!(bot_markup("a\r\nb\n"), "a<br>b<br>");
        assert_eq!(bot_markup("<p>kept</p>"), "<p>kept</p>");
    }

    #[test]
    fn test_api_url_passes_absolute() {
        assert_eq!(
            api_url("https://faq.example/chat"),
            "https://faq.example/chat"
        );
    }
}
