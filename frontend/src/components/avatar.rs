//! Message avatars.
//!
//! The bot avatar tries the primary image, then exactly one fallback path,
//! then gives up on images and shows an inline SVG badge.

use yew::prelude::*;

/// Which avatar the bot message is currently showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSource {
    #[default]
    Primary,
    Fallback,
    Placeholder,
}

impl AvatarSource {
    /// Next step after an image load error
    pub fn degraded(self) -> Self {
        match self {
            AvatarSource::Primary => AvatarSource::Fallback,
            AvatarSource::Fallback | AvatarSource::Placeholder => AvatarSource::Placeholder,
        }
    }

    /// Image path to load for this step, `None` once degraded to the placeholder
    pub fn path<'a>(self, primary: &'a str, fallback: &'a str) -> Option<&'a str> {
        match self {
            AvatarSource::Primary => Some(primary),
            AvatarSource::Fallback => Some(fallback),
            AvatarSource::Placeholder => None,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BotAvatarProps {
    pub primary: AttrValue,
    pub fallback: AttrValue,
}

#[function_component(BotAvatar)]
pub fn bot_avatar(props: &BotAvatarProps) -> Html {
    let source = use_state(AvatarSource::default);

    let on_error = {
        let source = source.clone();
        Callback::from(move |_: Event| source.set(source.degraded()))
    };

    let image = source
        .path(&props.primary, &props.fallback)
        .map(|path| path.to_string());

    html! {
        <div class="message-avatar">
            if let Some(src) = image {
                <img
                    key={src.clone()}
                    class="message-avatar-img"
                    alt="Chatbot logo"
                    src={src}
                    onerror={on_error}
                />
            } else {
                <svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                    <circle cx="12" cy="12" r="10" fill="#60a5fa" />
                    <text x="12" y="16" text-anchor="middle" font-size="9" font-family="Arial, Helvetica, sans-serif" fill="#fff">{ "AMJ" }</text>
                </svg>
            }
        </div>
    }
}

#[function_component(UserAvatar)]
pub fn user_avatar() -> Html {
    html! {
        <div class="message-avatar">
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                <path d="M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM4 20a8 8 0 0 1 16 0" fill="#fff" opacity="0.95"></path>
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_step_degrade() {
        let s = AvatarSource::default();
        assert_eq!(s, AvatarSource::Primary);
        let s = s.degraded();
        assert_eq!(s, AvatarSource::Fallback);
        let s = s.degraded();
        assert_eq!(s, AvatarSource::Placeholder);
        // terminal: no further attempts
        assert_eq!(s.degraded(), AvatarSource::Placeholder);
    }

    #[test]
    fn test_paths() {
        let (p, f) = ("/static/images/chatbot-logo.png", "/chatbot-logo.png");
        assert_eq!(AvatarSource::Primary.path(p, f), Some(p));
        assert_eq!(AvatarSource::Fallback.path(p, f), Some(f));
        assert_eq!(AvatarSource::Placeholder.path(p, f), None);
    }
}
