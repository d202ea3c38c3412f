use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    MessageCircle,
    Users,
    Ear,
    Heart,
    TrendingUp,
    ArrowRight,
    Quote,
    Send,
    CheckCircle,
    Eye,
    Volume,
    Handshake,
    Target,
    Mail,
    Phone,
    Play,
    Clock,
    Close,
    Check,
    Alert,
    Award,
    Retry,
}

const GLYPHS: &[(Icon, &str)] = &[
    (Icon::MessageCircle, "💬"),
    (Icon::Users, "👥"),
    (Icon::Ear, "👂"),
    (Icon::Heart, "❤️"),
    (Icon::TrendingUp, "📈"),
    (Icon::ArrowRight, "→"),
    (Icon::Quote, "❝"),
    (Icon::Send, "➤"),
    (Icon::CheckCircle, "✔"),
    (Icon::Eye, "👁"),
    (Icon::Volume, "🔊"),
    (Icon::Handshake, "🤝"),
    (Icon::Target, "🎯"),
    (Icon::Mail, "✉️"),
    (Icon::Phone, "📞"),
    (Icon::Play, "▶"),
    (Icon::Clock, "🕒"),
    (Icon::Close, "✕"),
    (Icon::Check, "✓"),
    (Icon::Alert, "ⓘ"),
    (Icon::Award, "🏆"),
    (Icon::Retry, "↻"),
];

impl Icon {
    pub fn glyph(self) -> &'static str {
        GLYPHS
            .iter()
            .find(|(icon, _)| *icon == self)
            .map(|(_, glyph)| *glyph)
            .unwrap_or("•")
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 22] = [
        Icon::MessageCircle,
        Icon::Users,
        Icon::Ear,
        Icon::Heart,
        Icon::TrendingUp,
        Icon::ArrowRight,
        Icon::Quote,
        Icon::Send,
        Icon::CheckCircle,
        Icon::Eye,
        Icon::Volume,
        Icon::Handshake,
        Icon::Target,
        Icon::Mail,
        Icon::Phone,
        Icon::Play,
        Icon::Clock,
        Icon::Close,
        Icon::Check,
        Icon::Alert,
        Icon::Award,
        Icon::Retry,
    ];

    #[test]
    fn test_every_icon_has_its_own_glyph() {
        for icon in ALL {
            assert_ne!(icon.glyph(), "•", "{:?} missing from lookup table", icon);
        }
        assert_eq!(GLYPHS.len(), ALL.len());
    }
}
