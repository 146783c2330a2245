//! Movie icon lookup / 电影图标

/// Keyword -> icon, first match wins
const ICONS: &[(&str, &str)] = &[
    ("prison", "⛓️"),
    ("family", "🌹"),
    ("hero", "🦸"),
    ("space", "🚀"),
    ("star", "⭐"),
    ("dream", "💭"),
    ("heist", "💰"),
    ("virtual", "🕶️"),
    ("robot", "🤖"),
    ("ring", "💍"),
    ("ocean", "🌊"),
    ("war", "⚔️"),
    ("love", "❤️"),
    ("journey", "🧭"),
    ("city", "🏙️"),
    ("ghost", "👻"),
];

pub const DEFAULT_ICON: &str = "🎬";

/// Pick a display icon for a movie name (case-insensitive keyword match) / 根据片名选择图标
pub fn movie_icon(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    ICONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}
