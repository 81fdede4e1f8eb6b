/// Icons the home page can render, looked up by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IconId {
    Calculator,
    Clock,
    Palette,
    Text,
    Image,
    Code,
    Chart,
    Globe,
    ArrowUp,
    #[default]
    Unknown,
}

impl IconId {
    pub const ALL: [IconId; 10] = [
        IconId::Calculator,
        IconId::Clock,
        IconId::Palette,
        IconId::Text,
        IconId::Image,
        IconId::Code,
        IconId::Chart,
        IconId::Globe,
        IconId::ArrowUp,
        IconId::Unknown,
    ];

    /// Case-insensitive lookup. Unrecognized names map to [`IconId::Unknown`].
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.name().eq_ignore_ascii_case(name))
            .unwrap_or(IconId::Unknown)
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconId::Calculator => "calculator",
            IconId::Clock => "clock",
            IconId::Palette => "palette",
            IconId::Text => "text",
            IconId::Image => "image",
            IconId::Code => "code",
            IconId::Chart => "chart",
            IconId::Globe => "globe",
            IconId::ArrowUp => "arrow-up",
            IconId::Unknown => "unknown",
        }
    }

    /// Single-cell symbol for terminal rendering
    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Calculator => "±",
            IconId::Clock => "◷",
            IconId::Palette => "◐",
            IconId::Text => "¶",
            IconId::Image => "▣",
            IconId::Code => "λ",
            IconId::Chart => "▤",
            IconId::Globe => "◍",
            IconId::ArrowUp => "↑",
            IconId::Unknown => "·",
        }
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
