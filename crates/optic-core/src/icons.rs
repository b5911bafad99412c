//! Icon resolver
//!
//! A closed set of Lucide glyphs, addressed by their kebab-case names.
//! Unknown names resolve to the arrow-down glyph.

/// Known icon names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    ArrowDown,
    Menu,
    X,
    ChevronRight,
}

impl IconName {
    pub const ALL: [IconName; 4] = [
        IconName::ArrowDown,
        IconName::Menu,
        IconName::X,
        IconName::ChevronRight,
    ];

    pub const FALLBACK: IconName = IconName::ArrowDown;

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "arrow-down" => Some(IconName::ArrowDown),
            "menu" => Some(IconName::Menu),
            "x" => Some(IconName::X),
            "chevron-right" => Some(IconName::ChevronRight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IconName::ArrowDown => "arrow-down",
            IconName::Menu => "menu",
            IconName::X => "x",
            IconName::ChevronRight => "chevron-right",
        }
    }

    pub fn glyph(self) -> Glyph {
        let paths: &'static [&'static str] = match self {
            IconName::ArrowDown => &["M12 5v14", "m19 12-7 7-7-7"],
            IconName::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            IconName::X => &["M18 6 6 18", "m6 6 12 12"],
            IconName::ChevronRight => &["m9 18 6-6-6-6"],
        };
        Glyph { name: self, paths }
    }
}

/// Stroke paths of a glyph on a 24×24 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub name: IconName,
    pub paths: &'static [&'static str],
}

impl Glyph {
    pub const VIEW_BOX: &'static str = "0 0 24 24";
}

/// Resolves a symbolic name, never failing.
pub fn resolve(name: &str) -> Glyph {
    IconName::from_name(name)
        .unwrap_or(IconName::FALLBACK)
        .glyph()
}

/// Presentation options of a rendered icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    pub size: u32,
    pub class: String,
    /// Stroke color; `currentColor` when unset
    pub color: Option<String>,
}

impl IconStyle {
    pub fn sized(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn stroke(&self) -> &str {
        self.color.as_deref().unwrap_or("currentColor")
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            size: 24,
            class: String::new(),
            color: None,
        }
    }
}
