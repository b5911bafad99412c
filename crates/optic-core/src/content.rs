//! Static exhibition content
//!
//! Everything here is defined once at compile time and never mutated.
//! Slice order is display order.

/// Vertical spacing preset applied to a showcase card, producing the
/// asymmetric grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOffset {
    /// No offset
    Flush,
    /// Largest drop, for the middle column
    Deep,
    /// Half of `Deep`
    Medium,
}

impl LayoutOffset {
    pub fn class(self) -> &'static str {
        match self {
            LayoutOffset::Flush => "mt-0",
            LayoutOffset::Deep => "mt-24 md:mt-48",
            LayoutOffset::Medium => "mt-12 md:mt-24",
        }
    }
}

/// A single model in the collection grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseItem {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub offset: LayoutOffset,
    pub image_url: &'static str,
}

pub const COLLECTION: [ShowcaseItem; 3] = [
    ShowcaseItem {
        id: "neon-01",
        name: "NEON-01",
        subtitle: "Светящийся контур",
        description: "Первые очки с фотолюминесцентным каркасом. Заряжаются от солнца, светятся в темноте.",
        offset: LayoutOffset::Flush,
        image_url: "https://images.unsplash.com/photo-1574258495973-f010dfbb5371?w=600&q=80",
    },
    ShowcaseItem {
        id: "liquid-silver",
        name: "LIQUID SILVER",
        subtitle: "Жидкий металл",
        description: "Адаптивная форма. Термореактивный сплав меняет геометрию под температуру кожи.",
        offset: LayoutOffset::Deep,
        image_url: "https://images.unsplash.com/photo-1511499767150-a48a237f0083?w=600&q=80",
    },
    ShowcaseItem {
        id: "void-ghost",
        name: "VOID GHOST",
        subtitle: "Невидимость",
        description: "Прозрачный как воздух. Карбоновая нить толщиной 0.3 мм. Безрамочная реальность.",
        offset: LayoutOffset::Medium,
        image_url: "https://images.unsplash.com/photo-1577803645773-f96470509666?w=600&q=80",
    },
];

pub fn find_item(id: &str) -> Option<&'static ShowcaseItem> {
    COLLECTION.iter().find(|item| item.id == id)
}

/// Zero-padded ordinal shown over each card image ("01", "02", ...)
pub fn showcase_index_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub const PHILOSOPHY_LINES: [&str; 4] = [
    "ОЧКИ — ЭТО НЕ",
    "АКСЕССУАР.",
    "ЭТО ИНТЕРФЕЙС",
    "ЧЕЛОВЕКА.",
];

/// Positional styling of a philosophy line, keyed by its index
pub struct PhilosophyLine;

impl PhilosophyLine {
    /// Odd lines are full white, the rest slightly dimmed.
    pub fn emphasis(index: usize) -> &'static str {
        if index % 2 == 1 {
            "text-white"
        } else {
            "text-white/90"
        }
    }

    pub fn indent(index: usize) -> &'static str {
        match index {
            2 => "ml-[-2vw]",
            3 => "ml-[5vw] md:ml-[10vw]",
            _ => "",
        }
    }

    pub fn class(index: usize) -> String {
        let mut class = format!(
            "text-[14vw] md:text-[11vw] font-black leading-[0.9] tracking-tighter {}",
            Self::emphasis(index)
        );
        let indent = Self::indent(index);
        if !indent.is_empty() {
            class.push(' ');
            class.push_str(indent);
        }
        class
    }
}

pub const BRAND: &str = "OPTIC FLOW";

pub mod hero {
    pub const IMAGE_URL: &str =
        "https://images.unsplash.com/photo-1574258495973-f010dfbb5371?w=1200&q=90";
    pub const IMAGE_ALT: &str = "Futuristic liquid metal glasses";
    pub const HEADLINE: [&str; 3] = ["ВИДЕТЬ", "СКВОЗЬ", "ВРЕМЯ"];
    pub const CTA_LABEL: &str = "Исследовать";
    pub const LEFT_CAPTION: &str = "Концептуальная оптика 3024";
    pub const RIGHT_CAPTION: &str = "Токио — Москва — Берлин";
}

pub mod collection {
    pub const TITLE: &str = "КОЛЛЕКЦИЯ";
    pub const TAGLINE: &str = "Три модели. Три революции. Без компромиссов.";
}

pub mod philosophy {
    pub const STATEMENT: &str = "Мы не создаём очки. Мы проектируем новые спосбы восприятия реальности. \
         Каждая модель — это протез для расширения человеческих возможностей.";
    pub const FOUNDED: &str = "Основано в 3024";
}

pub const SPACER_WORD: &str = "LIQUID VISION";

pub mod footer {
    use super::COLLECTION;

    pub const BRAND_LINES: [&str; 2] = ["OPTIC", "FLOW"];
    pub const TAGLINE: &str = "Цифровая выставка концептуальной оптики. Жидкий металл. Будущее уже здесь.";
    pub const COLLECTION_HEADING: &str = "Коллекция";
    pub const CONTACTS_HEADING: &str = "Контакты";
    pub const CONTACTS: [&str; 3] = ["Токио, Сибуя", "Москва, Арбат", "info@opticflow.io"];
    pub const COPYRIGHT: &str = "© 3024 OPTIC FLOW. Все права защищены.";
    pub const CREDIT: &str = "Дизайн: Будущее";

    /// Footer collection links follow the grid order.
    pub fn collection_links() -> impl Iterator<Item = &'static str> {
        COLLECTION.iter().map(|item| item.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_collection_order() {
        let names: Vec<_> = COLLECTION.iter().map(|i| i.name).collect();
        assert_eq!(names, ["NEON-01", "LIQUID SILVER", "VOID GHOST"]);

        let ids: Vec<_> = COLLECTION.iter().map(|i| i.id).collect();
        assert_eq!(ids, ["neon-01", "liquid-silver", "void-ghost"]);
    }

    #[test]
    fn test_collection_ids_unique() {
        let ids: HashSet<_> = COLLECTION.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), COLLECTION.len());
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item("void-ghost").map(|i| i.name), Some("VOID GHOST"));
        assert!(find_item("missing").is_none());
    }

    #[test]
    fn test_layout_offsets() {
        assert_eq!(COLLECTION[0].offset.class(), "mt-0");
        assert_eq!(COLLECTION[1].offset.class(), "mt-24 md:mt-48");
        assert_eq!(COLLECTION[2].offset.class(), "mt-12 md:mt-24");
    }

    #[test]
    fn test_index_label() {
        assert_eq!(showcase_index_label(0), "01");
        assert_eq!(showcase_index_label(2), "03");
    }

    #[test]
    fn test_philosophy_lines() {
        assert_eq!(
            PHILOSOPHY_LINES,
            ["ОЧКИ — ЭТО НЕ", "АКСЕССУАР.", "ЭТО ИНТЕРФЕЙС", "ЧЕЛОВЕКА."]
        );
    }

    #[test]
    fn test_philosophy_positional_styling() {
        assert_eq!(PhilosophyLine::emphasis(0), "text-white/90");
        assert_eq!(PhilosophyLine::emphasis(1), "text-white");
        assert_eq!(PhilosophyLine::emphasis(3), "text-white");
        assert_eq!(PhilosophyLine::indent(0), "");
        assert!(PhilosophyLine::class(2).ends_with("ml-[-2vw]"));
        assert!(PhilosophyLine::class(3).ends_with("ml-[5vw] md:ml-[10vw]"));
        assert!(PhilosophyLine::class(1).ends_with("text-white"));
    }

    #[test]
    fn test_footer_links_follow_collection() {
        let links: Vec<_> = footer::collection_links().collect();
        assert_eq!(links, ["NEON-01", "LIQUID SILVER", "VOID GHOST"]);
    }
}
