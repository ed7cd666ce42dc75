//! Icon service for managing different icon themes
//!
//! Icons come in emoji, Unicode, and ASCII flavours so the UI stays readable
//! on terminals with limited font support.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox icons for an item
#[derive(Debug, Clone)]
pub struct TodoStatusIcons {
    pub pending: &'static str,
    pub checked: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub todos_title: &'static str,
    pub lists_title: &'static str,
    pub list: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
}

/// Per-item markers
#[derive(Debug, Clone)]
pub struct MarkerIcons {
    pub important: &'static str,
    pub deadline: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub grabbed: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub status: TodoStatusIcons,
    pub ui: UiIcons,
    pub markers: MarkerIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            status: TodoStatusIcons {
                pending: "🔳",
                checked: "✅",
            },
            ui: UiIcons {
                todos_title: "📝",
                lists_title: "📁",
                list: "📋",
                info: "💡",
                warning: "⚠️",
            },
            markers: MarkerIcons {
                important: "⭐",
                deadline: "📅",
                expanded: "🔽",
                collapsed: "▶️",
                grabbed: "✋",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            status: TodoStatusIcons {
                pending: "□",
                checked: "✓",
            },
            ui: UiIcons {
                todos_title: "▶",
                lists_title: "◆",
                list: "◇",
                info: "ⓘ",
                warning: "⚠",
            },
            markers: MarkerIcons {
                important: "★",
                deadline: "◷",
                expanded: "▾",
                collapsed: "▸",
                grabbed: "↕",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            status: TodoStatusIcons {
                pending: "[ ]",
                checked: "[X]",
            },
            ui: UiIcons {
                todos_title: ">",
                lists_title: "#",
                list: "-",
                info: "i",
                warning: "!",
            },
            markers: MarkerIcons {
                important: "*",
                deadline: "@",
                expanded: "v",
                collapsed: ">",
                grabbed: "=",
            },
        }
    }

    #[must_use]
    pub fn todo_pending(&self) -> &'static str {
        self.icons().status.pending
    }

    #[must_use]
    pub fn todo_checked(&self) -> &'static str {
        self.icons().status.checked
    }

    #[must_use]
    pub fn important(&self) -> &'static str {
        self.icons().markers.important
    }

    #[must_use]
    pub fn deadline(&self) -> &'static str {
        self.icons().markers.deadline
    }

    #[must_use]
    pub fn grabbed(&self) -> &'static str {
        self.icons().markers.grabbed
    }

    /// Disclosure marker for items that carry extra text
    #[must_use]
    pub fn disclosure(&self, expanded: bool) -> &'static str {
        let markers = self.icons().markers;
        if expanded {
            markers.expanded
        } else {
            markers.collapsed
        }
    }

    #[must_use]
    pub fn todos_title(&self) -> &'static str {
        self.icons().ui.todos_title
    }

    #[must_use]
    pub fn lists_title(&self) -> &'static str {
        self.icons().ui.lists_title
    }

    #[must_use]
    pub fn list(&self) -> &'static str {
        self.icons().ui.list
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_ascii_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.todo_pending(), "[ ]");
        assert_eq!(service.todo_checked(), "[X]");
        assert_eq!(service.disclosure(true), "v");
        assert_eq!(service.disclosure(false), ">");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_names_in_config() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: IconTheme,
        }
        let parsed: Wrapper = toml::from_str("theme = \"unicode\"").unwrap();
        assert_eq!(parsed.theme, IconTheme::Unicode);
    }
}
