//! Icon service for managing different glyph themes
//!
//! This module provides a centralized way to pick the glyphs drawn by the grid
//! (drag grips, visibility eyes, selection checkboxes), supporting emoji,
//! Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
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

/// Row selection glyphs
#[derive(Debug, Clone)]
pub struct SelectionIcons {
    pub checked: &'static str,
    pub unchecked: &'static str,
}

/// Column header glyphs
#[derive(Debug, Clone)]
pub struct HeaderIcons {
    /// Drag handle shown in front of draggable headers
    pub grip: &'static str,
    /// Marker for the column currently being dragged
    pub dragging: &'static str,
    /// Resize handle on the right edge
    pub resize: &'static str,
}

/// Visibility toggle glyphs
#[derive(Debug, Clone)]
pub struct VisibilityIcons {
    pub shown: &'static str,
    pub hidden: &'static str,
}

/// Toolbar glyphs
#[derive(Debug, Clone)]
pub struct ToolbarIcons {
    pub settings: &'static str,
    pub reset: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub selection: SelectionIcons,
    pub header: HeaderIcons,
    pub visibility: VisibilityIcons,
    pub toolbar: ToolbarIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
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
            selection: SelectionIcons {
                checked: "✅",
                unchecked: "⬜",
            },
            header: HeaderIcons {
                grip: "⠿",
                dragging: "✋",
                resize: "│",
            },
            visibility: VisibilityIcons {
                shown: "👁",
                hidden: "🙈",
            },
            toolbar: ToolbarIcons {
                settings: "⚙️",
                reset: "🔄",
                delete: "🗑️",
                edit: "✏️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            selection: SelectionIcons {
                checked: "☑",
                unchecked: "☐",
            },
            header: HeaderIcons {
                grip: "⋮",
                dragging: "⇔",
                resize: "┃",
            },
            visibility: VisibilityIcons {
                shown: "◉",
                hidden: "○",
            },
            toolbar: ToolbarIcons {
                settings: "⚙",
                reset: "↺",
                delete: "✗",
                edit: "✎",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            selection: SelectionIcons {
                checked: "[x]",
                unchecked: "[ ]",
            },
            header: HeaderIcons {
                grip: ":",
                dragging: "<>",
                resize: "|",
            },
            visibility: VisibilityIcons {
                shown: "+",
                hidden: "-",
            },
            toolbar: ToolbarIcons {
                settings: "#",
                reset: "@",
                delete: "X",
                edit: "E",
            },
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let icons = self.icons().selection;
        if checked {
            icons.checked
        } else {
            icons.unchecked
        }
    }

    #[must_use]
    pub fn visibility(&self, visible: bool) -> &'static str {
        let icons = self.icons().visibility;
        if visible {
            icons.shown
        } else {
            icons.hidden
        }
    }

    #[must_use]
    pub fn grip(&self) -> &'static str {
        self.icons().header.grip
    }

    #[must_use]
    pub fn dragging(&self) -> &'static str {
        self.icons().header.dragging
    }

    #[must_use]
    pub fn resize_handle(&self) -> &'static str {
        self.icons().header.resize
    }

    #[must_use]
    pub fn settings(&self) -> &'static str {
        self.icons().toolbar.settings
    }

    #[must_use]
    pub fn reset(&self) -> &'static str {
        self.icons().toolbar.reset
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().toolbar.delete
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().toolbar.edit
    }
}
