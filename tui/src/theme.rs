//! Resolved themes for the three product variants.
//!
//! A [`Theme`] is a plain value of resolved style tokens (palette, glyphs,
//! feature toggles) built once at startup and passed into the render layer
//! explicitly. Nothing reads ambient/global theme state.

use ratatui::style::{Color, Modifier, Style};

use questlog_types::ui::UiOptions;
use questlog_types::Variant;

/// Menu-blue palette for the quest variant, lifted from classic JRPG menus.
mod quest_colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(0, 10, 24);
    pub const BG_PANEL: Color = Color::Rgb(0, 27, 54);
    pub const BORDER: Color = Color::Rgb(74, 159, 216);
    pub const BORDER_GLOW: Color = Color::Rgb(255, 215, 0);
    pub const TITLE: Color = Color::Rgb(56, 176, 222);
    pub const TEXT: Color = Color::Rgb(140, 204, 255);
    pub const TEXT_MUTED: Color = Color::Rgb(70, 110, 150);
    pub const ACCENT: Color = Color::Rgb(255, 215, 0);
    pub const SUCCESS: Color = Color::Rgb(26, 255, 26);
    pub const HP: Color = Color::Rgb(26, 255, 26);
    pub const MP: Color = Color::Rgb(102, 179, 255);
    pub const XP: Color = Color::Rgb(255, 204, 0);
}

mod plain_colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(24, 24, 28);
    pub const BG_PANEL: Color = Color::Rgb(32, 32, 38);
    pub const BORDER: Color = Color::Rgb(90, 90, 100);
    pub const TITLE: Color = Color::Rgb(220, 220, 220);
    pub const TEXT: Color = Color::Rgb(200, 200, 200);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 120);
    pub const ACCENT: Color = Color::Rgb(120, 170, 255);
    pub const SUCCESS: Color = Color::Rgb(120, 200, 120);
}

mod playful_colors {
    use super::Color;

    pub const BG: Color = Color::Rgb(30, 18, 40);
    pub const BG_PANEL: Color = Color::Rgb(44, 28, 58);
    pub const BORDER: Color = Color::Rgb(190, 120, 220);
    pub const BORDER_GLOW: Color = Color::Rgb(255, 170, 90);
    pub const TITLE: Color = Color::Rgb(255, 170, 90);
    pub const TEXT: Color = Color::Rgb(240, 230, 250);
    pub const TEXT_MUTED: Color = Color::Rgb(140, 120, 160);
    pub const ACCENT: Color = Color::Rgb(255, 120, 160);
    pub const SUCCESS: Color = Color::Rgb(140, 230, 150);
}

/// Per-item accent colors for the playful variant, picked at random when an
/// item is created.
pub const PLAYFUL_ACCENTS: &[Color] = &[
    Color::Rgb(255, 120, 120), // coral
    Color::Rgb(130, 230, 170), // mint
    Color::Rgb(120, 190, 255), // sky
    Color::Rgb(255, 230, 120), // lemon
    Color::Rgb(200, 160, 255), // lavender
    Color::Rgb(255, 180, 130), // peach
];

const PLAYFUL_EMBLEMS: &[&str] = &["✨", "🌟", "🎈", "🌈", "🍀", "🎀"];
const PLAYFUL_EMBLEMS_ASCII: &[&str] = &["*", "+", "~", "o"];

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub border: Color,
    /// Peak color of the looping border glow; equals `border` where the
    /// variant has no glow.
    pub border_glow: Color,
    pub title: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub hp: Color,
    pub mp: Color,
    pub xp: Color,
}

/// Glyphs for indicators and chrome.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub cursor: &'static str,
    pub selected: &'static str,
    pub pending: &'static str,
    pub done: &'static str,
    pub meter_filled: &'static str,
    pub meter_empty: &'static str,
}

impl Glyphs {
    fn resolve(options: UiOptions) -> Self {
        if options.ascii_only {
            Self {
                cursor: ">",
                selected: ">",
                pending: "[ ]",
                done: "[x]",
                meter_filled: "#",
                meter_empty: "-",
            }
        } else {
            Self {
                cursor: "▸",
                selected: "▸",
                pending: "○",
                done: "✓",
                meter_filled: "█",
                meter_empty: "░",
            }
        }
    }
}

/// Everything the render layer needs, resolved up front from the variant
/// and UI options.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub variant: Variant,
    pub palette: Palette,
    pub glyphs: Glyphs,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub empty_hint: &'static str,
    /// Render the HP/MP/XP strip and level-up banner.
    pub show_status_strip: bool,
    /// Strike through completed labels (toggle-policy styling).
    pub strike_completed: bool,
    /// Assign each new item a random accent color and emblem.
    pub random_accents: bool,
    /// Shake the input box when an empty submission is rejected.
    pub shake_input_on_reject: bool,
    emblems: &'static [&'static str],
}

impl Theme {
    #[must_use]
    pub fn resolve(variant: Variant, options: UiOptions) -> Self {
        let glyphs = Glyphs::resolve(options);
        let emblems = if options.ascii_only {
            PLAYFUL_EMBLEMS_ASCII
        } else {
            PLAYFUL_EMBLEMS
        };

        match variant {
            Variant::Plain => Self {
                variant,
                palette: Palette {
                    bg: plain_colors::BG,
                    bg_panel: plain_colors::BG_PANEL,
                    border: plain_colors::BORDER,
                    border_glow: plain_colors::BORDER,
                    title: plain_colors::TITLE,
                    text: plain_colors::TEXT,
                    text_muted: plain_colors::TEXT_MUTED,
                    accent: plain_colors::ACCENT,
                    success: plain_colors::SUCCESS,
                    hp: plain_colors::SUCCESS,
                    mp: plain_colors::ACCENT,
                    xp: plain_colors::ACCENT,
                },
                glyphs,
                title: "TODO",
                placeholder: "Add a new task...",
                empty_hint: "Nothing to do",
                show_status_strip: false,
                strike_completed: true,
                random_accents: false,
                shake_input_on_reject: false,
                emblems,
            },
            Variant::Quest => Self {
                variant,
                palette: Palette {
                    bg: quest_colors::BG,
                    bg_panel: quest_colors::BG_PANEL,
                    border: quest_colors::BORDER,
                    border_glow: quest_colors::BORDER_GLOW,
                    title: quest_colors::TITLE,
                    text: quest_colors::TEXT,
                    text_muted: quest_colors::TEXT_MUTED,
                    accent: quest_colors::ACCENT,
                    success: quest_colors::SUCCESS,
                    hp: quest_colors::HP,
                    mp: quest_colors::MP,
                    xp: quest_colors::XP,
                },
                glyphs,
                title: "QUEST LOG",
                placeholder: "Enter new quest...",
                empty_hint: "Your quest log is empty",
                show_status_strip: true,
                strike_completed: false,
                random_accents: false,
                shake_input_on_reject: false,
                emblems,
            },
            Variant::Playful => Self {
                variant,
                palette: Palette {
                    bg: playful_colors::BG,
                    bg_panel: playful_colors::BG_PANEL,
                    border: playful_colors::BORDER,
                    border_glow: playful_colors::BORDER_GLOW,
                    title: playful_colors::TITLE,
                    text: playful_colors::TEXT,
                    text_muted: playful_colors::TEXT_MUTED,
                    accent: playful_colors::ACCENT,
                    success: playful_colors::SUCCESS,
                    hp: playful_colors::SUCCESS,
                    mp: playful_colors::ACCENT,
                    xp: playful_colors::ACCENT,
                },
                glyphs,
                title: "MY TASKS",
                placeholder: "What's next?",
                empty_hint: "All clear! Add something fun",
                show_status_strip: false,
                strike_completed: false,
                random_accents: true,
                shake_input_on_reject: true,
                emblems,
            },
        }
    }

    /// Accent color for a playful item, by stored index.
    #[must_use]
    pub fn accent_color(&self, index: usize) -> Color {
        PLAYFUL_ACCENTS[index % PLAYFUL_ACCENTS.len()]
    }

    /// Emblem glyph for a playful item, by stored index.
    #[must_use]
    pub fn emblem(&self, index: usize) -> &'static str {
        self.emblems[index % self.emblems.len()]
    }

    #[must_use]
    pub fn accent_count(&self) -> usize {
        PLAYFUL_ACCENTS.len()
    }

    #[must_use]
    pub fn emblem_count(&self) -> usize {
        self.emblems.len()
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.title)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_normal(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.text_muted)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn mode_insert(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.success)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn status_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;
    use questlog_types::ui::UiOptions;
    use questlog_types::Variant;

    #[test]
    fn quest_theme_shows_status_strip() {
        let theme = Theme::resolve(Variant::Quest, UiOptions::default());
        assert!(theme.show_status_strip);
        assert!(!theme.random_accents);
        assert_eq!(theme.title, "QUEST LOG");
    }

    #[test]
    fn plain_theme_strikes_completed() {
        let theme = Theme::resolve(Variant::Plain, UiOptions::default());
        assert!(theme.strike_completed);
        assert!(!theme.show_status_strip);
    }

    #[test]
    fn playful_theme_shakes_input() {
        let theme = Theme::resolve(Variant::Playful, UiOptions::default());
        assert!(theme.shake_input_on_reject);
        assert!(theme.random_accents);
    }

    #[test]
    fn ascii_only_swaps_glyphs_and_emblems() {
        let options = UiOptions {
            ascii_only: true,
            reduced_motion: false,
        };
        let theme = Theme::resolve(Variant::Playful, options);
        assert_eq!(theme.glyphs.done, "[x]");
        assert!(theme.emblem(0).is_ascii());
    }
}
