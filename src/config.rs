use ratatui::style::Color;
use ratatui::symbols::border;

use crate::grid::Direction;

/// Lives the snake starts a session with.
pub const DEFAULT_LIVES: u32 = 5;

/// Food pellets required to clear each level.
pub const DEFAULT_FOOD_QUOTA: u32 = 10;

/// Simulation tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// How long the level-complete banner stays up before the next level starts.
pub const LEVEL_BANNER_MS: u64 = 1000;

/// Direction the snake faces on spawn and after every respawn.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Frame pacing for the render/input loop, independent of the tick rate.
pub const FRAME_INTERVAL_MS: u64 = 16;

pub const GLYPH_WALL: &str = "█";
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "o";
pub const GLYPH_SNAKE_TAIL: &str = "·";
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_LIFE: &str = "♥";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub wall: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    wall: Color::DarkGray,
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_text: Color::Gray,
    hud_accent: Color::Green,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    wall: Color::Blue,
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_text: Color::Gray,
    hud_accent: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// All available themes in selection order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN];

/// Looks up a theme by its name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
