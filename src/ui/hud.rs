use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::{GLYPH_LIFE, Theme};
use crate::game::GameState;

/// Static per-level values displayed alongside the simulation state.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub level_name: &'a str,
    /// 1-based index of the current level.
    pub level_number: usize,
    pub level_count: usize,
    pub food_quota: u32,
    pub theme: &'a Theme,
}

/// Renders the two bottom status rows and returns the remaining play area.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    info: &HudInfo<'_>,
) -> Rect {
    let [play_area, status_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let accent = Style::default().fg(info.theme.hud_accent);
    let text = Style::default().fg(info.theme.hud_text);

    let status = Line::from(vec![
        Span::styled(format!("{GLYPH_LIFE} {}", state.lives), accent),
        Span::styled("   Food ", text),
        Span::styled(format!("{}/{}", state.food_eaten, info.food_quota), accent),
        Span::styled("   Level ", text),
        Span::styled(
            format!("{}/{} {}", info.level_number, info.level_count, info.level_name),
            accent,
        ),
    ]);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        status_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from("[p] pause   [q] quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(info.theme.menu_footer)),
        hint_area,
    );

    play_area
}
