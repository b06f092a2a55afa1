use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;

/// Draws the welcome screen shown before the first level starts.
pub fn render_start_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    lives: u32,
    food_quota: u32,
    level_count: usize,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAZE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from("The snake drives itself; sit back and watch."),
        Line::from(""),
        Line::from(format!("Lives: {lives}")),
        Line::from(format!("Food per level: {food_quota}")),
        Line::from(format!("Levels: {level_count}")),
        Line::from(""),
        Line::from("[Enter] Start"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" welcome ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("A breadth-first search picks every move"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        footer_row,
    );
}

/// Draws the pause overlay.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the banner between a cleared level and the next one.
pub fn render_level_complete_menu(frame: &mut Frame<'_>, area: Rect, level_name: &str) {
    let popup = centered_popup(area, 70, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(format!("Level '{level_name}' cleared!")),
        Line::from(""),
        Line::from("Moving to next level..."),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" level complete ")),
        popup,
    );
}

/// Draws the game-over screen, naming the level the run ended on.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, level_name: &str) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from(format!("The snake ran out of lives at '{level_name}'.")),
        Line::from(""),
        Line::from("[Enter]/[Q] Exit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

/// Draws the all-levels-cleared screen.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let [title_row, body_row] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("CONGRATULATIONS, anaconda WON!"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.menu_title)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let lines = vec![
        Line::from("Every level cleared."),
        Line::from("Thanks for playing!"),
        Line::from(""),
        Line::from("[Enter]/[Q] Exit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" victory ")),
        body_row,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
