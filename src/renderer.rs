use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, GLYPH_WALL, Theme,
};
use crate::game::GameState;
use crate::grid::{Cell, Direction, GridSize, Position};
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{
    render_game_over_menu, render_level_complete_menu, render_pause_menu, render_start_menu,
    render_victory_menu,
};

/// Where the session driver currently is, as far as the screen is concerned.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionPhase {
    /// Welcome screen before the first level runs.
    Ready,
    Running,
    Paused,
    /// Banner between a cleared level and the next.
    LevelComplete,
    /// The run ended on the current level.
    GameOver,
    /// All levels cleared.
    Victory,
}

/// Renders one full frame from an immutable state snapshot.
pub fn render(frame: &mut Frame<'_>, state: &GameState, phase: SessionPhase, info: &HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, info);

    let theme = info.theme;
    let board = board_area(play_area, state.grid.size());
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_maze(frame, inner, state, theme);
    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    match phase {
        SessionPhase::Ready => render_start_menu(
            frame,
            play_area,
            state.lives,
            info.food_quota,
            info.level_count,
            theme,
        ),
        SessionPhase::Paused => render_pause_menu(frame, play_area),
        SessionPhase::LevelComplete => {
            render_level_complete_menu(frame, play_area, info.level_name);
        }
        SessionPhase::GameOver => render_game_over_menu(frame, play_area, info.level_name),
        SessionPhase::Victory => render_victory_menu(frame, play_area, theme),
        SessionPhase::Running => {}
    }
}

fn render_maze(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let size = state.grid.size();
    let buffer = frame.buffer_mut();

    for y in 0..i32::from(size.height) {
        for x in 0..i32::from(size.width) {
            let position = Position { x, y };
            if state.grid.cell(position) != Some(Cell::Wall) {
                continue;
            }
            let Some((col, row)) = logical_to_terminal(inner, size, position) else {
                continue;
            };
            buffer.set_string(col, row, GLYPH_WALL, Style::new().fg(theme.wall));
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((col, row)) = logical_to_terminal(inner, state.grid.size(), state.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(col, row, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let tail = state.snake.tail();
    let size = state.grid.size();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((col, row)) = logical_to_terminal(inner, size, *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                col,
                row,
                head_glyph(state.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if *segment == tail {
            buffer.set_string(col, row, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(col, row, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Centers the bordered board inside the play area; boards larger than the
/// terminal are clipped at the bottom/right.
fn board_area(play_area: Rect, size: GridSize) -> Rect {
    let width = size.width.saturating_add(2).min(play_area.width);
    let height = size.height.saturating_add(2).min(play_area.height);
    let x = play_area.x + play_area.width.saturating_sub(width) / 2;
    let y = play_area.y + play_area.height.saturating_sub(height) / 2;

    Rect::new(x, y, width, height)
}

fn logical_to_terminal(inner: Rect, size: GridSize, position: Position) -> Option<(u16, u16)> {
    if position.x < 0
        || position.y < 0
        || position.x >= i32::from(size.width)
        || position.y >= i32::from(size.height)
    {
        return None;
    }

    let col = inner.x.saturating_add(u16::try_from(position.x).ok()?);
    let row = inner.y.saturating_add(u16::try_from(position.y).ok()?);
    if col >= inner.right() || row >= inner.bottom() {
        return None;
    }

    Some((col, row))
}
