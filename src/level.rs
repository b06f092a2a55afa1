use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::grid::{Cell, Grid, GridSize, Position};

/// Wall symbol in level files.
const SYMBOL_WALL: char = '#';
/// Walkable floor symbol in level files.
const SYMBOL_OPEN: char = ' ';
/// Spawn marker; exactly one per level, converted to open floor.
const SYMBOL_SPAWN: char = '&';

/// Levels bundled into the binary, used when no level directory is given.
const BUILTIN_LEVELS: &[(&str, &str)] = &[
    ("01-open-range", include_str!("../levels/01-open-range.txt")),
    ("02-crossroads", include_str!("../levels/02-crossroads.txt")),
    ("03-serpentine", include_str!("../levels/03-serpentine.txt")),
];

/// Why a level file was rejected.
///
/// A rejected level is skipped with a warning; it never aborts the session
/// and never reaches the simulation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum LevelError {
    #[error("missing or unparsable dimensions header")]
    Header,
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {row} holds {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at column {x}, row {y}")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
    #[error("no spawn marker in level")]
    NoSpawn,
    #[error("more than one spawn marker in level")]
    MultipleSpawns,
}

/// A validated level: the static maze plus the snake's respawn point.
#[derive(Debug, Clone)]
pub struct ParsedLevel {
    pub grid: Grid,
    pub spawn: Position,
}

/// Raw level text together with its display name.
#[derive(Debug, Clone)]
pub struct LevelSource {
    pub name: String,
    pub text: String,
}

/// Parses the level-file format: a `height width` header line followed by
/// exactly `height` rows of `#` (wall), space (floor), and one `&` (spawn).
///
/// Rows must be exactly `width` symbols wide; trailing content after the
/// last row is ignored so files may end with a newline.
pub fn parse_level(text: &str) -> Result<ParsedLevel, LevelError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(LevelError::Header)?;

    let mut fields = header.split_whitespace();
    let height: u16 = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or(LevelError::Header)?;
    let width: u16 = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or(LevelError::Header)?;
    if width == 0 || height == 0 {
        return Err(LevelError::Header);
    }

    let rows: Vec<&str> = lines.take(usize::from(height)).collect();
    if rows.len() != usize::from(height) {
        return Err(LevelError::RowCount {
            expected: usize::from(height),
            found: rows.len(),
        });
    }

    let size = GridSize { width, height };
    let mut cells = Vec::with_capacity(size.total_cells());
    let mut spawn = None;

    for (y, row) in rows.iter().enumerate() {
        let symbols: Vec<char> = row.trim_end_matches('\r').chars().collect();
        if symbols.len() != usize::from(width) {
            return Err(LevelError::RowWidth {
                row: y,
                expected: usize::from(width),
                found: symbols.len(),
            });
        }

        for (x, symbol) in symbols.into_iter().enumerate() {
            let cell = match symbol {
                SYMBOL_WALL => Cell::Wall,
                SYMBOL_OPEN => Cell::Open,
                SYMBOL_SPAWN => {
                    if spawn.is_some() {
                        return Err(LevelError::MultipleSpawns);
                    }
                    spawn = Some(Position {
                        x: x as i32,
                        y: y as i32,
                    });
                    Cell::Open
                }
                symbol => return Err(LevelError::UnknownSymbol { symbol, x, y }),
            };
            cells.push(cell);
        }
    }

    let spawn = spawn.ok_or(LevelError::NoSpawn)?;

    Ok(ParsedLevel {
        grid: Grid::new(size, cells),
        spawn,
    })
}

/// Returns the levels compiled into the binary, in play order.
#[must_use]
pub fn builtin_levels() -> Vec<LevelSource> {
    BUILTIN_LEVELS
        .iter()
        .map(|&(name, text)| LevelSource {
            name: name.to_owned(),
            text: text.to_owned(),
        })
        .collect()
}

/// Reads every regular file in `dir` as a level, sorted by file name.
///
/// Unreadable entries are skipped with a warning so one bad file cannot take
/// down the whole session; an unreadable directory is an error.
pub fn levels_from_dir(dir: &Path) -> io::Result<Vec<LevelSource>> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("level")
            .to_owned();

        match fs::read_to_string(&path) {
            Ok(text) => sources.push(LevelSource { name, text }),
            Err(error) => {
                eprintln!("Warning: failed to read level {}: {error}", path.display());
            }
        }
    }

    Ok(sources)
}
