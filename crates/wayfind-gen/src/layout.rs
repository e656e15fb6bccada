//! Text layouts: parse a scenario from ASCII art and render one back.
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | wall |
//! | `S` | start (open) |
//! | `G` | goal (open) |
//! | `0`–`9` | open cell with that weight |
//!
//! Rendering also uses `*` for the interior cells of a path.

use std::fmt;
use std::str::FromStr;

use wayfind_core::{Cell, DEFAULT_WEIGHT, Grid};

use crate::scenario::Scenario;

const WALL: char = '#';
const OPEN: char = '.';
const START: char = 'S';
const GOAL: char = 'G';
const PATH: char = '*';

impl Scenario {
    /// Parse a layout.
    ///
    /// Rows are separated by `'\n'` and must all have the same width.
    /// Leading and trailing whitespace of the whole string is trimmed; a
    /// trailing `'\r'` on each row is ignored.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines[0].chars().count();

        let mut grid = Grid::new(lines.len() as i32, width as i32);
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentSize {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let p = Cell::new(row as i32, col as i32);
                match ch {
                    OPEN => {}
                    WALL => grid.add_wall(p),
                    START => place(&mut start, START, p)?,
                    GOAL => place(&mut goal, GOAL, p)?,
                    '0'..='9' => {
                        let w = ch as i32 - '0' as i32;
                        if w != DEFAULT_WEIGHT {
                            grid.set_weight(p, w);
                        }
                    }
                    _ => return Err(LayoutError::InvalidRune { ch, pos: p }),
                }
            }
        }

        let start = start.ok_or(LayoutError::MissingMarker(START))?;
        let goal = goal.ok_or(LayoutError::MissingMarker(GOAL))?;
        Ok(Self { grid, start, goal })
    }

    /// Render the scenario, marking the interior of `path` with `*`.
    pub fn render(&self, path: &[Cell]) -> String {
        render(&self.grid, self.start, self.goal, path)
    }
}

fn place(slot: &mut Option<Cell>, ch: char, p: Cell) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker {
            ch,
            first,
            second: p,
        });
    }
    *slot = Some(p);
    Ok(())
}

impl FromStr for Scenario {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

/// Render a grid as text, one line per row, without a trailing newline.
///
/// Endpoints take precedence over path marks, which take precedence over
/// walls and weights. Weights are clamped to `0..=9` for display.
pub fn render(grid: &Grid, start: Cell, goal: Cell, path: &[Cell]) -> String {
    let on_path: std::collections::HashSet<Cell> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.rows().max(0) as usize);
    for row in 0..grid.rows() {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..grid.cols() {
            let p = Cell::new(row, col);
            let ch = if p == start {
                START
            } else if p == goal {
                GOAL
            } else if on_path.contains(&p) {
                PATH
            } else if grid.is_wall(p) {
                WALL
            } else {
                match grid.weight(p) {
                    w if w == DEFAULT_WEIGHT => OPEN,
                    w => char::from_digit(w.clamp(0, 9) as u32, 10).unwrap_or(OPEN),
                }
            };
            out.push(ch);
        }
    }
    out
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Nothing but whitespace.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    InvalidRune { ch: char, pos: Cell },
    /// No start or no goal marker.
    MissingMarker(char),
    /// A second start or goal marker.
    DuplicateMarker { ch: char, first: Cell, second: Cell },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("layout: empty"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "layout: missing \u{201c}{ch}\u{201d} marker"),
            Self::DuplicateMarker { ch, first, second } => write!(
                f,
                "layout: \u{201c}{ch}\u{201d} marker at both {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S.#.
..#.
.3..
...G";

    #[test]
    fn parse_room() {
        let s = Scenario::parse(ROOM).unwrap();
        assert_eq!(s.grid.rows(), 4);
        assert_eq!(s.grid.cols(), 4);
        assert_eq!(s.start, Cell::new(0, 0));
        assert_eq!(s.goal, Cell::new(3, 3));
        assert_eq!(s.grid.walls(), vec![Cell::new(0, 2), Cell::new(1, 2)]);
        assert_eq!(s.grid.weight(Cell::new(2, 1)), 3);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn display_round_trips() {
        let s: Scenario = ROOM.parse().unwrap();
        assert_eq!(s.to_string(), ROOM);
    }

    #[test]
    fn render_marks_path_interior() {
        let s = Scenario::parse("S..\n.#.\n..G").unwrap();
        let path = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(1, 2),
            Cell::new(2, 2),
        ];
        assert_eq!(s.render(&path), "S**\n.#*\n..G");
    }

    #[test]
    fn crlf_and_surrounding_whitespace() {
        let s = Scenario::parse("\n  S.\r\n.G\r\n\n").unwrap();
        assert_eq!(s.grid.cols(), 2);
        assert_eq!(s.start, Cell::new(0, 0));
        assert_eq!(s.goal, Cell::new(1, 1));
        // Indentation inside the layout is not trimmed.
        assert!(matches!(
            Scenario::parse("S..\n .G"),
            Err(LayoutError::InvalidRune { ch: ' ', .. })
        ));
    }

    #[test]
    fn errors() {
        assert_eq!(Scenario::parse("  \n "), Err(LayoutError::Empty));
        assert_eq!(
            Scenario::parse("S.\n.x"),
            Err(LayoutError::InvalidRune {
                ch: 'x',
                pos: Cell::new(1, 1)
            })
        );
        assert_eq!(
            Scenario::parse("S..\n..."),
            Err(LayoutError::MissingMarker('G'))
        );
        assert_eq!(
            Scenario::parse("SG\nS."),
            Err(LayoutError::DuplicateMarker {
                ch: 'S',
                first: Cell::new(0, 0),
                second: Cell::new(1, 0)
            })
        );
        assert_eq!(
            Scenario::parse("S..\n.G"),
            Err(LayoutError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn error_messages() {
        let e = LayoutError::InvalidRune {
            ch: 'x',
            pos: Cell::new(1, 1),
        };
        assert_eq!(
            e.to_string(),
            "layout contains invalid rune \u{201c}x\u{201d} at (1, 1)"
        );
    }

    #[test]
    fn zero_weight_round_trips() {
        let mut s = Scenario::parse("S..G").unwrap();
        s.grid.set_weight(Cell::new(0, 1), 0);
        let text = s.to_string();
        assert_eq!(text, "S0.G");
        let back = Scenario::parse(&text).unwrap();
        assert_eq!(back.grid.weight(Cell::new(0, 1)), 0);
        assert_eq!(back, s);
    }

    #[test]
    fn heavy_weights_render_as_nine() {
        let mut s = Scenario::parse("S.G").unwrap();
        s.grid.set_weight(Cell::new(0, 1), 40);
        assert_eq!(s.to_string(), "S9G");
    }
}
