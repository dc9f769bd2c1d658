//! Shared pieces of the waygrid demo binaries: random map generation and
//! terminal rendering of a map with a path overlaid.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};
use waygrid_core::{FINISH_RUNE, FLOOR, Map2D, MapError, Point, START_RUNE, WALL};

/// Rune drawn on cells the path passes through.
pub const PATH_RUNE: char = '*';

/// Turn roughly `wall_pct` percent of the cells of `map` into walls, and give
/// one in ten of the remaining cells a small extra cost. The start and
/// finish cells are always left as floor.
pub fn scatter_terrain(map: &mut Map2D, wall_pct: u8, rng: &mut impl Rng) -> Result<(), MapError> {
    for p in map.bounds() {
        let v = if rng.random_range(0..100u8) < wall_pct {
            WALL
        } else if rng.random_range(0..10u32) == 0 {
            rng.random_range(1..=5)
        } else {
            FLOOR
        };
        map.set_cell_value(p, v)?;
    }
    for marker in [map.start(), map.finish()].into_iter().flatten() {
        map.set_cell_value(marker, FLOOR)?;
    }
    Ok(())
}

/// Generate a `width` x `height` map from `seed`, with the start in the
/// top-left corner and the finish in the bottom-right one.
pub fn generate_map(width: i32, height: i32, wall_pct: u8, seed: u64) -> Result<Map2D, MapError> {
    let mut map = Map2D::new(width, height)?;
    map.set_start(Point::ZERO)?;
    if let Some(last) = map.bounds().last() {
        map.set_finish(last)?;
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    scatter_terrain(&mut map, wall_pct, &mut rng)?;
    log::debug!(
        "generated {width}x{height} map, seed {seed}, {} walls",
        map.wall_count()
    );
    Ok(map)
}

/// The rune shown at `p`: markers first, then the path, then terrain.
pub fn overlay_rune(map: &Map2D, path: &HashSet<Point>, p: Point) -> char {
    match map.rune_at(p) {
        Some(ch) if ch == START_RUNE || ch == FINISH_RUNE => ch,
        Some(_) if path.contains(&p) => PATH_RUNE,
        Some(ch) => ch,
        None => ' ',
    }
}

fn rune_color(ch: char) -> Color {
    match ch {
        START_RUNE => Color::Green,
        FINISH_RUNE => Color::Red,
        PATH_RUNE => Color::Yellow,
        '#' => Color::DarkGrey,
        '1'..='9' => Color::Blue,
        _ => Color::Reset,
    }
}

/// Write `map` to `out` with `path` overlaid, one line per row.
///
/// With `color` set, runes are coloured using crossterm escape sequences.
pub fn render(map: &Map2D, path: &[Point], color: bool, out: &mut impl Write) -> io::Result<()> {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let ch = overlay_rune(map, &on_path, Point::new(x, y));
            if color {
                queue!(out, SetForegroundColor(rune_color(ch)), Print(ch))?;
            } else {
                queue!(out, Print(ch))?;
            }
        }
        if color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}
