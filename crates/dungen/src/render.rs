//! Plain-text rendering of a generated dungeon

use dg_core::dungeon::{Coord, RoomCategory};
use dg_core::Dungeon;

const FLOOR: char = '.';
const WALL: char = '#';
const VOID: char = ' ';

/// Draw walls, floor and a category marker at each labelled room's centre
pub fn ascii_map(dungeon: &Dungeon) -> String {
    let Some(area) = dungeon.walls.bounding_rect() else {
        return String::new();
    };

    let mut rows = vec![vec![VOID; area.width as usize]; area.height as usize];
    let mut put = |c: Coord, ch: char| {
        rows[(c.y - area.y) as usize][(c.x - area.x) as usize] = ch;
    };

    for tile in dungeon.floor.iter() {
        put(tile, FLOOR);
    }
    for tile in dungeon.walls.iter() {
        put(tile, WALL);
    }
    for room in dungeon.rooms() {
        if room.category != RoomCategory::Normal {
            put(room.bounds.center(), room.category.symbol());
        }
    }

    let mut out = String::with_capacity(rows.len() * (area.width as usize + 1));
    for row in rows {
        out.extend(row.into_iter().collect::<String>().trim_end().chars());
        out.push('\n');
    }
    out
}

/// One line per room: id, grid cell, bounds and category
pub fn room_table(dungeon: &Dungeon) -> String {
    let mut out = String::new();
    for room in dungeon.rooms() {
        out.push_str(&format!(
            "{:>4} {:>10} {:<22} {}\n",
            room.id.to_string(),
            room.grid.to_string(),
            room.bounds.to_string(),
            room.category
        ));
    }
    out
}
