use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Grid, MapParseError};

pub const MAP_WIDTH: usize = 20;
pub const MAP_HEIGHT: usize = 15;

/// The hand made maze, one row per line.
const REFERENCE_LAYOUT: &str = "
1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1
1 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1
1 0 1 1 1 0 1 1 1 1 0 1 1 1 1 1 1 1 0 1
1 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 0 0 1
1 0 1 1 1 1 1 1 0 1 0 1 0 1 1 1 1 1 0 1
1 0 0 0 0 0 0 0 0 1 0 1 0 0 0 0 0 0 0 1
1 0 0 1 0 1 1 1 0 1 0 1 1 1 1 1 1 1 0 1
1 0 1 1 0 1 1 1 0 1 0 1 0 0 0 1 0 0 0 1
1 0 1 0 0 1 1 0 0 1 1 1 0 1 1 1 0 1 0 1
1 0 1 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1
1 0 1 1 1 1 1 0 1 1 1 0 1 1 1 1 1 1 0 1
1 0 0 0 0 0 1 0 0 0 0 0 0 1 0 0 0 0 0 1
1 0 1 1 1 0 1 0 1 1 0 1 0 1 0 1 1 1 0 1
1 0 0 0 0 0 1 0 0 0 0 1 0 1 0 0 0 0 0 1
1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
}

impl Tile {
    pub fn from_code(code: u32) -> Option<Tile> {
        match code {
            0 => Some(Tile::Floor),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Tile::Floor => 0,
            Tile::Wall => 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Map {
    tiles: Grid<Tile>,
    /// Tile coordinates of every floor cell, so spawning never has to search.
    floor: Vec<(i32, i32)>,
    tile_size: i32,
}

impl Map {
    /// The built in maze.
    pub fn reference(tile_size: i32) -> Map {
        Map::parse(REFERENCE_LAYOUT, tile_size).expect("reference layout is a valid map")
    }

    /// Parses the map text format: `MAP_WIDTH * MAP_HEIGHT` tile codes in row order, separated by
    /// any whitespace.
    pub fn parse(text: &str, tile_size: i32) -> Result<Map, MapParseError> {
        let expected = MAP_WIDTH * MAP_HEIGHT;
        let mut codes = Vec::with_capacity(expected);

        for (index, token) in text.split_whitespace().enumerate() {
            let code: u32 = token.parse().map_err(|_| MapParseError::InvalidToken {
                index,
                token: token.to_string(),
            })?;
            let tile = Tile::from_code(code).ok_or(MapParseError::UnknownTile { index, code })?;
            codes.push(tile);
        }

        if codes.len() != expected {
            return Err(MapParseError::WrongTileCount {
                expected,
                found: codes.len(),
            });
        }

        let rows = codes.chunks(MAP_WIDTH).map(|row| row.to_vec()).collect();
        Ok(Map::from_grid(Grid::from_rows(rows, MAP_WIDTH), tile_size))
    }

    pub fn from_grid(tiles: Grid<Tile>, tile_size: i32) -> Map {
        let floor = tiles
            .cells()
            .filter(|(_, _, tile)| **tile == Tile::Floor)
            .map(|(x, y, _)| (x as i32, y as i32))
            .collect();

        Map {
            tiles,
            floor,
            tile_size,
        }
    }

    /// Looks up a tile by tile coordinates, anything off the map counts as a wall.
    pub fn tile_at(&self, x: i32, y: i32) -> Tile {
        self.tiles.get(x, y).copied().unwrap_or(Tile::Wall)
    }

    /// Pixel coordinates of a uniformly chosen floor tile, None only if the map is all wall.
    pub fn random_floor_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(i32, i32)> {
        self.floor
            .choose(rng)
            .map(|(x, y)| (x * self.tile_size, y * self.tile_size))
    }

    /// Pixel coordinates of every floor tile.
    pub fn floor_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let tile_size = self.tile_size;
        self.floor.iter().map(move |(x, y)| (x * tile_size, y * tile_size))
    }

    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    pub fn width(&self) -> i32 {
        self.tiles.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.tiles.height() as i32
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn pixel_width(&self) -> i32 {
        self.width() * self.tile_size
    }

    pub fn pixel_height(&self) -> i32 {
        self.height() * self.tile_size
    }
}

/// The reference maze at the default tile size.
impl Default for Map {
    fn default() -> Self {
        Map::reference(32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn layout_with(first_row: &str) -> String {
        let mut text = first_row.to_string();
        for _ in 1..MAP_HEIGHT {
            text.push('\n');
            text.push_str(&vec!["1"; MAP_WIDTH].join(" "));
        }
        text
    }

    #[test]
    fn reference_layout_matches_dimensions() {
        let map = Map::reference(32);
        assert_eq!(map.width(), 20);
        assert_eq!(map.height(), 15);
        assert_eq!(map.pixel_width(), 640);
        assert_eq!(map.pixel_height(), 480);

        assert_eq!(map.tile_at(0, 0), Tile::Wall);
        assert_eq!(map.tile_at(1, 1), Tile::Floor);
        // Row 2 reads "1 0 1 1 1 0 ..."
        assert_eq!(map.tile_at(2, 2), Tile::Wall);
        assert_eq!(map.tile_at(5, 2), Tile::Floor);

        assert_eq!(Map::default().tiles(), map.tiles());
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let map = Map::reference(32);
        assert_eq!(map.tile_at(-1, 5), Tile::Wall);
        assert_eq!(map.tile_at(5, -1), Tile::Wall);
        assert_eq!(map.tile_at(20, 5), Tile::Wall);
        assert_eq!(map.tile_at(5, 15), Tile::Wall);
    }

    #[test]
    fn random_floor_position_is_always_floor() {
        let map = Map::reference(32);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let (x, y) = map.random_floor_position(&mut rng).unwrap();
            assert_eq!(x % 32, 0);
            assert_eq!(y % 32, 0);
            assert_eq!(map.tile_at(x / 32, y / 32), Tile::Floor);
        }
    }

    #[test]
    fn random_floor_position_finds_a_lone_floor_tile() {
        let mut first_row = vec!["1"; MAP_WIDTH];
        first_row[13] = "0";
        let map = Map::parse(&layout_with(&first_row.join(" ")), 32).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(map.random_floor_position(&mut rng), Some((13 * 32, 0)));
    }

    #[test]
    fn all_wall_map_has_no_floor_position() {
        let map = Map::parse(&layout_with(&vec!["1"; MAP_WIDTH].join(" ")), 32).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(map.random_floor_position(&mut rng), None);
    }

    #[test]
    fn parse_accepts_any_whitespace() {
        let text = vec!["0"; MAP_WIDTH * MAP_HEIGHT].join("\t \n");
        let map = Map::parse(&text, 16).unwrap();
        assert_eq!(map.floor_positions().count(), MAP_WIDTH * MAP_HEIGHT);
        assert_eq!(map.pixel_width(), 320);
    }

    #[test]
    fn parse_rejects_wrong_tile_count() {
        let short = vec!["0"; MAP_WIDTH * MAP_HEIGHT - 1].join(" ");
        assert_eq!(
            Map::parse(&short, 32).unwrap_err(),
            MapParseError::WrongTileCount {
                expected: 300,
                found: 299
            }
        );

        let long = vec!["0"; MAP_WIDTH * MAP_HEIGHT + 1].join(" ");
        assert_eq!(
            Map::parse(&long, 32).unwrap_err(),
            MapParseError::WrongTileCount {
                expected: 300,
                found: 301
            }
        );
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        let mut tokens = vec!["0"; MAP_WIDTH * MAP_HEIGHT];
        tokens[4] = "x";
        assert_eq!(
            Map::parse(&tokens.join(" "), 32).unwrap_err(),
            MapParseError::InvalidToken {
                index: 4,
                token: "x".to_string()
            }
        );

        tokens[4] = "7";
        assert_eq!(
            Map::parse(&tokens.join(" "), 32).unwrap_err(),
            MapParseError::UnknownTile { index: 4, code: 7 }
        );
    }
}
