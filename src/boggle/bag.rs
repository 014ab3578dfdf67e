use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::Rng;

/// Weighted pool of tiles used to generate random boards. Weights follow the usual
/// English letter-tile distribution. Q is always paired with U, so the bag yields a
/// two-character "QU" tile instead of a bare Q.
#[derive(Debug, Clone)]
pub struct TileBag {
    /// Tile tokens in the bag
    tiles: Vec<String>,
    /// Number of copies of each tile
    amts: Vec<u32>,
    dist: WeightedIndex<u32>,
}

const ALPH: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "QU", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const AMTS: [u32; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

impl Default for TileBag {
    fn default() -> Self {
        let tiles = ALPH.iter().map(|t| t.to_string()).collect();
        let amts = AMTS.to_vec();
        Self::new(tiles, amts).expect("default tile weights are valid")
    }
}

impl TileBag {
    /// Creates a bag from tokens and their copy counts. Returns None if the counts cannot
    /// form a distribution (mismatched lengths, all zero, or empty tokens)
    pub fn new(tiles: Vec<String>, amts: Vec<u32>) -> Option<Self> {
        if tiles.len() != amts.len() || tiles.iter().any(|t| t.is_empty()) {
            return None;
        }
        let tiles: Vec<String> = tiles.into_iter().map(|t| t.to_uppercase()).collect();
        let dist = WeightedIndex::new(&amts).ok()?;
        Some(Self { tiles, amts, dist })
    }

    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Relative weight of a tile, zero if it is not in the bag
    pub fn weight(&self, tile: &str) -> u32 {
        self.tiles
            .iter()
            .position(|t| t == tile)
            .map(|i| self.amts[i])
            .unwrap_or(0)
    }

    /// Draws `n` tiles with replacement
    pub fn draw_tiles<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<String> {
        (0..n)
            .map(|_| self.tiles[self.dist.sample(rng)].clone())
            .collect()
    }
}
