use std::fmt::{self, Display};

use itertools::Itertools;

pub const BOARD_SIZE: usize = 3;

const FULL_MASK: u16 = (1u16 << (BOARD_SIZE * BOARD_SIZE)) - 1;

const WINNING_SEQUENCES: [u16; 8] = [
    0b111000000, // row 1
    0b000111000, // row 2
    0b000000111, // row 3
    0b100100100, // col 1
    0b010010010, // col 2
    0b001001001, // col 3
    0b100010001, // dial 1
    0b001010100, // dial 2
];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opposite(&self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "X"),
            Symbol::O => write!(f, "O"),
        }
    }
}

pub fn symbol_to_str(s: Option<Symbol>) -> String {
    match s {
        None => String::from("None"),
        Some(Symbol::X) => String::from("X"),
        Some(Symbol::O) => String::from("O"),
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Bitboard {
    bitmap: u16,
}

impl Bitboard {
    pub fn new() -> Self {
        Self { bitmap: 0 }
    }

    pub fn get_raw(&self) -> u16 {
        self.bitmap
    }

    pub fn get(&self, idx: usize) -> bool {
        assert!(idx < BOARD_SIZE * BOARD_SIZE);
        (self.bitmap & (1u16 << idx)) != 0
    }

    pub fn set(&mut self, idx: usize, val: bool) {
        assert!(idx < BOARD_SIZE * BOARD_SIZE);
        if val {
            self.bitmap |= 1u16 << idx;
        } else {
            self.bitmap &= !(1u16 << idx);
        }
    }
}

/// The 3x3 grid alone, one occupancy mask per symbol. Turn bookkeeping lives in
/// [`GameState`](crate::game::state::GameState).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    board_x: Bitboard,
    board_o: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            board_x: Bitboard::new(),
            board_o: Bitboard::new(),
        }
    }

    /// Board from a 9-char row-major string of 'x', 'o' and '_'.
    pub fn from_str(s: &str) -> Self {
        assert!(s.len() == BOARD_SIZE * BOARD_SIZE);
        let mut board = Self::new();
        for (idx, tile) in s.chars().enumerate() {
            match tile {
                'x' => board.board_x.set(idx, true),
                'o' => board.board_o.set(idx, true),
                '_' => {}
                other => panic!("unknown tile char: {}", other),
            }
        }
        board
    }

    pub fn tile(&self, r: usize, c: usize) -> Option<Symbol> {
        assert!(r < BOARD_SIZE && c < BOARD_SIZE);
        let idx = r * BOARD_SIZE + c;
        if self.board_x.get(idx) {
            return Some(Symbol::X);
        }
        if self.board_o.get(idx) {
            return Some(Symbol::O);
        }
        None
    }

    /// Cells are write-once; the target must be empty.
    pub fn set_tile(&mut self, s: Symbol, r: usize, c: usize) {
        assert!(self.tile(r, c).is_none());
        let idx = r * BOARD_SIZE + c;
        match s {
            Symbol::X => &mut self.board_x,
            Symbol::O => &mut self.board_o,
        }
        .set(idx, true);
    }

    pub fn is_full(&self) -> bool {
        (self.board_x.get_raw() | self.board_o.get_raw()) == FULL_MASK
    }

    pub fn has_line(&self, s: Symbol) -> bool {
        let pieces = match s {
            Symbol::X => self.board_x,
            Symbol::O => self.board_o,
        };
        WINNING_SEQUENCES
            .iter()
            .any(|&seq| (pieces.get_raw() & seq) == seq)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..BOARD_SIZE)
            .map(|r| {
                (0..BOARD_SIZE)
                    .map(|c| match self.tile(r, c) {
                        None => String::from("_"),
                        Some(s) => s.to_string(),
                    })
                    .join(" ")
            })
            .join("\n");
        write!(f, "{}", rows)
    }
}
