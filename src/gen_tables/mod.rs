// Lookup tables used during move generation.  They are built once per process, the first time
// anything asks for them (or when `initialize_attacks` is called).

mod king;
mod knights;
mod magic;
mod magic_helpers;
mod pawns;
mod rays;

pub use self::king::gen_king_moves;
pub use self::knights::gen_knight_moves;
pub use self::magic::{gen_all_magic, MagicTables};
pub use self::pawns::gen_pawn_attacks;
