mod piece_type;

#[allow(clippy::module_inception)]
mod movegen;
pub use self::movegen::*;
