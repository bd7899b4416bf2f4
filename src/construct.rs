use crate::magic;
use log::debug;
use std::sync::Once;

static SETUP: Once = Once::new();

/// Build every attack table this library uses.
///
/// Call once before searching, so the first move generation does not pay for table
/// construction.  Lookups build the tables on first use anyway, so this is never required for
/// correctness.  Can be called more than once, and is thread safe.
pub fn initialize_attacks() {
    SETUP.call_once(|| {
        let slider_entries = magic::initialize_tables();
        debug!(
            "attack tables ready: 3x64 leaper masks, {} slider attack sets",
            slider_entries
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magic::get_rook_moves;
    use crate::{Square, EMPTY};

    #[test]
    fn initialize_twice() {
        let _ = env_logger::builder().is_test(true).try_init();
        initialize_attacks();
        initialize_attacks();
        assert_eq!(get_rook_moves(Square::A1, EMPTY).popcnt(), 14);
    }
}
