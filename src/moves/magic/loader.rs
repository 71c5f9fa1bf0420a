use once_cell::sync::OnceCell;

use crate::moves::magic::precompute::{MagicTableSeed, generate_magic_tables};
use crate::moves::magic::structs::MagicTables;

// A fixed, well-known seed for reproducible magic-number search across runs
// and platforms when the `deterministic_magic` feature is enabled.
const FIXED_MAGIC_SEED: u64 = 1804289383;

/// Load (computing once per process) the sliding-piece attack tables.
pub fn load_magic_tables() -> MagicTables {
    static TABLES: OnceCell<MagicTables> = OnceCell::new();
    TABLES
        .get_or_init(|| {
            let seed = if cfg!(feature = "deterministic_magic") {
                MagicTableSeed::Fixed(FIXED_MAGIC_SEED)
            } else {
                MagicTableSeed::Random
            };
            generate_magic_tables(seed).expect("magic number search failed")
        })
        .clone()
}
