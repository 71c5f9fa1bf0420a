use rand::{RngCore, SeedableRng, rngs::StdRng};

use crate::moves::magic::attacks::{bishop_attacks_per_square, rook_attacks_per_square};
use crate::moves::magic::search::find_magic_number_for_square;
use crate::moves::magic::structs::{BishopMagicTables, MagicEntry, MagicTables, RookMagicTables};

/// How to seed the RNG used during magic-number search.
pub enum MagicTableSeed {
    /// Reproducible: the same seed always finds the same magics.
    Fixed(u64),
    /// A fresh seed drawn from the process's thread-local RNG.
    Random,
}

/// Relevant occupancy mask for a rook on `square`: same rank/file, excluding
/// the board edge (occupancy on the edge never changes the attack set, since
/// a ray always terminates there regardless).
fn rook_relevant_mask(square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let mut mask = 0u64;
    for r in 1..7 {
        if r != rank {
            mask |= 1u64 << (r * 8 + file);
        }
    }
    for f in 1..7 {
        if f != file {
            mask |= 1u64 << (rank * 8 + f);
        }
    }
    mask
}

/// Relevant occupancy mask for a bishop on `square`, same edge-exclusion rule.
fn bishop_relevant_mask(square: usize) -> u64 {
    let rank = square as i32 / 8;
    let file = square as i32 % 8;
    let mut mask = 0u64;
    for (dr, df) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
        let mut r = rank + dr;
        let mut f = file + df;
        while (1..=6).contains(&r) && (1..=6).contains(&f) {
            mask |= 1u64 << (r * 8 + f);
            r += dr;
            f += df;
        }
    }
    mask
}

/// Enumerate every subset of `mask` via the carry-rippler trick.
fn enumerate_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

fn build_entry<R: RngCore>(
    square: usize,
    mask: u64,
    attack_fn: fn(usize, u64) -> u64,
    rng: &mut R,
) -> Result<MagicEntry, String> {
    let blockers = enumerate_subsets(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| attack_fn(square, b)).collect();
    let shift = 64 - mask.count_ones();

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)?;

    let table_size = 1usize << mask.count_ones();
    let mut table = vec![0u64; table_size];
    for (&blocker, &attack) in blockers.iter().zip(attacks.iter()) {
        let index = ((blocker.wrapping_mul(magic)) >> shift) as usize;
        table[index] = attack;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

/// Search fresh magic numbers and build both sliding-piece attack tables.
pub fn generate_magic_tables(seed: MagicTableSeed) -> Result<MagicTables, String> {
    let mut rng = match seed {
        MagicTableSeed::Fixed(s) => StdRng::seed_from_u64(s),
        MagicTableSeed::Random => StdRng::seed_from_u64(rand::rng().next_u64()),
    };

    let mut rook_entries = Vec::with_capacity(64);
    let mut bishop_entries = Vec::with_capacity(64);

    for square in 0..64 {
        let rook_mask = rook_relevant_mask(square);
        rook_entries.push(build_entry(
            square,
            rook_mask,
            rook_attacks_per_square,
            &mut rng,
        )?);

        let bishop_mask = bishop_relevant_mask(square);
        bishop_entries.push(build_entry(
            square,
            bishop_mask,
            bishop_attacks_per_square,
            &mut rng,
        )?);
    }

    Ok(MagicTables {
        rook: RookMagicTables {
            entries: rook_entries,
        },
        bishop: BishopMagicTables {
            entries: bishop_entries,
        },
    })
}
