#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pagesim::{FramePool, PageTable};

// Classic reference string used to demonstrate Belady's anomaly
pub const BELADY_REFERENCES: [usize; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

// Create an all-absent table and a pool of `frames` free frames
pub fn fresh_state(table_size: usize, frames: u32) -> (PageTable, FramePool) {
    (PageTable::new(table_size), FramePool::with_frame_count(frames))
}

// Generate a reproducible reference string over pages `0..table_size`
pub fn random_references(seed: u64, table_size: usize, len: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0..table_size)).collect()
}

// Reference string with locality: mostly a small hot set, occasionally anything
pub fn skewed_references(seed: u64, table_size: usize, len: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let hot = (table_size / 4).max(1);
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.8) {
                rng.gen_range(0..hot)
            } else {
                rng.gen_range(0..table_size)
            }
        })
        .collect()
}
