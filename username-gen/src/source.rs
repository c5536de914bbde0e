use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Picks a uniformly distributed index into a word list.
pub trait IndexSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Deterministic RNG for reproducible usernames.
/// Uses at most 32 bytes of `seed`, shorter seeds are zero padded.
pub fn seeded_rng(seed: &[u8]) -> Xoshiro256StarStar {
    let mut buf = [0u8; 32];
    let len = seed.len().min(buf.len());
    buf[..len].copy_from_slice(&seed[..len]);
    Xoshiro256StarStar::from_seed(buf)
}
