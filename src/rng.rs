//! Deterministic random source for fortune generation.
//!
//! Every draw made while building a report comes from one `FortuneRng`
//! seeded from the report's seed key. The generator is a 32-bit
//! mulberry stream, so a key always replays the same sequence of floats.

use rand::{Error, RngCore, SeedableRng};

const SEED_BASIS: u32 = 1_779_033_703;
const SEED_MIX: u32 = 3_432_918_353;
const FINAL_MIX_A: u32 = 2_246_822_507;
const FINAL_MIX_B: u32 = 3_266_489_909;
const STREAM_INCREMENT: u32 = 0x6d2b_79f5;
const FLOAT_SCALE: f64 = 4_294_967_296.0;

/// Hash a seed key into the 32-bit generator state.
///
/// The key is consumed as UTF-16 code units so that non-ASCII names hash
/// the same way on every platform.
pub fn derive_seed(key: &str) -> u32 {
    let units: Vec<u16> = key.encode_utf16().collect();
    let mut h = SEED_BASIS ^ units.len() as u32;
    for unit in units {
        h = (h ^ unit as u32).wrapping_mul(SEED_MIX);
        h = h.rotate_left(13);
    }
    h = (h ^ (h >> 16)).wrapping_mul(FINAL_MIX_A);
    h = (h ^ (h >> 13)).wrapping_mul(FINAL_MIX_B);
    h ^ (h >> 16)
}

#[derive(Debug, Clone)]
pub struct FortuneRng {
    state: u32,
}

impl FortuneRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(derive_seed(key))
    }

    pub fn next_float(&mut self) -> f64 {
        self.next_u32() as f64 / FLOAT_SCALE
    }

    /// Roll an index in [0, len). Returns 0 for an empty range.
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_float() * len as f64).floor() as usize
    }

    /// Uniform pick. Consumes one draw even when `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let idx = self.index(items.len());
        items.get(idx)
    }

    /// Draw up to `count` distinct items without replacement.
    ///
    /// Each draw removes the chosen index from a working copy, so the
    /// order of draws is part of the reproducibility contract.
    pub fn pick_unique<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut pool: Vec<T> = items.to_vec();
        let mut out = Vec::with_capacity(count.min(pool.len()));
        while !pool.is_empty() && out.len() < count {
            let idx = self.index(pool.len());
            out.push(pool.remove(idx));
        }
        out
    }
}

impl RngCore for FortuneRng {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STREAM_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let low = self.next_u32() as u64;
        let high = self.next_u32() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for FortuneRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
