//! A small permuted congruential generator.
//!
//! A version of the minimal C PCG32 from <https://www.pcg-random.org/>, implementing [RngCore] so the [rand] helpers, e.g. [gen_bool](rand::Rng::gen_bool), are available.
//!
//! Each [context](crate::context::GenericContext) owns a generator, seeded from the [seed](crate::config::Config::seed) of its configuration.
//! So, two worlds built from the same configuration and the same questionnaire make the same decisions.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and stream of the generator.
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    const MULTIPLIER: u64 = 6364136223846793005;

    /// The stream used for every generator, must be odd.
    const STREAM: u64 = 1442695040888963407;
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut generator = Self {
            state: 0,
            inc: Self::STREAM,
        };
        generator.next_u32();
        generator.state = generator.state.wrapping_add(u64::from_le_bytes(seed));
        generator.next_u32();
        generator
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = MinimalPCG32::seed_from_u64(73);
        let mut b = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        let mut c = MinimalPCG32::from_seed(73_u64.to_le_bytes());

        let b_sequence = (0..16).map(|_| b.next_u32()).collect::<Vec<_>>();
        let c_sequence = (0..16).map(|_| c.next_u32()).collect::<Vec<_>>();
        assert_eq!(b_sequence, c_sequence);

        // seed_from_u64 scrambles the seed, so only check it is usable.
        let _ = a.next_u64();
    }

    #[test]
    fn different_seeds_differ() {
        let mut two = MinimalPCG32::from_seed(2_u64.to_le_bytes());
        let mut three = MinimalPCG32::from_seed(3_u64.to_le_bytes());

        let two_sequence = (0..8).map(|_| two.next_u32()).collect::<Vec<_>>();
        let three_sequence = (0..8).map(|_| three.next_u32()).collect::<Vec<_>>();
        assert_ne!(two_sequence, three_sequence);
    }

    #[test]
    fn fills_bytes() {
        let mut rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
        let mut bytes = [0_u8; 13];
        assert!(rng.try_fill_bytes(&mut bytes).is_ok());
        assert!(bytes.iter().any(|byte| *byte != 0));
    }
}
