//! Deterministic scenery selection for newly created planets.
//!
//! The save format stores a purely cosmetic scenery byte (0..=2) per planet.
//! New planets get one drawn from a 32-bit Mersenne Twister (MT19937) seeded
//! from the planet's position, body type and star, so the same edit always
//! produces the same file. Seeding goes through `init_by_array` and the draw
//! through the 53-bit `genrand_res53` double, which matches the values the
//! original editor wrote.

use rand_mt::Mt;

const SCENERY_CHOICES: f64 = 3.0;

/// A double in [0, 1) with 53 bits of precision, built from two draws.
pub fn next_res53(rng: &mut Mt) -> f64 {
    let a = f64::from(rng.next_u32() >> 5);
    let b = f64::from(rng.next_u32() >> 6);
    (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
}

pub fn scenery_seed(position: u8, body_type: u8, star_index: usize) -> u32 {
    u32::from(position) + u32::from(body_type) * 5 + star_index as u32 * 15
}

/// Scenery value (0..=2) for a planet created at `position` around star
/// `star_index`.
pub fn scenery_for(position: u8, body_type: u8, star_index: usize) -> u8 {
    let mut rng = Mt::new_with_key([scenery_seed(position, body_type, star_index)]);
    (next_res53(&mut rng) * SCENERY_CHOICES) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_stream_matches_reference_output() {
        let mut rng = Mt::new_with_key([0x123, 0x234, 0x345, 0x456]);
        let first: Vec<u32> = (0..4).map(|_| rng.next_u32()).collect();
        assert_eq!(first, vec![1_067_595_299, 955_945_823, 477_289_528, 4_107_218_783]);
    }

    #[test]
    fn single_word_key_matches_known_stream() {
        let mut rng = Mt::new_with_key([5]);
        assert_eq!(rng.next_u32(), 2_675_342_405);
        assert_eq!(rng.next_u32(), 1_097_127_993);
    }

    #[test]
    fn unit_interval_draws() {
        let mut rng = Mt::new_with_key([1084]);
        for _ in 0..1000 {
            let v = next_res53(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn scenery_is_reproducible() {
        assert_eq!(scenery_seed(0, 3, 0), 15);
        assert_eq!(scenery_for(0, 3, 0), 2);
        assert_eq!(scenery_seed(2, 1, 0), 7);
        assert_eq!(scenery_for(2, 1, 0), 0);
        assert_eq!(scenery_seed(2, 1, 3), 52);
        assert_eq!(scenery_for(2, 1, 3), 2);
        assert_eq!(scenery_seed(4, 3, 71), 1084);
        assert_eq!(scenery_for(4, 3, 71), 1);
        assert_eq!(scenery_seed(1, 2, 10), 161);
        assert_eq!(scenery_for(1, 2, 10), 1);
        assert_eq!(scenery_for(1, 2, 10), scenery_for(1, 2, 10));
    }
}
