// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A minimal, zero-dependency, completely insecure PRNG to shuffle the
/// question set.
#[derive(Clone, Debug)]
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    /// Generate a random number in `[0, max)`, without modulo bias.
    pub fn generate(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let n = self.next_u32();
            if n < zone {
                return n % max;
            }
        }
    }
}

/// Fisher-Yates shuffle: every permutation is equally likely.
pub fn shuffle<T>(v: Vec<T>, rng: &mut TinyRng) -> Vec<T> {
    let mut v = v;
    for i in (1..v.len()).rev() {
        let j = rng.generate(i as u32 + 1) as usize;
        v.swap(i, j);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_in_range() {
        let mut rng = TinyRng::from_seed(7);
        for max in 1..50 {
            assert!(rng.generate(max) < max);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = TinyRng::from_seed(1234);
        let mut shuffled = shuffle((0..40).collect::<Vec<u32>>(), &mut rng);
        shuffled.sort();
        assert_eq!(shuffled, (0..40).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let a = shuffle((0..20).collect::<Vec<u32>>(), &mut TinyRng::from_seed(99));
        let b = shuffle((0..20).collect::<Vec<u32>>(), &mut TinyRng::from_seed(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = TinyRng::from_seed(0);
        assert!(shuffle(Vec::<u8>::new(), &mut rng).is_empty());
        assert_eq!(shuffle(vec![5], &mut rng), vec![5]);
    }

    #[test]
    fn test_shuffle_first_position_is_roughly_uniform() {
        // Each of 4 items should land in front about a quarter of the time.
        let mut rng = TinyRng::from_seed(2024);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let v = shuffle(vec![0, 1, 2, 3], &mut rng);
            counts[v[0]] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "{counts:?}");
        }
    }
}
