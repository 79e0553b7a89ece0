//! Opening-line selection. Flavor text only, so the randomness sits behind a trait
//! and the rest of the pipeline stays deterministic under test.

use rand::Rng;

/// Chooses one of `len` candidate opening lines.
pub trait OpeningPicker: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniformly random choice, used in production.
pub struct RandomOpenings;

impl OpeningPicker for RandomOpenings {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the same position (wrapped into range).
pub struct FixedOpening(pub usize);

impl OpeningPicker for FixedOpening {
    fn pick_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Picks an opening from `candidates` with `picker`. Empty slices yield "".
pub fn choose<'a>(candidates: &[&'a str], picker: &dyn OpeningPicker) -> &'a str {
    if candidates.is_empty() {
        return "";
    }
    let idx = picker.pick_index(candidates.len()).min(candidates.len() - 1);
    candidates[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_range() {
        for len in 1..10 {
            for _ in 0..50 {
                assert!(RandomOpenings.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn test_fixed_wraps() {
        assert_eq!(FixedOpening(7).pick_index(3), 1);
    }

    #[test]
    fn test_choose() {
        let lines = ["a", "b", "c"];
        assert_eq!(choose(&lines, &FixedOpening(2)), "c");
        assert_eq!(choose(&[], &FixedOpening(0)), "");
    }
}
