use parking_lot::Mutex;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniform, non-cryptographic selection shared by providers.
pub struct RandomPicker {
    rng: Mutex<SmallRng>,
}

impl RandomPicker {
    /// Picker seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    /// Deterministic picker for reproducible selection.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Pick one element uniformly; `None` for an empty slice.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.lock().random_range(0..items.len());
        items.get(index)
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}
