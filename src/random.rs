use rand::Rng;

/// Source of the coordinates used when a circle is dropped onto the canvas.
pub trait RandomGenerator {
    /// Returns a value in `0..max`, or 0 when `max` is 0.
    fn generate(&mut self, max: u32) -> u32;
}

#[derive(Default)]
pub struct ThreadRandom;

impl RandomGenerator for ThreadRandom {
    fn generate(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..max)
    }
}

/// Replays a fixed list of values, repeating the last one once exhausted.
#[cfg(test)]
pub struct Scripted {
    values: Vec<u32>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomGenerator for Scripted {
    fn generate(&mut self, _max: u32) -> u32 {
        let idx = self.next.min(self.values.len().saturating_sub(1));
        self.next += 1;
        self.values.get(idx).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_range() {
        let mut rng = ThreadRandom;
        assert_eq!(rng.generate(0), 0);
        assert_eq!(rng.generate(1), 0);
        for _ in 0..100 {
            assert!(rng.generate(17) < 17);
        }
    }

    #[test]
    fn scripted_repeats_last_value() {
        let mut rng = Scripted::new([3, 4]);
        assert_eq!(rng.generate(10), 3);
        assert_eq!(rng.generate(10), 4);
        assert_eq!(rng.generate(10), 4);
    }
}
