use rand::Rng;

use crate::error::ChurnError;

/// Values believed to be stored in a tree, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveSet {
    values: Vec<i32>,
}

impl LiveSet {
    pub fn new() -> Self {
        LiveSet { values: Vec::new() }
    }

    pub fn push(&mut self, value: i32) {
        self.values.push(value);
    }

    /// Removes the first occurrence of `value`, keeping the order of the rest.
    pub fn remove(&mut self, value: i32) -> bool {
        match self.values.iter().position(|&v| v == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.values.contains(&value)
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Value at a uniformly chosen position.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i32, ChurnError> {
        if self.values.is_empty() {
            return Err(ChurnError::EmptyPopulation);
        }
        let index = rng.random_range(0..self.values.len());
        Ok(self.values[index])
    }

    /// Draws from `0..bound` until a value not already in the set comes up, giving up after
    /// `max_attempts` rejected candidates.
    pub fn draw_unique<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        bound: i32,
        max_attempts: usize,
    ) -> Result<i32, ChurnError> {
        let in_range = self.values.iter().filter(|&&v| (0..bound).contains(&v)).count();
        if bound <= 0 || in_range >= bound as usize {
            return Err(ChurnError::ValueSpaceExhausted { bound, attempts: 0 });
        }

        for _ in 0..max_attempts {
            let candidate = rng.random_range(0..bound);
            if !self.contains(candidate) {
                return Ok(candidate);
            }
        }
        Err(ChurnError::ValueSpaceExhausted {
            bound,
            attempts: max_attempts,
        })
    }
}

impl FromIterator<i32> for LiveSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        LiveSet {
            values: iter.into_iter().collect(),
        }
    }
}
