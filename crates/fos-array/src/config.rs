//! Array Configuration
//!
//! Growth and copy policy carried by every array handle.

/// Smallest growth factor that keeps push amortized O(1)
const MIN_GROWTH_FACTOR: usize = 2;

/// Array configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Multiplier applied to the capacity when a push finds it exhausted
    pub growth_factor: usize,

    /// Floor for the first allocation
    pub min_capacity: usize,

    /// Keep the source capacity when a shared buffer is copied
    pub preserve_capacity_on_copy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            growth_factor: MIN_GROWTH_FACTOR,
            min_capacity: 0,
            preserve_capacity_on_copy: false,
        }
    }
}

impl Config {
    /// Normalize out-of-range values
    pub fn validated(self) -> Self {
        Self {
            growth_factor: self.growth_factor.max(MIN_GROWTH_FACTOR),
            ..self
        }
    }

    /// Capacity to allocate when `capacity` slots are full and `required`
    /// slots are needed.
    pub fn grown_capacity(&self, capacity: usize, required: usize) -> usize {
        capacity
            .saturating_mul(self.growth_factor.max(MIN_GROWTH_FACTOR))
            .max(required)
            .max(self.min_capacity)
    }

    /// Capacity for a fresh copy of a shared buffer that must hold
    /// `required` slots.
    pub fn copy_capacity(&self, source_capacity: usize, required: usize) -> usize {
        if self.preserve_capacity_on_copy {
            source_capacity.max(required)
        } else {
            required
        }
    }
}
