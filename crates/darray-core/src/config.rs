//! Allocator configuration.

use crate::alloc::{Allocator, Budget, Heap};
use crate::error::{AllocError, ConfigError};

/// Configuration selecting the allocator buffers are created with.
///
/// Validated by [`build`](AllocConfig::build); the resulting
/// [`ConfiguredAllocator`] is cloned into every buffer that uses it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllocConfig {
    /// Ceiling on the bytes held at once by all buffers sharing the built
    /// allocator.
    ///
    /// Default: `None` (unbounded, plain heap allocation).
    pub max_bytes: Option<usize>,
}

impl AllocConfig {
    /// Environment variable read by [`from_env`](AllocConfig::from_env).
    pub const ENV_MAX_BYTES: &'static str = "DARRAY_MAX_BYTES";

    /// Unbounded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a byte ceiling.
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self {
            max_bytes: Some(max_bytes),
        }
    }

    /// Read the configuration from [`ENV_MAX_BYTES`](Self::ENV_MAX_BYTES).
    ///
    /// An unset or empty variable means unbounded.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(Self::ENV_MAX_BYTES).ok();
        Self::from_env_value(value.as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let max_bytes = match value.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<usize>().map_err(|_| ConfigError::InvalidEnv {
                var: Self::ENV_MAX_BYTES,
                value: raw.to_string(),
            })?),
        };
        let config = Self { max_bytes };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no buffer could work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_bytes == Some(0) {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }

    /// Validate and build the allocator.
    pub fn build(&self) -> Result<ConfiguredAllocator, ConfigError> {
        self.validate()?;
        Ok(match self.max_bytes {
            None => ConfiguredAllocator::Heap(Heap),
            Some(limit) => ConfiguredAllocator::Budget(Budget::new(limit)),
        })
    }
}

/// Allocator chosen by an [`AllocConfig`].
#[derive(Clone, Debug)]
pub enum ConfiguredAllocator {
    /// Unbounded heap allocation.
    Heap(Heap),
    /// Heap allocation under a byte ceiling.
    Budget(Budget),
}

impl Allocator for ConfiguredAllocator {
    fn grow<T>(
        &self,
        block: &mut Vec<T>,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        match self {
            Self::Heap(heap) => heap.grow(block, old_capacity, new_capacity),
            Self::Budget(budget) => budget.grow(block, old_capacity, new_capacity),
        }
    }

    fn shrink<T>(
        &self,
        block: &mut Vec<T>,
        new_len: usize,
        old_capacity: usize,
        new_capacity: usize,
    ) -> Result<(), AllocError> {
        match self {
            Self::Heap(heap) => heap.shrink(block, new_len, old_capacity, new_capacity),
            Self::Budget(budget) => budget.shrink(block, new_len, old_capacity, new_capacity),
        }
    }

    fn release<T>(&self, block: Vec<T>, capacity: usize) {
        match self {
            Self::Heap(heap) => heap.release(block, capacity),
            Self::Budget(budget) => budget.release(block, capacity),
        }
    }
}
