use crate::error::ConfigError;

/// Construction options for [BlockingQueue](crate::BlockingQueue).
///
/// With the `serde` feature, missing fields take their defaults and a zero
/// capacity is rejected at deserialization:
///
/// ```ignore
/// capacity = 1024
/// ```
///
/// Defaults:
///
/// capacity = unbounded (`usize::MAX`)
/// preallocate = 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config{
    /// Maximum number of queued items. Must not be zero.
    pub capacity: usize,

    /// Slots reserved at construction. Clamped to `capacity`.
    pub preallocate: usize,
}

impl Config{
    pub const UNBOUNDED: usize = usize::MAX;

    #[inline]
    pub const fn unbounded() -> Self {
        Self{ capacity: Self::UNBOUNDED, preallocate: 0 }
    }

    #[inline]
    pub const fn bounded(capacity: usize) -> Self {
        Self{ capacity, preallocate: 0 }
    }

    #[inline]
    pub const fn with_preallocate(mut self, preallocate: usize) -> Self {
        self.preallocate = preallocate;
        self
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.capacity != Self::UNBOUNDED
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn initial_allocation(&self) -> usize {
        self.preallocate.min(self.capacity)
    }
}

impl Default for Config{
    #[inline]
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Wire shape of [Config], checked by `TryFrom` before use.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawConfig{
    capacity: usize,
    preallocate: usize,
}

#[cfg(feature = "serde")]
impl Default for RawConfig{
    fn default() -> Self {
        let Config{ capacity, preallocate } = Config::default();
        Self{ capacity, preallocate }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config{
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, ConfigError> {
        let config = Config{ capacity: raw.capacity, preallocate: raw.preallocate };
        config.validate()?;
        Ok(config)
    }
}
