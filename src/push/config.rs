//! Configuration for push pipelines.

/// Channel capacity used when none is configured.
///
/// One slot keeps every worker at most a single element ahead of its consumer.
pub const DEFAULT_CAPACITY: usize = 1;

/// Settings shared by every stage of a push pipeline.
///
/// A pipeline inherits the configuration of its source: each combinator
/// builds its output channel with the upstream's settings. Use the source
/// constructors on `PushConfig` to start a pipeline with non-default
/// settings, or [`Iter::with_config`](crate::push::Iter::with_config) to
/// change them part-way.
///
/// # Example
///
/// ```rust
/// use eddy::push::PushConfig;
///
/// # tokio_test::block_on(async {
/// let config = PushConfig::default().with_capacity(16);
/// let xs = config.range(0, 5).select(|x| x * 2);
/// assert_eq!(xs.config().capacity(), 16);
/// assert_eq!(xs.to_vec().await, vec![0, 2, 4, 6, 8]);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushConfig {
    capacity: usize,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl PushConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounded channel capacity of each stage.
    ///
    /// A worker can run at most this many elements ahead of its consumer
    /// before its next send waits. Clamped to at least 1.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// The configured channel capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(PushConfig::new().capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(PushConfig::new().with_capacity(0).capacity(), 1);
        assert_eq!(PushConfig::new().with_capacity(8).capacity(), 8);
    }
}
