//! Per-view synchronization configuration.

use thiserror::Error;

/// Group key used when none is configured.
pub const DEFAULT_SYNC_KEY: &str = "DEFAULT";

/// Scroll axis a view reads offsets from and is commanded on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical offsets.
    #[default]
    Vertical,

    /// Horizontal offsets.
    Horizontal,
}

/// How a driving member's motion is applied to its followers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncType {
    /// Followers jump to the driver's own position.
    #[default]
    Absolute,

    /// Followers apply the driver's delta to their own last position.
    Relative,
}

/// Closed offset window `[lo, hi]` over which synchronization is live.
///
/// While the driver scrolls inside the open interval its offsets pass through
/// raw; the first event at or past a bound broadcasts the bound itself, and
/// further events outside the window broadcast nothing until the driver comes
/// back inside. See [`broadcast_offset`](crate::transform::broadcast_offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncInterval {
    lo: f64,
    hi: f64,
}

impl SyncInterval {
    /// The unbounded window: synchronization is live at every offset.
    pub const FULL: SyncInterval = SyncInterval {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Create a window from `lo` to `hi`.
    ///
    /// The bounds must satisfy `lo < hi`; anything else (including NaN
    /// bounds, which cannot be ordered) is rejected.
    pub fn new(lo: f64, hi: f64) -> Result<Self, SyncError> {
        if lo < hi {
            Ok(Self { lo, hi })
        } else {
            Err(SyncError::InvalidInterval { lo, hi })
        }
    }

    /// Lower bound of the window.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound of the window.
    pub fn hi(&self) -> f64 {
        self.hi
    }
}

impl Default for SyncInterval {
    fn default() -> Self {
        Self::FULL
    }
}

/// Configuration a scrollable view registers with.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Key of the group this view joins.
    pub sync_key: String,

    /// Window over which this view's scrolling drives its group.
    pub interval: SyncInterval,

    /// Broadcast semantics while this view is the driver.
    pub sync_type: SyncType,

    /// Axis this view reads and is commanded on, fixed for its lifetime.
    pub axis: Axis,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            sync_key: DEFAULT_SYNC_KEY.to_string(),
            interval: SyncInterval::FULL,
            sync_type: SyncType::Absolute,
            axis: Axis::Vertical,
        }
    }
}

impl SyncOptions {
    /// Create options with the defaults: the `"DEFAULT"` group, an unbounded
    /// interval, absolute sync, vertical axis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the group registered under `key`.
    pub fn sync_key(mut self, key: impl Into<String>) -> Self {
        self.sync_key = key.into();
        self
    }

    /// Restrict synchronization to the given window.
    pub fn interval(mut self, interval: SyncInterval) -> Self {
        self.interval = interval;
        self
    }

    /// Set the broadcast semantics used while this view drives.
    pub fn sync_type(mut self, sync_type: SyncType) -> Self {
        self.sync_type = sync_type;
        self
    }

    /// Set the scroll axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Read and command horizontal offsets instead of vertical ones.
    pub fn horizontal(mut self) -> Self {
        self.axis = Axis::Horizontal;
        self
    }
}

/// Errors raised while configuring synchronization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// The interval's bounds are not ordered `lo < hi`.
    #[error("invalid sync interval: lo ({lo}) must be below hi ({hi})")]
    InvalidInterval {
        /// The rejected lower bound.
        lo: f64,
        /// The rejected upper bound.
        hi: f64,
    },
}
