pub mod coordinator;
pub mod handle;
pub mod member;
pub mod options;
pub mod registry;
pub mod transform;

pub use coordinator::{ScrollOutcome, ScrollSync};
pub use handle::{ScrollHandle, SharedHandle, SyncedHandle};
pub use member::{Member, MemberId};
pub use options::{Axis, DEFAULT_SYNC_KEY, SyncError, SyncInterval, SyncOptions, SyncType};
pub use registry::SyncRegistry;
pub use transform::broadcast_offset;
