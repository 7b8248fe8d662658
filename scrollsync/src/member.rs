use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::handle::{ScrollHandle, SharedHandle};
use crate::options::{Axis, SyncInterval, SyncOptions, SyncType};

/// Identifier of a registered member, unique within its registry.
///
/// Ids are never reused, so a stored id can at worst go stale; operations on
/// an unregistered id are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(pub(crate) u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One scrollable view's synchronization state within its group.
#[derive(Debug)]
pub struct Member {
    pub(crate) sync_key: String,
    pub(crate) last_offset: f64,
    pub(crate) handle: Weak<RefCell<dyn ScrollHandle>>,
    pub(crate) interval: SyncInterval,
    pub(crate) sync_type: SyncType,
    pub(crate) axis: Axis,
}

impl Member {
    /// Build the record for a view about to be registered.
    ///
    /// Only a weak reference to `view` is kept; the view itself stays owned
    /// by the caller.
    pub fn new<H>(options: SyncOptions, view: &SharedHandle<H>) -> Self
    where
        H: ScrollHandle + 'static,
    {
        let shared: Rc<RefCell<dyn ScrollHandle>> = view.clone();
        Self {
            sync_key: options.sync_key,
            last_offset: 0.0,
            handle: Rc::downgrade(&shared),
            interval: options.interval,
            sync_type: options.sync_type,
            axis: options.axis,
        }
    }

    /// Key of the group this member belongs to.
    pub fn sync_key(&self) -> &str {
        &self.sync_key
    }

    /// Last raw offset observed from this member's view.
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Window over which this member's scrolling drives its group.
    pub fn interval(&self) -> SyncInterval {
        self.interval
    }

    /// Broadcast semantics while this member drives.
    pub fn sync_type(&self) -> SyncType {
        self.sync_type
    }

    /// Axis this member reads and is commanded on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Command the view to jump to `offset` on this member's axis.
    /// Returns false if the view is gone.
    pub(crate) fn jump(&self, offset: f64) -> bool {
        match self.handle.upgrade() {
            Some(view) => {
                view.borrow_mut().jump_to(offset, self.axis);
                true
            }
            None => false,
        }
    }
}
