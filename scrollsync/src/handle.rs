//! The command seam between the coordinator and concrete scrollable views.

use std::cell::RefCell;
use std::rc::Rc;

use crate::coordinator::ScrollSync;
use crate::member::MemberId;
use crate::options::Axis;

/// Capability to reposition a scrollable view.
///
/// Each concrete view type implements this by adapting to its own native
/// scroll command. A jump must land immediately (no animation), and the
/// implementation must not feed the commanded offset back into
/// synchronization from inside the call; the view reports its new position
/// later through the normal scroll-event path, where it lands as an inactive
/// member and is merely recorded.
pub trait ScrollHandle {
    /// Move the view so the given axis sits at `offset`.
    fn jump_to(&mut self, offset: f64, axis: Axis);
}

/// Shared ownership of a concrete view handle.
///
/// The view keeps the strong side; the registry only ever holds a weak one,
/// so a dropped view degrades to a silently skipped broadcast target.
pub type SharedHandle<H> = Rc<RefCell<H>>;

/// A registered view's public handle.
///
/// Pairs the member identifier with the view's own command interface, so both
/// the native jump and the synchronization-aware scroll are reachable from
/// one place. Returned by [`ScrollSync::register`].
pub struct SyncedHandle<H> {
    id: MemberId,
    view: SharedHandle<H>,
}

impl<H: ScrollHandle> SyncedHandle<H> {
    pub(crate) fn new(id: MemberId, view: SharedHandle<H>) -> Self {
        Self { id, view }
    }

    /// Identifier of this view's member record.
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// The underlying view handle, for commands that bypass synchronization.
    pub fn view(&self) -> &SharedHandle<H> {
        &self.view
    }

    /// Native jump, without claiming the driver role.
    pub fn jump_to(&self, offset: f64, axis: Axis) {
        self.view.borrow_mut().jump_to(offset, axis);
    }

    /// Promote this view to its group's driver, then jump it to `offset`.
    ///
    /// Equivalent to [`ScrollSync::scroll_to`] for this member: followers
    /// mirror once the view reports the new position.
    pub fn scroll_to(&self, sync: &mut ScrollSync, offset: f64) {
        sync.scroll_to(self.id, offset);
    }
}
