//! Event-facing coordinator: driver election, offset transform, dispatch.

use crate::handle::{ScrollHandle, SharedHandle, SyncedHandle};
use crate::member::{Member, MemberId};
use crate::options::{Axis, SyncOptions, SyncType};
use crate::registry::SyncRegistry;
use crate::transform::broadcast_offset;

/// What a single scroll event amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    /// Unknown member, or an offset for the axis this member does not read.
    Ignored,

    /// The member is not its group's driver; the offset was recorded and
    /// nothing was dispatched.
    Inactive,

    /// The member is driving but sits outside its sync interval; nothing was
    /// dispatched.
    Suppressed,

    /// The contained value was dispatched to the rest of the group.
    Broadcast(f64),
}

/// The synchronization context an application owns.
///
/// Create one per app or screen, register each scrollable view as it mounts,
/// and feed it scroll and interaction events from the UI layer; pass it
/// `&mut` through the event-handling call chain like any other piece of
/// screen state. Everything resolves synchronously inside the call: by the
/// time an event entry returns, every follower has been repositioned.
///
/// Commanded jumps cannot re-enter synchronization from inside a dispatch:
/// a [`ScrollHandle`] receives only the offset and axis, with no path back
/// into the coordinator. A follower's view reports its new position later
/// through [`on_scroll`](Self::on_scroll), where it lands as an inactive
/// member and is merely recorded.
#[derive(Debug, Default)]
pub struct ScrollSync {
    registry: SyncRegistry,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scrollable view and hand back its handle.
    ///
    /// The view joins the group named by `options.sync_key`; the first view
    /// into an empty group becomes its driver. The registry keeps only a
    /// weak reference to `view`, so dropping the view (and the returned
    /// handle) turns this member into a silently skipped broadcast target
    /// until it is unregistered.
    pub fn register<H>(&mut self, options: SyncOptions, view: SharedHandle<H>) -> SyncedHandle<H>
    where
        H: ScrollHandle + 'static,
    {
        let member = Member::new(options, &view);
        let id = self.registry.register(member);
        SyncedHandle::new(id, view)
    }

    /// Remove a view's member record, e.g. when the view unmounts.
    ///
    /// If it was its group's driver, the group stays inert until another
    /// member is promoted by an interaction.
    pub fn unregister(&mut self, id: MemberId) {
        self.registry.unregister(id);
    }

    /// Feed one scroll-offset-changed event from a view.
    ///
    /// If the member is its group's driver, the offset runs through the
    /// transform and the result (if any) is dispatched to the rest of the
    /// group before this returns. Otherwise the offset is only recorded.
    /// Events for the wrong axis and events from unknown members change
    /// nothing.
    pub fn on_scroll(&mut self, id: MemberId, offset: f64, axis: Axis) -> ScrollOutcome {
        let Some(member) = self.registry.member(id) else {
            return ScrollOutcome::Ignored;
        };
        if member.axis() != axis {
            log::trace!("[sync] member {id} does not read {axis:?} offsets");
            return ScrollOutcome::Ignored;
        }

        let driving = self.registry.active(member.sync_key()) == Some(id);
        let outcome = if driving {
            let prev = member.last_offset();
            match broadcast_offset(offset, prev, member.interval()) {
                Some(value) => {
                    self.dispatch(id, value, prev);
                    ScrollOutcome::Broadcast(value)
                }
                None => {
                    log::trace!("[sync] driver {id} outside its sync interval; suppressed");
                    ScrollOutcome::Suppressed
                }
            }
        } else {
            ScrollOutcome::Inactive
        };

        // Recorded after the transform, so the next event sees this offset
        // as the previous one.
        if let Some(member) = self.registry.member_mut(id) {
            member.last_offset = offset;
        }
        outcome
    }

    /// A view saw the start of a user interaction (touch down, wheel, drag
    /// begin); its member becomes the group's driver, displacing the
    /// previous one. Unknown members are ignored.
    pub fn on_interaction_begin(&mut self, id: MemberId) {
        let Some(member) = self.registry.member(id) else {
            return;
        };
        let key = member.sync_key().to_string();
        self.registry.set_active(&key, id);
    }

    /// Programmatic scroll that behaves like a user interaction: the member
    /// becomes its group's driver, then its own view jumps to `offset`.
    ///
    /// Followers mirror once the view reports the resulting position through
    /// [`on_scroll`](Self::on_scroll). Unknown members and dead views are
    /// ignored.
    pub fn scroll_to(&mut self, id: MemberId, offset: f64) {
        self.on_interaction_begin(id);
        if let Some(member) = self.registry.member(id) {
            if !member.jump(offset) {
                log::trace!("[sync] member {id} has no live view; scroll_to dropped");
            }
        }
    }

    /// The group's driving member, if one is elected.
    pub fn active_member(&self, key: &str) -> Option<MemberId> {
        self.registry.active(key)
    }

    /// Whether `id` currently drives its group.
    pub fn is_active(&self, id: MemberId) -> bool {
        self.registry
            .member(id)
            .is_some_and(|member| self.registry.active(member.sync_key()) == Some(id))
    }

    /// Number of members registered under `key`.
    pub fn member_count(&self, key: &str) -> usize {
        self.registry.member_count(key)
    }

    /// A member's last recorded raw offset.
    pub fn last_offset(&self, id: MemberId) -> Option<f64> {
        self.registry.member(id).map(Member::last_offset)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &SyncRegistry {
        &self.registry
    }

    /// Mutable access to the underlying registry.
    ///
    /// Election and membership discipline are the caller's responsibility on
    /// this surface; the event entries above are the checked path.
    pub fn registry_mut(&mut self) -> &mut SyncRegistry {
        &mut self.registry
    }

    /// Apply the driver's sync type to fan `value` out to the group.
    fn dispatch(&self, from: MemberId, value: f64, prev: f64) {
        let Some(driver) = self.registry.member(from) else {
            return;
        };
        let key = driver.sync_key();
        match driver.sync_type() {
            SyncType::Absolute => self.registry.broadcast(key, from, value),
            SyncType::Relative => {
                let delta = value - prev;
                self.registry
                    .broadcast_with(key, from, |follower| follower.last_offset() + delta);
            }
        }
        log::trace!("[sync] driver {from} dispatched {value} to group {key:?}");
    }
}
