//! Group registry: owns every member record and the per-group driver slot.

use std::collections::HashMap;

use crate::member::{Member, MemberId};

/// One synchronization group: the members registered under a key, and the
/// member currently driving broadcasts, if any.
#[derive(Debug, Default)]
struct Group {
    /// Member ids in registration order; broadcasts iterate this order.
    order: Vec<MemberId>,
    /// The driving member. `None` until a first registration, or after the
    /// driver unregisters.
    active: Option<MemberId>,
}

/// Owns all groups and members.
///
/// This is plain application-owned state: create one (usually inside
/// [`ScrollSync`](crate::ScrollSync)) at app or screen init and mutate it
/// only from the event-handling call chain. Groups are created on first
/// registration under a key and kept when emptied; re-registering into an
/// emptied group behaves like registering into a fresh one.
#[derive(Debug, Default)]
pub struct SyncRegistry {
    groups: HashMap<String, Group>,
    members: HashMap<MemberId, Member>,
    next_id: u64,
}

impl SyncRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `member` to its group, creating the group if needed.
    ///
    /// The first member to enter an empty group becomes its driver; joining a
    /// populated group never steals the slot.
    pub fn register(&mut self, member: Member) -> MemberId {
        let id = MemberId(self.next_id);
        self.next_id += 1;

        let group = self.groups.entry(member.sync_key.clone()).or_default();
        if group.order.is_empty() {
            group.active = Some(id);
        }
        group.order.push(id);
        log::debug!(
            "[sync] registered member {id} in group {:?} ({} members, {:?} {:?})",
            member.sync_key,
            group.order.len(),
            member.sync_type,
            member.axis,
        );
        self.members.insert(id, member);
        id
    }

    /// Remove a member from its group.
    ///
    /// If it was the driver, the group is left without one until the next
    /// interaction promotes a member. Unknown ids are ignored.
    pub fn unregister(&mut self, id: MemberId) {
        let Some(member) = self.members.remove(&id) else {
            return;
        };
        if let Some(group) = self.groups.get_mut(&member.sync_key) {
            group.order.retain(|other| *other != id);
            if group.active == Some(id) {
                group.active = None;
                log::debug!(
                    "[sync] driver {id} left group {:?}; group inert until next interaction",
                    member.sync_key
                );
            } else {
                log::debug!("[sync] member {id} left group {:?}", member.sync_key);
            }
        }
    }

    /// Make `id` the group's driver, unconditionally.
    ///
    /// No membership check is performed; passing a member of another group is
    /// the caller's mistake to avoid. Unknown keys are ignored.
    pub fn set_active(&mut self, key: &str, id: MemberId) {
        if let Some(group) = self.groups.get_mut(key) {
            if group.active != Some(id) {
                log::debug!("[sync] group {key:?} driver -> {id}");
            }
            group.active = Some(id);
        }
    }

    /// Command every member of `key` except `excluding` to `value`, each on
    /// its own axis, synchronously and in registration order.
    ///
    /// Members whose view is gone are skipped. Unknown keys are ignored.
    pub fn broadcast(&self, key: &str, excluding: MemberId, value: f64) {
        self.broadcast_with(key, excluding, |_| value);
    }

    /// Like [`broadcast`](Self::broadcast), but computes each follower's
    /// offset from its own record.
    pub(crate) fn broadcast_with<F>(&self, key: &str, excluding: MemberId, offset: F)
    where
        F: Fn(&Member) -> f64,
    {
        let Some(group) = self.groups.get(key) else {
            return;
        };
        for &follower_id in &group.order {
            if follower_id == excluding {
                continue;
            }
            let Some(follower) = self.members.get(&follower_id) else {
                continue;
            };
            if !follower.jump(offset(follower)) {
                log::trace!("[sync] member {follower_id} has no live view; skipped");
            }
        }
    }

    /// Look up a member record.
    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub(crate) fn member_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.get_mut(&id)
    }

    /// The group's driving member, if one is elected.
    pub fn active(&self, key: &str) -> Option<MemberId> {
        self.groups.get(key).and_then(|group| group.active)
    }

    /// Number of members registered under `key`.
    pub fn member_count(&self, key: &str) -> usize {
        self.groups.get(key).map_or(0, |group| group.order.len())
    }

    /// Ids registered under `key`, in registration order.
    pub fn members(&self, key: &str) -> &[MemberId] {
        self.groups
            .get(key)
            .map_or(&[], |group| group.order.as_slice())
    }
}
