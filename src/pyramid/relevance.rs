// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Discovery of the glasses that can influence a target glass.
//!
//! A glass is relevant when it lies on at least one downward path from the
//! top glass to the target. The search walks the graph depth first, keeping
//! the current path on a stack; whenever the walk reaches the target, or a
//! glass already known to lead to it, the whole path is added to the set.
//!
//! Each glass is expanded at most once. Revisiting a glass through another
//! parent reuses the outcome of its first expansion, which is complete by
//! then because the graph has no cycles. The resulting set is the same as
//! enumerating every path, without the exponential number of paths through
//! the middle of a tall pyramid.

use crate::geometry::{Container, ContainerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    LeadsToTarget,
    DeadEnd,
}

/// Set of glasses lying on some top-to-target path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevantSet {
    target: ContainerId,
    members: Vec<bool>,
    len: usize,
}

impl RelevantSet {
    /// Find every glass on a path from `top` to `target`.
    pub fn discover(containers: &[Container], top: ContainerId, target: ContainerId) -> Self {
        let mut set = Self {
            target,
            members: vec![false; containers.len()],
            len: 0,
        };
        let mut visits = vec![Visit::Unseen; containers.len()];
        let mut path = Vec::new();
        set.visit(containers, top, &mut path, &mut visits);
        set
    }

    fn visit(
        &mut self,
        containers: &[Container],
        current: ContainerId,
        path: &mut Vec<ContainerId>,
        visits: &mut [Visit],
    ) -> bool {
        match visits[current] {
            Visit::LeadsToTarget => {
                self.insert_path(path);
                return true;
            }
            Visit::DeadEnd => return false,
            Visit::Unseen => {}
        }

        path.push(current);

        let found = if current == self.target {
            self.insert_path(path);
            true
        } else {
            // Both children are always explored: a glass may be on a second path.
            let mut found = false;
            for child in containers[current].children().into_iter().flatten() {
                found |= self.visit(containers, child, path, visits);
            }
            found
        };

        path.pop();
        visits[current] = if found {
            Visit::LeadsToTarget
        } else {
            Visit::DeadEnd
        };
        found
    }

    fn insert_path(&mut self, path: &[ContainerId]) {
        for &id in path {
            if !self.members[id] {
                self.members[id] = true;
                self.len += 1;
            }
        }
    }

    /// The glass the set was computed for.
    pub fn target(&self) -> ContainerId {
        self.target
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.members.get(id).copied().unwrap_or(false)
    }

    /// Whether an optional child link points into the set.
    pub fn contains_link(&self, link: Option<ContainerId>) -> bool {
        link.is_some_and(|id| self.contains(id))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending arena order.
    pub fn iter(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(id, &member)| member.then_some(id))
    }
}
