//! Option filter state machine
//!
//! A category (frame widths, themes) has an `available` list supplied by the
//! host and a `visible` list kept in panel state. The visible list only counts
//! as an applied filter while it is non-empty and no longer than the available
//! list. Anything else (empty, or oversized after the available list shrank)
//! means "show everything".
//!
//! Nothing here mutates its inputs: toggle and reset return the replacement
//! list that gets dispatched back to the store.

use serde::{Deserialize, Serialize};

/// How `toggle` treats an option that is already in the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPolicy {
    /// Always append. Repeated checks produce duplicate entries.
    #[default]
    Append,
    /// Skip the append when the option is already present.
    Dedupe,
}

impl InsertPolicy {
    pub fn from_dedupe_flag(dedupe: bool) -> Self {
        if dedupe {
            InsertPolicy::Dedupe
        } else {
            InsertPolicy::Append
        }
    }
}

/// Whether `visible` is a real filter over `available`.
///
/// Gated on length only: an oversized list is inactive even when every
/// entry is a valid option.
pub fn is_active<T>(available: &[T], visible: &[T]) -> bool {
    !visible.is_empty() && visible.len() <= available.len()
}

/// Whether `option` renders as checked. Always false while the filter is inactive.
pub fn is_selected<T: PartialEq>(option: &T, available: &[T], visible: &[T]) -> bool {
    is_active(available, visible) && visible.contains(option)
}

/// Build the replacement visible list after a checkbox changed to `checked`.
///
/// Checking appends (subject to `policy`), unchecking drops every occurrence.
pub fn toggle<T: PartialEq + Clone>(
    option: &T,
    checked: bool,
    visible: &[T],
    policy: InsertPolicy,
) -> Vec<T> {
    if checked {
        let mut next = visible.to_vec();
        if policy == InsertPolicy::Append || !visible.contains(option) {
            next.push(option.clone());
        }
        next
    } else {
        visible.iter().filter(|v| *v != option).cloned().collect()
    }
}

/// The cleared visible list. Inactive against any available list.
pub fn reset<T>() -> Vec<T> {
    Vec::new()
}

/// Filter logic bound to one category's available and visible lists
#[derive(Debug, Clone, Copy)]
pub struct FilterController<'a, T> {
    available: &'a [T],
    visible: &'a [T],
    policy: InsertPolicy,
}

impl<'a, T: PartialEq + Clone> FilterController<'a, T> {
    pub fn new(available: &'a [T], visible: &'a [T]) -> Self {
        Self {
            available,
            visible,
            policy: InsertPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: InsertPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn available(&self) -> &'a [T] {
        self.available
    }

    pub fn visible(&self) -> &'a [T] {
        self.visible
    }

    /// Drives both the "Clear" affordance and per-option selection
    pub fn is_active(&self) -> bool {
        is_active(self.available, self.visible)
    }

    pub fn is_selected(&self, option: &T) -> bool {
        is_selected(option, self.available, self.visible)
    }

    pub fn toggle(&self, option: &T, checked: bool) -> Vec<T> {
        toggle(option, checked, self.visible, self.policy)
    }

    pub fn reset(&self) -> Vec<T> {
        reset()
    }

    /// Every available option paired with its checked state, in available order
    pub fn selections(&self) -> impl Iterator<Item = (&'a T, bool)> + '_ {
        let active = self.is_active();
        self.available
            .iter()
            .map(move |option| (option, active && self.visible.contains(option)))
    }
}
