//! # Set Diff
//!
//! Name-keyed comparison of two descriptor sets, for consumers checking
//! whether a rebuilt set drifted from a previous one.

use crate::DescriptorSet;
use serde::Serialize;
use std::cmp::Ordering;

/// Differences between a left (old) and right (new) set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetDiff {
    /// Names only in the right set.
    pub added: Vec<String>,
    /// Names only in the left set.
    pub removed: Vec<String>,
    /// Names in both sets whose descriptors differ.
    pub changed: Vec<String>,
}

impl SetDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare two sets. Output lists are sorted by name.
#[must_use]
pub fn diff_sets(left: &DescriptorSet, right: &DescriptorSet) -> SetDiff {
    let mut diff = SetDiff::default();
    let mut l = left.iter().peekable();
    let mut r = right.iter().peekable();

    // Both sides are sorted and unique, so a single merge pass suffices.
    loop {
        match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => match a.name().cmp(b.name()) {
                Ordering::Less => {
                    diff.removed.push(a.name().to_string());
                    l.next();
                }
                Ordering::Greater => {
                    diff.added.push(b.name().to_string());
                    r.next();
                }
                Ordering::Equal => {
                    if a != b {
                        diff.changed.push(a.name().to_string());
                    }
                    l.next();
                    r.next();
                }
            },
            (Some(a), None) => {
                diff.removed.push(a.name().to_string());
                l.next();
            }
            (None, Some(b)) => {
                diff.added.push(b.name().to_string());
                r.next();
            }
            (None, None) => break,
        }
    }

    diff
}
