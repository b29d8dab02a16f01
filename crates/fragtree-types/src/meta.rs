/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-instance bookkeeping carried by elements.

use std::time::SystemTime;
use uuid::Uuid;

/// Identity and capture time of one element instance.
///
/// Instance metadata never takes part in structural equality, and a clone is
/// a new instance with its own identity. The capture time is copied.
#[derive(Debug)]
pub struct InstanceMeta {
    id: Uuid,
    timestamp: Option<SystemTime>,
}

impl InstanceMeta {
    pub fn new() -> Self {
        InstanceMeta {
            id: Uuid::new_v4(),
            timestamp: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn timestamp(&self) -> Option<SystemTime> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, at: SystemTime) {
        self.timestamp = Some(at);
    }
}

impl Default for InstanceMeta {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InstanceMeta {
    fn clone(&self) -> Self {
        InstanceMeta {
            id: Uuid::new_v4(),
            timestamp: self.timestamp,
        }
    }
}

impl PartialEq for InstanceMeta {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for InstanceMeta {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_instances_have_distinct_ids() {
        assert_ne!(InstanceMeta::new().id(), InstanceMeta::new().id());
    }

    #[test]
    fn test_clone_gets_fresh_id_and_keeps_timestamp() {
        let mut meta = InstanceMeta::new();
        let at = SystemTime::UNIX_EPOCH;
        meta.set_timestamp(at);

        let copy = meta.clone();
        assert_ne!(copy.id(), meta.id());
        assert_eq!(copy.timestamp(), Some(at));
    }

    #[test]
    fn test_meta_is_ignored_by_equality() {
        let mut stamped = InstanceMeta::new();
        stamped.set_timestamp(SystemTime::now());
        assert_eq!(stamped, InstanceMeta::new());
    }
}
