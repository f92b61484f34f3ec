use std::collections::HashSet;

use crate::model::{Hierarchy, Versions};

/// Placeholder version the spider reports for default-version symlinks.
pub const LATEST: &str = "latest";

/// Drops `latest` when other versions exist. A sole `latest` is kept.
pub fn drop_latest(versions: &mut Versions) {
    let Versions::Many(list) = versions else {
        return;
    };
    if list.iter().any(|v| v != LATEST) {
        list.retain(|v| v != LATEST);
    }
}

/// Removes duplicate versions, keeping first-seen order.
pub fn dedup(versions: &mut Versions) {
    let Versions::Many(list) = versions else {
        return;
    };
    let mut seen = HashSet::with_capacity(list.len());
    list.retain(|v| seen.insert(v.clone()));
}

/// `["8.0"]` -> `"8.0"`
pub fn collapse_singleton(versions: &mut Versions) {
    let single = match versions {
        Versions::Many(list) if list.len() == 1 => list.pop(),
        _ => None,
    };
    if let Some(only) = single {
        *versions = Versions::One(only);
    }
}

pub fn clean_versions(versions: &mut Versions) {
    drop_latest(versions);
    dedup(versions);
    collapse_singleton(versions);
}

/// Runs each cleanup step as a full pass over every leaf of `h`.
pub fn clean(h: &mut Hierarchy) {
    h.for_each_leaf_mut(|_, _, _, v| drop_latest(v));
    h.for_each_leaf_mut(|_, _, _, v| dedup(v));
    h.for_each_leaf_mut(|_, _, _, v| collapse_singleton(v));
}
