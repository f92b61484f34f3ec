use crate::model::Hierarchy;

/// Parent directories providing the most module names come first. Ties keep
/// their current relative order.
pub fn order_parent_dirs(h: &mut Hierarchy) {
    for parent_dirs in h.arches.values_mut() {
        parent_dirs.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));
    }
}

/// Module names ascending within each parent directory.
pub fn order_module_names(h: &mut Hierarchy) {
    for parent_dirs in h.arches.values_mut() {
        for names in parent_dirs.values_mut() {
            names.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
    }
}

pub fn order(h: &mut Hierarchy) {
    order_parent_dirs(h);
    order_module_names(h);
}
