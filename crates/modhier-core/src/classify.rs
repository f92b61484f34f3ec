use std::path::Path;

use crate::input::SpiderRecord;
use crate::model::Hierarchy;

/// Module name for a modulefile: the directory that contains it.
///
/// `/m/core/gcc/9.1.lua` -> `gcc`. The spider's own module-name key is not used
/// because several groups can share the same leaf directory.
pub fn module_name(modulefile: &str) -> &str {
    Path::new(modulefile)
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("")
}

/// Buckets every record into `(visible, hidden)` by its own `hidden` flag.
///
/// Versions are appended raw, in record order.
pub fn classify(records: &[SpiderRecord<'_>]) -> (Hierarchy, Hierarchy) {
    let mut visible = Hierarchy::new();
    let mut hidden = Hierarchy::new();
    for rec in records {
        let target = if rec.hidden { &mut hidden } else { &mut visible };
        target.append(rec.arch, rec.mpath, module_name(rec.modulefile), rec.version);
    }
    (visible, hidden)
}
