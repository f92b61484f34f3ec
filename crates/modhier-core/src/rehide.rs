use crate::error::HierarchyError;
use crate::model::Hierarchy;

/// Moves every allow-listed parent directory from `visible` into `hidden`.
///
/// Directories are processed in list order. Each one must be present in at least
/// one architecture of `visible`; it is moved out of every architecture that has
/// it and merged into the matching architecture of `hidden`. Architectures left
/// with no directories are dropped from `visible` after each entry.
pub fn rehide_dirs(
    visible: &mut Hierarchy,
    hidden: &mut Hierarchy,
    hidden_parent_dirs: &[String],
) -> Result<(), HierarchyError> {
    for dir in hidden_parent_dirs {
        let mut found = false;
        for (arch, parent_dirs) in visible.arches.iter_mut() {
            let Some(names) = parent_dirs.remove(dir) else {
                continue;
            };
            found = true;
            let target = hidden
                .arches
                .entry_or_default(arch)
                .entry_or_default(dir);
            for (name, versions) in names {
                target.entry_or_default(&name).extend(versions);
            }
        }
        if !found {
            return Err(HierarchyError::MissingHiddenDirectory(dir.clone()));
        }
        visible.arches.retain(|_, parent_dirs| !parent_dirs.is_empty());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Versions;

    fn dirs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn moves_directory_and_purges_empty_arch() {
        let mut visible = Hierarchy::new();
        let mut hidden = Hierarchy::new();
        visible.append("haswell", "/m/legacy", "gcc", "8.0");
        visible.append("zen2", "/m/core", "gcc", "9.1");
        visible.append("zen2", "/m/legacy", "zlib", "1.2");

        rehide_dirs(&mut visible, &mut hidden, &dirs(&["/m/legacy"])).expect("rehide");

        assert!(!visible.arches.contains_key("haswell"));
        let zen2 = visible.arches.get("zen2").expect("zen2 stays");
        assert!(!zen2.contains_key("/m/legacy"));
        assert!(zen2.contains_key("/m/core"));

        assert!(hidden
            .arches
            .get("haswell")
            .and_then(|d| d.get("/m/legacy"))
            .is_some_and(|n| n.contains_key("gcc")));
        assert!(hidden
            .arches
            .get("zen2")
            .and_then(|d| d.get("/m/legacy"))
            .is_some_and(|n| n.contains_key("zlib")));
    }

    #[test]
    fn merges_into_existing_hidden_directory() {
        let mut visible = Hierarchy::new();
        let mut hidden = Hierarchy::new();
        visible.append("zen2", "/m/uri", "gcc", "9.1");
        visible.append("zen2", "/m/core", "cmake", "3.20");
        hidden.append("zen2", "/m/uri", "gcc", "8.0");
        hidden.append("zen2", "/m/uri", "bzip2", "1.0");

        rehide_dirs(&mut visible, &mut hidden, &dirs(&["/m/uri"])).expect("rehide");

        let uri = hidden
            .arches
            .get("zen2")
            .and_then(|d| d.get("/m/uri"))
            .expect("hidden /m/uri");
        assert_eq!(
            uri.get("gcc"),
            Some(&Versions::Many(vec!["8.0".to_string(), "9.1".to_string()]))
        );
        assert!(uri.contains_key("bzip2"));
    }

    #[test]
    fn stale_entry_fails() {
        let mut visible = Hierarchy::new();
        let mut hidden = Hierarchy::new();
        visible.append("zen2", "/m/core", "gcc", "9.1");

        let err = rehide_dirs(&mut visible, &mut hidden, &dirs(&["/m/core", "/m/gone"]))
            .unwrap_err();
        match err {
            HierarchyError::MissingHiddenDirectory(dir) => assert_eq!(dir, "/m/gone"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_already_moved_counts_as_missing() {
        let mut visible = Hierarchy::new();
        let mut hidden = Hierarchy::new();
        visible.append("zen2", "/m/uri", "gcc", "9.1");
        visible.append("zen2", "/m/core", "cmake", "3.20");

        let err = rehide_dirs(&mut visible, &mut hidden, &dirs(&["/m/uri", "/m/uri"])).unwrap_err();
        assert!(matches!(err, HierarchyError::MissingHiddenDirectory(_)));
    }
}
