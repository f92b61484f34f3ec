use serde::ser::{Serialize, SerializeMap, Serializer};

/// Insertion-ordered map keyed by strings.
///
/// Hierarchy levels are small and their order is part of the output contract,
/// so a plain vector of pairs is enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for KeyedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> KeyedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Replaces the value in place when `key` exists, otherwise appends it.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &V) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Stable sort over `(key, value)` pairs.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut((&str, &V), (&str, &V)) -> std::cmp::Ordering,
    {
        self.entries
            .sort_by(|(ka, va), (kb, vb)| cmp((ka.as_str(), va), (kb.as_str(), vb)));
    }
}

impl<V: Default> KeyedMap<V> {
    /// Returns the value at `key`, creating a default one at the end if absent.
    pub fn entry_or_default(&mut self, key: &str) -> &mut V {
        let idx = match self.position(key) {
            Some(idx) => idx,
            None => {
                self.entries.push((key.to_string(), V::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }
}

impl<V> FromIterator<(String, V)> for KeyedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut out = KeyedMap::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

impl<V> IntoIterator for KeyedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for KeyedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Version data for one module name.
///
/// Classification only ever produces `Many`; `One` appears after the
/// singleton collapse in cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Versions {
    One(String),
    Many(Vec<String>),
}

impl Default for Versions {
    fn default() -> Self {
        Versions::Many(Vec::new())
    }
}

impl Versions {
    pub fn push(&mut self, version: impl Into<String>) {
        let version = version.into();
        match self {
            Versions::Many(list) => list.push(version),
            Versions::One(first) => {
                let first = std::mem::take(first);
                *self = Versions::Many(vec![first, version]);
            }
        }
    }

    pub fn extend(&mut self, other: Versions) {
        for v in other.into_vec() {
            self.push(v);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            Versions::One(v) => std::slice::from_ref(v),
            Versions::Many(list) => list,
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Versions::One(v) => vec![v],
            Versions::Many(list) => list,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl Serialize for Versions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Versions::One(v) => serializer.serialize_str(v),
            Versions::Many(list) => list.serialize(serializer),
        }
    }
}

/// module name -> versions
pub type ModuleVersions = KeyedMap<Versions>;
/// parent directory (`mpath`) -> module name -> versions
pub type ParentDirs = KeyedMap<ModuleVersions>;

/// architecture -> parent directory -> module name -> versions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    pub arches: KeyedMap<ParentDirs>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `arch / parent_dir / name`, creating each missing level, and
    /// appends `version` to the leaf list.
    pub fn append(&mut self, arch: &str, parent_dir: &str, name: &str, version: &str) {
        self.arches
            .entry_or_default(arch)
            .entry_or_default(parent_dir)
            .entry_or_default(name)
            .push(version);
    }

    pub fn is_empty(&self) -> bool {
        self.arches.is_empty()
    }

    /// Visits every `(arch, parent_dir, name, versions)` leaf.
    pub fn for_each_leaf_mut(&mut self, mut f: impl FnMut(&str, &str, &str, &mut Versions)) {
        for (arch, dirs) in self.arches.iter_mut() {
            for (dir, names) in dirs.iter_mut() {
                for (name, versions) in names.iter_mut() {
                    f(arch, dir, name, versions);
                }
            }
        }
    }

    /// `(arch, parent_dir, name)` triples in current order.
    pub fn module_keys(&self) -> Vec<(String, String, String)> {
        let mut out = Vec::new();
        for (arch, dirs) in self.arches.iter() {
            for (dir, names) in dirs.iter() {
                for name in names.keys() {
                    out.push((arch.to_string(), dir.to_string(), name.to_string()));
                }
            }
        }
        out
    }
}

impl Serialize for Hierarchy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.arches.serialize(serializer)
    }
}
