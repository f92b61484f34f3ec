use std::path::{Path, PathBuf};

/// Parent directories whose modules are always hidden.
///
/// When a hidden module adds a new branch to the hierarchy, Lmod spider does not
/// give the hidden property to the modules in that new branch.
pub const HIDDEN_PARENT_DIRS: &[&str] = &[
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-cascadelake",
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-haswell",
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-icelake",
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-skylake_avx512",
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-x86_64",
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-zen",
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-zen2",
    "/modules/uri_modulefiles/all",
    "/modules/uri_modulefiles",
];

pub const VISIBLE_FILE_NAME: &str = "hierarchy.json";
pub const HIDDEN_FILE_NAME: &str = "hidden-hierarchy.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub hidden_parent_dirs: Vec<String>,
    pub output_dir: PathBuf,
    pub visible_file_name: String,
    pub hidden_file_name: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            hidden_parent_dirs: HIDDEN_PARENT_DIRS.iter().map(|s| s.to_string()).collect(),
            output_dir: PathBuf::from("."),
            visible_file_name: VISIBLE_FILE_NAME.to_string(),
            hidden_file_name: HIDDEN_FILE_NAME.to_string(),
        }
    }
}

impl RunConfig {
    pub fn with_hidden_parent_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden_parent_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn visible_path(&self) -> PathBuf {
        self.output_dir.join(&self.visible_file_name)
    }

    pub fn hidden_path(&self) -> PathBuf {
        self.output_dir.join(&self.hidden_file_name)
    }

    pub fn writes_to_cwd(&self) -> bool {
        self.output_dir.as_os_str().is_empty() || self.output_dir == Path::new(".")
    }
}
