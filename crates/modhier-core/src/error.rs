use std::path::PathBuf;

#[derive(Debug)]
pub enum HierarchyError {
    /// stdin is an interactive terminal instead of piped spider output.
    InputSource,
    Read(std::io::Error),
    Parse(serde_json::Error),
    /// A record is missing a key or the document does not nest as expected.
    StructuralAccess {
        path: String,
        why: String,
    },
    /// An allow-listed parent directory is absent from every visible architecture.
    MissingHiddenDirectory(String),
    OutputWrite {
        path: PathBuf,
        source: OutputWriteSource,
    },
}

#[derive(Debug)]
pub enum OutputWriteSource {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl std::fmt::Display for OutputWriteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputWriteSource::Io(err) => write!(f, "{err}"),
            OutputWriteSource::Encode(err) => write!(f, "{err}"),
        }
    }
}

impl HierarchyError {
    pub fn structural(path: impl Into<String>, why: impl Into<String>) -> Self {
        HierarchyError::StructuralAccess {
            path: path.into(),
            why: why.into(),
        }
    }

    /// Process exit status for this failure. Each kind gets its own code.
    pub fn exit_code(&self) -> u8 {
        match self {
            HierarchyError::InputSource => 3,
            HierarchyError::Read(_) | HierarchyError::Parse(_) => 4,
            HierarchyError::StructuralAccess { .. } => 5,
            HierarchyError::MissingHiddenDirectory(_) => 6,
            HierarchyError::OutputWrite { .. } => 7,
        }
    }
}

impl std::fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyError::InputSource => write!(
                f,
                "stdin is a TTY, it should be the output from `spider2lmod-json.sh` \
                 (e.g. `spider2lmod-json.sh | modhier`)"
            ),
            HierarchyError::Read(err) => write!(f, "read stdin: {err}"),
            HierarchyError::Parse(err) => write!(f, "parse spider JSON from stdin: {err}"),
            HierarchyError::StructuralAccess { path, why } => {
                write!(f, "unexpected spider JSON structure at {path}: {why}")
            }
            HierarchyError::MissingHiddenDirectory(dir) => write!(
                f,
                "hidden parent directory {dir:?} not found in any architecture; \
                 the hidden directory list is out of date"
            ),
            HierarchyError::OutputWrite { path, source } => {
                write!(f, "write output: {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for HierarchyError {}
