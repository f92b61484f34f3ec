use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::RunConfig;
use crate::error::{HierarchyError, OutputWriteSource};
use crate::model::Hierarchy;

/// Writes `h` as compact JSON, replacing any existing file at `path`.
pub fn write_hierarchy(path: &Path, h: &Hierarchy) -> Result<(), HierarchyError> {
    let io_err = |err: std::io::Error| HierarchyError::OutputWrite {
        path: path.to_path_buf(),
        source: OutputWriteSource::Io(err),
    };
    let file = std::fs::File::create(path).map_err(io_err)?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer(&mut w, h).map_err(|err| HierarchyError::OutputWrite {
        path: path.to_path_buf(),
        source: OutputWriteSource::Encode(err),
    })?;
    w.flush().map_err(io_err)?;
    Ok(())
}

/// Visible file first, then hidden. A failure on the second leaves the first in place.
pub fn write_outputs(
    config: &RunConfig,
    visible: &Hierarchy,
    hidden: &Hierarchy,
) -> Result<(), HierarchyError> {
    write_hierarchy(&config.visible_path(), visible)?;
    write_hierarchy(&config.hidden_path(), hidden)?;
    Ok(())
}

/// Status line for stderr after both files are written.
pub fn success_message(config: &RunConfig) -> String {
    if config.writes_to_cwd() {
        "files created in your current working directory.".to_string()
    } else {
        format!("files created in {}.", config.output_dir.display())
    }
}
