use std::io::Read;

use serde_json::Value;

use crate::classify::classify;
use crate::cleanup::clean;
use crate::config::RunConfig;
use crate::error::HierarchyError;
use crate::input::{read_document, records};
use crate::model::Hierarchy;
use crate::order::order;
use crate::output::write_outputs;
use crate::rehide::rehide_dirs;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchies {
    pub visible: Hierarchy,
    pub hidden: Hierarchy,
}

/// All in-memory passes: classify, re-hide, clean up, order.
pub fn transform(doc: &Value, config: &RunConfig) -> Result<Hierarchies, HierarchyError> {
    let records = records(doc)?;
    let (mut visible, mut hidden) = classify(&records);
    rehide_dirs(&mut visible, &mut hidden, &config.hidden_parent_dirs)?;
    for h in [&mut visible, &mut hidden] {
        clean(h);
        order(h);
    }
    Ok(Hierarchies { visible, hidden })
}

/// Reads the spider document from `stdin`, transforms it and writes both files.
///
/// Nothing is written unless every in-memory pass succeeds.
pub fn run<R: Read>(
    config: &RunConfig,
    stdin: R,
    stdin_is_terminal: bool,
) -> Result<Hierarchies, HierarchyError> {
    let doc = read_document(stdin, stdin_is_terminal)?;
    let out = transform(&doc, config)?;
    write_outputs(config, &out.visible, &out.hidden)?;
    Ok(out)
}
