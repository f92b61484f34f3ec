use std::io::Read;

use serde_json::{Map, Value};

use crate::error::HierarchyError;

/// One modulefile entry from the spider document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiderRecord<'a> {
    pub arch: &'a str,
    pub modulefile: &'a str,
    pub mpath: &'a str,
    pub version: &'a str,
    pub hidden: bool,
}

/// Reads the whole spider document from `reader`.
///
/// `is_terminal` is checked before any byte is read.
pub fn read_document<R: Read>(mut reader: R, is_terminal: bool) -> Result<Value, HierarchyError> {
    if is_terminal {
        return Err(HierarchyError::InputSource);
    }
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(HierarchyError::Read)?;
    parse_document(&buf)
}

pub fn parse_document(bytes: &[u8]) -> Result<Value, HierarchyError> {
    serde_json::from_slice(bytes).map_err(HierarchyError::Parse)
}

fn location(keys: &[&str]) -> String {
    if keys.is_empty() {
        return "<root>".to_string();
    }
    keys.iter().map(|k| format!("[{k:?}]")).collect()
}

fn as_object<'a>(v: &'a Value, keys: &[&str]) -> Result<&'a Map<String, Value>, HierarchyError> {
    v.as_object().ok_or_else(|| {
        HierarchyError::structural(location(keys), format!("expected object, got {}", kind(v)))
    })
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field<'a>(
    info: &'a Map<String, Value>,
    key: &str,
    keys: &[&str],
) -> Result<&'a str, HierarchyError> {
    match info.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(HierarchyError::structural(
            location(keys),
            format!("key {key:?} must be a string, got {}", kind(other)),
        )),
        None => Err(HierarchyError::structural(
            location(keys),
            format!("missing key {key:?}"),
        )),
    }
}

fn bool_field(info: &Map<String, Value>, key: &str, keys: &[&str]) -> Result<bool, HierarchyError> {
    match info.get(key) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(HierarchyError::structural(
            location(keys),
            format!("key {key:?} must be a boolean, got {}", kind(other)),
        )),
        None => Err(HierarchyError::structural(
            location(keys),
            format!("missing key {key:?}"),
        )),
    }
}

/// Flattens `arch -> module name -> modulefile -> info` into records, in
/// document order. Extra keys in `info` are ignored.
pub fn records(doc: &Value) -> Result<Vec<SpiderRecord<'_>>, HierarchyError> {
    let mut out = Vec::new();
    for (arch, module_name2modulefile) in as_object(doc, &[])? {
        let module_groups = as_object(module_name2modulefile, &[arch.as_str()])?;
        for (module_name, modulefile2info) in module_groups {
            let modulefiles =
                as_object(modulefile2info, &[arch.as_str(), module_name.as_str()])?;
            for (modulefile, info) in modulefiles {
                let keys = [arch.as_str(), module_name.as_str(), modulefile.as_str()];
                let info = as_object(info, &keys)?;
                out.push(SpiderRecord {
                    arch,
                    modulefile,
                    mpath: string_field(info, "mpath", &keys)?,
                    version: string_field(info, "Version", &keys)?,
                    hidden: bool_field(info, "hidden", &keys)?,
                });
            }
        }
    }
    Ok(out)
}
