use serde::Serialize;
use tracing::{debug, warn};

use super::encode::slash_escaped;
use super::pipeline::Pipeline;
use super::transforms::{self, TransformFn, DEFAULT_CHAR_MAP};
use crate::error::TransformError;
use crate::params::TextToolParams;

pub const USER_FUNCTION_KEY: &str = "userFunction";

#[derive(Clone)]
pub enum Transform {
    Builtin(TransformFn),
    Pipeline(Pipeline),
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transform::Builtin(_) => f.write_str("Builtin"),
            Transform::Pipeline(p) => f.debug_tuple("Pipeline").field(p).finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Entry {
    pub key: String,
    pub label: String,
    pub default_arg: String,
    pub arg_hint: String,
    pub transform: Transform,
}

/// What a UI needs to list an entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntryInfo {
    pub key: String,
    pub label: String,
    pub default_arg: String,
    pub arg_hint: String,
}

/// Named text transforms, kept in registration order.
#[derive(Clone, Debug)]
pub struct TransformRegistry {
    entries: Vec<Entry>,
}

impl Default for TransformRegistry {
    fn default() -> Self { TransformRegistry::builtin() }
}

impl TransformRegistry {
    pub fn empty() -> TransformRegistry { TransformRegistry { entries: Vec::new() } }

    pub fn builtin() -> TransformRegistry {
        let mut reg = TransformRegistry::empty();
        let mut add = |key: &str, label: &str, default_arg: &str, arg_hint: &str, f: TransformFn| {
            reg.register(Entry {
                key: key.to_string(),
                label: label.to_string(),
                default_arg: default_arg.to_string(),
                arg_hint: arg_hint.to_string(),
                transform: Transform::Builtin(f),
            })
        };
        add("toWebpage", "HTML to Webpage", &slash_escaped(DEFAULT_CHAR_MAP),
            "(leave blank for default character swapping map)", transforms::to_webpage);
        add("getNumbers", "Retrieve Numbers", ",", "(separator)", transforms::get_numbers);
        add("getPolygonPath", "Convert to SVG Polygon Path", "Unused", "", transforms::get_polygon_path);
        add("noIndentation", "Remove Newlines and Tabs", "Unused", "", transforms::no_indentation);
        add("charSwap", "Character Swap", "7>5<(S)T", "(reflective mapping)", transforms::char_swap_entry);
        add("toScriptVar", "Assign to ES Variable", "Unused", "", transforms::to_script_var);
        add("toDataURI", "Create Data URI", "text/plain;charset=UTF-8", "(media type with parameters)", transforms::to_data_uri);
        add("toQueryValue", "Encode Query Value", "Unused", "", transforms::to_query_value);
        reg
    }

    /// Adds `entry`, replacing an existing entry with the same key in place.
    pub fn register(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    /// Compiles the `f` parameter as a pipeline and registers it as
    /// [`USER_FUNCTION_KEY`]. Does nothing when `f` is absent.
    pub fn register_user_function(&mut self, params: &TextToolParams) -> Result<(), TransformError> {
        let Some(source) = params.function.as_deref() else { return Ok(()) };
        let pipeline = Pipeline::compile(source, self).inspect_err(|e| {
            warn!(error = %e, "rejected user transform");
        })?;
        self.register(Entry {
            key: USER_FUNCTION_KEY.to_string(),
            label: params.function_name.clone().unwrap_or_else(|| "Custom Function".to_string()),
            default_arg: params.default_arg.clone().unwrap_or_else(|| "Unspecified".to_string()),
            arg_hint: params.arg_hint.clone().unwrap_or_default(),
            transform: Transform::Pipeline(pipeline),
        });
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Entry> { self.entries.iter().find(|e| e.key == key) }
    pub fn contains(&self, key: &str) -> bool { self.get(key).is_some() }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn keys(&self) -> impl Iterator<Item = &str> { self.entries.iter().map(|e| e.key.as_str()) }

    pub fn entries(&self) -> Vec<EntryInfo> {
        self.entries
            .iter()
            .map(|e| EntryInfo {
                key: e.key.clone(),
                label: e.label.clone(),
                default_arg: e.default_arg.clone(),
                arg_hint: e.arg_hint.clone(),
            })
            .collect()
    }

    /// Key a UI listing newest entries first starts on.
    pub fn initial_key(&self) -> Option<&str> { self.entries.last().map(|e| e.key.as_str()) }

    /// Dispatch as the UI does: a blank `arg_input` means the entry default.
    pub fn apply(&self, key: &str, subject: &str, arg_input: &str) -> Result<String, TransformError> {
        let entry = self.get(key).ok_or_else(|| TransformError::UnknownTransform(key.to_string()))?;
        let fellback = arg_input.is_empty();
        let arg = if fellback { entry.default_arg.as_str() } else { arg_input };
        debug!(key, fellback, "applying transform");
        self.invoke(entry, subject, arg, fellback)
    }

    /// Direct call with an explicit argument, used by transforms that build on
    /// other transforms.
    pub fn call(&self, key: &str, subject: &str, arg: &str) -> Result<String, TransformError> {
        let entry = self.get(key).ok_or_else(|| TransformError::UnknownTransform(key.to_string()))?;
        self.invoke(entry, subject, arg, false)
    }

    fn invoke(&self, entry: &Entry, subject: &str, arg: &str, fellback: bool) -> Result<String, TransformError> {
        match &entry.transform {
            Transform::Builtin(f) => f(self, subject, arg, fellback),
            Transform::Pipeline(p) => p.run(self, subject, arg),
        }
    }
}
