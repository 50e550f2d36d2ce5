use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::types::TargetSettings;
use super::{PREFERENCES, TEMPLATE_KEY};

/// One node of the capture template: a single key, a flat key list, or a
/// nested mapping of sub-object name to further nodes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TemplateNode {
    /// Capture a single key.
    Key(String),
    /// Capture every listed key that is present.
    Keys(Vec<String>),
    /// Descend into named sub-objects and capture per child node.
    Nested(BTreeMap<String, TemplateNode>),
}

/// Capture template: target-settings-file name mapped to the node
/// describing which of its keys to capture on save.
pub type Template = BTreeMap<String, TemplateNode>;

/// Built-in template used when no `skin-template` key is configured.
#[must_use]
pub fn default_template() -> Template {
    let keys = ["color_scheme", "theme", "font_face", "font_size"]
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    let mut t = Template::new();
    t.insert(PREFERENCES.to_string(), TemplateNode::Keys(keys));
    t
}

/// What: Read the capture template out of skinner's own settings values.
///
/// Inputs:
/// - `values`: Decoded contents of the `Skinner` settings store.
///
/// Output:
/// - The configured template under [`TEMPLATE_KEY`], or the built-in
///   default when the key is missing or malformed.
#[must_use]
pub fn template_from_settings(values: &TargetSettings) -> Template {
    match values.get(TEMPLATE_KEY) {
        Some(v) => match serde_json::from_value::<Template>(v.clone()) {
            Ok(t) if !t.is_empty() => t,
            Ok(_) => default_template(),
            Err(e) => {
                tracing::warn!(error = %e, "malformed skin-template; using default");
                default_template()
            }
        },
        None => default_template(),
    }
}

/// What: Filter a settings object by a template node.
///
/// Inputs:
/// - `node`: Template node describing what to keep.
/// - `source`: Live settings value to read from.
///
/// Output:
/// - `Some(object)` holding the captured key/value pairs; `None` when
///   nothing listed is present (empty objects are never emitted).
///
/// Details:
/// - `Keys` picks each listed key present in `source`.
/// - `Nested` recurses into each named child object and keeps non-empty
///   results under the child's name.
/// - `Key` behaves as a one-element `Keys`.
#[must_use]
pub fn capture(node: &TemplateNode, source: &Value) -> Option<Value> {
    let obj = source.as_object()?;
    match node {
        TemplateNode::Key(key) => {
            let mut out = serde_json::Map::new();
            if let Some(v) = obj.get(key) {
                out.insert(key.clone(), v.clone());
            }
            (!out.is_empty()).then_some(Value::Object(out))
        }
        TemplateNode::Keys(keys) => {
            let mut out = serde_json::Map::new();
            for key in keys {
                if let Some(v) = obj.get(key) {
                    out.insert(key.clone(), v.clone());
                }
            }
            (!out.is_empty()).then_some(Value::Object(out))
        }
        TemplateNode::Nested(children) => {
            let mut out = serde_json::Map::new();
            for (child, child_node) in children {
                if let Some(child_source) = obj.get(child)
                    && let Some(v) = capture(child_node, child_source)
                {
                    out.insert(child.clone(), v);
                }
            }
            (!out.is_empty()).then_some(Value::Object(out))
        }
    }
}
