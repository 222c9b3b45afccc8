//! The effective build configuration and the overlay merge policy.
//!
//! A [`Configuration`] is a JSON mapping handed to the external bundler. Mode
//! overlays are applied with [`merge_values`]: mappings merge key by key,
//! sequences concatenate (base first), and any other overlay value replaces
//! the base value.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Key holding the plugin list in a configuration.
pub const PLUGINS_KEY: &str = "plugins";

/// Key holding the mode name written by each overlay.
pub const MODE_KEY: &str = "mode";

/// A configuration object. The wrapped value is always a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Configuration(Value);

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value. Anything other than an object becomes an empty
    /// configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use pagekit_config::Configuration;
    /// use serde_json::json;
    ///
    /// let config = Configuration::from_value(json!({ "entry": "./src/bootstrap" }));
    /// assert_eq!(config.get("entry"), Some(&json!("./src/bootstrap")));
    /// ```
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => Self(value),
            _ => Self::default(),
        }
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a nested value with a JSON pointer such as `/output/publicPath`.
    ///
    /// # Example
    ///
    /// ```
    /// use pagekit_config::Configuration;
    /// use serde_json::json;
    ///
    /// let config = Configuration::from_value(json!({ "output": { "publicPath": "/" } }));
    /// assert_eq!(config.pointer("/output/publicPath"), Some(&json!("/")));
    /// ```
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    /// Mode name written by the merged overlay, if any.
    pub fn mode(&self) -> Option<&str> {
        self.0.get(MODE_KEY).and_then(Value::as_str)
    }

    /// Plugin entries in order. Empty when the key is missing or not a list.
    pub fn plugins(&self) -> &[Value] {
        match self.0.get(PLUGINS_KEY) {
            Some(Value::Array(plugins)) => plugins,
            _ => &[],
        }
    }

    /// Place `directives` ahead of the existing plugin list.
    ///
    /// A missing list is created; a non-list value is kept as the single entry
    /// following the directives.
    pub fn prepend_plugins(&mut self, directives: impl IntoIterator<Item = Value>) {
        let mut plugins: Vec<Value> = directives.into_iter().collect();
        let Some(map) = self.0.as_object_mut() else {
            return;
        };
        match map.get_mut(PLUGINS_KEY) {
            Some(Value::Array(existing)) => {
                plugins.append(existing);
                *existing = plugins;
            }
            Some(other) => {
                plugins.push(other.take());
                *other = Value::Array(plugins);
            }
            None => {
                map.insert(PLUGINS_KEY.to_string(), Value::Array(plugins));
            }
        }
    }

    /// Merge `overlay` into this configuration in place.
    pub fn merge(&mut self, overlay: &Configuration) {
        merge_values(&mut self.0, &overlay.0);
    }

    /// Return a new configuration with `overlay` merged on top of `self`.
    pub fn merged(&self, overlay: &Configuration) -> Self {
        let mut out = self.clone();
        out.merge(overlay);
        out
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from)
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(map: Map<String, Value>) -> Self {
        Self(Value::Object(map))
    }
}

impl From<Configuration> for Value {
    fn from(config: Configuration) -> Self {
        config.into_value()
    }
}

/// Merge `update` into `target`.
///
/// - two objects merge recursively, keys missing from `update` are kept
/// - two arrays concatenate, `target` entries first
/// - anything else is replaced by `update`
///
/// Array elements are never merged with each other.
pub fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            merge_maps(target_map, update_map);
        }
        (Value::Array(target_seq), Value::Array(update_seq)) => {
            target_seq.extend(update_seq.iter().cloned());
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}

/// Pure form of [`merge_values`].
///
/// # Example
///
/// ```
/// use pagekit_config::merged_value;
/// use serde_json::json;
///
/// let base = json!({ "plugins": ["a"], "mode": "none" });
/// let overlay = json!({ "plugins": ["b"], "mode": "development" });
///
/// assert_eq!(
///     merged_value(&base, &overlay),
///     json!({ "plugins": ["a", "b"], "mode": "development" })
/// );
/// ```
pub fn merged_value(base: &Value, overlay: &Value) -> Value {
    let mut out = base.clone();
    merge_values(&mut out, overlay);
    out
}

fn merge_maps(target: &mut Map<String, Value>, update: &Map<String, Value>) {
    for (key, value) in update {
        match target.get_mut(key) {
            Some(slot) => merge_values(slot, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
