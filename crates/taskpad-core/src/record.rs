//! Persisted record schema: the fixed set of keys stored under
//! [`crate::store::STORAGE_KEY`].

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::task::TaskItem;

/// Color scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Device,
}

/// The full typed shape of the persisted record.
///
/// Individual keys are read and written through [`RecordKey`]; this struct
/// is the all-defaults record a `set` starts from when storage is absent or
/// unparseable. Keep it exhaustive: fields outside this schema survive a
/// rewrite only because the store round-trips the raw parsed object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub items: Vec<TaskItem>,
}

/// A key of the persisted record, with its value type and fallback default.
pub trait RecordKey {
    type Value: Serialize + DeserializeOwned;

    /// Field name inside the serialized record.
    const NAME: &'static str;

    /// Value to fall back to when the key is absent or undecodable.
    fn default_value() -> Self::Value;
}

/// `theme` — color scheme preference, defaults to [`Theme::Device`].
pub struct ThemeKey;

impl RecordKey for ThemeKey {
    type Value = Theme;
    const NAME: &'static str = "theme";

    fn default_value() -> Theme {
        Theme::Device
    }
}

/// `token` — auth token, absent by default.
pub struct TokenKey;

impl RecordKey for TokenKey {
    type Value = Option<String>;
    const NAME: &'static str = "token";

    fn default_value() -> Option<String> {
        None
    }
}

/// `items` — the ordered task list, empty by default.
pub struct ItemsKey;

impl RecordKey for ItemsKey {
    type Value = Vec<TaskItem>;
    const NAME: &'static str = "items";

    fn default_value() -> Vec<TaskItem> {
        Vec::new()
    }
}
