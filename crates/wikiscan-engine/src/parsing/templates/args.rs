use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Key of a template argument: positional (1-based) or named.
///
/// An explicit `2=value` is a *named* argument with key `"2"`; it does not
/// collide with the second unlabeled argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ArgKey {
    Positional(usize),
    Named(String),
}

impl ArgKey {
    pub fn named(name: impl Into<String>) -> Self {
        ArgKey::Named(name.into())
    }

    pub fn as_positional(&self) -> Option<usize> {
        match self {
            ArgKey::Positional(n) => Some(*n),
            ArgKey::Named(_) => None,
        }
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            ArgKey::Positional(_) => None,
            ArgKey::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for ArgKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKey::Positional(n) => write!(f, "{n}"),
            ArgKey::Named(name) => f.write_str(name),
        }
    }
}

impl From<usize> for ArgKey {
    fn from(n: usize) -> Self {
        ArgKey::Positional(n)
    }
}

impl From<&str> for ArgKey {
    fn from(name: &str) -> Self {
        ArgKey::Named(name.to_string())
    }
}

impl From<String> for ArgKey {
    fn from(name: String) -> Self {
        ArgKey::Named(name)
    }
}

/// Template arguments in insertion order, each key at most once.
///
/// Equality compares entries in order, so `{{t|a=1|b=2}}` and `{{t|b=2|a=1}}`
/// are different argument lists.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TemplateArgs {
    entries: IndexMap<ArgKey, String>,
}

impl TemplateArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets `key` to `value`.
    ///
    /// An existing key keeps its position and the previous value is
    /// returned; a new key is appended.
    pub fn insert(&mut self, key: impl Into<ArgKey>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &ArgKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn positional(&self, n: usize) -> Option<&str> {
        self.get(&ArgKey::Positional(n))
    }

    pub fn named(&self, name: &str) -> Option<&str> {
        self.get(&ArgKey::named(name))
    }

    pub fn contains_key(&self, key: &ArgKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &ArgKey) -> Option<String> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ArgKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ArgKey, &str)> {
        self.entries.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl PartialEq for TemplateArgs {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for TemplateArgs {}

impl<K: Into<ArgKey>, V: Into<String>> FromIterator<(K, V)> for TemplateArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = TemplateArgs::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}

impl IntoIterator for TemplateArgs {
    type Item = (ArgKey, String);
    type IntoIter = indexmap::map::IntoIter<ArgKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The unbroken run of positional values starting at 1.
///
/// Stops at the first missing index, so `{{t|a|3=c}}` gives `["a"]`.
pub fn positional_args(args: &TemplateArgs) -> Vec<&str> {
    (1..).map_while(|n| args.positional(n)).collect()
}

/// Drops positional arguments `1..=n` and renumbers the rest down by `n`.
///
/// Named arguments are untouched and every entry keeps its relative order.
pub fn shift_args(args: &TemplateArgs, n: usize) -> TemplateArgs {
    args.iter()
        .filter_map(|(key, value)| match key {
            ArgKey::Positional(k) if *k <= n => None,
            ArgKey::Positional(k) => Some((ArgKey::Positional(k - n), value)),
            ArgKey::Named(_) => Some((key.clone(), value)),
        })
        .collect()
}
