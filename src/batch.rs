//! Single-or-batch inputs
//!
//! Readers are written once for a single path. [`Batch`] lets callers hand them a
//! single path, a list, a keyed map, or any nesting of those, and get back a value
//! of the same shape with each path replaced by what was read from it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A leaf, an ordered sequence, or a keyed mapping, nested to any depth.
///
/// The variant order matters for deserialization: a string is tried as a leaf
/// before anything else, so a path is never split into characters.
///
/// `Map` keeps its keys sorted, not in insertion order. Mapping a batch keeps
/// exactly the same key set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Batch<T> {
    Leaf(T),
    Seq(Vec<Batch<T>>),
    Map(BTreeMap<String, Batch<T>>),
}

impl<T> Batch<T> {
    pub fn leaf(t: T) -> Self {
        Batch::Leaf(t)
    }

    /// Apply `f` to every leaf, rebuilding the same shape.
    ///
    /// Stops at the first failing leaf and returns its error; nothing read before
    /// it is kept.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Batch<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        self.try_map_inner(&mut f)
    }

    fn try_map_inner<U, E, F>(&self, f: &mut F) -> Result<Batch<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        match self {
            Batch::Map(map) => map
                .iter()
                .map(|(key, value)| Ok((key.clone(), value.try_map_inner(f)?)))
                .collect::<Result<BTreeMap<_, _>, E>>()
                .map(Batch::Map),
            Batch::Seq(items) => items
                .iter()
                .map(|item| item.try_map_inner(f))
                .collect::<Result<Vec<_>, E>>()
                .map(Batch::Seq),
            Batch::Leaf(leaf) => f(leaf).map(Batch::Leaf),
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Batch<U> {
        match self.try_map(|leaf| Ok::<_, std::convert::Infallible>(f(leaf))) {
            Ok(batch) => batch,
            Err(never) => match never {},
        }
    }

    /// Leaves in visiting order: sequences front to back, maps by key.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves().count()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves().next().is_none()
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Batch::Leaf(_))
    }

    pub fn into_leaf(self) -> Option<T> {
        match self {
            Batch::Leaf(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Batch<T>]> {
        match self {
            Batch::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Batch<T>>> {
        match self {
            Batch::Map(map) => Some(map),
            _ => None,
        }
    }
}

pub struct Leaves<'a, T> {
    stack: Vec<&'a Batch<T>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Batch::Leaf(t) => return Some(t),
                Batch::Seq(items) => self.stack.extend(items.iter().rev()),
                Batch::Map(map) => self.stack.extend(map.values().rev()),
            }
        }
        None
    }
}

// Strings are paths, never sequences of characters.
impl From<&str> for Batch<PathBuf> {
    fn from(path: &str) -> Self {
        Batch::Leaf(PathBuf::from(path))
    }
}

impl From<String> for Batch<PathBuf> {
    fn from(path: String) -> Self {
        Batch::Leaf(PathBuf::from(path))
    }
}

impl From<&Path> for Batch<PathBuf> {
    fn from(path: &Path) -> Self {
        Batch::Leaf(path.to_owned())
    }
}

impl From<PathBuf> for Batch<PathBuf> {
    fn from(path: PathBuf) -> Self {
        Batch::Leaf(path)
    }
}

impl<T, B: Into<Batch<T>>> From<Vec<B>> for Batch<T> {
    fn from(items: Vec<B>) -> Self {
        Batch::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T, K: Into<String>, B: Into<Batch<T>>> From<BTreeMap<K, B>> for Batch<T> {
    fn from(map: BTreeMap<K, B>) -> Self {
        Batch::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<T> FromIterator<Batch<T>> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = Batch<T>>>(iter: I) -> Self {
        Batch::Seq(iter.into_iter().collect())
    }
}

impl<T> FromIterator<(String, Batch<T>)> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = (String, Batch<T>)>>(iter: I) -> Self {
        Batch::Map(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo() -> Batch<PathBuf> {
        Batch::from(BTreeMap::from([
            ("left", Batch::<PathBuf>::from(vec!["a.png", "b.png"])),
            ("right", Batch::<PathBuf>::from("c.png")),
        ]))
    }

    #[test]
    fn map_preserves_shape() {
        let lengths = stereo().map(|p| p.as_os_str().len());
        let expected = Batch::Map(BTreeMap::from([
            (
                "left".to_string(),
                Batch::Seq(vec![Batch::Leaf(5), Batch::Leaf(5)]),
            ),
            ("right".to_string(), Batch::Leaf(5)),
        ]));
        assert_eq!(lengths, expected);
    }

    #[test]
    fn string_is_a_leaf() {
        let batch: Batch<PathBuf> = Batch::from("depth.png");
        assert!(batch.is_leaf());
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn empty_seq_never_calls_leaf_fn() {
        let batch: Batch<PathBuf> = Batch::Seq(Vec::new());
        let mut calls = 0;
        let out = batch.map(|_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(out, Batch::Seq(Vec::new()));
        assert!(batch.is_empty());
    }

    #[test]
    fn first_error_aborts() {
        let batch: Batch<PathBuf> = Batch::from(vec!["ok", "bad", "ok"]);
        let mut seen = Vec::new();
        let result = batch.try_map(|p| {
            seen.push(p.clone());
            if p == Path::new("bad") {
                Err("bad leaf")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("bad leaf"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn leaves_visit_in_order() {
        let paths: Vec<_> = stereo()
            .leaves()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        assert_eq!(paths, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn deserializes_nested_manifest() {
        let batch: Batch<PathBuf> =
            serde_json::from_str(r#"{"left": ["a.png", "b.png"], "right": "c.png"}"#).unwrap();
        assert_eq!(batch, stereo());
    }

    #[test]
    fn map_keys_come_back_sorted() {
        let batch: Batch<PathBuf> = [
            ("right".to_string(), Batch::leaf(PathBuf::from("r.png"))),
            ("left".to_string(), Batch::leaf(PathBuf::from("l.png"))),
        ]
        .into_iter()
        .collect();

        let out = batch.map(|p| p.clone());
        let keys: Vec<_> = out.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["left", "right"]);
        assert!(out.as_seq().is_none());
    }

    #[test]
    fn deeply_nested() {
        let inner: Batch<PathBuf> = Batch::from(vec!["x"]);
        let middle: Batch<PathBuf> = Batch::from(vec![inner]);
        let batch: Batch<PathBuf> = Batch::from(vec![middle]);
        let out = batch.map(|p| p.clone());
        assert_eq!(out, batch);
        assert_eq!(out.as_seq().map(<[_]>::len), Some(1));
    }
}
