//! Directory tree over asset names.
//!
//! Names are split on `/`; every intermediate segment becomes a directory
//! and the last one a leaf pointing at the asset record. The tree only
//! answers "what is below this path" questions. Lookups by full name go
//! through the store's flat table.
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::asset::EmbeddedAsset;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub enum AssetTree {
    Leaf(Arc<EmbeddedAsset>),
    Directory(BTreeMap<String, AssetTree>),
}

impl Default for AssetTree {
    fn default() -> Self {
        AssetTree::Directory(BTreeMap::new())
    }
}

pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

impl AssetTree {
    pub fn is_dir(&self) -> bool {
        matches!(self, AssetTree::Directory(_))
    }

    /// Adds a leaf at `segments`. Fails without modifying the tree when a
    /// prefix of the path is already a leaf or the full path is taken.
    pub fn insert(&mut self, segments: &[&str], asset: Arc<EmbeddedAsset>) -> Result<()> {
        let (last, parents) = segments
            .split_last()
            .ok_or_else(|| Error::InvalidName(format!("'{}' has no path segments", asset.name)))?;

        // Check the whole path first so a rejected insert leaves no empty
        // directories behind.
        let mut node = &*self;
        for segment in parents {
            match node {
                AssetTree::Directory(children) => match children.get(*segment) {
                    Some(child) => node = child,
                    None => break,
                },
                AssetTree::Leaf(existing) => {
                    return Err(Error::InvalidName(format!(
                        "'{}' is nested under asset '{}'",
                        asset.name, existing.name
                    )))
                }
            }
        }
        if let AssetTree::Leaf(existing) = node {
            return Err(Error::InvalidName(format!(
                "'{}' is nested under asset '{}'",
                asset.name, existing.name
            )));
        }

        let mut node = self;
        for segment in parents {
            node = match node {
                AssetTree::Directory(children) => children.entry(segment.to_string()).or_default(),
                AssetTree::Leaf(_) => unreachable!("checked above"),
            };
        }
        match node {
            AssetTree::Directory(children) => {
                if children.contains_key(*last) {
                    return Err(Error::InvalidName(format!("'{}' is already taken", asset.name)));
                }
                children.insert(last.to_string(), AssetTree::Leaf(asset));
                Ok(())
            }
            AssetTree::Leaf(_) => unreachable!("checked above"),
        }
    }

    /// Resolves `segments` from this node. `name` is only used for errors.
    pub fn find(&self, segments: &[&str], name: &str) -> Result<&AssetTree> {
        let mut node = self;
        for segment in segments {
            node = match node {
                AssetTree::Directory(children) => children
                    .get(*segment)
                    .ok_or_else(|| Error::NotFound(name.to_string()))?,
                AssetTree::Leaf(_) => return Err(Error::NotFound(name.to_string())),
            };
        }
        Ok(node)
    }

    /// Names directly below a directory node; a leaf has none.
    pub fn children(&self) -> Vec<String> {
        match self {
            AssetTree::Directory(children) => children.keys().cloned().collect(),
            AssetTree::Leaf(_) => Vec::new(),
        }
    }

    /// Every asset at or below this node, depth first.
    pub fn leaves(&self) -> Vec<Arc<EmbeddedAsset>> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Arc<EmbeddedAsset>>) {
        match self {
            AssetTree::Leaf(asset) => out.push(Arc::clone(asset)),
            AssetTree::Directory(children) => {
                for child in children.values() {
                    child.collect_leaves(out);
                }
            }
        }
    }
}
