//! Asset store
//! -----------
//!
//! The store keeps two views of the same set of assets:
//!
//! - a flat table from canonical name to the asset record, used by `get`,
//!   `get_info` and `names`;
//! - a directory tree built from the `/` separated names, used by `dir` and
//!   by recursive restores.
//!
//! Both are filled by `insert`, which refuses names that would make the two
//! views disagree. Once built, a store is never mutated and can be shared
//! across threads without locking.
//!
//! ```ascii
//!     data/
//!       foo.txt
//!       img/
//!         a.png
//!         b.png
//! ```
//!
//! For the hierarchy above, `dir("data")` is `["foo.txt", "img"]`,
//! `dir("data/img")` is `["a.png", "b.png"]`, `dir("")` is `["data"]` and
//! both `dir("foo.txt")` and `dir("notexist")` fail.
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use chrono::DateTime;
use filetime::FileTime;

use crate::asset::{AssetInfo, EmbeddedAsset};
use crate::error::{Error, Result};
use crate::tree::{self, AssetTree};

/// Mode for directories created while restoring.
pub const DIR_MODE: u32 = 0o755;

/// Replaces Windows separators so lookups accept either form.
pub fn canonical_name(name: &str) -> String {
    name.replace('\\', "/")
}

#[derive(Debug, Default)]
pub struct AssetStore {
    table: HashMap<String, Arc<EmbeddedAsset>>,
    tree: AssetTree,
}

impl AssetStore {
    pub fn new() -> AssetStore {
        AssetStore::default()
    }

    pub fn from_assets<I>(assets: I) -> Result<AssetStore>
    where
        I: IntoIterator<Item = EmbeddedAsset>,
    {
        let mut store = AssetStore::new();
        for asset in assets {
            store.insert(asset)?;
        }
        Ok(store)
    }

    /// Registers an asset under its canonical name.
    pub fn insert(&mut self, mut asset: EmbeddedAsset) -> Result<()> {
        let name = canonical_name(&asset.name);
        let segments = tree::split_path(&name);
        if segments.join("/") != name {
            return Err(Error::InvalidName(format!("'{}' has empty path segments", asset.name)));
        }
        if let Some(segment) = segments.iter().find(|s| !is_plain_segment(s)) {
            return Err(Error::InvalidName(format!(
                "'{}' has segment '{}' that leaves its directory",
                asset.name, segment
            )));
        }
        if DateTime::from_timestamp(asset.mod_time_sec, 0).is_none() {
            return Err(Error::InvalidMetadata(format!(
                "'{}' has out of range modification time {}",
                asset.name, asset.mod_time_sec
            )));
        }
        if self.table.contains_key(&name) {
            return Err(Error::InvalidName(format!("'{name}' is already taken")));
        }
        asset.name = name.clone().into();

        let asset = Arc::new(asset);
        self.tree.insert(&segments, Arc::clone(&asset))?;
        self.table.insert(name, asset);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(&canonical_name(name))
    }

    fn lookup(&self, name: &str) -> Result<&Arc<EmbeddedAsset>> {
        self.table
            .get(&canonical_name(name))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Decoded contents of the named asset.
    pub fn get(&self, name: &str) -> Result<Vec<u8>> {
        let asset = self.lookup(name)?.load()?;
        log::debug!("loaded asset '{}' ({} bytes)", asset.info.name, asset.bytes.len());
        Ok(asset.bytes)
    }

    /// Like `get`, but panics on failure. Meant for initialising globals from
    /// assets that are known to be embedded.
    pub fn must_get(&self, name: &str) -> Vec<u8> {
        match self.get(name) {
            Ok(bytes) => bytes,
            Err(err) => panic!("asset: get({name}): {err}"),
        }
    }

    /// Recorded metadata. Does not decode the payload.
    pub fn get_info(&self, name: &str) -> Result<AssetInfo> {
        Ok(self.lookup(name)?.info())
    }

    /// All registered names, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.table.keys().cloned().collect()
    }

    /// Names directly below `path`. The empty path lists the top level.
    pub fn dir(&self, path: &str) -> Result<Vec<String>> {
        let node = self.resolve(path)?;
        if !node.is_dir() {
            return Err(Error::NotADirectory(path.to_string()));
        }
        Ok(node.children())
    }

    fn resolve(&self, path: &str) -> Result<&AssetTree> {
        let canonical = canonical_name(path);
        self.tree.find(&tree::split_path(&canonical), path)
    }

    /// Writes a single asset to `dir/name`, creating parent directories and
    /// applying the recorded mode and modification time.
    pub fn restore_asset(&self, dir: &Path, name: &str) -> Result<()> {
        let asset = self.lookup(name)?;
        write_asset(dir, asset)
    }

    /// Restores `name` under `dir`: the asset itself when `name` is a leaf,
    /// otherwise every asset below it. The empty name restores everything.
    ///
    /// Stops at the first error. Files already written stay on disk.
    pub fn restore(&self, dir: &Path, name: &str) -> Result<()> {
        let node = self.resolve(name)?;
        let leaves = node.leaves();
        log::debug!(
            "restoring {} asset(s) from '{}' into {}",
            leaves.len(),
            name,
            dir.display()
        );
        for asset in leaves {
            write_asset(dir, &asset)?;
        }
        Ok(())
    }
}

/// A single normal path component: not `.`, `..`, a root or a prefix.
fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// `dir` joined with each segment of the canonical name.
pub fn file_path(dir: &Path, name: &str) -> PathBuf {
    let canonical = canonical_name(name);
    let mut path = dir.to_path_buf();
    for segment in tree::split_path(&canonical) {
        path.push(segment);
    }
    path
}

fn write_asset(dir: &Path, asset: &EmbeddedAsset) -> Result<()> {
    let asset = asset.load()?;
    let target = file_path(dir, &asset.info.name);

    if let Some(parent) = target.parent() {
        create_dir_all(parent)?;
    }
    fs::write(&target, &asset.bytes)?;
    set_mode(&target, asset.info.mode)?;

    let mtime = FileTime::from_unix_time(asset.info.mod_time.timestamp(), 0);
    filetime::set_file_times(&target, mtime, mtime)?;

    log::debug!("restored '{}' to {}", asset.info.name, target.display());
    Ok(())
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(DIR_MODE).create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
