//! The API service's GraphQL schema, embedded at build time.
//!
//! `schema.graphql` is compiled in as a gzip blob and decoded on each access.
//! The free functions here are shorthands over the process-wide store.
use std::path::Path;

use once_cell::sync::Lazy;

use crate::asset::{AssetInfo, EmbeddedAsset};
use crate::error::{Error, Result};
use crate::store::AssetStore;

pub const SCHEMA_GRAPHQL: &str = "schema.graphql";

static SCHEMA_GRAPHQL_GZ: &[u8] = include_bytes!("../assets/schema.graphql.gz");

static EMBEDDED: [EmbeddedAsset; 1] = [EmbeddedAsset::gzip(
    SCHEMA_GRAPHQL,
    SCHEMA_GRAPHQL_GZ,
    578,
    0o664,
    1565111521,
)];

static STORE: Lazy<AssetStore> = Lazy::new(|| {
    let mut store = AssetStore::new();
    for asset in EMBEDDED.iter() {
        if let Err(err) = store.insert(asset.clone()) {
            log::error!("skipping embedded asset '{}': {}", asset.name, err);
        }
    }
    store
});

pub fn store() -> &'static AssetStore {
    &STORE
}

/// The schema source as text.
pub fn schema() -> Result<String> {
    let bytes = store().get(SCHEMA_GRAPHQL)?;
    String::from_utf8(bytes).map_err(|err| Error::DecodeError {
        name: SCHEMA_GRAPHQL.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
    })
}

pub fn asset(name: &str) -> Result<Vec<u8>> {
    store().get(name)
}

pub fn must_asset(name: &str) -> Vec<u8> {
    store().must_get(name)
}

pub fn asset_info(name: &str) -> Result<AssetInfo> {
    store().get_info(name)
}

pub fn asset_names() -> Vec<String> {
    store().names()
}

pub fn asset_dir(name: &str) -> Result<Vec<String>> {
    store().dir(name)
}

pub fn restore_asset(dir: &Path, name: &str) -> Result<()> {
    store().restore_asset(dir, name)
}

pub fn restore_assets(dir: &Path, name: &str) -> Result<()> {
    store().restore(dir, name)
}
