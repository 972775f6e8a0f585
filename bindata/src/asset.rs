//! Assets
//! ------
//!
//! An `EmbeddedAsset` is the compile-time record for one file: its canonical
//! name, the compressed payload and the filesystem metadata captured when the
//! file was embedded. Calling `load` is the asset's factory: it decodes the
//! payload and pairs it with an `AssetInfo`.
use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::compression::CompressionType;
use crate::error::{Error, Result};

/// Metadata of an embedded file, as it was on disk when embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetInfo {
    pub name: String,
    pub size: u64,
    pub mode: u32,
    pub mod_time: DateTime<Utc>,
}

impl AssetInfo {
    /// Final path segment, like a directory listing would show it.
    pub fn file_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn is_dir(&self) -> bool {
        false
    }
}

/// A decoded asset.
#[derive(Debug, Clone)]
pub struct Asset {
    pub bytes: Vec<u8>,
    pub info: AssetInfo,
}

#[derive(Debug, Clone)]
pub struct EmbeddedAsset {
    pub name: Cow<'static, str>,
    pub data: Cow<'static, [u8]>,
    pub compression_type: CompressionType,
    pub size: u64,
    pub mode: u32,
    pub mod_time_sec: i64,
}

impl EmbeddedAsset {
    /// Record for a gzip payload compiled into the binary.
    pub const fn gzip(
        name: &'static str,
        data: &'static [u8],
        size: u64,
        mode: u32,
        mod_time_sec: i64,
    ) -> EmbeddedAsset {
        EmbeddedAsset {
            name: Cow::Borrowed(name),
            data: Cow::Borrowed(data),
            compression_type: CompressionType::Gzip,
            size,
            mode,
            mod_time_sec,
        }
    }

    /// Compresses `contents` at runtime. Used when assembling stores outside
    /// the generated table.
    pub fn from_contents(
        name: &str,
        contents: &[u8],
        mode: u32,
        mod_time_sec: i64,
    ) -> Result<EmbeddedAsset> {
        let data = CompressionType::compress(contents, CompressionType::Gzip)?;
        Ok(EmbeddedAsset {
            name: Cow::Owned(name.to_string()),
            data: Cow::Owned(data),
            compression_type: CompressionType::Gzip,
            size: contents.len() as u64,
            mode,
            mod_time_sec,
        })
    }

    /// Out of range modification times read as the Unix epoch. Stores refuse
    /// such records on insert, so this only shows for detached records.
    pub fn info(&self) -> AssetInfo {
        AssetInfo {
            name: self.name.to_string(),
            size: self.size,
            mode: self.mode,
            mod_time: DateTime::from_timestamp(self.mod_time_sec, 0).unwrap_or_default(),
        }
    }

    pub fn bytes(&self) -> Result<Vec<u8>> {
        CompressionType::decompress(&self.data, self.compression_type).map_err(|source| {
            Error::DecodeError {
                name: self.name.to_string(),
                source,
            }
        })
    }

    pub fn load(&self) -> Result<Asset> {
        let bytes = self.bytes()?;
        Ok(Asset {
            bytes,
            info: self.info(),
        })
    }
}
