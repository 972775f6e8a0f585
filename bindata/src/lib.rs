//! Embedded schema assets
//!
//! Static files compiled into the binary as gzip blobs, with lookup by name,
//! directory listing over the name hierarchy and restoration to disk.
//!
//! ```rust,no_run
//! use schema_bindata::schema;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdl = schema::schema()?;
//!     println!("{}", sdl);
//!
//!     schema::restore_assets(std::path::Path::new("/tmp/api"), "")?;
//!     Ok(())
//! }
//! ```
pub mod asset;
pub mod compression;
pub mod error;
pub mod schema;
pub mod store;
pub mod tree;

pub use asset::{Asset, AssetInfo, EmbeddedAsset};
pub use compression::CompressionType;
pub use error::{Error, Result};
pub use store::AssetStore;
