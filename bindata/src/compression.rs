use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CompressionType {
    None,
    Gzip,
}

impl CompressionType {
    /// Decodes a whole payload into memory. Gzip streams are self-describing so
    /// no length prefix is expected.
    pub fn decompress(
        compressed: &[u8],
        compression_type: CompressionType,
    ) -> std::io::Result<Vec<u8>> {
        Ok(match compression_type {
            CompressionType::Gzip => {
                let mut decoder = GzDecoder::new(compressed);
                let mut decompressed = Vec::new();
                decoder.read_to_end(&mut decompressed)?;
                decompressed
            }
            CompressionType::None => compressed.to_owned(),
        })
    }

    pub fn compress(data: &[u8], compression_type: CompressionType) -> std::io::Result<Vec<u8>> {
        Ok(match compression_type {
            CompressionType::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data)?;
                encoder.finish()?
            }
            CompressionType::None => data.to_owned(),
        })
    }
}
