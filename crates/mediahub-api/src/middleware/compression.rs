//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a compression layer (gzip).
///
/// Only mounted on JSON routes; streamed downloads keep their
/// `Content-Length`.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new()
}
