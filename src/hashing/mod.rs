use blake3::Hasher;

use crate::product::Product;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Used for stub-embedding buckets and log correlation only; collisions cost accuracy,
/// never correctness.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Bucket hash for one (already normalised) token.
#[inline]
pub fn hash_token(token: &str) -> u64 {
    hash_to_u64(token.as_bytes())
}

/// Fingerprint of the scored fields of a product, for correlating log lines without
/// logging listing text. Marketplace metadata is ignored.
pub fn product_fingerprint(product: &Product) -> u64 {
    let mut hasher = Hasher::new();
    for field in [
        &product.title,
        &product.description,
        &product.category,
        &product.brand,
    ] {
        hasher.update(field.as_bytes());
        hasher.update(b"\x1f");
    }

    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
