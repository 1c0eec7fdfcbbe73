// wallet-core/src/crypto/rng.rs
//
// Random source capability - điểm suspend duy nhất của pipeline.
// Không retry, không timeout: caller tự quyết định policy.

use async_trait::async_trait;
use rand::{rngs::OsRng, RngCore};
use zeroize::Zeroizing;

/// Cryptographically secure byte source.
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Request exactly `len` random bytes.
    async fn request(&self, len: usize) -> Result<Zeroizing<Vec<u8>>, rand::Error>;
}

/// OS-level CSPRNG (`OsRng`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

#[async_trait]
impl RandomSource for OsRandom {
    async fn request(&self, len: usize) -> Result<Zeroizing<Vec<u8>>, rand::Error> {
        let mut bytes = Zeroizing::new(vec![0u8; len]);
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_os_random_length() {
        let bytes = OsRandom.request(32).await.unwrap();
        assert_eq!(bytes.len(), 32);
    }

    #[tokio::test]
    async fn test_os_random_unique() {
        let a = OsRandom.request(16).await.unwrap();
        let b = OsRandom.request(16).await.unwrap();
        assert_ne!(&*a, &*b);
    }
}
