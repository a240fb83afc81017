//! Generated-audio store.
//!
//! A flat directory of WAV files named `sound-<uuid4>.wav`. Names derived
//! from the directory entry count would let two concurrent requests compute
//! the same index and overwrite each other; random ids make every allocation
//! distinct with no coordination.
//!
//! There is no retention policy: files accumulate until an operator cleans
//! them up. Designing expiry is out of scope for this service.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::audio::encode_wav;
use crate::PipelineError;

pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    /// Open the store, creating the directory if missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PipelineError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        tracing::info!(dir = %dir.display(), "audio store ready");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reserve a fresh, collision-free file path.
    pub fn allocate(&self) -> PathBuf {
        self.dir.join(format!("sound-{}.wav", Uuid::new_v4()))
    }

    /// Persist raw uploaded bytes (recognition path).
    pub async fn persist_bytes(&self, bytes: &[u8]) -> Result<PathBuf, PipelineError> {
        let path = self.allocate();
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "stored uploaded audio");
        Ok(path)
    }

    /// Encode synthesized samples as WAV and persist them (synthesis path).
    ///
    /// Returns the path and the encoded bytes so the response sender does
    /// not re-read the file.
    pub async fn persist_samples(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<(PathBuf, Vec<u8>), PipelineError> {
        let bytes = encode_wav(samples, sample_rate)?;
        let path = self.allocate();
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "stored generated audio");
        Ok((path, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("sounds");
        let store = AudioStore::open(&dir).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn overlapping_allocations_get_distinct_identities() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AudioStore::open(tmp.path()).unwrap();
        // An entry-count scheme would hand both requests the same name
        // against an empty directory; allocation must never collide.
        let first = store.allocate();
        let second = store.allocate();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn persist_bytes_writes_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AudioStore::open(tmp.path()).unwrap();
        let path = store.persist_bytes(b"RIFFdata").await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"RIFFdata");
    }

    #[tokio::test]
    async fn persist_samples_writes_decodable_wav() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AudioStore::open(tmp.path()).unwrap();
        let samples = vec![0.0f32; 200];
        let (path, bytes) = store.persist_samples(&samples, 22_050).await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), bytes);
        let (decoded, rate) = crate::audio::decode_wav(&bytes).unwrap();
        assert_eq!(rate, 22_050);
        assert_eq!(decoded.len(), 200);
    }
}
