//! Default output filenames: `{YYYYMMDD}_{hash}.md`.

use chrono::{Local, NaiveDate, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Length of the hex hash in generated names.
const HASH_LEN: usize = 8;

/// Generate a fresh artifact name for today.
///
/// Each call hashes its own seed (nanosecond timestamp plus a random UUID),
/// so repeated calls in one process do not collide and no counter is shared
/// between calls. Uniqueness is best-effort.
pub fn default_artifact_name() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let mut seed = nanos.to_le_bytes().to_vec();
    seed.extend_from_slice(Uuid::new_v4().as_bytes());
    artifact_name_at(Local::now().date_naive(), &seed)
}

/// Deterministic core of [`default_artifact_name`].
pub fn artifact_name_at(date: NaiveDate, seed: &[u8]) -> String {
    format!("{}_{}.md", date.format("%Y%m%d"), short_hash(seed))
}

fn short_hash(seed: &[u8]) -> String {
    let digest = Sha256::digest(seed);
    let mut hash = hex::encode(digest);
    hash.truncate(HASH_LEN);
    hash
}
