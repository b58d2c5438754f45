//! Record fingerprinting.
//!
//! A fingerprint is the SHA-256 digest of a record's four content fields fed
//! into the hasher back to back, with no separators:
//!
//!   1. index as decimal ASCII
//!   2. timestamp as RFC 3339 UTC with nanosecond precision (`...Z`)
//!   3. diff text as UTF-8 bytes
//!   4. previous hash as UTF-8 bytes
//!
//! The output is a lowercase 64-character hex string.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Render `timestamp` in the exact form that is fed into the fingerprint.
///
/// Always emits nine fractional digits so two instants that differ by a
/// nanosecond never render identically.
pub fn canonical_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Compute the fingerprint of a record's fields.
///
/// Pure and deterministic: the same four inputs always produce the same
/// digest, and changing any one of them changes it.
pub fn fingerprint(
    index: u64,
    timestamp: &DateTime<Utc>,
    diff: &str,
    previous_hash: &str,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(index.to_string().as_bytes());
    hasher.update(canonical_timestamp(timestamp).as_bytes());
    hasher.update(diff.as_bytes());
    hasher.update(previous_hash.as_bytes());

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::nanoseconds(123_456_789)
    }

    #[test]
    fn fingerprint_is_64_lowercase_hex() {
        let hash = fingerprint(0, &fixed_time(), "+ a", "0");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let t = fixed_time();
        let first = fingerprint(1, &t, "Diff1", "prevHash");
        let second = fingerprint(1, &t, "Diff1", "prevHash");
        assert_eq!(first, second);
    }

    #[test]
    fn fingerprint_covers_every_field() {
        let t = fixed_time();
        let base = fingerprint(1, &t, "Diff1", "prevHash");

        assert_ne!(base, fingerprint(2, &t, "Diff1", "prevHash"), "index");
        assert_ne!(
            base,
            fingerprint(1, &(t + Duration::nanoseconds(1)), "Diff1", "prevHash"),
            "timestamp"
        );
        assert_ne!(base, fingerprint(1, &t, "Diff2", "prevHash"), "diff");
        assert_ne!(base, fingerprint(1, &t, "Diff1", "otherHash"), "previous hash");
    }

    #[test]
    fn canonical_timestamp_keeps_nanoseconds() {
        assert_eq!(canonical_timestamp(&fixed_time()), "2024-05-01T12:00:00.123456789Z");
    }
}
