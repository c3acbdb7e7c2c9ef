//! Identifier generation for new items.
//!
//! Shape: `<PREFIX>-<BASE36 millisecond timestamp>-<6 BASE36 random chars>`,
//! upper-case, e.g. `ACT-M1X2Y3Z4-Q7W8E9`.

use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 6;

/// Default identifier prefix.
pub const DEFAULT_PREFIX: &str = "ACT";

/// Generate a new identifier stamped with the current time.
pub fn generate_id(prefix: &str) -> String {
    generate_id_at(prefix, Utc::now())
}

/// Generate a new identifier stamped with `now`.
pub fn generate_id_at(prefix: &str, now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect();

    format!("{}-{}-{}", prefix.to_uppercase(), to_base36(millis), suffix)
}

/// Upper-case base-36 rendering of `n`.
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();

    String::from_utf8(digits).unwrap_or_default()
}
