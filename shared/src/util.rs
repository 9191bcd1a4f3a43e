use std::sync::atomic::{AtomicI64, Ordering};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Custom epoch: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Last raw id handed out by any [`IdSequence`] in this process
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Monotonic snowflake sequence.
///
/// Plain snowflakes can collide when two ids are drawn in the same
/// millisecond. Every value handed out here is strictly greater than the
/// previous one across all sequences of the process, so two ledgers (or a
/// guest and a line) never receive the same number.
#[derive(Debug, Clone, Copy)]
pub struct IdSequence {
    prefix: &'static str,
}

impl IdSequence {
    pub fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Next raw id, strictly increasing process-wide
    pub fn next_raw(&self) -> i64 {
        let candidate = snowflake_id();
        let prev = LAST_ID
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(candidate.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        candidate.max(prev + 1)
    }

    /// Next formatted id: `<prefix>-<n>`
    pub fn next_id(&self) -> String {
        let raw = self.next_raw();
        format!("{}-{}", self.prefix, raw)
    }
}
