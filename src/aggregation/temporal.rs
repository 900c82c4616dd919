//! Temporal alignment of per-provider timeseries
//!
//! Each record is floored to the start of its UTC hour or day. Records from
//! different providers merge only when their floored timestamps are equal;
//! there is no tolerance window or nearest-neighbour snapping. A provider
//! with a coarser grid simply leaves gaps in the buckets it does not reach.

use crate::models::{CurrentObservation, DailyObservation, EpochMillis, HourlyObservation};
use std::collections::HashMap;

pub const HOUR_MS: EpochMillis = 3_600_000;
pub const DAY_MS: EpochMillis = 86_400_000;

/// Bucket width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Hour,
    Day,
}

impl Granularity {
    #[must_use]
    pub const fn width_ms(self) -> EpochMillis {
        match self {
            Granularity::Hour => HOUR_MS,
            Granularity::Day => DAY_MS,
        }
    }

    /// Start of the bucket containing `timestamp`.
    ///
    /// Timestamps in the partial bucket at the bottom of the `i64` range
    /// share the bucket `i64::MIN`.
    #[must_use]
    pub const fn bucket_start(self, timestamp: EpochMillis) -> EpochMillis {
        let width = self.width_ms();
        timestamp.div_euclid(width).saturating_mul(width)
    }
}

/// Records that carry the instant they describe
pub trait Timestamped {
    fn timestamp_ms(&self) -> EpochMillis;
}

impl Timestamped for CurrentObservation {
    fn timestamp_ms(&self) -> EpochMillis {
        self.timestamp
    }
}

impl Timestamped for HourlyObservation {
    fn timestamp_ms(&self) -> EpochMillis {
        self.time
    }
}

impl Timestamped for DailyObservation {
    fn timestamp_ms(&self) -> EpochMillis {
        self.date
    }
}

/// A record together with the provider that sent it
#[derive(Debug, PartialEq)]
pub struct AlignedRecord<'a, T> {
    pub provider: &'a str,
    pub record: &'a T,
}

/// Bucket start -> records in that bucket, in provider input order
pub type TimeBuckets<'a, T> = HashMap<EpochMillis, Vec<AlignedRecord<'a, T>>>;

/// Group every provider's records into shared time buckets.
///
/// The map is unordered; use [`into_sorted`] to walk it by time.
pub fn align<'a, T, I>(series: I, granularity: Granularity) -> TimeBuckets<'a, T>
where
    T: Timestamped + 'a,
    I: IntoIterator<Item = (&'a str, &'a [T])>,
{
    let mut buckets: TimeBuckets<'a, T> = HashMap::new();

    for (provider, records) in series {
        for record in records {
            let start = granularity.bucket_start(record.timestamp_ms());
            buckets
                .entry(start)
                .or_default()
                .push(AlignedRecord { provider, record });
        }
    }

    tracing::trace!(
        buckets = buckets.len(),
        ?granularity,
        "aligned provider series"
    );
    buckets
}

/// Buckets ordered by ascending start time
#[must_use]
pub fn into_sorted<T>(buckets: TimeBuckets<'_, T>) -> Vec<(EpochMillis, Vec<AlignedRecord<'_, T>>)> {
    let mut sorted: Vec<_> = buckets.into_iter().collect();
    sorted.sort_unstable_by_key(|(start, _)| *start);
    sorted
}
