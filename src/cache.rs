use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::config::CacheConfig;

struct StoredEntry<T> {
    value: T,
    expires_at: DateTime<Utc>,
}

/// In-memory TTL cache for aggregated reports.
///
/// Owned by the caller and passed where it is needed; there is no global
/// instance. One cache per process is the expected lifecycle, emptied with
/// [`ReportCache::clear`].
pub struct ReportCache<T> {
    entries: Mutex<HashMap<String, StoredEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone + Debug> ReportCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl())
    }

    /// Stores a value with the cache's default time-to-live.
    pub fn put(&self, key: &str, value: T) {
        self.put_with_ttl(key, value, self.ttl);
    }

    /// Stores a value with an explicit time-to-live.
    #[tracing::instrument(name = "put_cache", level = "debug", skip(self, value))]
    pub fn put_with_ttl(&self, key: &str, value: T, ttl: Duration) {
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.entries
            .lock()
            .insert(key.to_string(), StoredEntry { value, expires_at });
    }

    /// Retrieves a value if it exists and has not expired.
    /// Expired entries are removed on the way out.
    #[tracing::instrument(name = "query_cache", level = "debug", skip(self))]
    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock();
        let Some(entry) = entries.get(key) else {
            tracing::debug!("Key not found");
            return None;
        };

        if Utc::now() < entry.expires_at {
            tracing::debug!("Key found and still fresh");
            Some(entry.value.clone())
        } else {
            tracing::debug!("Key found but expired");
            entries.remove(key);
            None
        }
    }

    /// Manually removes a key from the cache.
    pub fn remove(&self, key: &str) -> Option<T> {
        self.entries.lock().remove(key).map(|entry| entry.value)
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of stored entries, expired ones included until they are read
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, WeatherReport};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_put_then_get() {
        let cache = ReportCache::new(Duration::minutes(10));
        cache.put("weather:1.0000:2.0000", 42u32);

        assert_eq!(cache.get("weather:1.0000:2.0000"), Some(42));
        assert_eq!(cache.get("weather:0.0000:0.0000"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_evicted_on_read() {
        let cache = ReportCache::new(Duration::minutes(10));
        cache.put_with_ttl("stale", "old".to_string(), Duration::zero());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("stale"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let cache = ReportCache::from_config(&CacheConfig::default());
        assert_eq!(cache.ttl(), Duration::minutes(10));

        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.remove("a"), Some(1));
        assert_eq!(cache.remove("a"), None);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_huge_ttl_does_not_overflow() {
        let cache = ReportCache::new(Duration::MAX);
        cache.put("forever", 1);
        assert_eq!(cache.get("forever"), Some(1));
    }

    #[test]
    fn test_caches_reports_by_location_key() {
        let location = Location::new(48.1372, 11.5756, "Munich");
        let report = WeatherReport::build(location.clone(), Vec::new(), Vec::new());
        let cache = ReportCache::new(Duration::minutes(5));

        cache.put(&location.cache_key(), report.clone());

        assert_eq!(cache.get(&location.cache_key()), Some(report));
    }

    #[test]
    fn test_shared_between_threads() {
        let cache = Arc::new(ReportCache::new(Duration::minutes(1)));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.put(&format!("key-{i}"), i))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 4);
    }
}
