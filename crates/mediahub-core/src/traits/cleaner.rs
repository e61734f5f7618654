//! URL/filename cleaning.

/// Turns arbitrary text into a URL- and header-safe slug.
pub trait PathCleaner: Send + Sync + 'static {
    /// Clean `dirty` using the replacement rules of `locale`.
    fn cleanup(&self, dirty: &str, locale: &str) -> String;
}
