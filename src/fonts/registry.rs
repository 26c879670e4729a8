//! Font lookup and memoization.
//!
//! A [`FontRegistry`] builds each font once per name and hands out shared
//! handles. It is meant to be created once and passed to the code that
//! assembles documents; lookups from several threads are safe.

use super::standard::EMBEDDED_METRICS;
use super::type1::Type1Font;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// A place AFM text can be loaded from.
pub trait MetricsSource: Send + Sync {
    /// AFM text for `name`, or `None` if this source does not know the font.
    fn load(&self, name: &str) -> Result<Option<String>>;
}

/// Metrics compiled into the library (the 14 standard fonts).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl MetricsSource for StandardMetrics {
    fn load(&self, name: &str) -> Result<Option<String>> {
        Ok(EMBEDDED_METRICS.get(name).map(|text| text.to_string()))
    }
}

/// `<dir>/<name>.afm` files.
#[derive(Debug, Clone)]
pub struct DirectoryMetrics {
    dir: PathBuf,
}

impl DirectoryMetrics {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl MetricsSource for DirectoryMetrics {
    fn load(&self, name: &str) -> Result<Option<String>> {
        if name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(Error::InvalidArgument(format!("bad font name {:?}", name)));
        }
        let path = self.dir.join(format!("{}.afm", name));
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Font(format!("cannot read {}: {}", path.display(), e))),
        }
    }
}

/// Memoizing font factory.
pub struct FontRegistry {
    sources: Vec<Box<dyn MetricsSource>>,
    cache: RwLock<HashMap<String, Arc<Type1Font>>>,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRegistry")
            .field("sources", &self.sources.len())
            .field("cached", &self.cached_count())
            .finish()
    }
}

impl FontRegistry {
    /// A registry that knows the embedded metrics.
    pub fn new() -> Self {
        Self {
            sources: vec![Box::new(StandardMetrics)],
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Also search `dir` for `<name>.afm`, after the embedded metrics.
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sources.push(Box::new(DirectoryMetrics::new(dir)));
        self
    }

    /// Append a custom source; sources are tried in order.
    pub fn add_source(&mut self, source: Box<dyn MetricsSource>) {
        self.sources.push(source);
    }

    /// The font named `name`, parsed on first use.
    ///
    /// A font whose metrics cannot be read or parsed is an error and is not
    /// cached, so a later call tries again.
    pub fn get(&self, name: &str) -> Result<Arc<Type1Font>> {
        {
            let cache = self
                .cache
                .read()
                .map_err(|_| Error::Font("font cache poisoned".to_string()))?;
            if let Some(font) = cache.get(name) {
                return Ok(Arc::clone(font));
            }
        }

        let text = self.load(name)?;
        let font = Type1Font::parse(&text)?;
        log::debug!("Loaded font {}", name);

        let mut cache = self
            .cache
            .write()
            .map_err(|_| Error::Font("font cache poisoned".to_string()))?;
        // Another thread may have won the race; keep its instance.
        let entry = cache
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(font));
        Ok(Arc::clone(entry))
    }

    /// Number of fonts built so far.
    pub fn cached_count(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    fn load(&self, name: &str) -> Result<String> {
        for source in &self.sources {
            if let Some(text) = source.load(name)? {
                return Ok(text);
            }
        }
        Err(Error::Font(format!("no metrics for font {:?}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl MetricsSource for Broken {
        fn load(&self, _name: &str) -> Result<Option<String>> {
            Ok(Some("not an afm file".to_string()))
        }
    }

    #[test]
    fn test_standard_font_memoized() {
        let registry = FontRegistry::new();
        let a = registry.get("Helvetica").unwrap();
        let b = registry.get("Helvetica").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.cached_count(), 1);
    }

    #[test]
    fn test_unknown_font() {
        let registry = FontRegistry::new();
        assert!(matches!(registry.get("NoSuchFont"), Err(Error::Font(_))));
        assert_eq!(registry.cached_count(), 0);
    }

    #[test]
    fn test_malformed_metrics_not_cached() {
        let mut registry = FontRegistry::new();
        registry.add_source(Box::new(Broken));
        assert!(registry.get("Anything").is_err());
        assert_eq!(registry.cached_count(), 0);
    }

    #[test]
    fn test_directory_rejects_path_names() {
        let source = DirectoryMetrics::new("/nonexistent");
        assert!(source.load("../etc/passwd").is_err());
        assert_eq!(source.load("Missing").unwrap(), None);
    }

    #[test]
    fn test_concurrent_first_use_yields_one_instance() {
        let registry = Arc::new(FontRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.get("Courier").unwrap())
            })
            .collect();
        let fonts: Vec<Arc<Type1Font>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for font in &fonts[1..] {
            assert!(Arc::ptr_eq(&fonts[0], font));
        }
    }
}
