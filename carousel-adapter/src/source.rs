use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::product::Product;

#[cfg(feature = "std")]
type EntryMap = std::collections::HashMap<String, CacheEntry>;
#[cfg(not(feature = "std"))]
type EntryMap = alloc::collections::BTreeMap<String, CacheEntry>;

/// How long a cached response stays fresh by default.
pub const DEFAULT_REVALIDATE_MS: u64 = 6_000;

/// Catalog query parameters; also the identity for response caching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductsRequest {
    pub category_id: u64,
    pub country: String,
    /// Raw filter parameters. The caller is responsible for a stable order;
    /// two requests with the same parameters in the same order share a cache
    /// entry.
    pub filter_params: Vec<(String, String)>,
}

impl ProductsRequest {
    /// A stable cache key for this request.
    pub fn stable_key(&self) -> String {
        let mut key = format!("{}|{}", self.category_id, self.country);
        for (name, value) in &self.filter_params {
            key.push('|');
            key.push_str(name);
            key.push('=');
            key.push_str(value);
        }
        key
    }
}

/// Where products come from. Implementations typically hit the network; the
/// carousel stack only consumes the result.
pub trait ProductSource {
    type Error;

    fn fetch(&mut self, req: &ProductsRequest) -> Result<Vec<Product>, Self::Error>;
}

#[derive(Clone, Debug)]
struct CacheEntry {
    products: Vec<Product>,
    fetched_at_ms: u64,
}

/// Memoizing wrapper around a [`ProductSource`].
///
/// Responses are cached per [`ProductsRequest::stable_key`] and refetched
/// once they are older than the revalidation window. Callers supply `now_ms`;
/// the wrapper never reads a clock. A failed refetch propagates the source
/// error and leaves no entry behind for that key.
#[derive(Clone, Debug)]
pub struct CachedProducts<S> {
    source: S,
    revalidate_ms: u64,
    entries: EntryMap,
}

impl<S: ProductSource> CachedProducts<S> {
    pub fn new(source: S) -> Self {
        Self::with_revalidate_ms(source, DEFAULT_REVALIDATE_MS)
    }

    pub fn with_revalidate_ms(source: S, revalidate_ms: u64) -> Self {
        Self {
            source,
            revalidate_ms,
            entries: EntryMap::new(),
        }
    }

    pub fn revalidate_ms(&self) -> u64 {
        self.revalidate_ms
    }

    /// Returns the products for `req`, fetching through the source when the
    /// cache has no fresh entry.
    pub fn get(&mut self, req: &ProductsRequest, now_ms: u64) -> Result<&[Product], S::Error> {
        let key = req.stable_key();
        let fresh = self
            .entries
            .get(&key)
            .is_some_and(|e| now_ms.saturating_sub(e.fetched_at_ms) < self.revalidate_ms);

        if !fresh {
            self.entries.remove(&key);
            let products = self.source.fetch(req)?;
            self.entries.insert(
                key.clone(),
                CacheEntry {
                    products,
                    fetched_at_ms: now_ms,
                },
            );
        }

        Ok(self
            .entries
            .get(&key)
            .map(|e| e.products.as_slice())
            .unwrap_or_default())
    }

    /// Drops the cached entry for `req`, forcing the next `get` to fetch.
    pub fn invalidate(&mut self, req: &ProductsRequest) {
        self.entries.remove(&req.stable_key());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
