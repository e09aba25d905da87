use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use mb_utils::TypeIdMap;

use crate::access::{BindableMember, collect_bindable};
use crate::info::{TypeInfo, Typed};

/// Memoizes [`collect_bindable`] per type.
///
/// Discovery is cheap but not free; a binder that resolves the same types on
/// every request can keep one cache and share the results. The cache is an
/// ordinary value, so its lifetime and sharing are up to the caller.
///
/// ```
/// use std::sync::Arc;
/// use mb_reflect::{access::BindableCache, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Login {
///     pub user: String,
///     pub remember: bool,
/// }
///
/// let cache = BindableCache::new();
/// let first = cache.get_or_collect_of::<Login>();
/// let second = cache.get_or_collect_of::<Login>();
///
/// assert_eq!(first.len(), 2);
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Default)]
pub struct BindableCache {
    table: RwLock<TypeIdMap<Arc<[BindableMember]>>>,
}

impl BindableCache {
    #[inline]
    pub const fn new() -> Self {
        Self {
            table: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the bindable members of `info`, collecting them on first use.
    pub fn get_or_collect(&self, info: &'static TypeInfo) -> Arc<[BindableMember]> {
        let type_id = info.ty_id();

        if let Some(members) = self.read().get(&type_id) {
            return members.clone();
        }

        let members: Arc<[BindableMember]> = collect_bindable(info).collect();
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        table.get_or_insert(type_id, || members).clone()
    }

    #[inline]
    pub fn get_or_collect_of<T: Typed>(&self) -> Arc<[BindableMember]> {
        self.get_or_collect(T::type_info())
    }

    /// Number of cached types.
    #[inline]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.table
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    #[inline]
    fn read(&self) -> std::sync::RwLockReadGuard<'_, TypeIdMap<Arc<[BindableMember]>>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for BindableCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BindableCache")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use std::thread;

    use crate::access::BindableCache;
    use crate::derive::Reflect;
    use crate::info::Typed;

    #[derive(Reflect)]
    struct Filter {
        pub term: String,
        pub limit: u32,
    }

    #[test]
    fn caches_by_type() {
        let cache = BindableCache::new();
        assert!(cache.is_empty());

        let filter = cache.get_or_collect(Filter::type_info());
        let primitive = cache.get_or_collect_of::<u32>();
        assert_eq!(filter.len(), 2);
        assert!(primitive.is_empty());
        assert_eq!(cache.len(), 2);

        assert!(Arc::ptr_eq(&filter, &cache.get_or_collect_of::<Filter>()));

        cache.clear();
        assert!(cache.is_empty());
        assert!(!Arc::ptr_eq(&filter, &cache.get_or_collect_of::<Filter>()));
    }

    #[test]
    fn shared_between_threads() {
        let cache = Arc::new(BindableCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_collect_of::<Filter>())
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(cache.len(), 1);
    }
}
