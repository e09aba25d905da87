use alloc::string::String;
use alloc::sync::Arc;
use core::any::TypeId;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mb_utils::TypeIdMap;
use mb_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::TypeInfo;
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The central store of [`TypeMeta`]s, keyed by [`TypeId`], type path and
/// type name.
///
/// ```
/// use mb_reflect::registry::{TypeRegistry, TypeTraitDefault};
/// use mb_reflect::info::DynamicTypePath;
///
/// let registry = TypeRegistry::new();
///
/// let generator = registry
///     .get_with_type_name("String").unwrap()
///     .get_trait::<TypeTraitDefault>().unwrap();
///
/// let s = generator.default();
/// assert_eq!(s.reflect_type_path(), "alloc::string::String");
/// ```
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            type_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry with the primitive types, `String` and `&'static str`.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<()>();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<u128>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry.register::<&'static str>();
        registry
    }

    // The type must not be registered yet.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.remove(type_name).is_some() {
                log::warn!("type name `{type_name}` is ambiguous, look it up by type path instead");
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());
    }

    // Returns `false` without calling `get_type_meta` if the type exists.
    fn register_internal(
        &mut self,
        type_id: TypeId,
        get_type_meta: impl FnOnce() -> TypeMeta,
    ) -> bool {
        self.type_meta_table.try_insert(type_id, || {
            let meta = get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Inserts `type_meta` unless its type is already registered.
    ///
    /// Dependencies are not registered; see [`register`](Self::register).
    #[inline]
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.register_internal(type_meta.ty_id(), || type_meta)
    }

    /// Inserts `type_meta`, overwriting the `TypeMeta` of its type if any.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        if !self.type_meta_table.contains(&type_meta.ty_id()) {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
        }
        self.type_meta_table.insert(type_meta.ty_id(), type_meta);
    }

    /// Registers `T` and, the first time, its dependencies.
    ///
    /// For a derived type the dependencies are the value types of its
    /// properties and fields, and its base.
    ///
    /// ```
    /// # use core::any::TypeId;
    /// # use mb_reflect::{derive::Reflect, registry::{TypeRegistry, TypeTraitDefault}};
    /// #[derive(Reflect, Default)]
    /// #[reflect(default)]
    /// pub struct Filter {
    ///     pub tags: Vec<String>,
    ///     pub limit: Option<u32>,
    /// }
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register::<Filter>();
    ///
    /// assert!(registry.contains(TypeId::of::<Filter>()));
    /// assert!(registry.contains(TypeId::of::<Vec<String>>()));
    /// assert!(registry.contains(TypeId::of::<String>()));
    /// assert!(registry.contains(TypeId::of::<Option<u32>>()));
    /// assert!(registry.get_type_trait::<TypeTraitDefault>(TypeId::of::<Filter>()).is_some());
    /// ```
    pub fn register<T: GetTypeMeta>(&mut self) {
        if self.register_internal(TypeId::of::<T>(), T::get_type_meta) {
            T::register_dependencies(self);
        }
    }

    /// Registers every type declared with `#[reflect(auto_register)]` or
    /// `impl_auto_register!`.
    ///
    /// Returns `false` if static registration is unavailable, either because
    /// the `auto_register` feature is off or because the platform does not
    /// support it.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;

            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Adds the type trait `D` to `T`, registering `T` first if needed.
    ///
    /// ```
    /// use core::any::TypeId;
    /// use mb_reflect::registry::{TypeRegistry, TypeTraitDeserialize};
    ///
    /// let mut registry = TypeRegistry::empty();
    /// registry.register_type_trait::<Vec<String>, TypeTraitDeserialize>();
    ///
    /// assert!(registry
    ///     .get_type_trait::<TypeTraitDeserialize>(TypeId::of::<Vec<String>>())
    ///     .is_some());
    /// ```
    pub fn register_type_trait<T: GetTypeMeta, D: TypeTrait + FromType<T>>(&mut self) {
        self.register::<T>();
        if let Some(type_meta) = self.type_meta_table.get_mut(&TypeId::of::<T>()) {
            type_meta.insert_trait(D::from_type());
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Looks a type up by its [type path](crate::info::TypePath::type_path).
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        let id = self.type_path_to_id.get(type_path)?;
        self.get(*id)
    }

    /// Looks a type up by its [type name](crate::info::TypePath::type_name).
    ///
    /// Returns `None` for ambiguous names.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        let id = self.type_name_to_id.get(type_name)?;
        self.get(*id)
    }

    /// Returns `true` if several registered types share this type name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        self.get(type_id)?.get_trait::<T>()
    }

    pub fn get_type_trait_mut<T: TypeTrait>(&mut self, type_id: TypeId) -> Option<&mut T> {
        self.get_mut(type_id)?.get_trait_mut::<T>()
    }

    pub fn get_type_info(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.get(type_id).map(TypeMeta::type_info)
    }

    /// The number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }

    /// Pairs of registered types and their type trait `T`, for the types
    /// that have one.
    pub fn iter_with_trait<T: TypeTrait>(&self) -> impl Iterator<Item = (&TypeMeta, &T)> {
        self.type_meta_table
            .values()
            .filter_map(|meta| meta.get_trait::<T>().map(|t| (meta, t)))
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A [`TypeRegistry`] shared between threads.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read().fmt(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use crate::derive::Reflect;
    use crate::registry::{TypeRegistry, TypeRegistryArc, TypeTraitDefault};

    mod first {
        use crate::derive::Reflect;

        #[derive(Reflect)]
        pub struct Record;
    }

    mod second {
        use crate::derive::Reflect;

        #[derive(Reflect)]
        pub struct Record;
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    pub struct Base {
        pub id: u64,
    }

    #[derive(Reflect, Default)]
    #[reflect(default)]
    #[reflect(property(name = "title", ty = String, get = Self::title, set = Self::set_title))]
    pub struct Article {
        #[reflect(base)]
        base: Base,
        pub views: u32,
        title: String,
    }

    impl Article {
        fn title(&self) -> String {
            self.title.clone()
        }

        fn set_title(&mut self, title: String) {
            self.title = title;
        }
    }

    #[test]
    fn ambiguous_names_fall_back_to_paths() {
        let mut registry = TypeRegistry::empty();
        registry.register::<first::Record>();
        assert!(registry.get_with_type_name("Record").is_some());

        registry.register::<second::Record>();
        assert!(registry.is_ambiguous("Record"));
        assert!(registry.get_with_type_name("Record").is_none());

        let path = <second::Record as crate::info::TypePath>::type_path();
        assert_eq!(
            registry.get_with_type_path(path).map(|meta| meta.ty_id()),
            Some(TypeId::of::<second::Record>())
        );
    }

    #[test]
    fn dependencies_cover_members_and_base() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Article>();

        assert!(registry.contains(TypeId::of::<Base>()));
        assert!(registry.contains(TypeId::of::<u64>()));
        assert!(registry.contains(TypeId::of::<u32>()));
        assert!(registry.contains(TypeId::of::<String>()));
        assert_eq!(registry.iter_with_trait::<TypeTraitDefault>().count(), registry.len());
    }

    #[test]
    fn shared_registry() {
        let shared = TypeRegistryArc::default();
        shared.write().register::<Article>();

        let reader = shared.clone();
        let info = reader.read().get_type_info(TypeId::of::<Article>());
        assert!(info.is_some_and(|info| info.as_object().is_ok()));
    }
}
