use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::Reflect;
use crate::access::BindError;
use crate::info::{CustomAttributes, Type, TypeInfo, Typed, Visibility};
use crate::info::{impl_custom_attributes_fn, impl_type_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// PropertyAccess

/// A failed downcast inside a property accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccessFault {
    Target,
    Index { position: usize, actual: &'static str },
    Value { actual: &'static str },
}

/// Type-erased getter and setter of a property.
///
/// Arity is checked by [`PropertyInfo`] before these are called.
trait PropertyAccess: Send + Sync + 'static {
    fn can_read(&self) -> bool;
    fn can_write(&self) -> bool;

    fn get(
        &self,
        target: &dyn Reflect,
        index: &[&dyn Reflect],
    ) -> Result<Box<dyn Reflect>, AccessFault>;

    /// Must not touch `target` unless every downcast succeeded.
    fn set(
        &self,
        target: &mut dyn Reflect,
        index: &[&dyn Reflect],
        value: Box<dyn Reflect>,
    ) -> Result<(), AccessFault>;
}

struct PlainProperty<S, T> {
    get: Option<fn(&S) -> T>,
    set: Option<fn(&mut S, T)>,
}

impl<S: Reflect, T: Reflect> PropertyAccess for PlainProperty<S, T> {
    fn can_read(&self) -> bool {
        self.get.is_some()
    }

    fn can_write(&self) -> bool {
        self.set.is_some()
    }

    fn get(&self, target: &dyn Reflect, _: &[&dyn Reflect]) -> Result<Box<dyn Reflect>, AccessFault> {
        let get = self.get.ok_or(AccessFault::Target)?;
        let target = target.downcast_ref::<S>().ok_or(AccessFault::Target)?;
        Ok(Box::new(get(target)))
    }

    fn set(
        &self,
        target: &mut dyn Reflect,
        _: &[&dyn Reflect],
        value: Box<dyn Reflect>,
    ) -> Result<(), AccessFault> {
        let set = self.set.ok_or(AccessFault::Target)?;
        let target = target.downcast_mut::<S>().ok_or(AccessFault::Target)?;
        let value = value.take::<T>().map_err(|value| AccessFault::Value {
            actual: value.reflect_type_path(),
        })?;
        set(target, value);
        Ok(())
    }
}

struct IndexedProperty<S, I, T> {
    get: Option<fn(&S, I) -> T>,
    set: Option<fn(&mut S, I, T)>,
}

impl<S: Reflect, I: Reflect + Clone, T: Reflect> IndexedProperty<S, I, T> {
    fn index(index: &[&dyn Reflect]) -> Result<I, AccessFault> {
        let arg = index.first().ok_or(AccessFault::Target)?;
        arg.downcast_ref::<I>().cloned().ok_or(AccessFault::Index {
            position: 0,
            actual: arg.reflect_type_path(),
        })
    }
}

impl<S: Reflect, I: Reflect + Clone, T: Reflect> PropertyAccess for IndexedProperty<S, I, T> {
    fn can_read(&self) -> bool {
        self.get.is_some()
    }

    fn can_write(&self) -> bool {
        self.set.is_some()
    }

    fn get(
        &self,
        target: &dyn Reflect,
        index: &[&dyn Reflect],
    ) -> Result<Box<dyn Reflect>, AccessFault> {
        let get = self.get.ok_or(AccessFault::Target)?;
        let target = target.downcast_ref::<S>().ok_or(AccessFault::Target)?;
        Ok(Box::new(get(target, Self::index(index)?)))
    }

    fn set(
        &self,
        target: &mut dyn Reflect,
        index: &[&dyn Reflect],
        value: Box<dyn Reflect>,
    ) -> Result<(), AccessFault> {
        let set = self.set.ok_or(AccessFault::Target)?;
        let index = Self::index(index)?;
        let target = target.downcast_mut::<S>().ok_or(AccessFault::Target)?;
        let value = value.take::<T>().map_err(|value| AccessFault::Value {
            actual: value.reflect_type_path(),
        })?;
        set(target, index, value);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// A named value of a type, read and written through accessor functions.
///
/// A property may lack a getter or a setter, and may take index arguments
/// (an *indexer*, like `list[i]`). Every access checks, in order: the target
/// type, readability/writability, the number of index arguments, their
/// types, and finally the value type. A failed check leaves the target as it
/// was.
///
/// ```
/// use mb_reflect::info::{PropertyInfo, Visibility};
/// # use mb_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// pub struct Temperature {
///     celsius: f64,
/// }
///
/// let fahrenheit = PropertyInfo::builder::<Temperature, f64>("fahrenheit")
///     .getter(|t| t.celsius * 1.8 + 32.0)
///     .setter(|t, f| t.celsius = (f - 32.0) / 1.8)
///     .build();
///
/// let mut t = Temperature { celsius: 100.0 };
/// let value = fahrenheit.get(&t).unwrap();
/// assert_eq!(value.downcast_ref::<f64>(), Some(&212.0));
///
/// fahrenheit.set(&mut t, Box::new(32.0_f64)).unwrap();
/// assert_eq!(t.celsius, 0.0);
/// assert_eq!(fahrenheit.visibility(), Visibility::Public);
/// ```
#[derive(Clone)]
pub struct PropertyInfo {
    name: &'static str,
    owner: Type,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    index_params: Box<[Type]>,
    visibility: Visibility,
    access: Arc<dyn PropertyAccess>,
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl PropertyInfo {
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Starts a property of `S` whose value type is `T`.
    #[inline]
    pub fn builder<S, T>(name: &'static str) -> PropertyBuilder<S, T>
    where
        S: Reflect + Typed,
        T: Reflect + Typed,
    {
        PropertyBuilder {
            name,
            get: None,
            set: None,
            visibility: Visibility::Public,
        }
    }

    /// Starts an indexer of `S` taking one index argument of type `I`.
    #[inline]
    pub fn indexer<S, I, T>(name: &'static str) -> IndexerBuilder<S, I, T>
    where
        S: Reflect + Typed,
        I: Reflect + Typed + Clone,
        T: Reflect + Typed,
    {
        IndexerBuilder {
            name,
            get: None,
            set: None,
            visibility: Visibility::Public,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The type declaring this property.
    #[inline]
    pub const fn owner(&self) -> &Type {
        &self.owner
    }

    /// The [`TypeInfo`] of the value type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Types of the index arguments; empty unless this is an indexer.
    #[inline]
    pub fn index_params(&self) -> &[Type] {
        &self.index_params
    }

    #[inline]
    pub fn is_indexer(&self) -> bool {
        !self.index_params.is_empty()
    }

    #[inline]
    pub fn can_read(&self) -> bool {
        self.access.can_read()
    }

    #[inline]
    pub fn can_write(&self) -> bool {
        self.access.can_write()
    }

    /// Replaces the visibility.
    #[inline]
    pub fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    /// Reads a non-indexed property.
    #[inline]
    pub fn get(&self, target: &dyn Reflect) -> Result<Box<dyn Reflect>, BindError> {
        self.get_indexed(target, &[])
    }

    /// Reads the property with the given index arguments.
    pub fn get_indexed(
        &self,
        target: &dyn Reflect,
        index: &[&dyn Reflect],
    ) -> Result<Box<dyn Reflect>, BindError> {
        self.check_target(target)?;
        if !self.can_read() {
            return Err(BindError::NotReadable { member: self.name });
        }
        self.check_index(index)?;
        self.access
            .get(target, index)
            .map_err(|fault| self.fault_error(fault, target.reflect_type_path()))
    }

    /// Writes a non-indexed property.
    #[inline]
    pub fn set(&self, target: &mut dyn Reflect, value: Box<dyn Reflect>) -> Result<(), BindError> {
        self.set_indexed(target, &[], value)
    }

    /// Writes the property with the given index arguments.
    pub fn set_indexed(
        &self,
        target: &mut dyn Reflect,
        index: &[&dyn Reflect],
        value: Box<dyn Reflect>,
    ) -> Result<(), BindError> {
        self.check_target(target)?;
        if !self.can_write() {
            return Err(BindError::NotWritable { member: self.name });
        }
        self.check_index(index)?;
        let actual = target.reflect_type_path();
        self.access
            .set(target, index, value)
            .map_err(|fault| self.fault_error(fault, actual))
    }

    fn check_target(&self, target: &dyn Reflect) -> Result<(), BindError> {
        if target.ty_id() == self.owner.id() {
            Ok(())
        } else {
            Err(BindError::InvalidTarget {
                member: self.name,
                expected: self.owner.path(),
                actual: target.reflect_type_path(),
            })
        }
    }

    fn check_index(&self, index: &[&dyn Reflect]) -> Result<(), BindError> {
        if index.len() != self.index_params.len() {
            return Err(BindError::IndexArity {
                member: self.name,
                expected: self.index_params.len(),
                actual: index.len(),
            });
        }
        let mismatch = self
            .index_params
            .iter()
            .zip(index)
            .position(|(param, arg)| param.id() != arg.ty_id());
        match mismatch {
            None => Ok(()),
            Some(position) => Err(BindError::IndexMismatch {
                member: self.name,
                position,
                expected: self.index_params[position].path(),
                actual: index[position].reflect_type_path(),
            }),
        }
    }

    fn fault_error(&self, fault: AccessFault, target: &'static str) -> BindError {
        match fault {
            AccessFault::Target => BindError::InvalidTarget {
                member: self.name,
                expected: self.owner.path(),
                actual: target,
            },
            AccessFault::Index { position, actual } => BindError::IndexMismatch {
                member: self.name,
                position,
                expected: self
                    .index_params
                    .get(position)
                    .map_or("<none>", Type::path),
                actual,
            },
            AccessFault::Value { actual } => BindError::TypeMismatch {
                member: self.name,
                expected: self.ty.path(),
                actual,
            },
        }
    }
}

impl fmt::Debug for PropertyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInfo")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("ty", &self.ty)
            .field("index_params", &self.index_params)
            .field("visibility", &self.visibility)
            .field("can_read", &self.can_read())
            .field("can_write", &self.can_write())
            .field("custom_attributes", self.custom_attributes())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Builders

/// Builder returned by [`PropertyInfo::builder`].
pub struct PropertyBuilder<S, T> {
    name: &'static str,
    get: Option<fn(&S) -> T>,
    set: Option<fn(&mut S, T)>,
    visibility: Visibility,
}

impl<S: Reflect + Typed, T: Reflect + Typed> PropertyBuilder<S, T> {
    #[inline]
    pub fn getter(self, get: fn(&S) -> T) -> Self {
        Self {
            get: Some(get),
            ..self
        }
    }

    #[inline]
    pub fn setter(self, set: fn(&mut S, T)) -> Self {
        Self {
            set: Some(set),
            ..self
        }
    }

    #[inline]
    pub fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    pub fn build(self) -> PropertyInfo {
        PropertyInfo {
            name: self.name,
            owner: Type::of::<S>(),
            ty: Type::of::<T>(),
            type_info: T::type_info,
            index_params: Box::new([]),
            visibility: self.visibility,
            access: Arc::new(PlainProperty {
                get: self.get,
                set: self.set,
            }),
            custom_attributes: None,
        }
    }
}

/// Builder returned by [`PropertyInfo::indexer`].
pub struct IndexerBuilder<S, I, T> {
    name: &'static str,
    get: Option<fn(&S, I) -> T>,
    set: Option<fn(&mut S, I, T)>,
    visibility: Visibility,
}

impl<S, I, T> IndexerBuilder<S, I, T>
where
    S: Reflect + Typed,
    I: Reflect + Typed + Clone,
    T: Reflect + Typed,
{
    #[inline]
    pub fn getter(self, get: fn(&S, I) -> T) -> Self {
        Self {
            get: Some(get),
            ..self
        }
    }

    #[inline]
    pub fn setter(self, set: fn(&mut S, I, T)) -> Self {
        Self {
            set: Some(set),
            ..self
        }
    }

    #[inline]
    pub fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    pub fn build(self) -> PropertyInfo {
        PropertyInfo {
            name: self.name,
            owner: Type::of::<S>(),
            ty: Type::of::<T>(),
            type_info: T::type_info,
            index_params: Box::new([Type::of::<I>()]),
            visibility: self.visibility,
            access: Arc::new(IndexedProperty {
                get: self.get,
                set: self.set,
            }),
            custom_attributes: None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::access::BindError;
    use crate::derive::Reflect;
    use crate::info::PropertyInfo;

    #[derive(Reflect, Default)]
    struct Shelf {
        items: Vec<String>,
    }

    fn count() -> PropertyInfo {
        PropertyInfo::builder::<Shelf, usize>("count")
            .getter(|s| s.items.len())
            .build()
    }

    fn item() -> PropertyInfo {
        PropertyInfo::indexer::<Shelf, usize, String>("item")
            .getter(|s, i| s.items.get(i).cloned().unwrap_or_default())
            .setter(|s, i, v| {
                if s.items.len() <= i {
                    s.items.resize(i + 1, String::new());
                }
                s.items[i] = v;
            })
            .build()
    }

    #[test]
    fn read_only_property() {
        let count = count();
        let mut shelf = Shelf::default();
        shelf.items.push("a".into());

        assert!(count.can_read());
        assert!(!count.can_write());
        assert_eq!(count.get(&shelf).unwrap().downcast_ref::<usize>(), Some(&1));
        assert_eq!(
            count.set(&mut shelf, Box::new(3_usize)),
            Err(BindError::NotWritable { member: "count" })
        );
    }

    #[test]
    fn indexer_checks_arguments() {
        let item = item();
        let mut shelf = Shelf::default();

        assert!(item.is_indexer());
        assert!(matches!(
            item.get(&shelf),
            Err(BindError::IndexArity { expected: 1, actual: 0, .. })
        ));
        assert!(matches!(
            item.get_indexed(&shelf, &[&1_u8]),
            Err(BindError::IndexMismatch { position: 0, .. })
        ));

        item.set_indexed(&mut shelf, &[&1_usize], Box::new(String::from("b")))
            .unwrap();
        assert_eq!(shelf.items, ["", "b"]);

        let value = item.get_indexed(&shelf, &[&1_usize]).unwrap();
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("b"));
    }

    #[test]
    fn failed_set_leaves_target_unchanged() {
        let item = item();
        let mut shelf = Shelf::default();
        shelf.items.push("keep".into());

        let err = item
            .set_indexed(&mut shelf, &[&0_usize], Box::new(7_i32))
            .unwrap_err();
        assert_eq!(
            err,
            BindError::TypeMismatch {
                member: "item",
                expected: "alloc::string::String",
                actual: "i32",
            }
        );
        assert_eq!(shelf.items, ["keep"]);

        let err = item
            .set_indexed(&mut 0_u32, &[&0_usize], Box::new(String::new()))
            .unwrap_err();
        assert!(matches!(err, BindError::InvalidTarget { actual: "u32", .. }));
    }
}
