use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use mb_utils::TypeIdMap;

use crate::Reflect;

// -----------------------------------------------------------------------------
// CustomAttributes

/// User data attached to a type, a property or a field, keyed by the
/// attribute's type.
///
/// Attributes are declared with `@expr` in `#[reflect(..)]`, and are the way a
/// binder reads annotations off [`BindableMember::underlying_member`].
///
/// ```
/// use mb_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// pub struct Slider {
///     #[reflect(@0.5f32)]
///     pub value: f32,
///     pub label: String,
/// }
///
/// let info = Slider::type_info().as_object().unwrap();
/// assert_eq!(info.field("value").unwrap().get_attribute::<f32>(), Some(&0.5));
/// assert!(info.field("label").unwrap().custom_attributes().is_empty());
/// ```
///
/// [`BindableMember::underlying_member`]: crate::access::BindableMember::underlying_member
#[derive(Default)]
#[repr(transparent)]
pub struct CustomAttributes {
    attributes: TypeIdMap<Box<dyn Reflect>>,
}

impl CustomAttributes {
    /// Infos store attributes as `Option<Arc<..>>`; this is what they hand
    /// out when there are none.
    pub(crate) const EMPTY: &'static Self = &Self::new();

    #[inline]
    pub const fn new() -> Self {
        Self {
            attributes: TypeIdMap::new(),
        }
    }

    /// Adds an attribute, replacing any previous one of the same type.
    #[inline]
    pub fn with_attribute<T: Reflect>(mut self, value: T) -> Self {
        self.attributes.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&TypeId, &dyn Reflect)> {
        self.attributes.iter().map(|(key, val)| (key, &**val))
    }

    #[inline]
    pub fn contains<T: Reflect>(&self) -> bool {
        self.contains_by_id(TypeId::of::<T>())
    }

    #[inline]
    pub fn contains_by_id(&self, id: TypeId) -> bool {
        self.attributes.contains(&id)
    }

    #[inline]
    pub fn get<T: Reflect>(&self) -> Option<&T> {
        self.get_by_id(TypeId::of::<T>())
            .and_then(<dyn Reflect>::downcast_ref)
    }

    #[inline]
    pub fn get_by_id(&self, id: TypeId) -> Option<&dyn Reflect> {
        self.attributes.get(&id).map(|val| &**val)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Debug for CustomAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.attributes.values()).finish()
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `custom_attributes` and the attribute lookups.
macro_rules! impl_custom_attributes_fn {
    ($field:ident) => {
        #[inline]
        pub fn custom_attributes(&self) -> &$crate::info::CustomAttributes {
            match &self.$field {
                Some(ptr) => &**ptr,
                None => $crate::info::CustomAttributes::EMPTY,
            }
        }

        $crate::info::impl_custom_attributes_fn!();
    };
    () => {
        /// Returns the attribute of type `T`, if present.
        pub fn get_attribute<T: $crate::Reflect>(&self) -> Option<&T> {
            self.custom_attributes().get::<T>()
        }

        /// Returns `true` if an attribute of type `T` is present.
        pub fn has_attribute<T: $crate::Reflect>(&self) -> bool {
            self.custom_attributes()
                .contains_by_id(::core::any::TypeId::of::<T>())
        }
    };
}

/// Implements `with_custom_attributes`, which overwrites instead of merging.
macro_rules! impl_with_custom_attributes {
    ($field:ident) => {
        pub fn with_custom_attributes(self, attributes: $crate::info::CustomAttributes) -> Self {
            if attributes.is_empty() {
                Self {
                    $field: None,
                    ..self
                }
            } else {
                Self {
                    $field: Some(::alloc::sync::Arc::new(attributes)),
                    ..self
                }
            }
        }
    };
}

pub(crate) use impl_custom_attributes_fn;
pub(crate) use impl_with_custom_attributes;
