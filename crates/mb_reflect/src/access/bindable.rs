use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::access::{BindError, MemberValue};
use crate::info::{BaseInfo, CustomAttributes, FieldInfo, MemberInfo, MemberKind, PropertyInfo, Type};

// -----------------------------------------------------------------------------
// BindableMember

/// Uniform read/write access to one property or one field of a type.
///
/// Callers never need to know which kind of member is wrapped: [`name`],
/// [`value_type`], [`get_value`] and [`set_value`] behave the same for both.
/// The underlying descriptor stays reachable through [`underlying_member`],
/// for instance to inspect custom attributes.
///
/// An accessor produced by [`collect_bindable`] over a type that inherits a
/// member from its base also remembers the way down to that base, so the
/// target passed to [`get_value`] and [`set_value`] is always an instance of
/// the [`owner`] type.
///
/// # Examples
///
/// ```
/// use mb_reflect::{access::BindableMember, derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Person {
///     pub name: String,
/// }
///
/// let info = Person::type_info().as_object().unwrap();
/// let name = BindableMember::try_from(info.field("name")).unwrap();
/// assert_eq!(name.name(), "name");
/// assert!(name.value_type().is::<String>());
///
/// let mut person = Person { name: "Ann".into() };
/// name.set_value_with(&mut person, String::from("Bea")).unwrap();
/// assert_eq!(person.name, "Bea");
///
/// let value = name.get_value(&person).unwrap();
/// assert_eq!(value.downcast_ref::<String>().unwrap(), "Bea");
/// ```
///
/// [`name`]: Self::name
/// [`value_type`]: Self::value_type
/// [`get_value`]: Self::get_value
/// [`set_value`]: Self::set_value
/// [`underlying_member`]: Self::underlying_member
/// [`owner`]: Self::owner
/// [`collect_bindable`]: super::collect_bindable
#[derive(Debug, Clone)]
pub struct BindableMember {
    member: MemberInfo,
    owner: &'static Type,
    // Base hops from `owner` to the type declaring `member`.
    path: Arc<[&'static BaseInfo]>,
}

impl BindableMember {
    /// Wraps a property; the target type is the declaring type.
    #[inline]
    pub fn from_property(info: &'static PropertyInfo) -> Self {
        Self::direct(MemberInfo::Property(info))
    }

    /// Wraps a field; the target type is the declaring type.
    #[inline]
    pub fn from_field(info: &'static FieldInfo) -> Self {
        Self::direct(MemberInfo::Field(info))
    }

    #[inline]
    fn direct(member: MemberInfo) -> Self {
        Self {
            member,
            owner: member.owner(),
            path: Arc::new([]),
        }
    }

    #[inline]
    pub(crate) fn inherited(
        member: MemberInfo,
        owner: &'static Type,
        path: Arc<[&'static BaseInfo]>,
    ) -> Self {
        Self { member, owner, path }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.member.name()
    }

    /// The declared type of the member's value.
    #[inline]
    pub const fn value_type(&self) -> &'static Type {
        self.member.ty()
    }

    #[inline]
    pub const fn underlying_member(&self) -> MemberInfo {
        self.member
    }

    #[inline]
    pub const fn kind(&self) -> MemberKind {
        self.member.kind()
    }

    /// The type that targets of [`get_value`](Self::get_value) and
    /// [`set_value`](Self::set_value) must have.
    #[inline]
    pub const fn owner(&self) -> &'static Type {
        self.owner
    }

    /// The chain of bases between [`owner`](Self::owner) and the declaring
    /// type. Empty for members declared by the owner itself.
    #[inline]
    pub fn base_path(&self) -> &[&'static BaseInfo] {
        &self.path
    }

    #[inline]
    pub fn custom_attributes(&self) -> &'static CustomAttributes {
        self.member.custom_attributes()
    }

    /// Reads the member from `source`.
    ///
    /// Fields are borrowed, properties return the getter's result.
    ///
    /// # Errors
    ///
    /// - [`BindError::InvalidTarget`] if `source` is not an instance of
    ///   [`owner`](Self::owner).
    /// - [`BindError::NotReadable`] for a property without getter.
    /// - [`BindError::IndexArity`] for an indexer.
    pub fn get_value<'a>(&self, source: &'a dyn Reflect) -> Result<MemberValue<'a>, BindError> {
        let target = self.resolve(source)?;
        match self.member {
            MemberInfo::Property(info) => info.get(target).map(MemberValue::Owned),
            MemberInfo::Field(info) => info.get(target).map(MemberValue::Borrowed),
        }
    }

    /// Writes `value` into the member of `destination`.
    ///
    /// # Errors
    ///
    /// - [`BindError::InvalidTarget`] if `destination` is not an instance of
    ///   [`owner`](Self::owner).
    /// - [`BindError::NotWritable`] for a property without setter or a
    ///   read-only field.
    /// - [`BindError::TypeMismatch`] if `value` is not of the member's type.
    /// - [`BindError::IndexArity`] for an indexer.
    ///
    /// `destination` is left untouched on error.
    pub fn set_value(
        &self,
        destination: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), BindError> {
        let target = self.resolve_mut(destination)?;
        match self.member {
            MemberInfo::Property(info) => info.set(target, value),
            MemberInfo::Field(info) => info.set(target, value),
        }
    }

    /// [`set_value`](Self::set_value) for statically typed values.
    #[inline]
    pub fn set_value_with<T: Reflect>(
        &self,
        destination: &mut dyn Reflect,
        value: T,
    ) -> Result<(), BindError> {
        self.set_value(destination, Box::new(value))
    }

    fn resolve<'a>(&self, source: &'a dyn Reflect) -> Result<&'a dyn Reflect, BindError> {
        let actual = source.reflect_type_path();
        self.check_target(source.ty_id() == self.owner.id(), actual)?;

        let mut target = source;
        for base in self.path.iter() {
            target = base.get(target).ok_or_else(|| self.invalid_target(actual))?;
        }
        Ok(target)
    }

    fn resolve_mut<'a>(
        &self,
        destination: &'a mut dyn Reflect,
    ) -> Result<&'a mut dyn Reflect, BindError> {
        let actual = destination.reflect_type_path();
        self.check_target(destination.ty_id() == self.owner.id(), actual)?;

        let mut target = destination;
        for base in self.path.iter() {
            target = base.get_mut(target).ok_or_else(|| self.invalid_target(actual))?;
        }
        Ok(target)
    }

    #[inline]
    fn check_target(&self, matches: bool, actual: &'static str) -> Result<(), BindError> {
        if matches {
            Ok(())
        } else {
            Err(self.invalid_target(actual))
        }
    }

    #[cold]
    fn invalid_target(&self, actual: &'static str) -> BindError {
        BindError::InvalidTarget {
            member: self.name(),
            expected: self.owner.path(),
            actual,
        }
    }
}

impl From<&'static PropertyInfo> for BindableMember {
    #[inline]
    fn from(info: &'static PropertyInfo) -> Self {
        Self::from_property(info)
    }
}

impl From<&'static FieldInfo> for BindableMember {
    #[inline]
    fn from(info: &'static FieldInfo) -> Self {
        Self::from_field(info)
    }
}

impl TryFrom<Option<&'static PropertyInfo>> for BindableMember {
    type Error = BindError;

    /// Fails with [`BindError::InvalidArgument`] on `None`.
    #[inline]
    fn try_from(info: Option<&'static PropertyInfo>) -> Result<Self, Self::Error> {
        info.map(Self::from_property).ok_or(BindError::InvalidArgument {
            kind: MemberKind::Property,
        })
    }
}

impl TryFrom<Option<&'static FieldInfo>> for BindableMember {
    type Error = BindError;

    /// Fails with [`BindError::InvalidArgument`] on `None`.
    #[inline]
    fn try_from(info: Option<&'static FieldInfo>) -> Result<Self, Self::Error> {
        info.map(Self::from_field).ok_or(BindError::InvalidArgument {
            kind: MemberKind::Field,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::access::{BindError, BindableMember, MemberValue, collect_bindable_of};
    use crate::derive::Reflect;
    use crate::info::{MemberKind, ObjectInfo, PropertyInfo, Typed};

    #[derive(Reflect, Default, Debug, PartialEq)]
    #[reflect(property(name = "full_name", ty = String, get = Self::full_name, set = Self::set_full_name))]
    #[reflect(property(name = "initials", ty = String, get = Self::initials))]
    struct Person {
        pub first: String,
        pub last: String,
        pub age: u32,
        #[reflect(readonly)]
        pub id: u64,
        nickname: String,
    }

    impl Person {
        fn full_name(&self) -> String {
            alloc::format!("{} {}", self.first, self.last)
        }

        fn set_full_name(&mut self, value: String) {
            let (first, last) = value.split_once(' ').unwrap_or((value.as_str(), ""));
            self.first = first.into();
            self.last = last.into();
        }

        fn initials(&self) -> String {
            self.first.chars().take(1).chain(self.last.chars().take(1)).collect()
        }
    }

    fn person() -> Person {
        Person {
            first: "Ada".into(),
            last: "Lovelace".into(),
            age: 36,
            id: 7,
            nickname: "Countess".into(),
        }
    }

    fn object() -> &'static ObjectInfo {
        Person::type_info().as_object().unwrap()
    }

    #[test]
    fn name_and_value_type_follow_descriptor() {
        let property = object().property("full_name").unwrap();
        let accessor = BindableMember::from_property(property);
        assert_eq!(accessor.name(), property.name());
        assert_eq!(accessor.value_type(), property.ty());
        assert_eq!(accessor.kind(), MemberKind::Property);

        let field = object().field("age").unwrap();
        let accessor = BindableMember::from_field(field);
        assert_eq!(accessor.name(), "age");
        assert!(accessor.value_type().is::<u32>());
        assert!(accessor.owner().is::<Person>());
        assert!(accessor.base_path().is_empty());
    }

    #[test]
    fn missing_descriptor_is_invalid_argument() {
        let err = BindableMember::try_from(None::<&'static PropertyInfo>).unwrap_err();
        assert_eq!(err, BindError::InvalidArgument { kind: MemberKind::Property });

        let err = BindableMember::try_from(object().field("missing")).unwrap_err();
        assert_eq!(err, BindError::InvalidArgument { kind: MemberKind::Field });

        assert!(BindableMember::try_from(object().field("age")).is_ok());
    }

    #[test]
    fn get_and_set_through_property() {
        let accessor = BindableMember::try_from(object().property("full_name")).unwrap();
        let mut target = person();

        let value = accessor.get_value(&target).unwrap();
        assert!(!value.is_borrowed());
        assert_eq!(value.downcast_ref::<String>().unwrap(), "Ada Lovelace");

        accessor
            .set_value(&mut target, Box::new(String::from("Grace Hopper")))
            .unwrap();
        assert_eq!(target.first, "Grace");
        assert_eq!(target.last, "Hopper");
    }

    #[test]
    fn get_and_set_through_field() {
        let accessor = BindableMember::try_from(object().field("age")).unwrap();
        let mut target = person();

        accessor.set_value_with(&mut target, 37_u32).unwrap();
        assert_eq!(target.age, 37);

        let value = accessor.get_value(&target).unwrap();
        assert!(matches!(value, MemberValue::Borrowed(_)));
        assert_eq!(value.downcast_ref::<u32>(), Some(&37));
    }

    #[test]
    fn wrong_value_type_leaves_target_unchanged() {
        let mut target = person();
        let before = person();

        let age = BindableMember::try_from(object().field("age")).unwrap();
        let err = age.set_value(&mut target, Box::new(String::from("old"))).unwrap_err();
        assert_eq!(
            err,
            BindError::TypeMismatch {
                member: "age",
                expected: "u32",
                actual: "alloc::string::String",
            }
        );

        let full_name = BindableMember::try_from(object().property("full_name")).unwrap();
        let err = full_name.set_value_with(&mut target, 3_i64).unwrap_err();
        assert!(matches!(err, BindError::TypeMismatch { member: "full_name", .. }));

        assert_eq!(target, before);
    }

    #[test]
    fn wrong_target_is_invalid_target() {
        let age = BindableMember::try_from(object().field("age")).unwrap();
        let mut other = 5_u32;

        let err = age.get_value(&other).unwrap_err();
        assert!(matches!(err, BindError::InvalidTarget { actual: "u32", .. }));

        let err = age.set_value_with(&mut other, 1_u32).unwrap_err();
        assert!(matches!(err, BindError::InvalidTarget { member: "age", .. }));
        assert_eq!(other, 5);
    }

    #[test]
    fn explicit_accessors_keep_member_restrictions() {
        let mut target = person();

        let initials = BindableMember::try_from(object().property("initials")).unwrap();
        assert_eq!(
            initials.get_value(&target).unwrap().downcast_ref::<String>().unwrap(),
            "AL"
        );
        assert_eq!(
            initials.set_value_with(&mut target, String::from("XY")),
            Err(BindError::NotWritable { member: "initials" })
        );

        let id = BindableMember::try_from(object().field("id")).unwrap();
        assert_eq!(
            id.set_value_with(&mut target, 9_u64),
            Err(BindError::NotWritable { member: "id" })
        );
        assert_eq!(target.id, 7);
    }

    #[test]
    fn discovery_lists_properties_then_fields() {
        let names: Vec<_> = collect_bindable_of::<Person>().map(|m| m.name()).collect();
        // `initials` has no setter, `id` is read-only and `nickname` is private.
        assert_eq!(names, ["full_name", "first", "last", "age"]);

        let mut target = person();
        for member in collect_bindable_of::<Person>() {
            let value = member.get_value(&target).unwrap().into_owned().unwrap();
            member.set_value(&mut target, value).unwrap();
        }
        assert_eq!(target, person());
        assert_eq!(target.nickname, "Countess");
    }
}
