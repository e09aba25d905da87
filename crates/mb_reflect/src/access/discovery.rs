use alloc::sync::Arc;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use mb_utils::hash::{FixedHashState, HashSet};

use crate::access::BindableMember;
use crate::info::{BaseInfo, MemberInfo, ObjectInfo, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// BindableMembers

/// The ordered result of [`collect_bindable`].
///
/// All properties come before all fields. Within each group, the members of
/// the type itself come first in declaration order, followed by those of its
/// base, then the base's base.
#[derive(Debug, Clone)]
pub struct BindableMembers {
    inner: alloc::vec::IntoIter<BindableMember>,
}

impl BindableMembers {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// The members not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[BindableMember] {
        self.inner.as_slice()
    }
}

impl Iterator for BindableMembers {
    type Item = BindableMember;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for BindableMembers {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for BindableMembers {}

impl FusedIterator for BindableMembers {}

// -----------------------------------------------------------------------------
// Discovery

/// Lists every member of a type that a binder may both read and write.
///
/// Eligible are public, readable, writable, non-indexed properties and
/// public, non-read-only fields, including those inherited from bases.
/// Opaque types have no members.
///
/// A name declared by a more-derived type hides all members of that name in
/// its bases, even if the hiding member itself is not eligible. Each name is
/// therefore listed at most once.
///
/// # Examples
///
/// ```
/// use mb_reflect::{access::collect_bindable, derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Animal {
///     pub name: String,
///     pub legs: u8,
/// }
///
/// #[derive(Reflect)]
/// struct Bird {
///     #[reflect(base)]
///     animal: Animal,
///     pub wingspan: f32,
///     #[reflect(readonly)]
///     pub legs: u8,
/// }
///
/// let names: Vec<_> = collect_bindable(Bird::type_info())
///     .map(|member| member.name())
///     .collect();
///
/// // `Bird::legs` is read-only, and hides `Animal::legs`.
/// assert_eq!(names, ["wingspan", "name"]);
/// ```
pub fn collect_bindable(info: &'static TypeInfo) -> BindableMembers {
    let members = match info {
        TypeInfo::Object(object) => collect_object(object),
        TypeInfo::Opaque(_) => Vec::new(),
    };
    BindableMembers {
        inner: members.into_iter(),
    }
}

/// [`collect_bindable`] for a statically known type.
#[inline]
pub fn collect_bindable_of<T: Typed>() -> BindableMembers {
    collect_bindable(T::type_info())
}

fn collect_object(object: &'static ObjectInfo) -> Vec<BindableMember> {
    let owner = object.ty();
    let mut declared: HashSet<&'static str> = HashSet::with_hasher(FixedHashState);
    let mut properties = Vec::new();
    let mut fields = Vec::new();

    for (level, path) in levels(object) {
        for member in level.members() {
            let name = member.name();
            if !declared.insert(name) {
                log::debug!(
                    "`{}::{name}` is hidden by a member of `{}`",
                    member.owner().path(),
                    owner.path(),
                );
                continue;
            }
            if !member.is_bindable() {
                continue;
            }

            let accessor = BindableMember::inherited(member, owner, path.clone());
            match member {
                MemberInfo::Property(_) => properties.push(accessor),
                MemberInfo::Field(_) => fields.push(accessor),
            }
        }
    }

    properties.append(&mut fields);
    properties
}

/// The object followed by its bases, each with the path leading to it.
fn levels(object: &'static ObjectInfo) -> Vec<(&'static ObjectInfo, Arc<[&'static BaseInfo]>)> {
    let mut levels = Vec::new();
    let mut path: Vec<&'static BaseInfo> = Vec::new();
    let mut current = Some(object);

    while let Some(level) = current {
        levels.push((level, Arc::from(path.as_slice())));
        current = None;

        if let Some(base) = level.base()
            && let Ok(next) = base.type_info().as_object()
            && levels.iter().all(|(seen, _)| seen.ty() != next.ty())
        {
            path.push(base);
            current = Some(next);
        }
    }
    levels
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::access::{BindError, BindableMember, collect_bindable, collect_bindable_of};
    use crate::derive::Reflect;
    use crate::info::{MemberKind, Typed};

    #[derive(Reflect, Default)]
    #[reflect(property(name = "label", ty = String, get = Self::label, set = Self::set_label))]
    struct Entity {
        pub id: u64,
        pub created: String,
        pub revision: u32,
        label: String,
    }

    impl Entity {
        fn label(&self) -> String {
            self.label.clone()
        }

        fn set_label(&mut self, value: String) {
            self.label = value;
        }
    }

    #[derive(Reflect, Default)]
    #[reflect(property(name = "display", ty = String, get = Self::display, set = Self::set_display))]
    struct Document {
        #[reflect(base)]
        entity: Entity,
        pub title: String,
        // Hides `Entity::revision` although it is not bindable itself.
        #[reflect(readonly)]
        pub revision: u32,
    }

    impl Document {
        fn display(&self) -> String {
            self.title.to_uppercase()
        }

        fn set_display(&mut self, value: String) {
            self.title = value.to_lowercase();
        }
    }

    #[derive(Reflect, Default)]
    struct Invoice {
        #[reflect(base)]
        document: Document,
        pub total: u64,
        // A field hiding the base property of the same name.
        pub label: String,
    }

    fn names<I: Iterator<Item = crate::access::BindableMember>>(iter: I) -> Vec<(&'static str, MemberKind)> {
        iter.map(|member| (member.name(), member.kind())).collect()
    }

    #[test]
    fn opaque_types_have_no_members() {
        let members = collect_bindable_of::<u32>();
        assert!(members.is_empty());
        assert_eq!(members.len(), 0);
        assert!(collect_bindable(String::type_info()).next().is_none());
    }

    #[test]
    fn properties_precede_fields_across_bases() {
        use MemberKind::{Field, Property};

        assert_eq!(
            names(collect_bindable_of::<Document>()),
            [
                ("display", Property),
                ("label", Property),
                ("title", Field),
                ("id", Field),
                ("created", Field),
            ]
        );

        assert_eq!(
            names(collect_bindable_of::<Invoice>()),
            [
                ("display", Property),
                ("total", Field),
                ("label", Field),
                ("title", Field),
                ("id", Field),
                ("created", Field),
            ]
        );
    }

    #[test]
    fn each_name_appears_once() {
        let members = collect_bindable_of::<Invoice>();
        assert_eq!(members.len(), 6);

        let mut seen: Vec<_> = members.map(|member| member.name()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn inherited_members_are_reached_through_bases() {
        let mut invoice = Invoice::default();
        invoice.document.entity.id = 3;

        for member in collect_bindable_of::<Invoice>() {
            assert!(member.owner().is::<Invoice>());
            match member.name() {
                "id" => {
                    assert_eq!(member.base_path().len(), 2);
                    let value = member.get_value(&invoice).unwrap();
                    assert_eq!(value.downcast_ref::<u64>(), Some(&3));
                    member.set_value_with(&mut invoice, 4_u64).unwrap();
                }
                "display" => {
                    assert_eq!(member.base_path().len(), 1);
                    member
                        .set_value(&mut invoice, Box::new(String::from("Q3 REPORT")))
                        .unwrap();
                }
                "label" => {
                    assert!(member.base_path().is_empty());
                    member.set_value_with(&mut invoice, String::from("paid")).unwrap();
                }
                _ => {}
            }
        }

        assert_eq!(invoice.document.entity.id, 4);
        assert_eq!(invoice.document.title, "q3 report");
        assert_eq!(invoice.label, "paid");
        assert_eq!(invoice.document.entity.label, "");
    }

    #[test]
    fn inherited_members_reject_the_base_as_target() {
        let id = collect_bindable_of::<Document>()
            .find(|member| member.name() == "id")
            .unwrap();
        let mut entity = Entity::default();

        let err = id.set_value_with(&mut entity, 1_u64).unwrap_err();
        assert!(matches!(err, BindError::InvalidTarget { member: "id", .. }));
        assert_eq!(entity.id, 0);
    }

    #[derive(Reflect, Default)]
    #[reflect(property(name = "A", ty = u32, get = Self::a, set = Self::set_a))]
    #[reflect(property(name = "B", ty = u32, get = Self::a))]
    #[reflect(property(name = "C", ty = String, index = usize, get = Self::c, set = Self::set_c))]
    struct Mixed {
        pub d: u32,
        #[reflect(readonly)]
        pub e: u32,
        lines: Vec<String>,
    }

    impl Mixed {
        fn a(&self) -> u32 {
            self.d * 2
        }

        fn set_a(&mut self, value: u32) {
            self.d = value / 2;
        }

        fn c(&self, index: usize) -> String {
            self.lines.get(index).cloned().unwrap_or_default()
        }

        fn set_c(&mut self, index: usize, value: String) {
            if let Some(line) = self.lines.get_mut(index) {
                *line = value;
            }
        }
    }

    #[test]
    fn indexers_and_read_only_members_are_skipped() {
        let names: Vec<_> = collect_bindable_of::<Mixed>()
            .map(|member| member.name())
            .collect();
        assert_eq!(names, ["A", "d"]);
    }

    #[test]
    fn explicit_indexer_accessor_reports_arity() {
        let info = Mixed::type_info().as_object().unwrap();
        let indexer = BindableMember::try_from(info.property("C")).unwrap();
        let mixed = Mixed {
            lines: Vec::from([String::from("first")]),
            ..Mixed::default()
        };

        let err = indexer.get_value(&mixed).err();
        assert_eq!(
            err,
            Some(BindError::IndexArity {
                member: "C",
                expected: 1,
                actual: 0,
            })
        );
    }
}
