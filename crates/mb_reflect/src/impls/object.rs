use core::fmt;

use crate::Reflect;
use crate::info::{ObjectInfo, TypeInfo};

/// Formats an object member-wise, like `#[derive(Debug)]` would.
///
/// The base, if any, is printed first under its field name.
pub fn object_debug(value: &dyn Reflect, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let TypeInfo::Object(info) = value.reflect_type_info() else {
        return write!(f, "Opaque({})", value.reflect_type_path());
    };

    let mut debug = f.debug_struct(info.ty().ident());
    if let Some(base) = info.base()
        && let Some(base_value) = base.get(value)
    {
        debug.field(base.name(), &base_value);
    }
    for field in info.fields() {
        if let Ok(field_value) = field.get(value) {
            debug.field(field.name(), &field_value);
        }
    }
    debug.finish()
}

/// Compares two objects member-wise.
///
/// Returns `Some(false)` for different types, and `None` if a member does
/// not support comparison.
pub fn object_partial_eq(value: &dyn Reflect, other: &dyn Reflect) -> Option<bool> {
    if value.ty_id() != other.ty_id() {
        return Some(false);
    }
    match value.reflect_type_info() {
        TypeInfo::Object(info) => members_eq(info, value, other),
        TypeInfo::Opaque(_) => None,
    }
}

fn members_eq(info: &ObjectInfo, value: &dyn Reflect, other: &dyn Reflect) -> Option<bool> {
    if let Some(base) = info.base() {
        let (a, b) = (base.get(value)?, base.get(other)?);
        if !a.reflect_partial_eq(b)? {
            return Some(false);
        }
    }
    for field in info.fields() {
        let (a, b) = (field.get(value).ok()?, field.get(other).ok()?);
        if !a.reflect_partial_eq(b)? {
            return Some(false);
        }
    }
    Some(true)
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::Reflect;
    use crate::derive::Reflect;

    #[derive(Reflect)]
    struct Point {
        pub x: i32,
        pub y: i32,
    }

    #[derive(Reflect)]
    struct Marker {
        #[reflect(base)]
        pub point: Point,
        pub tag: i32,
    }

    #[test]
    fn debug_uses_type_ident_and_members() {
        let point = Point { x: 1, y: 2 };
        assert_eq!(format!("{:?}", point.as_reflect()), "Point { x: 1, y: 2 }");

        let marker = Marker { point, tag: 3 };
        assert_eq!(
            format!("{:?}", marker.as_reflect()),
            "Marker { point: Point { x: 1, y: 2 }, tag: 3 }"
        );
    }

    #[test]
    fn partial_eq_compares_base_and_fields() {
        let a = Marker { point: Point { x: 1, y: 2 }, tag: 3 };
        let b = Marker { point: Point { x: 1, y: 2 }, tag: 3 };
        let c = Marker { point: Point { x: 0, y: 2 }, tag: 3 };

        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_partial_eq(&c), Some(false));
        assert_eq!(a.reflect_partial_eq(&a.point), Some(false));
    }
}
