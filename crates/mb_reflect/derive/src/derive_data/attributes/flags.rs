use proc_macro2::Span;

/// Standard traits the user declared as implemented, with the span of the
/// declaration.
///
/// The macro cannot see trait impls, so these are taken on trust; a wrong
/// declaration shows up as a compile error at that span.
#[derive(Default, Debug)]
pub(crate) struct TraitAvailableFlags {
    pub default: Option<Span>,
    pub clone: Option<Span>,
    pub debug: Option<Span>,
    pub partial_eq: Option<Span>,
    pub serialize: Option<Span>,
    pub deserialize: Option<Span>,
}

impl TraitAvailableFlags {
    /// Sets the flag named `name`, returns `false` for unknown names.
    pub fn set(&mut self, name: &str, span: Span) -> bool {
        let slot = match name {
            "default" => &mut self.default,
            "clone" => &mut self.clone,
            "debug" => &mut self.debug,
            "partial_eq" => &mut self.partial_eq,
            "serialize" => &mut self.serialize,
            "deserialize" => &mut self.deserialize,
            _ => return false,
        };
        *slot = Some(span);
        true
    }

    pub fn set_serde(&mut self, span: Span) {
        self.serialize = Some(span);
        self.deserialize = Some(span);
    }

    pub fn set_all(&mut self, span: Span) {
        self.default = Some(span);
        self.clone = Some(span);
        self.debug = Some(span);
        self.partial_eq = Some(span);
        self.set_serde(span);
    }
}
