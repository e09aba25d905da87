//! Fully qualified paths of `core` items, so generated code is not affected
//! by names in the caller's scope.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_fp {
    ($($name:ident => $($segment:ident)::+,)*) => {
        $(
            pub(crate) struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    quote!($(::$segment)+).to_tokens(tokens);
                }
            }
        )*
    };
}

define_fp! {
    AnyFP => core::any::Any,
    CloneFP => core::clone::Clone,
    DebugFP => core::fmt::Debug,
    DefaultFP => core::default::Default,
    OptionFP => core::option::Option,
    PartialEqFP => core::cmp::PartialEq,
    ResultFP => core::result::Result,
    SendFP => core::marker::Send,
    SyncFP => core::marker::Sync,
}
