mod string_expr;

pub(crate) use string_expr::StringExpr;

#[inline(always)]
pub(crate) fn empty() -> proc_macro2::TokenStream {
    proc_macro2::TokenStream::new()
}
