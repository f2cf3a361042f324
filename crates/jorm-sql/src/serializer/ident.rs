use super::{Formatter, Params, ToSql};

/// A table or column name.
///
/// Identifiers are written unquoted; the schema builder only lets bare
/// identifiers through.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(self.0.as_ref());
    }
}
