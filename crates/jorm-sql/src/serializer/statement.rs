use super::{Comma, Delimited, Formatter, Ident, Params, ToSql};

use jorm_core::stmt;

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let returning = Comma(self.returning.iter().map(Ident));
        let table = Ident(&self.table);

        fmt!(f, "SELECT " returning " FROM " table " ");

        if !self.filter.is_empty() {
            fmt!(f, "WHERE " Delimited(&self.filter, " AND ") " ");
        }
    }
}

impl ToSql for &stmt::Predicate {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = Ident(&self.column);
        let placeholder = f.params.push(&self.value);

        fmt!(f, " " column " = " placeholder " ");
    }
}
