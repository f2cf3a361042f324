use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Rust identifier of the field
    pub(crate) ident: syn::Ident,

    /// Field type; must implement `Primitive`
    pub(crate) ty: syn::Type,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                    continue;
                }

                match Column::from_ast(attr) {
                    Ok(attr) => column = Some(attr),
                    Err(err) => errs.push(err),
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            column,
        })
    }

    /// The name the field is known by in the record's description.
    ///
    /// Raw identifiers lose their `r#` prefix.
    pub(crate) fn app_name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(name) => name.to_string(),
            None => name,
        }
    }
}
