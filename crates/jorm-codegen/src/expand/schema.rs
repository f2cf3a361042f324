use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `fn schema()`: the static description, built once per type.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let jorm = &self.jorm;
        let name = self.model.ident.to_string();
        let fields = self.expand_model_fields();
        let table_name = self.expand_table_name();

        quote! {
            fn schema() -> &'static #jorm::schema::app::Model {
                use #jorm::{schema::app, Primitive};

                static SCHEMA: std::sync::OnceLock<app::Model> = std::sync::OnceLock::new();

                SCHEMA.get_or_init(|| app::Model {
                    name: #name.to_string(),
                    fields: #fields,
                    table_name: #table_name,
                })
            }
        }
    }

    fn expand_model_fields(&self) -> TokenStream {
        let fields = self.model.fields.iter().map(|field| {
            let app_name = field.app_name();
            let ty = &field.ty;
            let storage_name = match &field.column {
                Some(column) => {
                    let name = &column.name;
                    quote!(Some(#name.to_string()))
                }
                None => quote!(None),
            };

            quote! {
                app::Field {
                    name: app::FieldName {
                        app_name: #app_name.to_string(),
                        storage_name: #storage_name,
                    },
                    ty: <#ty as Primitive>::TYPE,
                }
            }
        });

        quote!(vec![ #( #fields ),* ])
    }

    fn expand_table_name(&self) -> TokenStream {
        match &self.model.table {
            Some(table) => quote!(Some(#table.to_string())),
            None => quote!(None),
        }
    }
}
