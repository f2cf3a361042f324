use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let jorm = &self.jorm;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let field_value_arms = self.expand_field_value_arms();
        let set_field_arms = self.expand_set_field_arms();

        quote! {
            impl #jorm::Model for #model_ident {
                #model_schema

                fn field_value(&self, index: usize) -> #jorm::Result<#jorm::Value> {
                    use #jorm::Primitive;

                    match index {
                        #field_value_arms
                        _ => Err(#jorm::field_out_of_range::<Self>(index)),
                    }
                }

                fn set_field(&mut self, index: usize, value: #jorm::Value) -> #jorm::Result<()> {
                    use #jorm::Primitive;

                    match index {
                        #set_field_arms
                        _ => return Err(#jorm::field_out_of_range::<Self>(index)),
                    }

                    Ok(())
                }
            }
        }
    }

    fn expand_field_value_arms(&self) -> TokenStream {
        self.model
            .fields
            .iter()
            .map(|field| {
                let index = util::int(field.id);
                let ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    #index => Ok(<#ty as Primitive>::to_value(&self.#ident)),
                }
            })
            .collect()
    }

    fn expand_set_field_arms(&self) -> TokenStream {
        self.model
            .fields
            .iter()
            .map(|field| {
                let index = util::int(field.id);
                let ident = &field.ident;
                let ty = &field.ty;

                quote! {
                    #index => self.#ident = <#ty as Primitive>::load(value)?,
                }
            })
            .collect()
    }
}
