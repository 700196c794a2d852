use serde::Serialize;

use crate::utils::{quote, to_snake_case};

/// Suffix removed from a declared type name to form the generated type name.
pub const ENUM_SUFFIX: &str = "Enum";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumElement {
    /// Field identifier as declared (without a raw `r#` prefix).
    pub identifier:   String,
    /// Field identifier exactly as it must be spelled in Rust source.
    pub ident:        String,
    pub display_name: String,
    pub description:  String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub original_name: String,
    pub public_name:   String,
    pub elements:      Vec<EnumElement>,
}

impl EnumDefinition {
    pub fn new(original_name: &str) -> Self {
        Self {
            original_name: original_name.to_string(),
            public_name:   public_type_name(original_name),
            elements:      Vec::new(),
        }
    }
}

/// `StatusEnum` becomes `Status`; names without the suffix are kept as is.
/// Only a trailing `Enum` is removed, so `EnumFoo` stays `EnumFoo`.
pub fn public_type_name(original_name: &str) -> String {
    original_name
        .strip_suffix(ENUM_SUFFIX)
        .unwrap_or(original_name)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldModel {
    pub key:                 String,
    pub value:               String,
    pub description:         String,
    pub ident:               String,
    pub key_literal:         String,
    pub value_literal:       String,
    pub description_literal: String,
}

/// Template context for one enum definition.
///
/// `instance_variable` names the identifier to display name mapping static,
/// `COLOR_INSTANCE` for a `Color`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedModel {
    pub instance_variable: String,
    pub original_type:     String,
    pub new_type:          String,
    pub json_model:        String,
    pub error_type:        String,
    pub visitor_type:      String,
    pub names_static:      String,
    pub values_static:     String,
    pub fields:            Vec<FieldModel>,
}

impl GeneratedModel {
    pub fn new(definition: &EnumDefinition) -> Self {
        let new_type = &definition.public_name;
        let prefix = to_snake_case(new_type).to_uppercase();

        let fields = definition
            .elements
            .iter()
            .map(|element| FieldModel {
                key:                 element.display_name.clone(),
                value:               element.identifier.clone(),
                description:         element.description.clone(),
                ident:               element.ident.clone(),
                key_literal:         quote(&element.display_name),
                value_literal:       quote(&element.identifier),
                description_literal: quote(&element.description),
            })
            .collect();

        Self {
            instance_variable: format!("{}_INSTANCE", prefix),
            original_type:     definition.original_name.clone(),
            new_type:          new_type.clone(),
            json_model:        format!("{}JsonDescriptionModel", new_type),
            error_type:        format!("{}ValueError", new_type),
            visitor_type:      format!("{}Visitor", new_type),
            names_static:      format!("{}_NAMES", prefix),
            values_static:     format!("{}_VALUES", prefix),
            fields,
        }
    }
}
