use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::{
    error::TagEnumError,
    model::{EnumDefinition, GeneratedModel},
    utils::{is_rust_keyword, quote},
};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[\p{XID_Start}_]\p{XID_Continue}*$").unwrap();
}

/// A name usable for a generated type or module: a Unicode identifier that is
/// neither `_` nor a keyword.
fn is_valid_name(name: &str) -> bool {
    name != "_" && IDENTIFIER.is_match(name) && !is_rust_keyword(name)
}

/// Members generated on every enum type; an element may not reuse these names.
pub const RESERVED_NAMES: [&str; 8] = [
    "new", "from_value", "name", "value", "description", "names", "values", "known",
];

/// Returns `Ok(())` if the definition can be rendered as valid Rust,
/// or `Err(TagEnumError::VerifierError(_))` otherwise.
pub fn verify_definition(definition: &EnumDefinition) -> Result<(), TagEnumError> {
    let public_name = &definition.public_name;

    // 1) The generated type needs a usable name
    if !is_valid_name(public_name) {
        return Err(TagEnumError::VerifierError(format!(
            "The type {} does not produce a valid enum name (got {})",
            quote(&definition.original_name),
            quote(public_name)
        )));
    }

    // 2) Identifiers become associated constants and must not clash
    let mut identifiers = HashSet::new();
    for element in &definition.elements {
        if RESERVED_NAMES.contains(&element.identifier.as_str()) {
            return Err(TagEnumError::VerifierError(format!(
                "The field {} of {} collides with a generated method",
                quote(&element.identifier),
                quote(&definition.original_name)
            )));
        }
        if !identifiers.insert(element.identifier.as_str()) {
            return Err(TagEnumError::VerifierError(format!(
                "The field {} is defined twice in {}",
                quote(&element.identifier),
                quote(&definition.original_name)
            )));
        }
    }

    // 3) Display names may repeat, but only the first one is reachable from `new`
    let mut display_names = HashSet::new();
    for element in &definition.elements {
        if !display_names.insert(element.display_name.as_str()) {
            warn!(
                type_name = %definition.original_name,
                field = %element.identifier,
                display_name = %element.display_name,
                "duplicate display name; the constructor returns the first declared element"
            );
        }
    }

    Ok(())
}

/// Checks that no two definitions in one run generate the same item: the
/// type itself, its companion types, or its statics.
pub fn verify_unique_types(definitions: &[EnumDefinition]) -> Result<(), TagEnumError> {
    let mut seen: HashMap<String, &str> = HashMap::new();
    for definition in definitions {
        let model = GeneratedModel::new(definition);
        let items = [
            model.new_type,
            model.error_type,
            model.json_model,
            model.visitor_type,
            model.instance_variable,
            model.names_static,
            model.values_static,
        ];
        for item in items {
            if let Some(first) = seen.get(&item) {
                return Err(TagEnumError::VerifierError(format!(
                    "The item {} is generated twice (from {} and {})",
                    quote(&item),
                    quote(first),
                    quote(&definition.original_name)
                )));
            }
            seen.insert(item, &definition.original_name);
        }
    }
    Ok(())
}

/// The package name becomes a `pub mod` in the generated file.
pub fn verify_package_name(package: &str) -> Result<(), TagEnumError> {
    if !is_valid_name(package) {
        return Err(TagEnumError::VerifierError(format!(
            "The package name {} is not a valid module name",
            quote(package)
        )));
    }
    Ok(())
}
