use tracing::{debug, instrument};

use crate::{
    emitter::{emit, Normalize},
    error::TagEnumError,
    gen_rust::{footer, header, Renderer},
    model::EnumDefinition,
    scanner::{scan_package, Package},
    verifier::{verify_definition, verify_package_name, verify_unique_types},
};

/// Default module wrapping the generated code.
pub const DEFAULT_PACKAGE: &str = "enums";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Module name of the package clause.
    pub package:    String,
    /// Arguments recorded in the provenance comment.
    pub invocation: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            package:    DEFAULT_PACKAGE.to_string(),
            invocation: String::new(),
        }
    }
}

/// Scans, verifies and renders every requested type, in request order.
/// Returns the unnormalized source; any error aborts the whole run.
pub fn generate_source<S: AsRef<str>>(
    package: &Package,
    type_names: &[S],
    options: &Options,
) -> Result<String, TagEnumError> {
    if type_names.is_empty() {
        return Err(TagEnumError::Usage("at least one type name is required".to_string()));
    }
    verify_package_name(&options.package)?;

    let mut definitions = Vec::new();
    for type_name in type_names {
        definitions.extend(collect_definitions(package, type_name.as_ref())?);
    }
    verify_unique_types(&definitions)?;

    let renderer = Renderer::new()?;
    let mut buf = header(&options.invocation, &options.package);
    for definition in &definitions {
        buf.push_str(&renderer.render(definition)?);
    }
    buf.push_str(&footer());
    Ok(buf)
}

/// `generate_source` followed by normalization. A normalization failure is
/// logged and the unnormalized source returned.
pub fn compile<S: AsRef<str>>(
    package: &Package,
    type_names: &[S],
    options: &Options,
    normalizer: &dyn Normalize,
) -> Result<String, TagEnumError> {
    let source = generate_source(package, type_names, options)?;
    Ok(emit(source, normalizer))
}

#[instrument(level = "debug", skip(package))]
fn collect_definitions(package: &Package, type_name: &str) -> Result<Vec<EnumDefinition>, TagEnumError> {
    let definitions = scan_package(package, type_name)?;
    for definition in &definitions {
        verify_definition(definition)?;
        debug!(
            public_name = %definition.public_name,
            elements = definition.elements.len(),
            "collected enum definition"
        );
    }
    Ok(definitions)
}
