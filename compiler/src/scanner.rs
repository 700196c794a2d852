use std::path::{Path, PathBuf};

use quote::ToTokens;
use syn::{
    ext::IdentExt, visit::Visit, Attribute, Expr, ExprLit, Field, Fields, ItemStruct, Lit, Meta,
};
use tracing::debug;

use crate::{
    error::TagEnumError,
    model::{EnumDefinition, EnumElement},
    tag::{parse_enum_tag, ENUM_TAG_KEY, IDENTIFIER_SENTINEL},
    tokenizer::has_key,
};

/// Field attribute carrying the raw tag string: `#[tag = r#"enum:"Red""#]`.
pub const TAG_ATTRIBUTE: &str = "tag";

/// One parsed source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path:   PathBuf,
    pub syntax: syn::File,
}

/// Every source file that is scanned together, in load order.
#[derive(Debug, Clone, Default)]
pub struct Package {
    pub files: Vec<SourceFile>,
}

impl Package {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }
}

/// Parses one source file. Syntax errors carry the file path and position.
pub fn parse_source(path: impl AsRef<Path>, text: &str) -> Result<SourceFile, TagEnumError> {
    let path = path.as_ref();
    let syntax = syn::parse_file(text).map_err(|e| {
        let start = e.span().start();
        TagEnumError::ParseError {
            path:   path.display().to_string(),
            msg:    e.to_string(),
            line:   start.line,
            column: start.column + 1,
        }
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        syntax,
    })
}

/// Collects one `EnumDefinition` per struct named `type_name` that has at
/// least one enum-tagged field, in file order then declaration order.
///
/// Returns `EmptyEnum` when nothing in the package qualifies.
pub fn scan_package(package: &Package, type_name: &str) -> Result<Vec<EnumDefinition>, TagEnumError> {
    let mut definitions = Vec::new();
    for file in &package.files {
        let mut scanner = DeclarationScanner {
            type_name,
            definitions: Vec::new(),
            error:       None,
        };
        scanner.visit_file(&file.syntax);
        if let Some(err) = scanner.error {
            return Err(err);
        }
        debug!(
            path = %file.path.display(),
            type_name,
            found = scanner.definitions.len(),
            "scanned source file"
        );
        definitions.extend(scanner.definitions);
    }

    if definitions.is_empty() {
        return Err(TagEnumError::EmptyEnum(type_name.to_string()));
    }
    Ok(definitions)
}

struct DeclarationScanner<'a> {
    type_name:   &'a str,
    definitions: Vec<EnumDefinition>,
    error:       Option<TagEnumError>,
}

impl<'ast> Visit<'ast> for DeclarationScanner<'_> {
    fn visit_item_struct(&mut self, item: &'ast ItemStruct) {
        if self.error.is_some() || item.ident.unraw() != self.type_name {
            return;
        }
        match scan_struct(item) {
            Ok(Some(definition)) => self.definitions.push(definition),
            Ok(None) => {}
            Err(err) => self.error = Some(err),
        }
    }
}

fn scan_struct(item: &ItemStruct) -> Result<Option<EnumDefinition>, TagEnumError> {
    let fields = match &item.fields {
        Fields::Named(named) => &named.named,
        _ => return Ok(None),
    };

    let type_name = item.ident.unraw().to_string();
    let mut definition: Option<EnumDefinition> = None;

    for field in fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        let element = scan_field(field, ident).map_err(|source| {
            let start = ident.span().start();
            TagEnumError::Field {
                type_name: type_name.clone(),
                field:     ident.unraw().to_string(),
                line:      start.line,
                column:    start.column + 1,
                source:    Box::new(source),
            }
        })?;
        if let Some(element) = element {
            definition
                .get_or_insert_with(|| EnumDefinition::new(&type_name))
                .elements
                .push(element);
        }
    }

    Ok(definition)
}

fn scan_field(field: &Field, ident: &syn::Ident) -> Result<Option<EnumElement>, TagEnumError> {
    let Some(tag) = field_tag(&field.attrs)? else {
        return Ok(None);
    };
    if !has_key(&tag, ENUM_TAG_KEY) {
        return Ok(None);
    }

    let enum_tag = parse_enum_tag(&tag)?;
    let identifier = ident.unraw().to_string();
    let display_name = if enum_tag.name == IDENTIFIER_SENTINEL {
        identifier.clone()
    } else {
        enum_tag.name
    };

    Ok(Some(EnumElement {
        identifier,
        ident: ident.to_string(),
        display_name,
        description: enum_tag.description,
    }))
}

/// Joins every `#[tag = "..."]` on a field with a single space.
fn field_tag(attrs: &[Attribute]) -> Result<Option<String>, TagEnumError> {
    let mut parts = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident(TAG_ATTRIBUTE)) {
        match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => parts.push(lit.value()),
                other => {
                    return Err(TagEnumError::MalformedTag {
                        tag: other.to_token_stream().to_string(),
                    })
                }
            },
            other => {
                return Err(TagEnumError::MalformedTag {
                    tag: other.to_token_stream().to_string(),
                })
            }
        }
    }
    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join(" ")))
    }
}
