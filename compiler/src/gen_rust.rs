use minijinja::Environment;
use tracing::debug;

use crate::{
    error::TagEnumError,
    model::{EnumDefinition, GeneratedModel},
};

const TEMPLATE_NAME: &str = "enum.rs";

/// Imports shared by every generated block.
pub const IMPORTS: [&str; 3] = [
    "use std::fmt;",
    "use std::str::FromStr;",
    "use serde::{de, ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};",
];

/// Provenance comment, package clause and imports that open a generated file.
pub fn header(invocation: &str, package: &str) -> String {
    let invocation = invocation.replace(['\r', '\n'], " ");
    let mut lines = Vec::new();
    if invocation.trim().is_empty() {
        lines.push("// Code generated by \"tagenum\"; DO NOT EDIT.".to_string());
    } else {
        lines.push(format!("// Code generated by \"tagenum {}\"; DO NOT EDIT.", invocation.trim()));
    }
    lines.push("".to_string());
    lines.push(format!("pub mod {} {{", package));
    lines.extend(IMPORTS.iter().map(|line| line.to_string()));
    lines.push("".to_string());
    lines.join("\n") + "\n"
}

/// Closes the package clause opened by `header`.
pub fn footer() -> String {
    "}\n".to_string()
}

/// Expands the enum template once per definition.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, TagEnumError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(TEMPLATE_NAME, ENUM_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(&self, definition: &EnumDefinition) -> Result<String, TagEnumError> {
        let model = GeneratedModel::new(definition);
        let template = self.env.get_template(TEMPLATE_NAME)?;
        let mut code = template.render(&model)?;
        code.push('\n');
        debug!(
            type_name = %model.new_type,
            elements = model.fields.len(),
            "rendered enum"
        );
        Ok(code)
    }
}

const ENUM_TEMPLATE: &str = r#"
/// Wire shape of a {{ new_type }} that carries a description.
struct {{ json_model }}<'a> {
    name: &'a str,
    description: &'a str,
}

impl Serialize for {{ json_model }}<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("{{ json_model }}", 2)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("description", self.description)?;
        state.end()
    }
}

/// Display names keyed by the fields declared on `{{ original_type }}`.
pub static {{ instance_variable }}: &[(&str, &str)] = &[
{% for field in fields %}
    ({{ field.value_literal }}, {{ field.key_literal }}),
{% endfor %}
];

/// {{ new_type }} is the enum that instances should be created from.
#[derive(Debug, Clone, Copy, Default)]
pub struct {{ new_type }} {
    name: &'static str,
    value: &'static str,
    description: &'static str,
}

/// Returned when a string is not the display name of any {{ new_type }}.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct {{ error_type }} {
    value: String,
}

impl {{ error_type }} {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for {{ error_type }} {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid value for type {{ new_type }}", self.value)
    }
}

impl std::error::Error for {{ error_type }} {}

// Enum instances
impl {{ new_type }} {
{% for field in fields %}
    #[allow(non_upper_case_globals)]
    pub const {{ field.ident }}: {{ new_type }} = {{ new_type }} {
        name: {{ field.key_literal }},
        value: {{ field.value_literal }},
        description: {{ field.description_literal }},
    };
{% endfor %}
}

static {{ values_static }}: [{{ new_type }}; {{ fields | length }}] = [
{% for field in fields %}
    {{ new_type }}::{{ field.ident }},
{% endfor %}
];

static {{ names_static }}: [&str; {{ fields | length }}] = [
{% for field in fields %}
    {{ field.key_literal }},
{% endfor %}
];

impl {{ new_type }} {
    /// Creates a {{ new_type }} from the given display value (name).
    #[allow(unreachable_patterns)]
    pub fn new(value: &str) -> Result<{{ new_type }}, {{ error_type }}> {
        match value {
{% for field in fields %}
            {{ field.key_literal }} => Ok({{ new_type }}::{{ field.ident }}),
{% endfor %}
            _ => Err({{ error_type }} {
                value: value.to_string(),
            }),
        }
    }

    /// Looks up a {{ new_type }} by the name of the field it was declared from.
    pub fn from_value(value: &str) -> Option<{{ new_type }}> {
        {{ values_static }}.iter().copied().find(|instance| instance.value == value)
    }
}

impl FromStr for {{ new_type }} {
    type Err = {{ error_type }};

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        {{ new_type }}::new(s)
    }
}

impl {{ new_type }} {
    /// Returns the enum display value.
    pub fn name(&self) -> &'static str {
        self.known().name
    }
}

/// Alias of `name`.
impl fmt::Display for {{ new_type }} {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A {{ new_type }} can be returned as an error whose message is its name.
impl std::error::Error for {{ new_type }} {}

impl {{ new_type }} {
    /// Returns the enum description if present, otherwise an empty string.
    pub fn description(&self) -> &'static str {
        self.known().description
    }

    /// Returns the name of the field the instance was declared from.
    pub fn value(&self) -> &'static str {
        self.known().value
    }

    /// Returns the display values of all enum instances in declaration order.
    pub fn names() -> &'static [&'static str] {
        &{{ names_static }}
    }

    /// Returns all enum instances in declaration order.
    pub fn values() -> &'static [{{ new_type }}] {
        &{{ values_static }}
    }

    fn known(&self) -> &Self {
        if self.value.is_empty() {
            panic!("Could not map enum: {{ new_type }} was not created through {{ new_type }}::new");
        }
        self
    }
}

impl PartialEq for {{ new_type }} {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for {{ new_type }} {}

impl std::hash::Hash for {{ new_type }} {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(self.value, state);
    }
}

impl Serialize for {{ new_type }} {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.description().is_empty() {
            return {{ json_model }} {
                name: self.name(),
                description: self.description(),
            }
            .serialize(serializer);
        }
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for {{ new_type }} {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any({{ visitor_type }})
    }
}

struct {{ visitor_type }};

impl<'de> de::Visitor<'de> for {{ visitor_type }} {
    type Value = {{ new_type }};

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a {{ new_type }} display name")
    }

    // The description is not restored on decode.
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let instance = {{ new_type }}::new(v).map_err(E::custom)?;
        Ok({{ new_type }} {
            name: instance.name,
            value: instance.value,
            description: "",
        })
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut name: Option<String> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "name" {
                name = Some(map.next_value()?);
            } else {
                map.next_value::<de::IgnoredAny>()?;
            }
        }
        let name = name.ok_or_else(|| <A::Error as de::Error>::missing_field("name"))?;
        de::Visitor::visit_str(self, &name)
    }
}
"#;
