//! Core descriptor types for adminforge entity definitions.

use serde::Deserialize;

/// Validation rules attached to a single field.
///
/// All rules are optional; an absent rule means "no constraint". `min` and
/// `max` apply to the value for numeric fields and to the length for textual
/// fields; the emitters decide which reading applies based on the field's
/// data type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Validations {
    /// The field must be present and non-empty.
    pub required: Option<bool>,
    /// Regular expression the value must match.
    pub pattern: Option<String>,
    /// Lower bound (value or length).
    pub min: Option<f64>,
    /// Upper bound (value or length).
    pub max: Option<f64>,
}

impl Validations {
    /// Returns true if at least one rule is set.
    pub fn has_rules(&self) -> bool {
        self.required.is_some()
            || self.pattern.is_some()
            || self.min.is_some()
            || self.max.is_some()
    }

    /// Returns true if the field is marked required.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// One column of a database table, described for UI generation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Column name as authored (may contain stray whitespace).
    pub name: String,
    /// SQL data type name, e.g. `varchar`, `timestamp`, `double precision`.
    pub data_type: String,
    /// Optional rendering hint that overrides the data type, e.g. `rich-text`.
    #[serde(default)]
    pub input_type: Option<String>,
    /// Validation rules, if any.
    #[serde(default)]
    pub validations: Option<Validations>,
    /// Enumerated choices for select-like fields.
    #[serde(default)]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    /// Creates a field with just a name and data type.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            input_type: None,
            validations: None,
            options: vec![],
        }
    }

    /// The lower-cased hint the renderers and the package resolver match on:
    /// `input_type` when present, the SQL data type otherwise.
    pub fn render_hint(&self) -> String {
        self.input_type
            .as_deref()
            .unwrap_or(&self.data_type)
            .to_lowercase()
    }

    /// Returns true if at least one validation rule is set on this field.
    pub fn has_validation_rules(&self) -> bool {
        self.validations
            .as_ref()
            .is_some_and(Validations::has_rules)
    }

    /// Returns true if the field is marked required.
    pub fn is_required(&self) -> bool {
        self.validations
            .as_ref()
            .is_some_and(Validations::is_required)
    }

    /// The camelCase identifier used for this field in generated code.
    pub fn key(&self) -> String {
        to_camel_case(&normalize_identifier(&self.name))
    }

    /// Human-readable label for this field, e.g. `published_at` -> "Published at".
    pub fn label(&self) -> String {
        humanize(&normalize_identifier(&self.name))
    }
}

/// Which CRUD-style views are enabled for a generated entity.
///
/// Flags missing from the input document default to `true`; an entity that
/// says nothing about routes gets the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteFlags {
    pub list: bool,
    pub create: bool,
    pub edit: bool,
    pub view: bool,
}

impl Default for RouteFlags {
    fn default() -> Self {
        Self {
            list: true,
            create: true,
            edit: true,
            view: true,
        }
    }
}

impl RouteFlags {
    /// All views disabled. Useful as an explicit opt-out in tests and callers.
    pub fn none() -> Self {
        Self {
            list: false,
            create: false,
            edit: false,
            view: false,
        }
    }

    /// Returns true if any form-bearing view (create or edit) is enabled.
    pub fn needs_forms(&self) -> bool {
        self.create || self.edit
    }
}

/// One entity definition: the unit of input for the generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Entity name as authored, e.g. "Post" or "blog post".
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub routes: RouteFlags,
}

impl Entity {
    /// Creates an entity with default (all-true) routes.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
            routes: RouteFlags::default(),
        }
    }

    /// PascalCase type name for generated code, e.g. "blog post" -> "BlogPost".
    pub fn type_name(&self) -> String {
        to_pascal_case(&normalize_identifier(&self.name))
    }

    /// kebab-case name for generated artifacts, e.g. "BlogPost" -> "blog-post".
    pub fn artifact_name(&self) -> String {
        to_kebab_case(&normalize_identifier(&self.name))
    }
}

/// Collapses whitespace in an identifier: trims the ends and joins internal
/// runs of whitespace with a single underscore.
///
/// This is the only normalization applied to authored names; uniqueness is
/// not enforced.
pub fn normalize_identifier(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Converts a string to snake_case.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_lowercase().next().unwrap());
        } else {
            result.push(c);
        }
    }
    result
}

/// Converts a string to camelCase.
pub fn to_camel_case(s: &str) -> String {
    let snake = to_snake_case(s);
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in snake.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_uppercase().next().unwrap());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Converts a string to PascalCase.
pub fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => camel,
    }
}

/// Converts a string to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Turns a normalized identifier into a display label: underscores become
/// spaces and the first letter is capitalized, e.g. "published_at" ->
/// "Published at".
pub fn humanize(s: &str) -> String {
    let spaced = to_snake_case(s).replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
