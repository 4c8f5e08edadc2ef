//! Base pass - generates the entity's pure TypeScript interface.

use adminforge_schema::{Entity, FieldDescriptor};

use crate::CodegenError;
use crate::pass::{GenerationContext, Pass};

/// Emits `types.ts` with the entity's TypeScript interface.
///
/// The generated code is library-agnostic: it describes the entity row as the
/// admin UI sees it and pulls in no dependencies.
pub struct TypesPass;

impl Pass for TypesPass {
    fn name(&self) -> &'static str {
        "types"
    }

    fn run(&self, entity: &Entity, ctx: &mut GenerationContext) -> Result<(), CodegenError> {
        ctx.set_file("types.ts", generate_entity_interface(entity));
        ctx.set_metadata(format!("entity:{}", entity.type_name()), "true");
        Ok(())
    }
}

/// Generates the TypeScript interface for an entity.
fn generate_entity_interface(entity: &Entity) -> String {
    let mut code = format!(
        "// Generated types for {}\n\nexport interface {} {{\n",
        entity.type_name(),
        entity.type_name()
    );

    for field in &entity.fields {
        let ts_type = sql_type_to_typescript(&field.data_type);
        let marker = if field.is_required() { "" } else { "?" };
        code.push_str(&format!("  {}{}: {};\n", field.key(), marker, ts_type));
    }

    code.push_str("}\n");
    code
}

/// Maps a SQL data type name to the TypeScript type used in generated
/// interfaces. Unknown types map to `unknown` rather than failing.
pub fn sql_type_to_typescript(data_type: &str) -> &'static str {
    match FieldClass::of(data_type) {
        FieldClass::Number => "number",
        FieldClass::Boolean => "boolean",
        FieldClass::Document => "unknown",
        FieldClass::Text | FieldClass::LongText | FieldClass::Temporal => "string",
        FieldClass::Unknown => "unknown",
    }
}

/// Broad shape of a SQL data type, shared by the emitters to decide how a
/// value is validated and which control renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldClass {
    /// Short string-like values: char, varchar, uuid, enum, network types.
    Text,
    /// Unbounded text columns.
    LongText,
    Number,
    Boolean,
    /// Dates, times, timestamps, intervals.
    Temporal,
    /// json / jsonb documents.
    Document,
    /// Not in the table; treated permissively everywhere.
    Unknown,
}

impl FieldClass {
    pub(crate) fn of(data_type: &str) -> Self {
        match data_type.to_lowercase().as_str() {
            "smallint" | "integer" | "bigint" | "decimal" | "numeric" | "real"
            | "double precision" | "serial" | "bigserial" | "money" => Self::Number,
            "boolean" => Self::Boolean,
            "date" | "time" | "timestamp" | "interval" => Self::Temporal,
            "text" => Self::LongText,
            "json" | "jsonb" => Self::Document,
            "char" | "varchar" | "uuid" | "enum" | "bytea" | "cidr" | "inet" | "macaddr"
            | "tsvector" | "tsquery" | "point" | "line" | "lseg" | "box" | "path" | "polygon"
            | "circle" => Self::Text,
            _ => Self::Unknown,
        }
    }

    /// Classification of the field the renderers should trust: the input
    /// type hint wins over the SQL type when both are present.
    pub(crate) fn of_field(field: &FieldDescriptor) -> Self {
        Self::of(&field.render_hint())
    }
}
