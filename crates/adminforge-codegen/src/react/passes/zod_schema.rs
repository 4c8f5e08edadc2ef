//! Zod validation schema pass.

use adminforge_schema::{Entity, FieldDescriptor, to_camel_case};

use crate::CodegenError;
use crate::pass::{GenerationContext, Pass};
use crate::react::base::FieldClass;

/// Emits `schema.ts` with a zod object schema built from each field's data
/// type and validation rules.
///
/// Runs only for entities with a create or edit route; without a form there
/// is nothing to validate. Signals availability to later passes through the
/// `has:zod-schema` metadata key.
pub struct ZodSchemaPass;

impl Pass for ZodSchemaPass {
    fn name(&self) -> &'static str {
        "zod-schema"
    }

    fn depends_on(&self) -> &[&'static str] {
        &["types"]
    }

    fn run(&self, entity: &Entity, ctx: &mut GenerationContext) -> Result<(), CodegenError> {
        if !entity.routes.needs_forms() {
            return Ok(());
        }

        ctx.set_file("schema.ts", generate_schema(entity));
        ctx.set_metadata("has:zod-schema", "true");
        Ok(())
    }
}

/// Generates the zod schema module for an entity.
fn generate_schema(entity: &Entity) -> String {
    let type_name = entity.type_name();
    let schema_const = schema_const_name(entity);

    let mut code = format!(
        "// Generated validation schema for {type_name}\n\nimport {{ z }} from \"zod\";\n\nexport const {schema_const} = z.object({{\n",
    );

    for field in &entity.fields {
        code.push_str(&format!("  {}: {},\n", field.key(), zod_validator(field)));
    }

    code.push_str("});\n\n");
    code.push_str(&format!(
        "export type {type_name}Input = z.infer<typeof {schema_const}>;\n",
    ));
    code
}

/// Name of the exported schema constant, e.g. "postSchema".
pub fn schema_const_name(entity: &Entity) -> String {
    format!("{}Schema", to_camel_case(&entity.type_name()))
}

/// Builds the zod validator chain for one field.
fn zod_validator(field: &FieldDescriptor) -> String {
    let class = FieldClass::of(&field.data_type);

    let mut validator = base_validator(field, class).to_string();

    let rules = field.validations.clone().unwrap_or_default();
    let stringish = matches!(
        class,
        FieldClass::Text | FieldClass::LongText | FieldClass::Unknown
    );

    if stringish {
        if let Some(pattern) = &rules.pattern {
            validator.push_str(&format!(
                ".regex(new RegExp({}))",
                quote_js_string(pattern)
            ));
        }
        if rules.is_required() && rules.min.is_none() {
            validator.push_str(&format!(
                ".min(1, {})",
                quote_js_string(&format!("{} is required", field.label()))
            ));
        }
    }

    // Length bounds for strings, value bounds for numbers.
    if stringish || class == FieldClass::Number {
        if let Some(min) = rules.min {
            validator.push_str(&format!(".min({})", format_bound(min)));
        }
        if let Some(max) = rules.max {
            validator.push_str(&format!(".max({})", format_bound(max)));
        }
    }

    if !rules.is_required() && class != FieldClass::Boolean {
        validator.push_str(".optional()");
    }

    validator
}

fn base_validator(field: &FieldDescriptor, class: FieldClass) -> &'static str {
    match class {
        FieldClass::Number => "z.coerce.number()",
        FieldClass::Boolean => "z.coerce.boolean()",
        FieldClass::Temporal => match field.data_type.to_lowercase().as_str() {
            // Plain dates and timestamps coerce; times and intervals stay text.
            "date" | "timestamp" => "z.coerce.date()",
            _ => "z.string()",
        },
        FieldClass::Document => "z.unknown()",
        FieldClass::Text | FieldClass::LongText | FieldClass::Unknown => "z.string()",
    }
}

/// Formats a numeric bound without a trailing `.0` for whole numbers.
fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Quotes a string as a JS double-quoted literal.
fn quote_js_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminforge_schema::{RouteFlags, Validations};

    fn validated(name: &str, data_type: &str, rules: Validations) -> FieldDescriptor {
        let mut field = FieldDescriptor::new(name, data_type);
        field.validations = Some(rules);
        field
    }

    #[test]
    fn test_generate_schema() {
        let entity = Entity::new(
            "Post",
            vec![
                validated(
                    "title",
                    "varchar",
                    Validations {
                        required: Some(true),
                        max: Some(120.0),
                        ..Validations::default()
                    },
                ),
                FieldDescriptor::new("views", "integer"),
            ],
        );

        let code = generate_schema(&entity);
        assert!(code.contains("export const postSchema = z.object({"));
        assert!(code.contains(r#"title: z.string().min(1, "Title is required").max(120),"#));
        assert!(code.contains("views: z.coerce.number().optional(),"));
        assert!(code.contains("export type PostInput = z.infer<typeof postSchema>;"));
    }

    #[test]
    fn test_pattern_rule_emits_regex() {
        let field = validated(
            "slug",
            "varchar",
            Validations {
                pattern: Some("^[a-z0-9-]+$".to_string()),
                ..Validations::default()
            },
        );
        let validator = zod_validator(&field);
        assert!(validator.contains(r#".regex(new RegExp("^[a-z0-9-]+$"))"#));
        assert!(validator.ends_with(".optional()"));
    }

    #[test]
    fn test_numeric_bounds_are_value_bounds() {
        let field = validated(
            "score",
            "numeric",
            Validations {
                min: Some(0.0),
                max: Some(9.5),
                ..Validations::default()
            },
        );
        assert_eq!(
            zod_validator(&field),
            "z.coerce.number().min(0).max(9.5).optional()"
        );
    }

    #[test]
    fn test_temporal_fields_coerce_to_date() {
        let field = FieldDescriptor::new("published_at", "timestamp");
        assert_eq!(zod_validator(&field), "z.coerce.date().optional()");

        let interval = FieldDescriptor::new("duration", "interval");
        assert_eq!(zod_validator(&interval), "z.string().optional()");
    }

    #[test]
    fn test_boolean_fields_are_never_optional() {
        // An unchecked checkbox still submits a value.
        let field = FieldDescriptor::new("published", "boolean");
        assert_eq!(zod_validator(&field), "z.coerce.boolean()");
    }

    #[test]
    fn test_skipped_without_form_routes() {
        let mut entity = Entity::new("Post", vec![]);
        entity.routes = RouteFlags {
            list: true,
            create: false,
            edit: false,
            view: true,
        };

        let mut ctx = GenerationContext::new();
        ZodSchemaPass.run(&entity, &mut ctx).unwrap();
        assert!(!ctx.has_file("schema.ts"));
        assert!(!ctx.has_metadata("has:zod-schema"));
    }
}
