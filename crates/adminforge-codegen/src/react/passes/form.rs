//! Create/edit form component pass.

use adminforge_schema::Entity;

use crate::CodegenError;
use crate::pass::{GenerationContext, Pass};
use crate::react::fields::{Widget, render_field, render_options_const, widget_for, widget_import};
use crate::react::passes::zod_schema::schema_const_name;

/// Emits `form.tsx`: a react-hook-form component covering every field.
///
/// Runs only for entities with a create or edit route. Field controls are
/// chosen per field by [`widget_for`]; widget package imports are queued on
/// the context so finalization places them after the file header. When the
/// zod pass has run, the form validates through its schema resolver.
pub struct FormFieldsPass;

impl Pass for FormFieldsPass {
    fn name(&self) -> &'static str {
        "form"
    }

    fn depends_on(&self) -> &[&'static str] {
        &["types", "zod-schema"]
    }

    fn run(&self, entity: &Entity, ctx: &mut GenerationContext) -> Result<(), CodegenError> {
        if !entity.routes.needs_forms() {
            return Ok(());
        }

        let has_schema = ctx.has_metadata("has:zod-schema");
        ctx.set_file("form.tsx", generate_form(entity, has_schema));

        let mut queued: Vec<&'static str> = vec![];
        for field in &entity.fields {
            if let Some(import) = widget_import(widget_for(field)) {
                if !queued.contains(&import) {
                    queued.push(import);
                    ctx.add_import("form.tsx", import);
                }
            }
        }

        ctx.set_metadata("has:form", "true");
        Ok(())
    }
}

/// Generates the form component for an entity.
fn generate_form(entity: &Entity, has_schema: bool) -> String {
    let type_name = entity.type_name();
    let schema_const = schema_const_name(entity);
    let input_type = format!("{type_name}Input");

    let uses_controller = entity
        .fields
        .iter()
        .any(|f| widget_import(widget_for(f)).is_some());
    let hook_form_import = if uses_controller {
        "import { Controller, useForm } from \"react-hook-form\";"
    } else {
        "import { useForm } from \"react-hook-form\";"
    };

    let mut code = format!(
        "// Generated create/edit form for {type_name}\n\n\"use client\";\n\n{hook_form_import}\n",
    );

    if has_schema {
        code.push_str("import { zodResolver } from \"@hookform/resolvers/zod\";\n");
    }
    code.push_str("import toast from \"react-hot-toast\";\n");
    if has_schema {
        code.push_str(&format!(
            "\nimport {{ {schema_const}, type {input_type} }} from \"./schema\";\n"
        ));
    }
    code.push('\n');

    for field in &entity.fields {
        if matches!(widget_for(field), Widget::Select { .. }) {
            code.push_str(&render_options_const(field));
            code.push('\n');
        }
    }

    let values_type = if has_schema {
        input_type.clone()
    } else {
        "Record<string, unknown>".to_string()
    };

    code.push_str(&format!(
        r#"export interface {type_name}FormProps {{
  defaultValues?: Partial<{values_type}>;
  onSubmit: (values: {values_type}) => Promise<void> | void;
}}

export function {type_name}Form({{ defaultValues, onSubmit }}: {type_name}FormProps) {{
  const {{
    register,
    control,
    handleSubmit,
    formState: {{ errors, isSubmitting }},
  }} = useForm<{values_type}>({{
{resolver}    defaultValues,
  }});

  const submit = handleSubmit(async (values) => {{
    await onSubmit(values);
    toast.success("{type_name} saved");
  }});

  return (
    <form onSubmit={{submit}}>
"#,
        resolver = if has_schema {
            format!("    resolver: zodResolver({schema_const}),\n")
        } else {
            String::new()
        },
    ));

    for field in &entity.fields {
        code.push_str(&render_field(field));
    }

    code.push_str(
        r#"      <button type="submit" disabled={isSubmitting}>
        Save
      </button>
    </form>
  );
}
"#,
    );

    code
}
