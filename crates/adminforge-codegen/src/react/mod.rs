//! React/Next.js emission passes.
//!
//! The base pass emits the entity's TypeScript interface; feature passes add
//! the zod validation schema, the create/edit form component and the package
//! manifest. Assemble them through a [`PassManager`]:
//!
//! ```ignore
//! use adminforge_codegen::react;
//!
//! let files = react::admin_module().run(&entity)?;
//! ```

pub mod base;
pub mod fields;
pub mod passes;

pub use base::TypesPass;
pub use base::sql_type_to_typescript;

use crate::pass::PassManager;

/// Creates a PassManager with the full admin module stack
/// (types + zod schema + form + manifest).
///
/// The form-bearing passes no-op for entities whose routes include neither
/// create nor edit, so this pipeline is safe for any route configuration.
pub fn admin_module() -> PassManager {
    let mut pm = PassManager::new();
    pm.add(TypesPass);
    pm.add(passes::ZodSchemaPass);
    pm.add(passes::FormFieldsPass);
    pm.add(passes::ManifestPass);
    pm
}

/// Creates a PassManager that emits only the entity's TypeScript interface.
pub fn types_only() -> PassManager {
    let mut pm = PassManager::new();
    pm.add(TypesPass);
    pm
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminforge_schema::{Entity, FieldDescriptor, RouteFlags};

    #[test]
    fn test_admin_module_emits_full_stack() {
        let entity = Entity::new(
            "Post",
            vec![
                FieldDescriptor::new("title", "varchar"),
                FieldDescriptor::new("published_at", "date"),
            ],
        );

        let files = admin_module().run(&entity).unwrap();

        assert_eq!(files.len(), 4);
        assert!(files.get("types.ts").is_some());
        assert!(files.get("schema.ts").is_some());
        assert!(files.get("package.json").is_some());

        // The date-picker import lands between the directive and the body.
        let form = files.get("form.tsx").unwrap();
        let directive_pos = form.find("\"use client\";").unwrap();
        let picker_pos = form.find("import DatePicker from \"react-datepicker\";").unwrap();
        let component_pos = form.find("export function PostForm").unwrap();
        assert!(directive_pos < picker_pos);
        assert!(picker_pos < component_pos);
    }

    #[test]
    fn test_admin_module_without_forms() {
        let mut entity = Entity::new("Report", vec![FieldDescriptor::new("title", "varchar")]);
        entity.routes = RouteFlags {
            list: true,
            create: false,
            edit: false,
            view: true,
        };

        let files = admin_module().run(&entity).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.get("types.ts").is_some());
        assert!(files.get("package.json").is_some());
        assert!(files.get("form.tsx").is_none());
        assert!(files.get("schema.ts").is_none());
    }

    #[test]
    fn test_types_only_pipeline() {
        let entity = Entity::new("Tag", vec![FieldDescriptor::new("label", "varchar")]);
        let files = types_only().run(&entity).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files.get("types.ts").unwrap().contains("export interface Tag"));
    }
}
