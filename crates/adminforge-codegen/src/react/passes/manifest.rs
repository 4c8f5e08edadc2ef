//! Package manifest pass.

use adminforge_packages::resolve;
use adminforge_schema::Entity;
use serde_json::{Map, Value};

use crate::CodegenError;
use crate::pass::{GenerationContext, Pass};

/// Emits `package.json` for the generated module.
///
/// Dependencies come from the package resolver, so the manifest lists exactly
/// what the enabled routes and field widgets need, in resolution order.
pub struct ManifestPass;

impl Pass for ManifestPass {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn run(&self, entity: &Entity, ctx: &mut GenerationContext) -> Result<(), CodegenError> {
        ctx.set_file("package.json", generate_manifest(entity)?);
        Ok(())
    }
}

/// Serializes the resolved package set into a package.json document.
fn generate_manifest(entity: &Entity) -> Result<String, CodegenError> {
    let resolution = resolve(&entity.fields, &entity.routes);

    let mut dependencies = Map::new();
    for package in &resolution.packages {
        dependencies.insert(
            package.name.clone(),
            Value::String(package.version_range.clone()),
        );
    }

    let mut dev_dependencies = Map::new();
    for package in &resolution.dev_packages {
        dev_dependencies.insert(
            package.name.clone(),
            Value::String(package.version_range.clone()),
        );
    }

    let mut manifest = Map::new();
    manifest.insert(
        "name".to_string(),
        Value::String(format!("admin-{}", entity.artifact_name())),
    );
    manifest.insert("version".to_string(), Value::String("0.1.0".to_string()));
    manifest.insert("private".to_string(), Value::Bool(true));
    manifest.insert("dependencies".to_string(), Value::Object(dependencies));
    manifest.insert(
        "devDependencies".to_string(),
        Value::Object(dev_dependencies),
    );

    let mut content = serde_json::to_string_pretty(&Value::Object(manifest))?;
    content.push('\n');
    Ok(content)
}
