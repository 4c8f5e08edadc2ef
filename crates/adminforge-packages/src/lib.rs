//! Package dependency resolution for generated admin modules.
//!
//! Given an entity's fields and its enabled routes, computes the deduplicated
//! set of npm packages the generated UI needs, split into runtime packages
//! and a fixed development-only tooling set. Resolution is a pure function:
//! same input, same output, with insertion order preserved so a regenerated
//! manifest never reorders.

use std::collections::HashSet;

use adminforge_schema::{FieldDescriptor, RouteFlags};
use serde::Serialize;

mod catalog;

pub use catalog::names;

/// One installable npm dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    /// Package identifier, unique within one resolution.
    pub name: String,
    /// Semver constraint, e.g. "^18.2.0".
    pub version_range: String,
    /// Runtime requirement flag. Entries returned to the caller always carry
    /// true; false exists to allow optional-package modeling later.
    pub is_required: bool,
    /// Names of packages that must be present whenever this one is. Expanded
    /// one level at resolution time, never stored transitively.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl PackageDescriptor {
    /// Creates a required package with no companion dependencies.
    pub fn new(name: impl Into<String>, version_range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_range: version_range.into(),
            is_required: true,
            depends_on: vec![],
        }
    }

    /// Declares companion packages that must accompany this one.
    pub fn with_depends_on(mut self, depends_on: &[&str]) -> Self {
        self.depends_on = depends_on.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// The outcome of one resolution: runtime packages in first-insertion order,
/// plus the fixed development tooling set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    pub packages: Vec<PackageDescriptor>,
    pub dev_packages: Vec<PackageDescriptor>,
}

/// Insertion-ordered package accumulator keyed by name.
///
/// First insertion wins: a later descriptor with the same name is dropped,
/// keeping the first-seen version constraint. A plain set would lose the
/// ordering that makes regenerated manifests reproducible.
#[derive(Debug, Default)]
struct PackageSet {
    entries: Vec<PackageDescriptor>,
    seen: HashSet<String>,
}

impl PackageSet {
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, package: PackageDescriptor) {
        if self.seen.insert(package.name.clone()) {
            self.entries.push(package);
        }
    }

    /// Adds every declared companion of every retained package, one level
    /// deep. A companion added here inherits the declaring package's version
    /// constraint and is not itself re-expanded.
    fn expand_companions(&mut self) {
        let declared: Vec<(Vec<String>, String)> = self
            .entries
            .iter()
            .filter(|p| !p.depends_on.is_empty())
            .map(|p| (p.depends_on.clone(), p.version_range.clone()))
            .collect();

        for (companions, version_range) in declared {
            for name in companions {
                self.insert(PackageDescriptor::new(name, version_range.clone()));
            }
        }
    }

    fn into_required(self) -> Vec<PackageDescriptor> {
        self.entries.into_iter().filter(|p| p.is_required).collect()
    }
}

/// Resolves the npm dependencies a generated module needs.
///
/// Cannot fail: unrecognized data types and input types contribute nothing,
/// and absent validations mean no validation packages for that field.
pub fn resolve(fields: &[FieldDescriptor], routes: &RouteFlags) -> ResolutionResult {
    let mut set = PackageSet::new();

    // Core rendering stack, present regardless of routes or fields.
    for name in [names::REACT, names::REACT_DOM, names::NEXT] {
        set.insert(catalog::descriptor(name));
    }

    if routes.list {
        set.insert(catalog::descriptor(names::DATA_TABLE));
        set.insert(catalog::descriptor(names::ICONS));
    }

    if routes.needs_forms() {
        for name in [
            names::HOOK_FORM,
            names::ZOD,
            names::RESOLVERS,
            names::TOAST,
        ] {
            set.insert(catalog::descriptor(name));
        }
    }

    if routes.view {
        set.insert(catalog::descriptor(names::ICONS));
    }

    // Widget packages only matter when a form will be rendered.
    if routes.needs_forms() {
        for field in fields {
            for &name in widget_packages(field) {
                set.insert(catalog::descriptor(name));
            }
        }
    }

    for field in fields {
        if field.has_validation_rules() {
            set.insert(catalog::descriptor(names::ZOD));
            set.insert(catalog::descriptor(names::RESOLVERS));
        }
    }

    set.expand_companions();

    ResolutionResult {
        packages: set.into_required(),
        dev_packages: catalog::dev_packages(),
    }
}

/// Maps a field's rendering hint to the widget packages it pulls in.
/// Unknown hints map to nothing; plain inputs need no extra package.
fn widget_packages(field: &FieldDescriptor) -> &'static [&'static str] {
    match field.render_hint().as_str() {
        "date" => &[names::DATE_PICKER, names::DATE_PICKER_TYPES],
        "rich-text" => &[names::RICH_TEXT],
        "file" => &[names::DROPZONE],
        "phone" => &[names::PHONE_INPUT],
        "select" | "multiselect" => &[names::SELECT],
        _ => &[],
    }
}
