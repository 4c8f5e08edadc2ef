//! The fixed catalog of packages the generator knows how to emit.

use crate::PackageDescriptor;

/// Package name constants, so resolution sites and tests never drift on
/// spelling.
pub mod names {
    pub const REACT: &str = "react";
    pub const REACT_DOM: &str = "react-dom";
    pub const NEXT: &str = "next";

    pub const DATA_TABLE: &str = "react-data-table-component";
    pub const ICONS: &str = "react-icons";

    pub const HOOK_FORM: &str = "react-hook-form";
    pub const ZOD: &str = "zod";
    pub const RESOLVERS: &str = "@hookform/resolvers";
    pub const TOAST: &str = "react-hot-toast";

    pub const DATE_PICKER: &str = "react-datepicker";
    pub const DATE_PICKER_TYPES: &str = "@types/react-datepicker";
    pub const RICH_TEXT: &str = "react-quill";
    pub const DROPZONE: &str = "react-dropzone";
    pub const PHONE_INPUT: &str = "react-phone-input-2";
    pub const SELECT: &str = "react-select";

    pub const TYPESCRIPT: &str = "typescript";
    pub const REACT_TYPES: &str = "@types/react";
    pub const NODE_TYPES: &str = "@types/node";
}

/// Builds the descriptor for a catalog package.
///
/// Only resolution sites call this, with names from [`names`]; an unknown
/// name is a programming error in this crate, so the fallback constraint is
/// deliberately permissive rather than a panic path.
pub(crate) fn descriptor(name: &str) -> PackageDescriptor {
    match name {
        names::REACT => PackageDescriptor::new(names::REACT, "^18.2.0"),
        names::REACT_DOM => PackageDescriptor::new(names::REACT_DOM, "^18.2.0"),
        names::NEXT => PackageDescriptor::new(names::NEXT, "^14.1.0"),

        names::DATA_TABLE => PackageDescriptor::new(names::DATA_TABLE, "^7.6.2"),
        names::ICONS => PackageDescriptor::new(names::ICONS, "^5.0.1"),

        names::HOOK_FORM => PackageDescriptor::new(names::HOOK_FORM, "^7.50.0"),
        names::ZOD => PackageDescriptor::new(names::ZOD, "^3.22.4"),
        names::RESOLVERS => PackageDescriptor::new(names::RESOLVERS, "^3.3.4")
            .with_depends_on(&[names::HOOK_FORM, names::ZOD]),
        names::TOAST => PackageDescriptor::new(names::TOAST, "^2.4.1"),

        names::DATE_PICKER => PackageDescriptor::new(names::DATE_PICKER, "^4.25.0")
            .with_depends_on(&[names::DATE_PICKER_TYPES]),
        names::DATE_PICKER_TYPES => PackageDescriptor::new(names::DATE_PICKER_TYPES, "^4.19.5"),
        names::RICH_TEXT => PackageDescriptor::new(names::RICH_TEXT, "^2.0.0"),
        names::DROPZONE => PackageDescriptor::new(names::DROPZONE, "^14.2.3"),
        names::PHONE_INPUT => PackageDescriptor::new(names::PHONE_INPUT, "^2.15.1"),
        names::SELECT => PackageDescriptor::new(names::SELECT, "^5.8.0"),

        other => PackageDescriptor::new(other, "*"),
    }
}

/// The development tooling set, identical for every resolution.
pub(crate) fn dev_packages() -> Vec<PackageDescriptor> {
    vec![
        PackageDescriptor::new(names::TYPESCRIPT, "^5.4.2"),
        PackageDescriptor::new(names::REACT_TYPES, "^18.2.61"),
        PackageDescriptor::new(names::NODE_TYPES, "^20.11.24"),
    ]
}
