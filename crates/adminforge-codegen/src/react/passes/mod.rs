//! Feature passes for React/Next.js admin modules.

pub mod form;
pub mod manifest;
pub mod zod_schema;

pub use form::FormFieldsPass;
pub use manifest::ManifestPass;
pub use zod_schema::ZodSchemaPass;
