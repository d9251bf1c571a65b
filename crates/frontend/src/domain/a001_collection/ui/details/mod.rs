//! Collection create/edit dialog
//!
//! - view_model.rs: form state and the save command
//! - view.rs: the dialog
//! - field_editor.rs: ordered field-definition table

mod field_editor;
mod view;
mod view_model;

pub use field_editor::FieldEditor;
pub use view::CollectionDetails;
pub use view_model::CollectionDetailsViewModel;
