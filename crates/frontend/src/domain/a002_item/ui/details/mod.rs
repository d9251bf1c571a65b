mod view;
mod view_model;

pub use view::ItemModal;
pub use view_model::{input_value, ItemDetailsViewModel, PendingMapping};
