/// UI module exports
pub mod confirm_button;

pub use confirm_button::{ConfirmButton, ConfirmButtonProps};
