pub mod action;
pub mod booking;
pub mod message;
pub mod template;

pub use action::ConfirmationAction;
pub use booking::BookingRequest;
pub use message::{Component, FlexContents, FlexMessage, PostbackAction, PushMessage};
pub use template::{TemplateRow, TemplateValues};
