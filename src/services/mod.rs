pub mod ack_page;
pub mod buttons;
pub mod hubspot;
pub mod messaging;
pub mod template;
