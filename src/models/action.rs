/// Postback action a recipient can tap on a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationAction {
    Confirm,
    Reschedule,
    Cancel,
}

impl ConfirmationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationAction::Confirm => "confirm",
            ConfirmationAction::Reschedule => "reschedule",
            ConfirmationAction::Cancel => "cancel",
        }
    }

    /// Case-insensitive lookup; anything outside the three actions is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "confirm" => Some(ConfirmationAction::Confirm),
            "reschedule" => Some(ConfirmationAction::Reschedule),
            "cancel" => Some(ConfirmationAction::Cancel),
            _ => None,
        }
    }

    /// Value of the CRM `confirmation` enumeration option.
    pub fn status_code(&self) -> &'static str {
        match self {
            ConfirmationAction::Confirm => "YS06",
            ConfirmationAction::Reschedule => "Rescheduled",
            ConfirmationAction::Cancel => "gjLJ",
        }
    }
}
