use crate::models::{Component, ConfirmationAction, PostbackAction, TemplateValues};

struct ButtonRule {
    action: ConfirmationAction,
    style: &'static str,
    color: &'static str,
    /// Label used when the template field is present but empty. `None`
    /// suppresses the button instead.
    empty_fallback: Option<&'static str>,
    label: fn(&TemplateValues) -> Option<&str>,
}

/// Footer order is fixed: confirm, reschedule, cancel.
const RULES: [ButtonRule; 3] = [
    ButtonRule {
        action: ConfirmationAction::Confirm,
        style: "primary",
        color: "#22C55E",
        empty_fallback: None,
        label: |v| v.confirm_label.as_deref(),
    },
    ButtonRule {
        action: ConfirmationAction::Reschedule,
        style: "secondary",
        color: "#E5E7EB",
        empty_fallback: None,
        label: |v| v.reschedule_label.as_deref(),
    },
    ButtonRule {
        action: ConfirmationAction::Cancel,
        style: "primary",
        color: "#EF4444",
        empty_fallback: Some("Cancel"),
        label: |v| v.cancel_label.as_deref(),
    },
];

/// Builds one postback button per label the template defines.
pub fn assemble(values: &TemplateValues, appointment_id: &str, table_row_id: &str) -> Vec<Component> {
    RULES
        .iter()
        .filter_map(|rule| {
            let label = match (rule.label)(values)? {
                "" => rule.empty_fallback?,
                label => label,
            };
            Some(Component::Button {
                style: rule.style,
                color: rule.color,
                action: PostbackAction::new(
                    label.to_string(),
                    rule.action,
                    appointment_id,
                    table_row_id,
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(confirm: Option<&str>, reschedule: Option<&str>, cancel: Option<&str>) -> TemplateValues {
        TemplateValues {
            confirm_label: confirm.map(String::from),
            reschedule_label: reschedule.map(String::from),
            cancel_label: cancel.map(String::from),
            ..Default::default()
        }
    }

    fn summary(buttons: &[Component]) -> Vec<(&'static str, &'static str, String, String)> {
        buttons
            .iter()
            .map(|b| match b {
                Component::Button {
                    style,
                    color,
                    action,
                } => (*style, *color, action.label.clone(), action.data.clone()),
                other => panic!("unexpected component {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_confirm_only() {
        let buttons = assemble(&labels(Some("Confirm"), None, None), "42", "7");
        assert_eq!(
            summary(&buttons),
            vec![(
                "primary",
                "#22C55E",
                "Confirm".to_string(),
                "action=confirm&appointmentId=42&tableRowId=7".to_string()
            )]
        );
    }

    #[test]
    fn test_all_three_in_fixed_order() {
        let buttons = assemble(&labels(Some("Yes"), Some("Move"), Some("Drop")), "42", "7");
        let got = summary(&buttons);
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].2, "Yes");
        assert_eq!(got[1], (
            "secondary",
            "#E5E7EB",
            "Move".to_string(),
            "action=reschedule&appointmentId=42&tableRowId=7".to_string()
        ));
        assert_eq!(got[2], (
            "primary",
            "#EF4444",
            "Drop".to_string(),
            "action=cancel&appointmentId=42&tableRowId=7".to_string()
        ));
    }

    #[test]
    fn test_no_labels_no_buttons() {
        assert!(assemble(&TemplateValues::default(), "42", "7").is_empty());
    }

    #[test]
    fn test_gap_keeps_order() {
        let got = summary(&assemble(&labels(None, Some("Move"), Some("Drop")), "1", "2"));
        let labels: Vec<&str> = got.iter().map(|b| b.2.as_str()).collect();
        assert_eq!(labels, vec!["Move", "Drop"]);
    }

    #[test]
    fn test_empty_labels() {
        // empty confirm/reschedule suppress; empty cancel falls back
        let got = summary(&assemble(&labels(Some(""), Some(""), Some("")), "1", "2"));
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].1, "#EF4444");
        assert_eq!(got[0].2, "Cancel");
    }
}
