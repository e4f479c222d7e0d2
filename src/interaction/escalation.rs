//! The interactive prompt posted when a message collects enough reactions.

use crate::base::{
    phrases::{ESCALATION_CALLBACK_ID, ESCALATION_PROMPT},
    types::{ActionConfirm, Attachment, AttachmentAction, PostOptions},
};

/// Text and options for the escalation prompt.
pub fn escalation_prompt() -> (&'static str, PostOptions) {
    (ESCALATION_PROMPT, PostOptions::as_user().with_attachments(vec![escalation_attachment()]))
}

fn escalation_attachment() -> Attachment {
    Attachment {
        text: "Choose what to do with it.".to_string(),
        fallback: "You are unable to choose an option.".to_string(),
        callback_id: ESCALATION_CALLBACK_ID.to_string(),
        color: "#3AA3E3".to_string(),
        attachment_type: "default".to_string(),
        actions: vec![
            button("Escalate", "confirm", Some("primary"), Some(confirm_dialog())),
            button("Ignore", "deny", Some("danger"), None),
            button("Dismiss", "dismiss", None, None),
        ],
    }
}

fn button(text: &str, value: &str, style: Option<&str>, confirm: Option<ActionConfirm>) -> AttachmentAction {
    AttachmentAction {
        name: "decision".to_string(),
        text: text.to_string(),
        kind: "button".to_string(),
        value: value.to_string(),
        style: style.map(str::to_string),
        confirm,
    }
}

fn confirm_dialog() -> ActionConfirm {
    ActionConfirm {
        title: "Are you sure?".to_string(),
        text: "This will flag the message for the on-call team.".to_string(),
        ok_text: "Yes".to_string(),
        dismiss_text: "No".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_offers_confirm_deny_and_dismiss() {
        let (text, options) = escalation_prompt();
        let attachments = options.attachments.unwrap();

        assert_eq!(text, ESCALATION_PROMPT);
        assert!(options.as_user);
        assert_eq!(attachments.len(), 1);

        let values: Vec<_> = attachments[0].actions.iter().map(|a| a.value.as_str()).collect();
        assert_eq!(values, vec!["confirm", "deny", "dismiss"]);
    }

    #[test]
    fn only_the_confirm_button_asks_again() {
        let (_, options) = escalation_prompt();
        let actions = &options.attachments.unwrap()[0].actions;

        assert!(actions[0].confirm.is_some());
        assert!(actions[1..].iter().all(|a| a.confirm.is_none()));
    }
}
