//! Contact list of the messaging screen.

use crate::types::Viewer;
use serde::Serialize;

/// Name shown for the built-in assistant
pub const ASSISTANT_NAME: &str = "IA";

/// Address the assistant conversation is routed to
pub const ASSISTANT_EMAIL: &str = "ia@example.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub kind: ContactKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    /// The viewer's personal mentor
    Mentor,
    Assistant,
}

/// Contacts a viewer can message: their mentor, then the assistant.
///
/// The mentor entry is only listed when both the mentor's name and email
/// are known.
pub fn contact_list(viewer: &Viewer) -> Vec<Contact> {
    let mut contacts = Vec::with_capacity(2);

    if let (Some(name), Some(email)) = (&viewer.mentor_name, &viewer.mentor_email) {
        contacts.push(Contact {
            name: name.clone(),
            email: email.clone(),
            kind: ContactKind::Mentor,
        });
    }

    contacts.push(Contact {
        name: ASSISTANT_NAME.to_string(),
        email: ASSISTANT_EMAIL.to_string(),
        kind: ContactKind::Assistant,
    });

    contacts
}
