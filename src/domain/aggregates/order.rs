//! Order Draft
//!
//! Checkout collects a name and a delivery note, pairs them with the bag,
//! and hands everything to the message formatter. Nothing is kept once the
//! WhatsApp link is composed; confirmation happens in the chat, not here.

/// Customer-entered checkout fields. Both are free text and both may be left
/// blank; a blank field is simply omitted from the order message.
#[derive(Clone, Debug, Default)]
pub struct OrderDraft {
    customer_name: String,
    note: String,
}

impl OrderDraft {
    pub fn new() -> Self { Self::default() }

    pub fn for_customer(name: impl Into<String>) -> Self {
        let mut draft = Self::new();
        draft.customer_name = name.into();
        draft
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) { self.customer_name = name.into(); }
    pub fn set_note(&mut self, note: impl Into<String>) { self.note = note.into(); }

    /// Trimmed name, or `None` when the customer left the field blank.
    pub fn customer_name(&self) -> Option<&str> { non_blank(&self.customer_name) }

    /// Trimmed note, or `None` when the customer left the field blank.
    pub fn note(&self) -> Option<&str> { non_blank(&self.note) }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_read_as_absent() {
        let mut draft = OrderDraft::new();
        assert_eq!(draft.customer_name(), None);
        assert_eq!(draft.note(), None);
        draft.set_customer_name("   ");
        assert_eq!(draft.customer_name(), None);
        draft.set_customer_name("  Asha ");
        assert_eq!(draft.customer_name(), Some("Asha"));
        draft.set_note("Deliver before 10am");
        assert_eq!(draft.note(), Some("Deliver before 10am"));
    }
}
