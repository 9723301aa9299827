//! Contact form: local editing and a submission stub.
//!
//! Submission is intercepted: the fields are handed to the caller as a
//! [`ContactSubmission`], the form resets to empty, and an acknowledgment
//! line is shown. Actual delivery is somebody else's job.

use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// Single-line text input with a byte-offset cursor.
#[derive(Debug, Default)]
pub struct FieldInput {
    pub text: String,
    pub cursor: usize,
}

impl FieldInput {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// The submitted field values, handed out for external delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: FieldInput,
    pub email: FieldInput,
    pub message: FieldInput,
    focus: Option<Field>,
    acknowledgment: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = Some(field);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(Field::Name, Field::next));
    }

    pub fn focus_prev(&mut self) {
        self.focus = Some(self.focus.map_or(Field::Message, Field::prev));
    }

    pub fn field(&self, field: Field) -> &FieldInput {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldInput> {
        match self.focus? {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Message => Some(&mut self.message),
        }
    }

    pub fn acknowledgment(&self) -> Option<&str> {
        self.acknowledgment.as_deref()
    }

    /// Intercept submission: capture the fields, reset them to empty, and
    /// show an acknowledgment. No validation, no delivery.
    pub fn submit(&mut self) -> ContactSubmission {
        let submission = ContactSubmission {
            name: std::mem::take(&mut self.name.text),
            email: std::mem::take(&mut self.email.text),
            message: std::mem::take(&mut self.message.text),
        };
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.acknowledgment = Some(format!(
            "Thanks for your message! ({})",
            Local::now().format("%H:%M")
        ));
        submission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut FieldInput, s: &str) {
        for c in s.chars() {
            input.insert_char(c);
        }
    }

    #[test]
    fn test_submit_captures_and_resets_fields() {
        let mut form = ContactForm::new();
        type_str(&mut form.name, "Ada");
        type_str(&mut form.email, "ada@example.com");
        type_str(&mut form.message, "hello");

        let sub = form.submit();
        assert_eq!(sub.name, "Ada");
        assert_eq!(sub.email, "ada@example.com");
        assert_eq!(sub.message, "hello");

        assert!(form.name.text.is_empty());
        assert!(form.email.text.is_empty());
        assert!(form.message.text.is_empty());
        assert_eq!(form.name.cursor, 0);
        assert!(form.acknowledgment().is_some());
    }

    #[test]
    fn test_field_editing_utf8() {
        let mut input = FieldInput::default();
        type_str(&mut input, "héllo");
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hélo");
        input.move_home();
        input.move_right();
        input.delete_back();
        assert_eq!(input.text, "élo");
    }

    #[test]
    fn test_focus_cycle() {
        let mut form = ContactForm::new();
        form.focus_next();
        assert_eq!(form.focus(), Some(Field::Name));
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus(), Some(Field::Message));
        form.focus_next();
        assert_eq!(form.focus(), Some(Field::Name));
        form.focus_prev();
        assert_eq!(form.focus(), Some(Field::Message));
    }
}
