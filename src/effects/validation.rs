use std::collections::HashMap;

pub const INVALID_BORDER: &str = "#ef4444";
pub const VALID_BORDER: &str = "#10b981";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldValidity {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

impl FieldValidity {
    pub fn on_blur(required: bool, value: &str) -> Self {
        if required && value.is_empty() {
            FieldValidity::Invalid
        } else {
            FieldValidity::Valid
        }
    }

    /// Typing a value marks the field valid at once; clearing it changes nothing.
    pub fn on_input(self, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            FieldValidity::Valid
        }
    }

    pub fn border_color(self) -> Option<&'static str> {
        match self {
            FieldValidity::Untouched => None,
            FieldValidity::Valid => Some(VALID_BORDER),
            FieldValidity::Invalid => Some(INVALID_BORDER),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldEvent {
    Blur {
        name: String,
        required: bool,
        value: String,
    },
    Input {
        name: String,
        value: String,
    },
}

/// Per-field feedback for one form. Never consulted by submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValidity {
    fields: HashMap<String, FieldValidity>,
}

impl FormValidity {
    pub fn get(&self, name: &str) -> FieldValidity {
        self.fields.get(name).copied().unwrap_or_default()
    }

    pub fn apply(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::Blur { name, required, value } => {
                self.fields.insert(name, FieldValidity::on_blur(required, &value));
            }
            FieldEvent::Input { name, value } => {
                let next = self.get(&name).on_input(&value);
                self.fields.insert(name, next);
            }
        }
    }
}
