//! Registration field names, values and their typed bindings

use super::schema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Location,
    Address,
    PhoneNumber,
    NinNumber,
}

impl FieldName {
    /// Every field, in form order
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Location,
        FieldName::Address,
        FieldName::PhoneNumber,
        FieldName::NinNumber,
    ];

    /// Name used in serialized submissions
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::Location => "location",
            FieldName::Address => "address",
            FieldName::PhoneNumber => "phoneNumber",
            FieldName::NinNumber => "ninNumber",
        }
    }

    /// Static binding for this field
    pub fn binding(self) -> &'static FieldBinding {
        match self {
            FieldName::Name => &BINDINGS[0],
            FieldName::Email => &BINDINGS[1],
            FieldName::Password => &BINDINGS[2],
            FieldName::ConfirmPassword => &BINDINGS[3],
            FieldName::Location => &BINDINGS[4],
            FieldName::Address => &BINDINGS[5],
            FieldName::PhoneNumber => &BINDINGS[6],
            FieldName::NinNumber => &BINDINGS[7],
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Current values of every registration field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub location: String,
    pub address: String,
    pub phone_number: String,
    pub nin_number: String,
}

impl FormValues {
    pub fn get(&self, field: FieldName) -> &str {
        (field.binding().get)(self)
    }
}

/// Typed accessor/mutator pair for one field, plus its presentation and rule
pub struct FieldBinding {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Render the value as bullets
    pub masked: bool,
    /// Maximum accepted input length in characters
    pub max_len: Option<usize>,
    pub get: fn(&FormValues) -> &str,
    pub get_mut: fn(&mut FormValues) -> &mut String,
    /// Returns the failure message for this field, if any
    pub validate: fn(&FormValues) -> Option<&'static str>,
}

impl FieldBinding {
    /// Append a character, respecting the input length limit.
    /// Returns false when the keystroke was rejected.
    pub fn push_char(&self, values: &mut FormValues, c: char) -> bool {
        let value = (self.get_mut)(values);
        if let Some(max) = self.max_len {
            if value.chars().count() >= max {
                return false;
            }
        }
        value.push(c);
        true
    }

    /// Remove the last character. Returns false if the value was already empty.
    pub fn pop_char(&self, values: &mut FormValues) -> bool {
        (self.get_mut)(values).pop().is_some()
    }

    /// Replace the whole value, truncating to the input length limit
    pub fn set(&self, values: &mut FormValues, value: &str) {
        let value = match self.max_len {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        *(self.get_mut)(values) = value;
    }

    /// Get the display value for rendering
    pub fn display_value(&self, values: &FormValues) -> String {
        let value = (self.get)(values);
        if self.masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("masked", &self.masked)
            .field("max_len", &self.max_len)
            .finish()
    }
}

/// Bindings in form order
pub static BINDINGS: [FieldBinding; 8] = [
    FieldBinding {
        name: FieldName::Name,
        label: "Name",
        placeholder: "Your Name",
        masked: false,
        max_len: None,
        get: |v| v.name.as_str(),
        get_mut: |v| &mut v.name,
        validate: schema::validate_name,
    },
    FieldBinding {
        name: FieldName::Email,
        label: "Email",
        placeholder: "name@company.com",
        masked: false,
        max_len: None,
        get: |v| v.email.as_str(),
        get_mut: |v| &mut v.email,
        validate: schema::validate_email,
    },
    FieldBinding {
        name: FieldName::Password,
        label: "Password",
        placeholder: "••••••••",
        masked: true,
        max_len: None,
        get: |v| v.password.as_str(),
        get_mut: |v| &mut v.password,
        validate: schema::validate_password,
    },
    FieldBinding {
        name: FieldName::ConfirmPassword,
        label: "Confirm Password",
        placeholder: "••••••••",
        masked: true,
        max_len: None,
        get: |v| v.confirm_password.as_str(),
        get_mut: |v| &mut v.confirm_password,
        validate: schema::validate_confirm_password,
    },
    FieldBinding {
        name: FieldName::Location,
        label: "Location",
        placeholder: "Your Location",
        masked: false,
        max_len: None,
        get: |v| v.location.as_str(),
        get_mut: |v| &mut v.location,
        validate: schema::validate_location,
    },
    FieldBinding {
        name: FieldName::Address,
        label: "Address",
        placeholder: "Your Address",
        masked: false,
        max_len: None,
        get: |v| v.address.as_str(),
        get_mut: |v| &mut v.address,
        validate: schema::validate_address,
    },
    FieldBinding {
        name: FieldName::PhoneNumber,
        label: "Phone Number",
        placeholder: "Your Phone Number",
        masked: false,
        max_len: Some(11),
        get: |v| v.phone_number.as_str(),
        get_mut: |v| &mut v.phone_number,
        validate: schema::validate_phone_number,
    },
    FieldBinding {
        name: FieldName::NinNumber,
        label: "NIN Number",
        placeholder: "Your NIN Number",
        masked: false,
        max_len: Some(11),
        get: |v| v.nin_number.as_str(),
        get_mut: |v| &mut v.nin_number,
        validate: schema::validate_nin_number,
    },
];
