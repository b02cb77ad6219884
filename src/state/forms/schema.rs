//! Registration validation schema
//!
//! Each rule reads a snapshot of [`FormValues`] and yields the message for the
//! field it guards. Rules are independent except the confirmation rule, which
//! compares against the current password. An empty value reports only its
//! "required" message.

use super::field::{FieldName, FormValues};
use crate::error::FieldValidationError;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// WHATWG "valid e-mail address" production
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// 0, then 7/8/9, then 0/1, then eight more digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0[789][01][0-9]{8}$").expect("phone pattern is valid"));

static NIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("NIN pattern is valid"));

/// Field errors keyed by field, in form order
pub type FieldErrors = BTreeMap<FieldName, FieldValidationError>;

/// Evaluate every rule against a values snapshot
pub fn validate(values: &FormValues) -> FieldErrors {
    validate_fields(values, &FieldName::ALL)
}

/// Evaluate the rules of the given fields only
pub fn validate_fields(values: &FormValues, fields: &[FieldName]) -> FieldErrors {
    fields
        .iter()
        .filter_map(|&field| {
            validate_field(values, field).map(|message| {
                (field, FieldValidationError::new(field, message))
            })
        })
        .collect()
}

/// Evaluate a single field's rule
pub fn validate_field(values: &FormValues, field: FieldName) -> Option<&'static str> {
    (field.binding().validate)(values)
}

pub fn validate_name(values: &FormValues) -> Option<&'static str> {
    required(&values.name, "Name is required")
}

pub fn validate_email(values: &FormValues) -> Option<&'static str> {
    required(&values.email, "Email is required").or_else(|| {
        matches(&EMAIL_PATTERN, &values.email, "Invalid email format")
    })
}

pub fn validate_password(values: &FormValues) -> Option<&'static str> {
    required(&values.password, "Password is required")
}

pub fn validate_confirm_password(values: &FormValues) -> Option<&'static str> {
    required(&values.confirm_password, "Confirm Password is required").or_else(|| {
        (values.confirm_password != values.password).then_some("Passwords must match")
    })
}

pub fn validate_location(values: &FormValues) -> Option<&'static str> {
    required(&values.location, "Location is required")
}

pub fn validate_address(values: &FormValues) -> Option<&'static str> {
    required(&values.address, "Address is required")
}

pub fn validate_phone_number(values: &FormValues) -> Option<&'static str> {
    required(&values.phone_number, "Phone Number is required").or_else(|| {
        matches(
            &PHONE_PATTERN,
            &values.phone_number,
            "Invalid Nigerian phone number",
        )
    })
}

pub fn validate_nin_number(values: &FormValues) -> Option<&'static str> {
    required(&values.nin_number, "NIN Number is required")
        .or_else(|| matches(&NIN_PATTERN, &values.nin_number, "NIN must be 11 digits"))
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.is_empty().then_some(message)
}

fn matches(pattern: &Regex, value: &str, message: &'static str) -> Option<&'static str> {
    (!pattern.is_match(value)).then_some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
            location: "Lagos".to_string(),
            address: "12 Marina Road".to_string(),
            phone_number: "08012345678".to_string(),
            nin_number: "12345678901".to_string(),
        }
    }

    mod whole_form {
        use super::*;

        #[test]
        fn test_valid_values_have_no_errors() {
            assert!(validate(&valid_values()).is_empty());
        }

        #[test]
        fn test_empty_form_reports_required_for_every_field() {
            let errors = validate(&FormValues::default());
            assert_eq!(errors.len(), 8);
            assert_eq!(errors[&FieldName::Name].message, "Name is required");
            assert_eq!(errors[&FieldName::Email].message, "Email is required");
            assert_eq!(errors[&FieldName::Password].message, "Password is required");
            assert_eq!(
                errors[&FieldName::ConfirmPassword].message,
                "Confirm Password is required"
            );
            assert_eq!(errors[&FieldName::Location].message, "Location is required");
            assert_eq!(errors[&FieldName::Address].message, "Address is required");
            assert_eq!(
                errors[&FieldName::PhoneNumber].message,
                "Phone Number is required"
            );
            assert_eq!(
                errors[&FieldName::NinNumber].message,
                "NIN Number is required"
            );
        }

        #[test]
        fn test_each_missing_field_reports_required() {
            for field in FieldName::ALL {
                let mut values = valid_values();
                field.binding().set(&mut values, "");
                let errors = validate(&values);
                assert!(
                    errors[&field].message.ends_with("is required"),
                    "{field} should be required"
                );
            }
        }

        #[test]
        fn test_validate_fields_limits_scope() {
            let errors = validate_fields(
                &FormValues::default(),
                &[FieldName::Location, FieldName::Address],
            );
            let keys: Vec<_> = errors.keys().copied().collect();
            assert_eq!(keys, vec![FieldName::Location, FieldName::Address]);
        }

        #[test]
        fn test_error_carries_field_name() {
            let errors = validate(&FormValues::default());
            for (field, err) in &errors {
                assert_eq!(*field, err.field);
            }
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_standard_addresses() {
            for email in ["ada@example.com", "a.b+c@mail.example.ng", "x@localhost"] {
                let values = FormValues {
                    email: email.to_string(),
                    ..valid_values()
                };
                assert_eq!(validate_email(&values), None, "{email}");
            }
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for email in ["ada", "ada@", "@example.com", "ada@@example.com", "a b@x.com"] {
                let values = FormValues {
                    email: email.to_string(),
                    ..valid_values()
                };
                assert_eq!(
                    validate_email(&values),
                    Some("Invalid email format"),
                    "{email}"
                );
            }
        }
    }

    mod phone_number {
        use super::*;

        fn check(phone: &str) -> Option<&'static str> {
            validate_phone_number(&FormValues {
                phone_number: phone.to_string(),
                ..valid_values()
            })
        }

        #[test]
        fn test_valid_prefixes() {
            assert_eq!(check("08012345678"), None);
            assert_eq!(check("07012345678"), None);
            assert_eq!(check("09112345678"), None);
            assert_eq!(check("08112345678"), None);
        }

        #[test]
        fn test_third_digit_must_be_zero_or_one() {
            assert_eq!(check("08212345678"), Some("Invalid Nigerian phone number"));
        }

        #[test]
        fn test_second_digit_must_be_seven_to_nine() {
            assert_eq!(check("06012345678"), Some("Invalid Nigerian phone number"));
        }

        #[test]
        fn test_must_start_with_zero() {
            assert_eq!(check("18012345678"), Some("Invalid Nigerian phone number"));
        }

        #[test]
        fn test_length_must_be_eleven() {
            assert_eq!(check("0801234567"), Some("Invalid Nigerian phone number"));
            assert_eq!(check("080123456789"), Some("Invalid Nigerian phone number"));
        }

        #[test]
        fn test_non_ascii_digits_rejected() {
            assert_eq!(check("080١٢٣٤٥٦٧٨"), Some("Invalid Nigerian phone number"));
        }
    }

    mod nin_number {
        use super::*;

        fn check(nin: &str) -> Option<&'static str> {
            validate_nin_number(&FormValues {
                nin_number: nin.to_string(),
                ..valid_values()
            })
        }

        #[test]
        fn test_eleven_digits_valid() {
            assert_eq!(check("12345678901"), None);
        }

        #[test]
        fn test_ten_digits_invalid() {
            assert_eq!(check("1234567890"), Some("NIN must be 11 digits"));
        }

        #[test]
        fn test_letters_invalid() {
            assert_eq!(check("1234567890a"), Some("NIN must be 11 digits"));
        }
    }

    mod confirm_password {
        use super::*;

        #[test]
        fn test_matching_passwords_valid() {
            let values = FormValues {
                password: "abc123".to_string(),
                confirm_password: "abc123".to_string(),
                ..valid_values()
            };
            assert_eq!(validate_confirm_password(&values), None);
        }

        #[test]
        fn test_mismatch_reports_must_match() {
            let values = FormValues {
                password: "abc123".to_string(),
                confirm_password: "abc124".to_string(),
                ..valid_values()
            };
            assert_eq!(
                validate_confirm_password(&values),
                Some("Passwords must match")
            );
        }

        #[test]
        fn test_empty_confirmation_reports_required_first() {
            let values = FormValues {
                confirm_password: String::new(),
                ..valid_values()
            };
            assert_eq!(
                validate_confirm_password(&values),
                Some("Confirm Password is required")
            );
        }

        #[test]
        fn test_follows_password_changes() {
            let mut values = valid_values();
            values.password.push('!');
            assert_eq!(
                validate_confirm_password(&values),
                Some("Passwords must match")
            );
        }
    }
}
