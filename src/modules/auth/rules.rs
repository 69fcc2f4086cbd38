use nomad_models::SignupRequest;

use crate::validator::rules::{Check, FieldRule, RuleSet};

const TOO_LONG: &str = "Too long: enter a maximum of 255 characters";

pub const SIGNUP_RULES: &[FieldRule] = &[
    FieldRule {
        field: "first_name",
        message: "First name is required",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("First name must be a string")),
            (Check::IsAlpha, Some("First name must contain only letters")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "last_name",
        message: "Last name is required",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("Last name must be a string")),
            (Check::IsAlpha, Some("Last name must contain only letters")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "email",
        message: "Email is required",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("Kindly provide a valid email")),
            (Check::IsEmail, Some("Kindly provide a valid email")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "password",
        message: "Password is required",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("Password must be a string")),
            (Check::IsAlphanumeric, Some("Password must be alphanumeric")),
            (Check::MinLength(8), Some("Password must be at least 8 characters")),
        ],
    },
    FieldRule {
        field: "gender",
        message: "Gender must be a string",
        optional: true,
        checks: &[
            (Check::IsString, None),
            (Check::MaxLength(50), Some("Gender must be at most 50 characters")),
        ],
    },
    FieldRule {
        field: "birth_date",
        message: "Birth date must be a string",
        optional: true,
        checks: &[
            (Check::IsString, None),
            (Check::MaxLength(50), Some("Birth date must be at most 50 characters")),
        ],
    },
    FieldRule {
        field: "preferred_language",
        message: "Preferred language must be a string",
        optional: true,
        checks: &[
            (Check::IsString, None),
            (Check::MaxLength(100), Some("Preferred language must be at most 100 characters")),
        ],
    },
    FieldRule {
        field: "preferred_currency",
        message: "Preferred currency must be a string",
        optional: true,
        checks: &[
            (Check::IsString, None),
            (Check::MaxLength(20), Some("Preferred currency must be at most 20 characters")),
        ],
    },
    FieldRule {
        field: "location",
        message: "Location must be a string",
        optional: true,
        checks: &[
            (Check::IsString, None),
            (Check::MaxLength(255), Some("Location must be at most 255 characters")),
        ],
    },
];

impl RuleSet for SignupRequest {
    const RULES: &'static [FieldRule] = SIGNUP_RULES;
}
