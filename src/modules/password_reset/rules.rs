use nomad_models::{NewPasswordRequest, PasswordResetRequest};

use crate::validator::rules::{Check, FieldRule, RuleSet};

pub const RESET_REQUEST_RULES: &[FieldRule] = &[FieldRule {
    field: "email",
    message: "Kindly provide a valid email",
    optional: false,
    checks: &[
        (Check::NotEmpty, None),
        (Check::IsString, None),
        (Check::IsEmail, None),
    ],
}];

pub const NEW_PASSWORD_RULES: &[FieldRule] = &[FieldRule {
    field: "password",
    message: "Password is required",
    optional: false,
    checks: &[
        (Check::NotEmpty, None),
        (Check::IsString, Some("Password must be a string")),
        (Check::IsAlphanumeric, Some("Password must be alphanumeric")),
        (Check::MinLength(8), Some("Password must be at least 8 characters")),
    ],
}];

impl RuleSet for PasswordResetRequest {
    const RULES: &'static [FieldRule] = RESET_REQUEST_RULES;
}

impl RuleSet for NewPasswordRequest {
    const RULES: &'static [FieldRule] = NEW_PASSWORD_RULES;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::evaluate;
    use serde_json::json;

    #[test]
    fn test_reset_email_must_be_a_string() {
        for body in [json!({"email": ["jane@example.com"]}), json!({"email": 7})] {
            let errors = evaluate(RESET_REQUEST_RULES, body.as_object().unwrap());
            assert_eq!(errors.len(), 1, "body {}", body);
            assert_eq!(errors[0].message, "Kindly provide a valid email");
        }

        let body = json!({"email": "jane@example.com"});
        assert!(evaluate(RESET_REQUEST_RULES, body.as_object().unwrap()).is_empty());
    }
}
