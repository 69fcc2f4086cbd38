use nomad_auth::UserRole;
use nomad_models::RoleAssignmentRequest;

use crate::validator::rules::{Check, FieldRule, RuleSet};

pub const ROLE_ASSIGNMENT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "email",
        message: "Kindly provide a valid email",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, None),
            (Check::IsEmail, None),
        ],
    },
    FieldRule {
        field: "role",
        message: "Kindly provide a role",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (
                Check::IsString,
                Some("Role must be one of requester, travel_admin, super_admin, manager"),
            ),
            (
                Check::OneOf(&UserRole::NAMES),
                Some("Role must be one of requester, travel_admin, super_admin, manager"),
            ),
        ],
    },
];

impl RuleSet for RoleAssignmentRequest {
    const RULES: &'static [FieldRule] = ROLE_ASSIGNMENT_RULES;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::evaluate;
    use serde_json::json;

    #[test]
    fn test_role_must_be_known() {
        let body = json!({"email": "jane@example.com", "role": "admin"});
        let errors = evaluate(ROLE_ASSIGNMENT_RULES, body.as_object().unwrap());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "role");

        let body = json!({"email": "jane@example.com", "role": "manager"});
        assert!(evaluate(ROLE_ASSIGNMENT_RULES, body.as_object().unwrap()).is_empty());
    }

    #[test]
    fn test_non_string_values_are_field_errors() {
        let body = json!({"email": ["jane@example.com"], "role": ["manager"]});
        let errors = evaluate(ROLE_ASSIGNMENT_RULES, body.as_object().unwrap());
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "role"]);
    }

    #[test]
    fn test_missing_fields() {
        let body = json!({});
        let errors = evaluate(ROLE_ASSIGNMENT_RULES, body.as_object().unwrap());
        assert_eq!(errors[0].message, "Kindly provide a valid email");
        assert_eq!(errors[1].message, "Kindly provide a role");
    }
}
