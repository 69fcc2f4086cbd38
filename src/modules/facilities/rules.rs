use nomad_models::CreateFacilityDto;

use crate::validator::rules::{Check, FieldRule, RuleSet};

pub const EMPTY_FACILITY_BODY: &str = "You have not entered any facilities details";

const TOO_LONG: &str = "Too long: enter a maximum of 255 characters";

pub const FACILITY_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        message: "Kindly Provide a name for your facility",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("The name of your facility must be a string")),
            (Check::MinLength(2), Some("Too short: enter a minimum of 2 characters")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "street",
        message: "Kindly Provide the street name of your facility",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("The street must be a string")),
            (Check::ContainsLetter, Some("Street must contain atleast a letter")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "city",
        message: "City of location of your facility",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("The city of your facility must be letters only")),
            (Check::IsAlpha, Some("The city of your facility must be letters only")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "country",
        message: "Kindly Provide a name for your facility",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("The country of your facility must be letters only")),
            (Check::IsAlpha, Some("The country of your facility must be letters only")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "address",
        message: "Kindly Provide a valid address for your facility",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("The address of your facility must be a string")),
            (
                Check::ContainsLetter,
                Some("The address of your facility must contain atleast one letter"),
            ),
            (Check::MinLength(5), Some("Too short: enter a minimum of 5 characters")),
            (Check::MaxLength(255), Some(TOO_LONG)),
        ],
    },
    FieldRule {
        field: "number_of_rooms",
        message: "Number of Rooms must not be empty",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsInt, Some("Number of Rooms must be a a number")),
            (Check::Min(0), Some("Number of Rooms cannot be negative")),
        ],
    },
    FieldRule {
        field: "available_space",
        message: "Available Space must not be empty",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsInt, Some("Awailable space must be a a number")),
            (Check::Min(0), Some("Available Space cannot be negative")),
        ],
    },
    FieldRule {
        field: "images",
        message: "Images must be an array",
        optional: false,
        checks: &[(Check::IsArray, None)],
    },
    FieldRule {
        field: "description",
        message: "Enter few sentences to describe you facility",
        optional: false,
        checks: &[
            (Check::NotEmpty, None),
            (Check::IsString, Some("The description of your facility must be a string")),
            (Check::ContainsLetter, Some("description of your facility must contain letters")),
            (Check::MinLength(10), Some("Too short: enter a minimum of 10 characters")),
        ],
    },
];

impl RuleSet for CreateFacilityDto {
    const RULES: &'static [FieldRule] = FACILITY_RULES;
    const EMPTY_BODY_MESSAGE: Option<&'static str> = Some(EMPTY_FACILITY_BODY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::evaluate;
    use serde_json::{Value, json};

    fn valid() -> Value {
        json!({
            "name": "Transcorp",
            "street": "34 Idu",
            "city": "Abuja",
            "country": "Nigeria",
            "address": "Otolo, Nnewi",
            "number_of_rooms": 8,
            "available_space": 7,
            "images": "https://cloudinary.com/16x16/1.png,https://cloudinary.com/16x16/1.png",
            "description": "Our services are the best"
        })
    }

    fn errors_for(patch: Value) -> Vec<(String, String)> {
        let mut body = valid();
        for (key, value) in patch.as_object().unwrap() {
            if value.is_null() {
                body.as_object_mut().unwrap().remove(key);
            } else {
                body[key] = value.clone();
            }
        }
        evaluate(FACILITY_RULES, body.as_object().unwrap())
            .into_iter()
            .map(|e| (e.field, e.message))
            .collect()
    }

    #[test]
    fn test_valid_facility_passes() {
        assert!(errors_for(json!({})).is_empty());
        assert!(errors_for(json!({"images": ["a.png"], "number_of_rooms": "8"})).is_empty());
    }

    #[test]
    fn test_missing_name_is_first_error() {
        let errors = errors_for(json!({"name": null}));
        assert_eq!(
            errors[0],
            (
                "name".to_string(),
                "Kindly Provide a name for your facility".to_string()
            )
        );
    }

    #[test]
    fn test_field_messages() {
        let cases = [
            (json!({"name": 4}), "The name of your facility must be a string"),
            (json!({"name": "T"}), "Too short: enter a minimum of 2 characters"),
            (json!({"street": "1234"}), "Street must contain atleast a letter"),
            (json!({"city": "Abuja 2"}), "The city of your facility must be letters only"),
            (json!({"country": "N1geria"}), "The country of your facility must be letters only"),
            (json!({"address": "12345"}), "The address of your facility must contain atleast one letter"),
            (json!({"address": "Oto"}), "Too short: enter a minimum of 5 characters"),
            (json!({"number_of_rooms": "eight"}), "Number of Rooms must be a a number"),
            (json!({"number_of_rooms": -1}), "Number of Rooms cannot be negative"),
            (json!({"available_space": "seven"}), "Awailable space must be a a number"),
            (json!({"available_space": -3}), "Available Space cannot be negative"),
            (json!({"number_of_rooms": 3000000000u64}), "Number of Rooms must be a a number"),
            (json!({"available_space": "9999999999"}), "Awailable space must be a a number"),
            (json!({"city": true}), "The city of your facility must be letters only"),
            (json!({"country": ["Nigeria"]}), "The country of your facility must be letters only"),
            (json!({"images": null}), "Images must be an array"),
            (json!({"images": 5}), "Images must be an array"),
            (json!({"description": "Short"}), "Too short: enter a minimum of 10 characters"),
            (json!({"description": "1234567890"}), "description of your facility must contain letters"),
        ];

        for (patch, expected) in cases {
            let errors = errors_for(patch.clone());
            assert_eq!(errors.len(), 1, "patch {} gave {:?}", patch, errors);
            assert_eq!(errors[0].1, expected, "patch {}", patch);
        }
    }

    #[test]
    fn test_text_columns_cap_at_255_characters() {
        let long = "a".repeat(256);
        for field in ["name", "street", "city", "country", "address"] {
            let errors = errors_for(json!({ field: long.clone() }));
            assert_eq!(
                errors,
                vec![(field.to_string(), TOO_LONG.to_string())],
                "field {}",
                field
            );
        }

        assert!(errors_for(json!({"name": "a".repeat(255)})).is_empty());
    }

    #[test]
    fn test_errors_follow_declaration_order() {
        let errors = errors_for(json!({"description": null, "name": null, "city": null}));
        let fields: Vec<_> = errors.iter().map(|(field, _)| field.as_str()).collect();
        assert_eq!(fields, vec!["name", "city", "description"]);
    }
}
