use neuromate_core::models::category::Category;
use neuromate_core::models::demographics::{DemographicField, DemographicValue};
use neuromate_instruments::catalog::{FieldParser, QUESTIONS_PER_CATEGORY};
use neuromate_instruments::error::InstrumentError;
use neuromate_instruments::Catalog;

#[test]
fn demographics_follow_field_order() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.demographic_count(), 8);

    let fields: Vec<_> = catalog.demographics().iter().map(|d| d.field).collect();
    assert_eq!(fields, DemographicField::ALL);
    assert_eq!(catalog.first_prompt(), "What is your name?");
}

#[test]
fn only_age_is_parsed_as_integer() {
    let catalog = Catalog::standard();
    for prompt in catalog.demographics() {
        let expected = if prompt.field == DemographicField::Age {
            FieldParser::Integer
        } else {
            FieldParser::Text
        };
        assert_eq!(prompt.parser, expected, "{}", prompt.field);
    }
}

#[test]
fn categories_in_presentation_order_with_five_prompts_each() {
    let catalog = Catalog::standard();
    let names: Vec<_> = catalog.category_names().collect();
    assert_eq!(names, Category::ALL);

    for category in Category::ALL {
        assert_eq!(catalog.category_length(category), QUESTIONS_PER_CATEGORY);
    }
    assert_eq!(
        catalog.prompt_at(Category::Social, 0),
        "Do you find it hard to maintain eye contact with people?"
    );
    assert_eq!(
        catalog.prompt_at(Category::Learning, 4),
        "Do you completely shut down when given complex instructions?"
    );
}

#[test]
fn integer_parser_accepts_digits() {
    let value = FieldParser::Integer.parse(DemographicField::Age, "7").unwrap();
    assert_eq!(value, DemographicValue::Integer(7));
}

#[test]
fn integer_parser_rejects_words() {
    let err = FieldParser::Integer
        .parse(DemographicField::Age, "seven")
        .unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::InvalidAnswerFormat { field: DemographicField::Age, ref answer } if answer == "seven"
    ));
}

#[test]
fn catalog_serializes_every_prompt() {
    let json = serde_json::to_value(Catalog::standard()).unwrap();
    assert_eq!(json["demographics"].as_array().unwrap().len(), 8);
    assert_eq!(json["demographics"][1]["field"], "age");
    assert_eq!(json["demographics"][1]["parser"], "integer");
    assert_eq!(json["categories"][2]["category"], "hyperactivity");
    assert_eq!(json["categories"][2]["prompts"].as_array().unwrap().len(), 5);
}
