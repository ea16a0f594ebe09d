// Unit tests focus on the pure rule set shared by live and server-side validation

use project_intake::validation::{FormField, check_field, rules::*};

#[test]
fn project_code_accepts_only_letter_hyphen_digit_pattern() {
    assert!(validate_project_code("ABC-123").is_ok());
    assert!(validate_project_code("abc-123").is_err());
    assert!(validate_project_code("ABCD-12").is_err());

    let rejected = [
        "", "A", "AB-123", "ABC-12", "ABC_123", "ABC 123", "ABC--123", "123-ABC", "AbC-123",
        "ABC-12A", "ABC-123 ", "-ABC-123", "ABCDEFG",
    ];
    for value in rejected {
        assert!(validate_project_code(value).is_err(), "{value:?} should fail");
        assert!(!is_project_code_format(value));
    }
}

#[test]
fn project_code_pattern_holds_for_every_single_character_mutation() {
    let valid = "QRS-456";
    for position in 0..valid.len() {
        for replacement in ['a', 'z', '-', '0', 'Z', ' ', '*'] {
            let mut chars: Vec<char> = valid.chars().collect();
            chars[position] = replacement;
            let candidate: String = chars.into_iter().collect();

            let letter_slot = position < 3;
            let digit_slot = position > 3;
            let expect_ok = (letter_slot && replacement.is_ascii_uppercase())
                || (digit_slot && replacement.is_ascii_digit())
                || (position == 3 && replacement == '-');
            assert_eq!(
                validate_project_code(&candidate).is_ok(),
                expect_ok,
                "{candidate:?}"
            );
        }
    }
}

#[test]
fn description_requires_ten_trimmed_characters() {
    assert!(validate_description("123456789").is_err());
    assert!(validate_description("1234567890").is_ok());
    assert!(validate_description("    1234567890    ").is_ok());
    assert!(validate_description("    123456789     ").is_err());
    assert_eq!(
        check_field(FormField::Description, "   ").error,
        DESCRIPTION_REQUIRED
    );
}

#[test]
fn product_line_only_requires_a_selection() {
    assert_eq!(check_field(FormField::ProductLine, "").error, PRODUCT_LINE_REQUIRED);
    assert!(check_field(FormField::ProductLine, "Other").valid);
}
