use super::*;

#[test]
fn every_field_has_a_label() {
    for field in FieldId::ALL {
        assert!(!field_spec(field).label.is_empty(), "{field:?}");
    }
}

#[test]
fn password_fields_start_masked() {
    assert_eq!(field_spec(FieldId::Password).input_type, "password");
    assert_eq!(field_spec(FieldId::ConfirmPassword).input_type, "password");
    assert_eq!(field_spec(FieldId::Email).input_type, "email");
    assert_eq!(field_spec(FieldId::FullName).input_type, "text");
}

#[test]
fn new_password_autocomplete_on_both_password_inputs() {
    assert_eq!(field_spec(FieldId::Password).autocomplete, "new-password");
    assert_eq!(field_spec(FieldId::ConfirmPassword).autocomplete, "new-password");
}

#[test]
fn toggle_ids_match_page_markup() {
    assert_eq!(toggle_id(FieldId::Password).as_deref(), Some("passwordToggle"));
    assert_eq!(toggle_id(FieldId::ConfirmPassword).as_deref(), Some("confirmPasswordToggle"));
}

#[test]
fn only_password_inputs_get_a_toggle() {
    assert_eq!(toggle_id(FieldId::FullName), None);
    assert_eq!(toggle_id(FieldId::Email), None);
}
