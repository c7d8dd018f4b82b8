use super::*;

fn complete_form() -> RegisterRequest {
    RegisterRequest {
        name: " City Care Pharmacy ".to_owned(),
        email: "owner@citycare.in ".to_owned(),
        password: "s3cret".to_owned(),
        is_pharmacy: true,
        address_line: "12 MG Road".to_owned(),
        city: "Bengaluru".to_owned(),
        state: "Karnataka".to_owned(),
        postal_code: "560001".to_owned(),
        country: "India".to_owned(),
    }
}

#[test]
fn validate_register_form_trims_text_fields() {
    let form = validate_register_form(&complete_form()).unwrap();
    assert_eq!(form.name, "City Care Pharmacy");
    assert_eq!(form.email, "owner@citycare.in");
    assert!(form.is_pharmacy);
}

#[test]
fn validate_register_form_rejects_blank_field() {
    let mut form = complete_form();
    form.city = "   ".to_owned();
    assert_eq!(validate_register_form(&form), Err(MISSING_FIELDS_MESSAGE));

    let mut form = complete_form();
    form.password.clear();
    assert_eq!(validate_register_form(&form), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_register_form_allows_individual_accounts() {
    let mut form = complete_form();
    form.is_pharmacy = false;
    assert!(!validate_register_form(&form).unwrap().is_pharmacy);
}

#[test]
fn register_error_message_rewrites_geocode_text() {
    let err = ApiError::from_status_body(400, r#"{"error":"Invalid address, could not geocode"}"#);
    assert_eq!(register_error_message(&err), GEOCODE_FAILED_MESSAGE);
}

#[test]
fn register_error_message_rewrites_geocode_code() {
    let err = ApiError::from_status_body(400, r#"{"error":"Bad address","code":"geocode_failed"}"#);
    assert_eq!(register_error_message(&err), GEOCODE_FAILED_MESSAGE);
}

#[test]
fn register_error_message_shows_duplicate_email() {
    let err = ApiError::from_status_body(409, r#"{"error":"Email already registered"}"#);
    assert_eq!(register_error_message(&err), "Email already registered");
}

#[test]
fn register_error_message_falls_back_without_body() {
    assert_eq!(register_error_message(&ApiError::Network("offline".to_owned())), "Registration failed");
}
