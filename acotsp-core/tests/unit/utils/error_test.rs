use super::*;

parameterized_test! {can_format_aco_error, (error, expected_kind), {
    can_format_aco_error_impl(error, expected_kind);
}}

can_format_aco_error! {
    case01_configuration: (AcoError::Configuration("rho".to_string()), "configuration error"),
    case02_degenerate: (AcoError::DegenerateInstance("rho".to_string()), "degenerate instance"),
    case03_resources: (AcoError::ResourceExhaustion("rho".to_string()), "resource exhaustion"),
    case04_invariant: (AcoError::InvariantViolation("rho".to_string()), "invariant violation"),
}

fn can_format_aco_error_impl(error: AcoError, expected_kind: &str) {
    assert_eq!(error.kind(), expected_kind);
    assert_eq!(error.message(), "rho");
    assert_eq!(error.to_string(), format!("{expected_kind}: rho"));
}

#[test]
fn can_convert_aco_error_into_generic() {
    let error: GenericError = AcoError::Configuration("ants must be at least 1".to_string()).into();

    assert_eq!(error.to_string(), "configuration error: ants must be at least 1");
}

#[test]
fn can_join_many_generic_errors() {
    let errors = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(errors.as_slice(), ", "), "first, second");
}
