use super::*;

#[test]
fn test_app_error_error_codes() {
    assert_eq!(
        AppError::Persistence("test".into()).error_code(),
        "PERSISTENCE_ERROR"
    );
    assert_eq!(
        AppError::UnknownProperty("test".into()).error_code(),
        "UNKNOWN_PROPERTY"
    );
    assert_eq!(
        AppError::Configuration("test".into()).error_code(),
        "CONFIGURATION_ERROR"
    );
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        AppError::Persistence("msg".into()).to_string(),
        "Persistence error: msg"
    );
    assert_eq!(
        AppError::UnknownProperty("PriceAmount".into()).to_string(),
        "Unknown property: PriceAmount"
    );
    assert_eq!(
        AppError::Configuration("msg".into()).to_string(),
        "Configuration error: msg"
    );
}

#[test]
fn test_persistence_classification() {
    assert!(AppError::Persistence(String::new()).is_persistence());
    assert!(AppError::UnknownProperty(String::new()).is_persistence());
    assert!(!AppError::Configuration(String::new()).is_persistence());
}

#[test]
fn test_from_config_error() {
    let err: AppError = config::ConfigError::NotFound("money_field".into()).into();
    assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
}
