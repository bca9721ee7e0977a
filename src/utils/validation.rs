//! Utilidades de validación
//! 
//! Funciones usadas por los `#[validate(custom = ...)]` de los DTOs.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::EngineType;

lazy_static! {
    /// Patente chilena: formato antiguo `AB1234` o nuevo `BCDF12`
    static ref LICENSE_PLATE_RE: Regex =
        Regex::new(r"^(?:[A-Z]{2}\d{4}|[B-DF-HJ-LPR-TV-Z]{4}\d{2})$")
            .expect("license plate regex is valid");
}

/// Validar formato de patente (se ignoran guiones, espacios y mayúsculas)
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = normalize_license_plate(value);
    if !LICENSE_PLATE_RE.is_match(&clean_plate) {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"AB1234 or BCDF12".to_string());
        return Err(error);
    }
    Ok(())
}

/// Forma canónica en que se guardan las patentes
pub fn normalize_license_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
        .collect::<String>()
        .to_uppercase()
}

/// Validar que la etiqueta de motor sea reconocida
pub fn validate_engine_type(value: &str) -> Result<(), ValidationError> {
    if EngineType::parse(value).is_none() {
        let mut error = ValidationError::new("engine_type");
        error.add_param("value".into(), &value.to_string());
        error.add_param(
            "allowed_values".into(),
            &"Gasoline, Diesel, Hybrid, Electric".to_string(),
        );
        return Err(error);
    }
    Ok(())
}

/// Validar que un monto no sea negativo
pub fn validate_non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("BBCL83").is_ok());
        assert!(validate_license_plate("bb-cl-83").is_ok());
        assert!(validate_license_plate("AB1234").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
        // las vocales no se usan en el formato nuevo
        assert!(validate_license_plate("AEIO12").is_err());
    }

    #[test]
    fn test_normalize_license_plate() {
        assert_eq!(normalize_license_plate("bb-cl 83"), "BBCL83");
    }

    #[test]
    fn test_validate_engine_type() {
        assert!(validate_engine_type("Eléctrico").is_ok());
        assert!(validate_engine_type("Nuclear").is_err());
    }

    #[test]
    fn test_validate_non_negative_amount() {
        assert!(validate_non_negative_amount(&dec!(0)).is_ok());
        assert!(validate_non_negative_amount(&dec!(120000)).is_ok());
        assert!(validate_non_negative_amount(&dec!(-1)).is_err());
    }
}
