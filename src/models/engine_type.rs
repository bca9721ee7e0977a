//! Tipo de motor
//! 
//! Dimensión de precio y descuento. Los vehículos guardan el tipo de motor
//! como texto; `EngineType::parse` es el único punto de conversión.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo de motor del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl EngineType {
    pub const ALL: [EngineType; 4] = [
        EngineType::Gasoline,
        EngineType::Diesel,
        EngineType::Hybrid,
        EngineType::Electric,
    ];

    /// Interpreta una etiqueta de tipo de motor.
    ///
    /// Acepta los nombres en inglés y en español (con o sin tilde), sin
    /// distinguir mayúsculas. Cualquier otra etiqueta devuelve `None`.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "gasoline" | "gasolina" => Some(EngineType::Gasoline),
            "diesel" | "diésel" => Some(EngineType::Diesel),
            "hybrid" | "hibrido" | "híbrido" => Some(EngineType::Hybrid),
            "electric" | "electrico" | "eléctrico" => Some(EngineType::Electric),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::Gasoline => "Gasoline",
            EngineType::Diesel => "Diesel",
            EngineType::Hybrid => "Hybrid",
            EngineType::Electric => "Electric",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spanish_and_english_labels() {
        assert_eq!(EngineType::parse("Gasolina"), Some(EngineType::Gasoline));
        assert_eq!(EngineType::parse("Diésel"), Some(EngineType::Diesel));
        assert_eq!(EngineType::parse("hybrid"), Some(EngineType::Hybrid));
        assert_eq!(EngineType::parse("  ELÉCTRICO "), Some(EngineType::Electric));
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(EngineType::parse("UnknownEngine"), None);
        assert_eq!(EngineType::parse(""), None);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for engine in EngineType::ALL {
            assert_eq!(EngineType::parse(&engine.to_string()), Some(engine));
        }
    }
}
