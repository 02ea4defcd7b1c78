//! Utilidades de validación
//!
//! Este módulo contiene el validador de matrículas y helpers
//! de validación compartidos entre DTOs.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matrícula española: 4 números seguidos de 3 letras mayúsculas (ej: 0987TRE)
    pub static ref MATRICULA_REGEX: Regex = Regex::new(r"^[0-9]{4}[A-Z]{3}$").unwrap();
}

/// Verificar si una matrícula tiene el formato correcto
pub fn es_matricula_valida(matricula: &str) -> bool {
    MATRICULA_REGEX.is_match(matricula)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matricula_valida() {
        assert!(es_matricula_valida("0987TRE"));
        assert!(es_matricula_valida("0000AAA"));
        assert!(es_matricula_valida("9999ZZZ"));
    }

    #[test]
    fn test_matricula_letras_antes_de_numeros() {
        assert!(!es_matricula_valida("TRE0987"));
    }

    #[test]
    fn test_matricula_minusculas() {
        assert!(!es_matricula_valida("0987tre"));
    }

    #[test]
    fn test_matricula_longitud_incorrecta() {
        assert!(!es_matricula_valida("098TRE"));
        assert!(!es_matricula_valida("09877TRE"));
        assert!(!es_matricula_valida("0987TREX"));
        assert!(!es_matricula_valida(""));
    }

    #[test]
    fn test_matricula_sin_anclas_no_cuela() {
        assert!(!es_matricula_valida("X0987TRE"));
        assert!(!es_matricula_valida("0987TRE "));
    }
}
