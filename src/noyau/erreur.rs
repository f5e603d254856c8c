// src/noyau/erreur.rs

/// Erreurs du noyau : une variante par type d’échec, toutes terminales.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalc {
    /// Rejet du validateur (espace, caractère interdit, parenthèses, opérateur ou point mal placé).
    #[error("invalid expression")]
    SyntaxeInvalide,

    /// Suite de chiffres impossible à lire comme flottant (ex: "1.2.3").
    #[error("malformed number: {0:?}")]
    NombreMalforme(String),

    #[error("division by zero")]
    DivisionParZero,

    /// Piles incohérentes en fin d’évaluation (ou réduction impossible).
    #[error("malformed expression")]
    ExpressionMalformee,
}
