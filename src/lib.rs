//! Calculatrice serveur
//!
//! - noyau  : validation + évaluation d’expressions (`+ - * /`, parenthèses, décimaux, moins unaire)
//! - app    : couche HTTP (routes, enveloppes JSON, dernier résultat)
//! - config : configuration en couches (défauts, YAML, environnement)

pub mod app;
pub mod config;
pub mod noyau;

// API publique minimale
pub use noyau::{calc, est_expression_valide, ErreurCalc};
