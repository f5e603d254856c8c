//! Noyau de calcul (flottants double précision)
//!
//! Organisation interne :
//! - validation.rs : contrôle de forme, un passage, sans calcul
//! - jetons.rs     : tokenisation (moins unaire plié dans le nombre)
//! - pile.rs       : réduction à deux piles (nombres / opérateurs)
//! - erreur.rs     : types d’échec
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod pile;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::calc;
pub use validation::est_expression_valide;
