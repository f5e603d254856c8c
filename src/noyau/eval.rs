//! Noyau — évaluation (pipeline réel)
//!
//! validation -> jetons -> deux piles -> f64
//!
//! Pur : aucune I/O, aucun état partagé, aucun journal.
//! Les piles vivent le temps d’un appel.

use super::erreur::ErreurCalc;
use super::jetons::tokenize;
use super::pile::evaluer_jetons;
use super::validation::est_expression_valide;

/// API publique : valide puis évalue.
pub fn calc(expression: &str) -> Result<f64, ErreurCalc> {
    if !est_expression_valide(expression) {
        return Err(ErreurCalc::SyntaxeInvalide);
    }
    evaluer(expression)
}

/// Évaluation seule, sans passer par le validateur.
pub fn evaluer(expression: &str) -> Result<f64, ErreurCalc> {
    let jetons = tokenize(expression)?;
    evaluer_jetons(&jetons)
}
