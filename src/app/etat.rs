//! src/app/etat.rs
//!
//! État du serveur (sans HTTP).
//!
//! Rôle : garder le dernier résultat réussi et exposer l’opération “calculer”
//! qui passe par le noyau puis met l’état à jour.
//!
//! Contrats :
//! - État possédé et injecté (pas de global) : un routeur = un état.
//! - Lecture et écriture sous le même verrou, jamais tenu à travers un `.await`.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::noyau::{calc, ErreurCalc};

/// Texte du GET tant qu’aucun calcul n’a réussi.
const MESSAGE_ACCUEIL: &str =
    "Welcome to the calculator server. Send a POST request to start working.";

/// Dernier résultat réussi, déjà formaté (deux décimales).
#[derive(Debug, Default)]
pub struct DernierResultat {
    valeur: Mutex<Option<String>>,
}

impl DernierResultat {
    pub fn lire(&self) -> Option<String> {
        self.valeur.lock().clone()
    }

    pub fn ecrire(&self, v: String) {
        *self.valeur.lock() = Some(v);
    }
}

/// Service de calcul : noyau + dernier résultat.
#[derive(Debug, Default, Clone)]
pub struct ServiceCalcul {
    dernier: Arc<DernierResultat>,
}

impl ServiceCalcul {
    pub fn new(dernier: Arc<DernierResultat>) -> Self {
        Self { dernier }
    }

    /// Évalue, formate avec deux décimales, mémorise en cas de succès.
    /// Un échec laisse le dernier résultat intact.
    #[instrument(skip(self))]
    pub fn calculer(&self, expression: &str) -> Result<String, ErreurCalc> {
        let v = calc(expression)?;
        let result = format!("{v:.2}");

        self.dernier.ecrire(result.clone());
        debug!(%result, "calculation succeeded");
        Ok(result)
    }

    /// Réponse du GET : accueil, ou dernier résultat.
    pub fn message_accueil(&self) -> String {
        match self.dernier.lire() {
            Some(r) => format!("Last correct result: {r}"),
            None => MESSAGE_ACCUEIL.to_string(),
        }
    }
}
