// src/app.rs
//
// Calculatrice serveur — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + dto.rs + routes.rs)
// - Ré-exporter ce dont main.rs a besoin (routeur + état)
//
// Important:
// - Aucune évaluation ici : tout passe par crate::noyau via ServiceCalcul.

pub mod dto;
pub mod etat;
pub mod routes;

pub use etat::{DernierResultat, ServiceCalcul};
pub use routes::routeur;
