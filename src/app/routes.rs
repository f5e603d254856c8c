// src/app/routes.rs
//
// Routes HTTP
// -----------
// POST /api/v1/calculate : {"expression": "..."} -> {"result": "x.xx"} | {"error": "..."}
// GET  /api/v1/calculate : texte d’accueil ou dernier résultat
// autre méthode          : 405 (axum)
//
// Le corps est lu en octets puis décodé à la main : un JSON illisible
// renvoie notre enveloppe {"error"} plutôt que le rejet par défaut d’axum.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use tracing::{debug, info, warn};

use super::dto::{ChampExpression, ReponseCalcul, ReponseErreur, RequeteCalcul};
use super::etat::ServiceCalcul;

pub const CHEMIN_CALCUL: &str = "/api/v1/calculate";

/// Message unique pour toute expression refusée (le type exact reste dans le journal).
pub const MESSAGE_EXPRESSION_INVALIDE: &str = "Expression is not valid";

pub const MESSAGE_CORPS_INVALIDE: &str = "Invalid request body";

/// Construit le routeur avec son propre état.
pub fn routeur(service: Arc<ServiceCalcul>) -> Router {
    Router::new()
        .route(CHEMIN_CALCUL, post(post_calcul).get(get_calcul))
        .layer(Extension(service))
}

fn erreur(status: StatusCode, msg: &str) -> Response {
    let corps = ReponseErreur {
        error: msg.to_string(),
    };
    (status, Json(corps)).into_response()
}

pub async fn post_calcul(
    Extension(service): Extension<Arc<ServiceCalcul>>,
    corps: Bytes,
) -> Response {
    let req = match RequeteCalcul::depuis_octets(&corps) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "request body rejected");
            return erreur(StatusCode::BAD_REQUEST, MESSAGE_CORPS_INVALIDE);
        }
    };

    let Some(expression) = req.expression.as_ref().and_then(ChampExpression::texte) else {
        debug!(champ = ?req.expression, "expression is not a string");
        return erreur(StatusCode::UNPROCESSABLE_ENTITY, MESSAGE_EXPRESSION_INVALIDE);
    };

    match service.calculer(expression) {
        Ok(result) => {
            info!(expression, %result, "expression evaluated");
            (StatusCode::OK, Json(ReponseCalcul { result })).into_response()
        }
        Err(e) => {
            debug!(expression, error = %e, "expression rejected");
            erreur(StatusCode::UNPROCESSABLE_ENTITY, MESSAGE_EXPRESSION_INVALIDE)
        }
    }
}

pub async fn get_calcul(Extension(service): Extension<Arc<ServiceCalcul>>) -> String {
    service.message_accueil()
}
