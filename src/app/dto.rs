//! Enveloppes JSON de l’API (serde).

use serde::{Deserialize, Serialize};

/// Corps du POST : `{"expression": <valeur>}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RequeteCalcul {
    /// Absent ou `null` => None.
    #[serde(default)]
    pub expression: Option<ChampExpression>,
}

impl RequeteCalcul {
    /// Décode un corps JSON. Seul un objet est accepté : le `Deserialize`
    /// dérivé lirait aussi un tableau (`["2+2"]`) comme une suite de champs.
    pub fn depuis_octets(corps: &[u8]) -> Result<Self, serde_json::Error> {
        let valeur: serde_json::Value = serde_json::from_slice(corps)?;
        if !valeur.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "request body must be a JSON object",
            ));
        }
        serde_json::from_value(valeur)
    }
}

/// Valeur du champ `expression` : une chaîne, ou autre chose (nombre, objet…).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChampExpression {
    Texte(String),
    Autre(serde_json::Value),
}

impl ChampExpression {
    pub fn texte(&self) -> Option<&str> {
        match self {
            ChampExpression::Texte(s) => Some(s),
            ChampExpression::Autre(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReponseCalcul {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReponseErreur {
    pub error: String,
}
