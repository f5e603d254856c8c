//! Configuration du serveur.
//!
//! Couches (la dernière gagne) :
//! 1) valeurs par défaut
//! 2) fichier YAML (si `--config`)
//! 3) variables d’environnement `CALC_*` (ex: `CALC_BIND_ADDR`)
//! 4) surcharges CLI (appliquées par main.rs)

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Préfixe des variables d’environnement.
const PREFIXE_ENV: &str = "CALC_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigServeur {
    /// Adresse d’écoute HTTP.
    pub bind_addr: String,
    /// Niveau de journal quand ni `RUST_LOG` ni `-v` ne sont donnés.
    pub log_level: String,
}

impl Default for ConfigServeur {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ConfigServeur {
    /// Charge la configuration : défauts -> YAML -> env.
    ///
    /// Un chemin explicite qui n’existe pas est une erreur (pas de repli silencieux).
    pub fn charger(chemin: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(p) = chemin {
            if !p.is_file() {
                anyhow::bail!("config file does not exist: {}", p.display());
            }
        }

        Self::figment(chemin)
            .merge(Env::prefixed(PREFIXE_ENV))
            .extract()
            .context("invalid configuration")
    }

    /// Défauts + fichier, sans l’environnement.
    fn figment(chemin: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(ConfigServeur::default()));
        match chemin {
            Some(p) => figment.merge(Yaml::file(p)),
            None => figment,
        }
    }

    /// Adresse d’écoute typée.
    pub fn adresse(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_addr))
    }
}
