// src/noyau/jetons.rs

use super::erreur::ErreurCalc;
use super::validation::position_unaire;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    // Littéral décimal, signe unaire déjà appliqué
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 0.25) : plus longue suite de `[0-9.]`
/// - moins unaire collé au nombre qui suit (ex: "-5", "2*-3", "(-1.5)")
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Les espaces sont sautés (le validateur les a déjà refusés en amont).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre
        if c.is_ascii_digit() || c == '.' {
            let (n, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = fin;
            continue;
        }

        // Moins unaire : le nombre qui suit est lu puis négativé.
        // "-(" n’est pas un nombre => NombreMalforme.
        if c == '-' && position_unaire(&chars, i) {
            let (n, fin) = lire_nombre(&chars, i + 1).map_err(|e| match e {
                ErreurCalc::NombreMalforme(txt) => ErreurCalc::NombreMalforme(format!("-{txt}")),
                autre => autre,
            })?;
            out.push(Tok::Num(-n));
            i = fin;
            continue;
        }

        let tok = match c {
            '+' => Tok::Plus,
            '-' => Tok::Minus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => return Err(ErreurCalc::SyntaxeInvalide),
        };
        out.push(tok);
        i += 1;
    }

    Ok(out)
}

/// Lit la plus longue suite `[0-9.]` à partir de `debut`.
/// Retourne la valeur et l’indice juste après.
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurCalc> {
    let mut fin = debut;
    while fin < chars.len() && (chars[fin].is_ascii_digit() || chars[fin] == '.') {
        fin += 1;
    }

    let txt: String = chars[debut..fin].iter().collect();
    // un littéral hors bornes se lit `inf` : refusé comme illisible
    match txt.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok((n, fin)),
        _ => Err(ErreurCalc::NombreMalforme(txt)),
    }
}
