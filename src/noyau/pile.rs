// src/noyau/pile.rs
//
// Évaluation à deux piles (nombres + opérateurs), style shunting-yard,
// en un seul passage sur les jetons.
//
// Règles:
// - Num        => pile des nombres
// - LPar       => marqueur sur la pile des opérateurs
// - RPar       => réduit jusqu’au marqueur, puis le retire
// - opérateur  => réduit tant que le sommet a une précédence >= , puis empile
// - fin        => réduit tout ; il doit rester exactement un nombre
//
// Le marqueur '(' n’est jamais réduit : seul ')' le retire.

use super::erreur::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

#[derive(Default, Debug)]
struct Piles {
    nombres: Vec<f64>,
    ops: Vec<Tok>,
}

impl Piles {
    /// Applique l’opérateur du sommet aux deux nombres du sommet.
    /// a = avant-dernier, b = dernier.
    fn reduire(&mut self) -> Result<(), ErreurCalc> {
        if self.nombres.len() < 2 {
            return Err(ErreurCalc::ExpressionMalformee);
        }
        let op = self.ops.pop().ok_or(ErreurCalc::ExpressionMalformee)?;
        let b = self.nombres.pop().ok_or(ErreurCalc::ExpressionMalformee)?;
        let a = self.nombres.pop().ok_or(ErreurCalc::ExpressionMalformee)?;

        let r = match op {
            Tok::Plus => a + b,
            Tok::Minus => a - b,
            Tok::Star => a * b,
            Tok::Slash => {
                if b == 0.0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                a / b
            }
            // un marqueur '(' au sommet : parenthèse jamais fermée
            Tok::LPar | Tok::RPar | Tok::Num(_) => return Err(ErreurCalc::ExpressionMalformee),
        };

        self.nombres.push(r);
        Ok(())
    }

    fn sommet_prioritaire(&self, entrant: &Tok) -> bool {
        match self.ops.last() {
            None | Some(Tok::LPar) => false,
            Some(top) => precedence(top) >= precedence(entrant),
        }
    }
}

/// Réduit une suite de jetons en une valeur.
pub fn evaluer_jetons(jetons: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut p = Piles::default();

    for &tok in jetons {
        match tok {
            Tok::Num(n) => p.nombres.push(n),

            Tok::LPar => p.ops.push(tok),

            Tok::RPar => {
                while !matches!(p.ops.last(), Some(Tok::LPar)) {
                    if p.ops.is_empty() {
                        // ')' sans '(' correspondant
                        return Err(ErreurCalc::ExpressionMalformee);
                    }
                    p.reduire()?;
                }
                p.ops.pop();
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                while p.sommet_prioritaire(&tok) {
                    p.reduire()?;
                }
                p.ops.push(tok);
            }
        }
    }

    while !p.ops.is_empty() {
        p.reduire()?;
    }

    match p.nombres.as_slice() {
        [r] => Ok(*r),
        _ => Err(ErreurCalc::ExpressionMalformee),
    }
}
