//! Tests scientifiques (campagne) : exemples chiffrés + types d’erreur.
//!
//! Les résultats sont comparés comme le fait la couche HTTP : deux décimales.
//! Les types d’erreur sont vérifiés un par un (le serveur les confond tous,
//! le noyau doit les distinguer).

use super::{calc, est_expression_valide, ErreurCalc};

fn deux_decimales(expr: &str) -> String {
    let v = calc(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    format!("{v:.2}")
}

fn assert_resultat(expr: &str, attendu: &str) {
    assert_eq!(deux_decimales(expr), attendu, "expr={expr:?}");
}

fn assert_erreur(expr: &str, attendue: ErreurCalc) {
    assert_eq!(calc(expr), Err(attendue), "expr={expr:?}");
}

/* ------------------------ Précédence + parenthèses ------------------------ */

#[test]
fn sci_precedence() {
    assert_resultat("2+2*2", "6.00");
    assert_resultat("5*3-1", "14.00");
    assert_resultat("7*(8+1)", "63.00");
    assert_resultat("10-4-3", "3.00");
    assert_resultat("64/4/2", "8.00");
    assert_resultat("2*3+4*5", "26.00");
}

#[test]
fn sci_moins_unaire() {
    assert_resultat("-5+3", "-2.00");
    assert_resultat("(-5)*2", "-10.00");
    assert_resultat("2*-3", "-6.00");
    assert_resultat("2--3", "5.00");
    assert_resultat("-1.5*-2", "3.00");
    assert_resultat("(2+3)*(-2)", "-10.00");
}

#[test]
fn sci_decimaux() {
    assert_resultat("0.1+0.2", "0.30");
    assert_resultat("10.12*2", "20.24");
    assert_resultat("100*(100+100)-100/100", "19999.00");
    assert_resultat("1/3", "0.33");
}

/* ------------------------ Longues expressions (régression) ------------------------ */

#[test]
fn sci_longues_expressions() {
    assert_resultat("100*(99+100/32-12)*(2331013-12)+3242", "21008149754.50");
    assert_resultat("88*88*(2*2-3-2*10.12)/12*24924-241-2/11", "-309461942.30");
    assert_resultat("1/169*1488-1488+3131-69*1488/148*88", "-59396.41");
    assert_resultat(
        "14888*1/88*13/88888/148881301413+3141234/12341+41342-1324*(1243-1/134134)",
        "-1604135.45",
    );
}

/* ------------------------ Types d’erreur ------------------------ */

#[test]
fn sci_syntaxe_invalide() {
    for e in ["", "2+2a", "2//2", "2 +2", "(1+2", "1+2)", "2+", ".5", "5."] {
        assert!(!est_expression_valide(e), "expr={e:?}");
        assert_erreur(e, ErreurCalc::SyntaxeInvalide);
    }
}

#[test]
fn sci_division_par_zero_partout() {
    assert_erreur("1/0", ErreurCalc::DivisionParZero);
    assert_erreur("0/0", ErreurCalc::DivisionParZero);
    assert_erreur("5/0.0", ErreurCalc::DivisionParZero);
    assert_erreur("1/(2-2)", ErreurCalc::DivisionParZero);
    assert_erreur("(1+2)/(3*0)", ErreurCalc::DivisionParZero);
    assert_erreur("1/0*0", ErreurCalc::DivisionParZero);
    assert_erreur("2+3*(4-1/(1-1))", ErreurCalc::DivisionParZero);
    assert_erreur("-7/-0", ErreurCalc::DivisionParZero);
}

#[test]
fn sci_nombre_malforme() {
    // plusieurs points : le validateur laisse passer, la lecture échoue
    assert_erreur("1.2.3", ErreurCalc::NombreMalforme("1.2.3".into()));
    assert_erreur("2*1.5.5", ErreurCalc::NombreMalforme("1.5.5".into()));
    // moins unaire devant une parenthèse : pas de nombre à négativer
    assert_erreur("-(2+3)", ErreurCalc::NombreMalforme("-".into()));
}

#[test]
fn sci_litteral_hors_bornes() {
    // f64::MAX ~ 1.8e308 : 1e400 ne se représente pas
    let enorme = format!("1{}", "0".repeat(400));
    assert_erreur(&enorme, ErreurCalc::NombreMalforme(enorme.clone()));

    let negatif = format!("2*-{enorme}");
    assert_erreur(&negatif, ErreurCalc::NombreMalforme(format!("-{enorme}")));

    // grand mais fini : accepté
    let grand = format!("1{}", "0".repeat(300));
    assert!(calc(&grand).is_ok_and(f64::is_finite));
}

#[test]
fn sci_expression_malformee() {
    // le validateur accepte, les piles ne tombent pas juste
    assert_erreur("()", ErreurCalc::ExpressionMalformee);
    assert_erreur("2(3)", ErreurCalc::ExpressionMalformee);
    assert_erreur("(1)(2)", ErreurCalc::ExpressionMalformee);
    assert_erreur("(1)2", ErreurCalc::ExpressionMalformee);
}
