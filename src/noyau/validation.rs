// src/noyau/validation.rs
//
// Validateur : un seul passage gauche -> droite, arrêt à la première faute.
// Aucun calcul ici, seulement la forme de l’entrée.

/// Opérateurs binaires reconnus.
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Vrai si l’expression est bien formée (voir règles ci-dessous).
///
/// - aucun espace (au sens Unicode)
/// - alphabet : chiffres, `.`, `+ - * /`, `( )`
/// - point décimal entouré de chiffres
/// - pas d’opérateur après un opérateur ou `(`, sauf `-` unaire
/// - parenthèses équilibrées, profondeur jamais négative
/// - se termine par une valeur (chiffre ou `)`)
pub fn est_expression_valide(expression: &str) -> bool {
    let chars: Vec<char> = expression.chars().collect();

    let mut profondeur: usize = 0;
    // dernier caractère consommé = fin de valeur (chiffre, point interne, ')')
    let mut apres_valeur = false;
    let mut dans_nombre = false;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            return false;
        }

        if c.is_ascii_digit() {
            apres_valeur = true;
            dans_nombre = true;
        } else if c == '.' {
            // dans_nombre => le caractère précédent est un chiffre
            let apres_ok = chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if !dans_nombre || !apres_ok {
                return false;
            }
        } else if est_operateur(c) {
            if !apres_valeur && !(c == '-' && position_unaire(&chars, i)) {
                return false;
            }
            apres_valeur = false;
            dans_nombre = false;
        } else if c == '(' {
            profondeur += 1;
            apres_valeur = false;
            dans_nombre = false;
        } else if c == ')' {
            profondeur = match profondeur.checked_sub(1) {
                Some(p) => p,
                None => return false,
            };
            apres_valeur = true;
            dans_nombre = false;
        } else {
            return false;
        }
    }

    profondeur == 0 && apres_valeur
}

/// `-` unaire : début de chaîne, après `(`, après un opérateur.
pub fn position_unaire(chars: &[char], i: usize) -> bool {
    match i.checked_sub(1).map(|p| chars[p]) {
        None => true,
        Some(prec) => prec == '(' || est_operateur(prec),
    }
}
