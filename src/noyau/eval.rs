//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons (paresseux) -> deux piles (réduction immédiate) -> f64
//!
//! Une seule passe, de gauche à droite : l’évaluateur ne relit jamais le texte.
//! Aucun état partagé entre deux appels ; aucun journal (tracing) ici.

use super::erreur::EvaluationError;
use super::format::format_resultat;
use super::jetons::{format_jetons, tokenize, Jeton};
use super::rpn::{Evaluateur, Evenement};

/// Trace d’une évaluation, pour le panneau « Démarche ».
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    /// Jetons lus, séparés par un espace.
    pub jetons: String,
    /// Ordre postfixe effectif (nombres empilés + opérateurs appliqués).
    pub rpn: String,
    /// Une ligne par réduction : "3 + 20 = 23".
    pub etapes: Vec<String>,
}

/// API publique : évalue une expression infixe `+ - * /` avec parenthèses.
///
/// L’entrée vide (ou faite d’espaces) est refusée ici même avec
/// `EvaluationError::InvalidExpression`.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    refuser_vide(expression)?;

    let mut ev = Evaluateur::new();
    for jeton in tokenize(expression) {
        ev.consommer(jeton?)?;
    }
    let (valeur, _) = ev.terminer()?;
    Ok(valeur)
}

/// Comme `evaluate`, mais retourne aussi la démarche (jetons, RPN, étapes).
pub fn evaluate_avec_demarche(expression: &str) -> Result<(f64, Demarche), EvaluationError> {
    refuser_vide(expression)?;

    let mut lus: Vec<Jeton> = Vec::new();
    let mut ev = Evaluateur::avec_journal();
    for jeton in tokenize(expression) {
        let jeton = jeton?;
        lus.push(jeton);
        ev.consommer(jeton)?;
    }
    let (valeur, journal) = ev.terminer()?;

    Ok((valeur, construire_demarche(&lus, &journal)))
}

fn refuser_vide(expression: &str) -> Result<(), EvaluationError> {
    if expression.trim().is_empty() {
        return Err(EvaluationError::InvalidExpression);
    }
    Ok(())
}

fn construire_demarche(jetons: &[Jeton], journal: &[Evenement]) -> Demarche {
    let mut rpn = Vec::with_capacity(journal.len());
    let mut etapes = Vec::new();

    for e in journal {
        match e {
            Evenement::Empile(v) => rpn.push(format_resultat(*v, None)),
            Evenement::Reduit(r) => {
                rpn.push(r.op.to_string());
                etapes.push(format!(
                    "{} {} {} = {}",
                    format_resultat(r.gauche, None),
                    r.op,
                    format_resultat(r.droite, None),
                    format_resultat(r.resultat, None),
                ));
            }
        }
    }

    Demarche {
        jetons: format_jetons(jetons),
        rpn: rpn.join(" "),
        etapes,
    }
}
