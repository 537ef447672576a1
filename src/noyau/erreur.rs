//! Noyau — taxonomie des erreurs d’évaluation.
//!
//! Toute erreur est terminale pour l’appel `evaluate` en cours :
//! pas de reprise locale, pas de résultat partiel, aucun état global touché.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Entrée vide ou faite uniquement d’espaces.
    #[error("Entrée vide")]
    InvalidExpression,

    /// Un caractère (ou une suite de chiffres) ne correspond à aucune classe lexicale.
    /// `position` = décalage en octets dans l’entrée.
    #[error("caractère non supporté: '{texte}' (position {position})")]
    UnsupportedCharacter { texte: String, position: usize },

    /// ')' sans '(' correspondante, ou '(' jamais refermée.
    #[error("parenthèses non appariées")]
    UnmatchedParenthesis,

    /// Opérateur appliqué avec moins de deux opérandes (ex: "3 + + 4", "* 2").
    #[error("opérateur mal placé: opérandes manquantes")]
    StackUnderflow,

    /// Fin d’évaluation sans exactement une valeur sur la pile (ex: "()", "3 4").
    #[error("expression invalide: aucun résultat unique")]
    EmptyResult,
}

impl EvaluationError {
    pub(crate) fn caractere(texte: impl Into<String>, position: usize) -> Self {
        Self::UnsupportedCharacter {
            texte: texte.into(),
            position,
        }
    }
}
