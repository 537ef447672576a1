//! Noyau infixe f64
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie EvaluationError
//! - operateur.rs : + - * / (précédence + application IEEE)
//! - jetons.rs    : tokenisation paresseuse
//! - rpn.rs       : deux piles, réduction immédiate
//! - format.rs    : affichage d’un f64 (∞, indéfini, décimales)
//! - eval.rs      : pipeline complet + démarche

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateur;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{evaluate, evaluate_avec_demarche, Demarche};
