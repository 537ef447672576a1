//! Calculatrice infixe — bibliothèque
//!
//! Évalue une expression `+ - * /` avec parenthèses, en double précision IEEE.
//!
//! ```
//! use calculatrice_infixe::{evaluate, EvaluationError};
//!
//! assert_eq!(evaluate("(3 + 4) * 5 - 6"), Ok(29.0));
//! assert_eq!(evaluate("5 / 0"), Ok(f64::INFINITY));
//! assert_eq!(evaluate("3 + (4 * 5"), Err(EvaluationError::UnmatchedParenthesis));
//! ```

pub mod noyau;

pub use noyau::{evaluate, evaluate_avec_demarche, Demarche, EvaluationError};
