// src/noyau/rpn.rs
//
// Shunting-yard à réduction immédiate (deux piles)
// Objectif:
// - Consommer les Jeton un par un, de gauche à droite
// - Réduire dès que la précédence l’autorise, au lieu de produire une RPN puis de la relire
//
// Règles:
// - '(' : empilée sans condition
// - nombre : pile d’opérandes
// - ')' : réduit jusqu’à la '(' correspondante (qui disparaît)
// - opérateur : réduit le sommet tant que l’opérateur entrant n’est PAS strictement
//   prioritaire (=> associativité gauche), puis s’empile
// - fin : vide la pile d’opérateurs ; il doit rester exactement une valeur
//
// NOTE:
// - L’ordre des évènements (Empile / Reduit) est exactement la RPN de l’entrée.

use super::erreur::EvaluationError;
use super::jetons::Jeton;
use super::operateur::Operateur;

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EnAttente {
    Op(Operateur),
    LPar,
}

/// Une réduction : `gauche op droite = resultat`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reduction {
    pub gauche: f64,
    pub op: Operateur,
    pub droite: f64,
    pub resultat: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evenement {
    Empile(f64),
    Reduit(Reduction),
}

/// Machine à deux piles. Une instance = une évaluation, jamais partagée.
#[derive(Debug, Default)]
pub struct Evaluateur {
    operandes: Vec<f64>,
    operateurs: Vec<EnAttente>,
    journal: Option<Vec<Evenement>>,
}

impl Evaluateur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variante qui garde la trace de chaque empilement / réduction.
    pub fn avec_journal() -> Self {
        Self {
            journal: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn consommer(&mut self, jeton: Jeton) -> Result<(), EvaluationError> {
        match jeton {
            Jeton::LPar => self.operateurs.push(EnAttente::LPar),

            Jeton::Nombre(v) => {
                self.operandes.push(v);
                if let Some(j) = self.journal.as_mut() {
                    j.push(Evenement::Empile(v));
                }
            }

            Jeton::RPar => loop {
                match self.operateurs.pop() {
                    Some(EnAttente::LPar) => break,
                    Some(EnAttente::Op(op)) => self.reduire(op)?,
                    None => return Err(EvaluationError::UnmatchedParenthesis),
                }
            },

            Jeton::Op(op) => {
                // une '(' ou une pile vide bloque la réduction
                while let Some(&EnAttente::Op(sommet)) = self.operateurs.last() {
                    if op.est_prioritaire_sur(sommet) {
                        break;
                    }
                    self.operateurs.pop();
                    self.reduire(sommet)?;
                }
                self.operateurs.push(EnAttente::Op(op));
            }
        }
        Ok(())
    }

    /// Vide la pile d’opérateurs et rend la valeur finale (+ le journal, vide si non demandé).
    pub fn terminer(mut self) -> Result<(f64, Vec<Evenement>), EvaluationError> {
        while let Some(e) = self.operateurs.pop() {
            match e {
                EnAttente::LPar => return Err(EvaluationError::UnmatchedParenthesis),
                EnAttente::Op(op) => self.reduire(op)?,
            }
        }

        if self.operandes.len() != 1 {
            return Err(EvaluationError::EmptyResult);
        }
        let resultat = self
            .operandes
            .pop()
            .ok_or(EvaluationError::EmptyResult)?;

        Ok((resultat, self.journal.unwrap_or_default()))
    }

    /// d2 = sommet, d1 = dessous ; pousse d1 op d2.
    fn reduire(&mut self, op: Operateur) -> Result<(), EvaluationError> {
        let d2 = self
            .operandes
            .pop()
            .ok_or(EvaluationError::StackUnderflow)?;
        let d1 = self
            .operandes
            .pop()
            .ok_or(EvaluationError::StackUnderflow)?;

        let resultat = op.appliquer(d1, d2);
        self.operandes.push(resultat);

        if let Some(j) = self.journal.as_mut() {
            j.push(Evenement::Reduit(Reduction {
                gauche: d1,
                op,
                droite: d2,
                resultat,
            }));
        }
        Ok(())
    }
}
