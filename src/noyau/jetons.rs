// src/noyau/jetons.rs

use std::fmt;
use std::iter::FusedIterator;

use super::erreur::EvaluationError;
use super::format::format_resultat;
use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
    LPar,
    RPar,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(v) => f.write_str(&format_resultat(*v, None)),
            Jeton::Op(op) => write!(f, "{op}"),
            Jeton::LPar => f.write_str("("),
            Jeton::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne, paresseusement.
///
/// Ordre d’essai à chaque position :
/// - chiffre => nombre `[1-9][0-9]*(\.[0-9]*)?` (ou partie entière "0" seule)
/// - opérateur + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
/// - sinon: `UnsupportedCharacter`
///
/// La séquence n’est pas redémarrable et s’arrête après la première erreur.
pub fn tokenize(s: &str) -> Jetons<'_> {
    Jetons {
        source: s,
        pos: 0,
        fini: false,
    }
}

#[derive(Debug)]
pub struct Jetons<'a> {
    source: &'a str,
    pos: usize,
    fini: bool,
}

impl<'a> Jetons<'a> {
    /// Partie de l’entrée pas encore lue.
    pub fn reste(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn lire_nombre(&mut self) -> Result<Jeton, EvaluationError> {
        let octets = self.source.as_bytes();
        let debut = self.pos;
        let mut i = debut;

        while i < octets.len() && octets[i].is_ascii_digit() {
            i += 1;
        }

        // "0", "0.5" ok ; "007", "01.5" refusés (pas de zéro en tête d’un entier à plusieurs chiffres)
        if octets[debut] == b'0' && i - debut > 1 {
            return Err(EvaluationError::caractere(&self.source[debut..i], debut));
        }

        if i < octets.len() && octets[i] == b'.' {
            i += 1;
            while i < octets.len() && octets[i].is_ascii_digit() {
                i += 1;
            }
        }

        let texte = &self.source[debut..i];
        let valeur: f64 = texte
            .parse()
            .map_err(|_| EvaluationError::caractere(texte, debut))?;

        self.pos = i;
        Ok(Jeton::Nombre(valeur))
    }
}

impl Iterator for Jetons<'_> {
    type Item = Result<Jeton, EvaluationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fini {
            return None;
        }

        loop {
            let Some(c) = self.reste().chars().next() else {
                self.fini = true;
                return None;
            };

            let res = if c.is_ascii_digit() {
                self.lire_nombre()
            } else if let Some(op) = Operateur::depuis_symbole(c) {
                self.pos += 1;
                Ok(Jeton::Op(op))
            } else if c == '(' {
                self.pos += 1;
                Ok(Jeton::LPar)
            } else if c == ')' {
                self.pos += 1;
                Ok(Jeton::RPar)
            } else if c.is_whitespace() {
                self.pos += c.len_utf8();
                continue;
            } else {
                Err(EvaluationError::caractere(c.to_string(), self.pos))
            };

            if res.is_err() {
                self.fini = true;
            }
            return Some(res);
        }
    }
}

impl FusedIterator for Jetons<'_> {}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(Jeton::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
