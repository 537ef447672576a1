// src/noyau/operateur.rs
//
// Les quatre opérateurs binaires: symbole, précédence, application f64.
// Ensemble fermé => un simple `match`, table de précédence statique.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    /// 1 = additif, 2 = multiplicatif. Tous associatifs à gauche.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
        }
    }

    /// Strictement plus prioritaire : à précédence égale => false (associativité gauche).
    pub fn est_prioritaire_sur(self, autre: Operateur) -> bool {
        self.precedence() > autre.precedence()
    }

    /// `d1 <op> d2` en double précision IEEE.
    /// Division par zéro: ±∞ ou NaN, jamais une erreur.
    pub fn appliquer(self, d1: f64, d2: f64) -> f64 {
        match self {
            Self::Plus => d1 + d2,
            Self::Moins => d1 - d2,
            Self::Fois => d1 * d2,
            Self::Divise => d1 / d2,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
