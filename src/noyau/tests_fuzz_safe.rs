//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : si l’expression est bien formée (grammaire classique),
//!   le noyau rend EXACTEMENT (bit à bit) la valeur d’une descente récursive de référence

use std::time::{Duration, Instant};

use super::jetons::{tokenize, Jeton};
use super::operateur::Operateur;
use super::{evaluate, EvaluationError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence : descente récursive ------------------------ */
//
// expr   := terme (('+' | '-') terme)*
// terme  := facteur (('*' | '/') facteur)*
// facteur:= nombre | '(' expr ')'
//
// Repli à gauche => même ordre d’opérations IEEE que l’évaluateur à deux piles.

struct Reference<'a> {
    jetons: &'a [Jeton],
    i: usize,
}

impl Reference<'_> {
    fn evaluer(jetons: &[Jeton]) -> Option<f64> {
        let mut r = Reference { jetons, i: 0 };
        let v = r.expr()?;
        (r.i == jetons.len()).then_some(v)
    }

    fn peek(&self) -> Option<Jeton> {
        self.jetons.get(self.i).copied()
    }

    fn expr(&mut self) -> Option<f64> {
        let mut acc = self.terme()?;
        while let Some(Jeton::Op(op @ (Operateur::Plus | Operateur::Moins))) = self.peek() {
            self.i += 1;
            let d = self.terme()?;
            acc = op.appliquer(acc, d);
        }
        Some(acc)
    }

    fn terme(&mut self) -> Option<f64> {
        let mut acc = self.facteur()?;
        while let Some(Jeton::Op(op @ (Operateur::Fois | Operateur::Divise))) = self.peek() {
            self.i += 1;
            let d = self.facteur()?;
            acc = op.appliquer(acc, d);
        }
        Some(acc)
    }

    fn facteur(&mut self) -> Option<f64> {
        match self.peek()? {
            Jeton::Nombre(v) => {
                self.i += 1;
                Some(v)
            }
            Jeton::LPar => {
                self.i += 1;
                let v = self.expr()?;
                if self.peek()? != Jeton::RPar {
                    return None;
                }
                self.i += 1;
                Some(v)
            }
            _ => None,
        }
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "0.25".to_string(),
        2 => "34.5".to_string(),
        3 => "7.".to_string(),
        4 => "10".to_string(),
        5 => format!("{}", 1 + rng.pick(999)),
        6 => format!("{}.{}", 1 + rng.pick(99), rng.pick(1000)),
        _ => format!("{}", 1 + rng.pick(9)),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "+",
        1 => "-",
        2 => "*",
        _ => "/",
    }
}

fn espace(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => "",
        1 => "  ",
        2 => "\t",
        _ => " ",
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    let termes = 1 + rng.pick(4);
    let mut out = String::new();
    for k in 0..termes {
        if k > 0 {
            out.push_str(espace(rng));
            out.push_str(gen_op(rng));
            out.push_str(espace(rng));
        }
        if profondeur > 0 && rng.pick(3) == 0 {
            out.push('(');
            out.push_str(espace(rng));
            out.push_str(&gen_expr(rng, profondeur - 1));
            out.push_str(espace(rng));
            out.push(')');
        } else {
            out.push_str(&gen_nombre(rng));
        }
    }
    out
}

/// Corruption bornée : suppression / insertion / remplacement d’un caractère.
fn corrompre(rng: &mut Rng, s: &str) -> String {
    const ALPHABET: &[char] = &[
        '+', '-', '*', '/', '(', ')', ' ', '0', '1', '5', '9', '.', '$', 'x', '^',
    ];
    let mut chars: Vec<char> = s.chars().collect();
    let n = 1 + rng.pick(3);
    for _ in 0..n {
        let pos = rng.pick(chars.len() as u32 + 1) as usize;
        let c = ALPHABET[rng.pick(ALPHABET.len() as u32) as usize];
        match rng.pick(3) {
            0 if pos < chars.len() => {
                chars.remove(pos);
            }
            1 if pos < chars.len() => chars[pos] = c,
            _ => chars.insert(pos, c),
        }
    }
    chars.into_iter().collect()
}

fn jetons_de(s: &str) -> Result<Vec<Jeton>, EvaluationError> {
    tokenize(s).collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_bien_formees_egales_reference() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x5EED_CA1C);

    for _ in 0..3000 {
        budget(start, max);
        let s = gen_expr(&mut rng, 4);

        let jetons = jetons_de(&s).unwrap_or_else(|e| panic!("s={s:?} err={e}"));
        let attendu =
            Reference::evaluer(&jetons).unwrap_or_else(|| panic!("référence refuse s={s:?}"));
        let v = evaluate(&s).unwrap_or_else(|e| panic!("s={s:?} err={e}"));

        if attendu.is_nan() {
            assert!(v.is_nan(), "s={s:?} v={v}");
        } else {
            assert_eq!(v.to_bits(), attendu.to_bits(), "s={s:?} v={v} ref={attendu}");
        }
    }
}

#[test]
fn fuzz_corrompues_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);

    for _ in 0..3000 {
        budget(start, max);
        let base = gen_expr(&mut rng, 3);
        let s = corrompre(&mut rng, &base);

        let res = evaluate(&s);

        match jetons_de(&s) {
            Err(_) => {
                if !s.trim().is_empty() {
                    assert!(
                        res.is_err(),
                        "s={s:?} : erreur lexicale attendue, obtenu {res:?}"
                    );
                }
            }
            Ok(jetons) => {
                // bien formée au sens de la grammaire => même valeur exacte
                if let Some(attendu) = Reference::evaluer(&jetons) {
                    let v = res.unwrap_or_else(|e| panic!("s={s:?} err={e}"));
                    if attendu.is_nan() {
                        assert!(v.is_nan(), "s={s:?} v={v}");
                    } else {
                        assert_eq!(v.to_bits(), attendu.to_bits(), "s={s:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn fuzz_determinisme() {
    let mut rng = Rng::new(7);
    for _ in 0..500 {
        let s = if rng.coin() {
            gen_expr(&mut rng, 3)
        } else {
            let base = gen_expr(&mut rng, 2);
            corrompre(&mut rng, &base)
        };
        let a = evaluate(&s).map(f64::to_bits);
        let b = evaluate(&s).map(f64::to_bits);
        assert_eq!(a, b, "s={s:?}");
    }
}
