//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/CLR/AC/DEL) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la précision d’affichage (décimales).

use calculatrice_infixe::noyau::format::format_resultat;
use calculatrice_infixe::Demarche;

/// Précision d’affichage par défaut ; `None` = représentation la plus courte.
pub const DECIMALES_DEFAUT: Option<usize> = None;

/// Garde-fou : au-delà, f64 n’a plus rien à dire.
pub const DECIMALES_MAX: usize = 17;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: Option<f64>, // dernier résultat (conservé sur erreur)
    pub resultat: String,    // valeur formatée selon `decimales`
    pub erreur: String,      // message d’erreur (si éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: Option<usize>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeur: None,
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            decimales: DECIMALES_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /// Variante avec précision d’affichage choisie (ligne de commande).
    pub fn avec_decimales(decimales: Option<usize>) -> Self {
        let mut app = Self::default();
        app.set_decimales(decimales);
        app
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur = None;
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui l’entourent).
    pub fn backspace_entree(&mut self) {
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.entree.pop();
        let garde = self.entree.trim_end().len();
        self.entree.truncate(garde);
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: f64, demarche: Demarche) {
        self.erreur.clear();
        self.valeur = Some(valeur);
        self.resultat = format_resultat(valeur, self.decimales);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne les décimales, puis reformate le résultat courant.
    pub fn set_decimales(&mut self, decimales: Option<usize>) {
        self.decimales = decimales.map(|d| d.min(DECIMALES_MAX));
        if let Some(v) = self.valeur {
            self.resultat = format_resultat(v, self.decimales);
        }
        self.focus_entree = true;
    }
}
