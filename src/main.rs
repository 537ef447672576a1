// src/main.rs
//
// Calculatrice infixe — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------
// But:
// - NATIF, avec une expression en argument : évalue, affiche le nombre, code de sortie 0/1
// - NATIF, sans argument                    : eframe::run_native + NativeOptions
// - WEB  (wasm32)                           : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice infixe";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use calculatrice_infixe::noyau::format::format_resultat;
    use calculatrice_infixe::{evaluate, evaluate_avec_demarche, EvaluationError};

    use super::app::etat::DECIMALES_MAX;
    use super::{egui, AppCalc, TITRE_APP};

    /// Évalue une expression infixe (+ - * / et parenthèses) en double précision.
    /// Sans expression : ouvre la calculatrice graphique.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Expression à évaluer, ex: "(3 + 4) * 5 - 6".
        pub expression: Option<String>,

        /// Nombre de décimales affichées (par défaut : représentation la plus courte).
        #[arg(short, long)]
        pub decimales: Option<usize>,

        /// Affiche aussi la démarche (jetons, RPN, étapes) sur stderr.
        #[arg(short = 'D', long)]
        pub demarche: bool,
    }

    /// RUST_LOG pilote le niveau ; "warn" sinon.
    pub fn installer_journal() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Mode ligne de commande : une expression -> la ligne à afficher.
    pub fn evaluer_cli(
        expression: &str,
        decimales: Option<usize>,
        demarche: bool,
    ) -> Result<String, EvaluationError> {
        let decimales = decimales.map(|d| d.min(DECIMALES_MAX));
        tracing::debug!(expression, ?decimales, "évaluation en ligne de commande");

        let valeur = if demarche {
            let (v, d) = evaluate_avec_demarche(expression)?;
            eprintln!("Jetons : {}", d.jetons);
            eprintln!("RPN    : {}", d.rpn);
            for e in &d.etapes {
                eprintln!("  {e}");
            }
            v
        } else {
            evaluate(expression)?
        };

        Ok(format_resultat(valeur, decimales))
    }

    pub fn lancer_ui(decimales: Option<usize>) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([480.0, 640.0])
                .with_min_inner_size([380.0, 520.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::avec_decimales(decimales)))),
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    natif::installer_journal();
    let args = natif::Args::parse();

    match args.expression.as_deref() {
        Some(expression) => match natif::evaluer_cli(expression, args.decimales, args.demarche) {
            Ok(ligne) => {
                println!("{ligne}");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("erreur: {e}");
                std::process::ExitCode::FAILURE
            }
        },
        None => {
            if let Err(e) = natif::lancer_ui(args.decimales) {
                tracing::error!(erreur = %e, "échec du lancement de l’interface");
                return std::process::ExitCode::FAILURE;
            }
            std::process::ExitCode::SUCCESS
        }
    }
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
