// src/noyau/format.rs

/// Affichage d’un résultat f64.
///
/// - NaN -> "indéfini", ±∞ -> "∞" / "-∞"
/// - `None` : représentation la plus courte qui relit la même valeur ("23", "28.5")
/// - `Some(n)` : n décimales, zéros finaux et '.' pendant retirés
/// - "-0" s’affiche "0"
pub fn format_resultat(valeur: f64, decimales: Option<usize>) -> String {
    if valeur.is_nan() {
        return "indéfini".to_string();
    }
    if valeur.is_infinite() {
        let s = if valeur.is_sign_positive() { "∞" } else { "-∞" };
        return s.to_string();
    }

    let texte = match decimales {
        None => format!("{valeur}"),
        Some(n) => tronquer_zeros(format!("{valeur:.n$}")),
    };

    if texte == "-0" {
        "0".to_string()
    } else {
        texte
    }
}

fn tronquer_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
