//! Static localization tables for ability names, stat labels, and type
//! colors.
//!
//! These are the complete recognized key sets; the unknown-key fallbacks are
//! part of the contract and nothing is loaded dynamically.

/// Spanish display name of an ability. Unknown abilities render the raw name
/// with dashes turned into spaces.
pub fn translate_ability(name: &str) -> String {
    let translated = match name {
        "overgrow" => "Espesura",
        "chlorophyll" => "Clorofila",
        "blaze" => "Mar Llamas",
        "solar-power" => "Poder Solar",
        "torrent" => "Torrente",
        "rain-dish" => "Cura Lluvia",
        "shield-dust" => "Polvo Escudo",
        "run-away" => "Fuga",
        "shed-skin" => "Mudar",
        "compound-eyes" => "Ojo Compuesto",
        "swarm" => "Enjambre",
        "keen-eye" => "Vista Lince",
        "tangled-feet" => "Pies Liados",
        "big-pecks" => "Sacapecho",
        "guts" => "Agallas",
        "hustle" => "Entusiasmo",
        "intimidate" => "Intimidación",
        "static" => "Electricidad Estática",
        "sand-veil" => "Velo Arena",
        "lightning-rod" => "Pararrayos",
        "sturdy" => "Robustez",
        "rock-head" => "Cabeza Roca",
        "inner-focus" => "Foco Interno",
        "synchronize" => "Sincronía",
        "clear-body" => "Cuerpo Puro",
        "natural-cure" => "Cura Natural",
        "serene-grace" => "Dicha",
        "swift-swim" => "Nado Rápido",
        "battle-armor" => "Armadura Batalla",
        "levitate" => "Levitación",
        _ => return name.replace('-', " "),
    };
    translated.to_string()
}

/// Short Spanish label of a base stat. Unknown stats pass through unchanged.
pub fn format_stat_name(name: &str) -> &str {
    match name {
        "hp" => "PS",
        "attack" => "Ataque",
        "defense" => "Defensa",
        "special-attack" => "Ataque Esp.",
        "special-defense" => "Defensa Esp.",
        "speed" => "Velocidad",
        other => other,
    }
}

/// Badge background for a creature type. Unknown types get a neutral grey.
pub fn type_color(name: &str) -> &'static str {
    match name {
        "normal" => "#A8A878",
        "fire" => "#F08030",
        "water" => "#6890F0",
        "electric" => "#F8D030",
        "grass" => "#78C850",
        "ice" => "#98D8D8",
        "fighting" => "#C03028",
        "poison" => "#A040A0",
        "ground" => "#E0C068",
        "flying" => "#A890F0",
        "psychic" => "#F85888",
        "bug" => "#A8B820",
        "rock" => "#B8A038",
        "ghost" => "#705898",
        "dragon" => "#7038F8",
        "dark" => "#705848",
        "steel" => "#B8B8D0",
        "fairy" => "#EE99AC",
        _ => "#777777",
    }
}
