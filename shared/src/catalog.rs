//! Fixed option lists for the product forms
//!
//! These are compiled in, not fetched from the API.

pub const CATEGORIES: &[&str] = &[
    "Motocultores",
    "Mini tractores cortacésped",
    "Motoazadas",
    "Accesorios agrícolas",
    "Cortacesped",
    "Cortasetos",
    "Desbrozadoras",
    "Motosierras",
    "Sopladoras",
    "Accesorios bosque y jardín",
    "Discos fumigación",
    "Fumigadoras motorizadas",
    "Fumigadoras manuales",
    "Espolvoreadoras",
    "Accesorios fumigación",
    "Aceites 2 Tiempos",
    "Aceites 4 Tiempos",
    "Grasas",
    "Bombas de caudal",
    "Bombas de presión",
    "Accesorios riego",
    "Motores",
    "Generadores",
    "Tijeras",
    "Otros",
];

pub const BRANDS: &[&str] = &[
    "ANNOVI REBERBERI",
    "CASAMOTO",
    "DUCATI",
    "ECHO",
    "HUSQVARNA",
    "MARUYAMA",
    "STHIL",
    "WHALE BEST",
    "TEMCO (PIM only)",
    "OTROS (PIM only)",
];

pub const BRAND_LOGOS: &[&str] = &[
    "/images/brands/annovi-reberberi.png",
    "/images/brands/casamoto.png",
    "/images/brands/ducati.png",
    "/images/brands/echo.png",
    "/images/brands/husqvarna.png",
    "/images/brands/maruyama.png",
    "/images/brands/mitsubishi.png",
    "/images/brands/oleo-mac.png",
    "/images/brands/sthil.png",
    "/images/brands/shindaiwa.png",
    "/images/brands/whale-best.png",
    "/images/brands/temco.png",
    "/images/brands/placeholder.png",
];

/// Step through `options` from `current` by `delta`, wrapping at both ends.
///
/// A value that is not in the list (including the empty string) lands on
/// the first option when stepping forward and the last when stepping back.
pub fn cycle_option(options: &[&'static str], current: &str, delta: isize) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let len = options.len() as isize;
    let next = match options.iter().position(|o| *o == current) {
        Some(idx) => (idx as isize + delta).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    options[next as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle_option(BRANDS, "OTROS (PIM only)", 1), "ANNOVI REBERBERI");
        assert_eq!(cycle_option(BRANDS, "ANNOVI REBERBERI", -1), "OTROS (PIM only)");
        assert_eq!(cycle_option(BRANDS, "ECHO", 1), "HUSQVARNA");
    }

    #[test]
    fn test_cycle_from_unset() {
        assert_eq!(cycle_option(CATEGORIES, "", 1), "Motocultores");
        assert_eq!(cycle_option(CATEGORIES, "", -1), "Otros");
    }

    #[test]
    fn test_list_sizes() {
        assert_eq!(CATEGORIES.len(), 25);
        assert_eq!(BRANDS.len(), 10);
        assert_eq!(BRAND_LOGOS.len(), 13);
    }
}
