//! Built-in flag palette definitions.
//!
//! One table per flag variant. These are data, not logic: the stripe order
//! is the visual top-to-bottom order, and the swatch names key the document
//! color registry, so repeated names (the mirrored flags) share one swatch.

use crate::color::ColorSpec;
use crate::palette::{Palette, Stripe};

/// List of all available built-in flag names.
const BUILTIN_NAMES: &[&str] = &[
    "rainbow",
    "asexual",
    "aromantic",
    "bisexual",
    "pansexual",
    "lesbian",
    "gay-men",
    "transgender",
    "nonbinary",
    "genderqueer",
    "genderfluid",
    "agender",
];

/// Returns a list of all available built-in flag names.
pub fn list_builtins() -> Vec<&'static str> {
    BUILTIN_NAMES.to_vec()
}

/// Returns a built-in flag palette by name, or None if not found.
pub fn get_builtin(name: &str) -> Option<Palette> {
    match name {
        "rainbow" => Some(rainbow()),
        "asexual" => Some(asexual()),
        "aromantic" => Some(aromantic()),
        "bisexual" => Some(bisexual()),
        "pansexual" => Some(pansexual()),
        "lesbian" => Some(lesbian()),
        "gay-men" => Some(gay_men()),
        "transgender" => Some(transgender()),
        "nonbinary" => Some(nonbinary()),
        "genderqueer" => Some(genderqueer()),
        "genderfluid" => Some(genderfluid()),
        "agender" => Some(agender()),
        _ => None,
    }
}

fn stripe(name: &str, hex: &str) -> Option<Stripe> {
    Some(Stripe::new(name, ColorSpec::hex(hex)))
}

fn rainbow() -> Palette {
    Palette {
        name: "rainbow".to_string(),
        title: "Rainbow".to_string(),
        stripes: vec![
            stripe("Pride Red", "#FF0018"),
            stripe("Pride Orange", "#FFA52C"),
            stripe("Pride Yellow", "#FFFF41"),
            stripe("Pride Green", "#008018"),
            stripe("Pride Blue", "#0000F9"),
            stripe("Pride Purple", "#86007D"),
        ],
    }
}

fn asexual() -> Palette {
    Palette {
        name: "asexual".to_string(),
        title: "Asexual".to_string(),
        stripes: vec![
            stripe("Asexual Black", "#000000"),
            stripe("Asexual Grey", "#a4a4a4"),
            stripe("Asexual White", "#ffffff"),
            stripe("Asexual Purple", "#810081"),
        ],
    }
}

fn aromantic() -> Palette {
    Palette {
        name: "aromantic".to_string(),
        title: "Aromantic".to_string(),
        stripes: vec![
            stripe("Aromantic Green 1", "#3ba740"),
            stripe("Aromantic Green 2", "#a8d47a"),
            stripe("Aromantic White", "#ffffff"),
            stripe("Aromantic Grey", "#ababab"),
            stripe("Aromantic Black", "#000000"),
        ],
    }
}

fn bisexual() -> Palette {
    Palette {
        name: "bisexual".to_string(),
        title: "Bisexual".to_string(),
        stripes: vec![
            stripe("Bisexual Pink", "#D60270"),
            stripe("Bisexual Purple", "#9B4F96"),
            stripe("Bisexual Blue", "#0038A8"),
        ],
    }
}

fn pansexual() -> Palette {
    Palette {
        name: "pansexual".to_string(),
        title: "Pansexual".to_string(),
        stripes: vec![
            stripe("Pansexual Pink", "#FF1B8D"),
            stripe("Pansexual Yellow", "#FFDA00"),
            stripe("Pansexual Blue", "#1BB3FF"),
        ],
    }
}

fn lesbian() -> Palette {
    Palette {
        name: "lesbian".to_string(),
        title: "Lesbian".to_string(),
        stripes: vec![
            stripe("Lesbian Red", "#D52D00"),
            stripe("Lesbian Orange", "#FF9A56"),
            stripe("Lesbian White", "#FFFFFF"),
            stripe("Lesbian Light Pink", "#D462A6"),
            stripe("Lesbian Pink", "#A50062"),
        ],
    }
}

fn gay_men() -> Palette {
    Palette {
        name: "gay-men".to_string(),
        title: "Gay Men".to_string(),
        stripes: vec![
            stripe("Gay Men Green 1", "#068E70"),
            stripe("Gay Men Green 2", "#27CFAA"),
            stripe("Gay Men Green 3", "#98e9c1"),
            stripe("Gay Men White", "#FFFFFF"),
            stripe("Gay Men Blue 1", "#7bade2"),
            stripe("Gay Men Blue 2", "#5049cb"),
            stripe("Gay Men Blue 3", "#3c1a77"),
        ],
    }
}

/// Mirrored: the outer stripes reuse the inner swatch names.
fn transgender() -> Palette {
    Palette {
        name: "transgender".to_string(),
        title: "Trans".to_string(),
        stripes: vec![
            stripe("Trans Flag Blue", "#5BCFFB"),
            stripe("Trans Flag Pink", "#F5A9B8"),
            stripe("Trans Flag White", "#FFFFFF"),
            stripe("Trans Flag Pink", "#F5A9B8"),
            stripe("Trans Flag Blue", "#5BCFFB"),
        ],
    }
}

fn nonbinary() -> Palette {
    Palette {
        name: "nonbinary".to_string(),
        title: "Non-Binary".to_string(),
        stripes: vec![
            stripe("Non-Binary Yellow", "#FCF431"),
            stripe("Non-Binary White", "#FFFFFF"),
            stripe("Non-Binary Purple", "#9C59D1"),
            stripe("Non-Binary Black", "#000000"),
        ],
    }
}

fn genderqueer() -> Palette {
    Palette {
        name: "genderqueer".to_string(),
        title: "Genderqueer".to_string(),
        stripes: vec![
            stripe("Genderqueer Purple", "#b57fdd"),
            stripe("Genderqueer White", "#fff"),
            stripe("Genderqueer Green", "#49821e"),
        ],
    }
}

fn genderfluid() -> Palette {
    Palette {
        name: "genderfluid".to_string(),
        title: "Genderfluid".to_string(),
        stripes: vec![
            stripe("Genderfluid Pink", "#FE76A2"),
            stripe("Genderfluid White", "#FFFFFF"),
            stripe("Genderfluid Violet", "#BF12d7"),
            stripe("Genderfluid Black", "#000000"),
            stripe("Genderfluid Blue", "#303CBE"),
        ],
    }
}

/// Mirrored around the green center stripe.
fn agender() -> Palette {
    Palette {
        name: "agender".to_string(),
        title: "Agender".to_string(),
        stripes: vec![
            stripe("Agender Black", "#000"),
            stripe("Agender Gray", "#bababa"),
            stripe("Agender White", "#fff"),
            stripe("Agender Green", "#baf484"),
            stripe("Agender White", "#fff"),
            stripe("Agender Gray", "#bababa"),
            stripe("Agender Black", "#000"),
        ],
    }
}
