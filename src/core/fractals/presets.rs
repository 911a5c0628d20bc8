use num_complex::Complex64;

/// A named Mandelbrot view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocationPreset {
    pub name: &'static str,
    pub center: Complex64,
    pub zoom: f64,
}

/// A named Julia constant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaPreset {
    pub name: &'static str,
    pub c: Complex64,
}

pub const MANDELBROT_LOCATIONS: &[LocationPreset] = &[
    LocationPreset {
        name: "Overview",
        center: Complex64::new(-0.5, 0.0),
        zoom: 1.0,
    },
    LocationPreset {
        name: "Seahorse Valley",
        center: Complex64::new(-0.743_643_887_037_151, 0.131_825_904_205_33),
        zoom: 500.0,
    },
    LocationPreset {
        name: "Elephant Valley",
        center: Complex64::new(0.25, 0.0),
        zoom: 100.0,
    },
    LocationPreset {
        name: "Lightning",
        center: Complex64::new(-1.250_66, 0.020_12),
        zoom: 2000.0,
    },
    LocationPreset {
        name: "Spiral",
        center: Complex64::new(-0.7463, 0.1102),
        zoom: 1000.0,
    },
    LocationPreset {
        name: "Mini Mandelbrot",
        center: Complex64::new(-0.160_701_35, 1.037_566_5),
        zoom: 8000.0,
    },
];

pub const JULIA_PRESETS: &[JuliaPreset] = &[
    JuliaPreset {
        name: "Classic",
        c: Complex64::new(-0.7, 0.27015),
    },
    JuliaPreset {
        name: "Spiral",
        c: Complex64::new(-0.8, 0.156),
    },
    JuliaPreset {
        name: "Lightning",
        c: Complex64::new(-0.4, 0.6),
    },
    JuliaPreset {
        name: "Douady Rabbit",
        c: Complex64::new(-0.123, 0.745),
    },
    JuliaPreset {
        name: "Siegel Disk",
        c: Complex64::new(-0.391, -0.587),
    },
    JuliaPreset {
        name: "Dendrite",
        c: Complex64::new(0.3, 0.5),
    },
    JuliaPreset {
        name: "Dragon",
        c: Complex64::new(-0.75, 0.1),
    },
    JuliaPreset {
        name: "Airplane",
        c: Complex64::new(-0.7269, 0.1889),
    },
    JuliaPreset {
        name: "Spiral II",
        c: Complex64::new(-0.75, 0.11),
    },
    JuliaPreset {
        name: "Lightning II",
        c: Complex64::new(-0.1, 0.651),
    },
    JuliaPreset {
        name: "Dendrite II",
        c: Complex64::new(-0.235, 0.827),
    },
];

fn same_name(candidate: &str, query: &str) -> bool {
    candidate.eq_ignore_ascii_case(query.trim())
}

/// Looks a Mandelbrot location up by name, ignoring case.
#[must_use]
pub fn find_location(name: &str) -> Option<&'static LocationPreset> {
    MANDELBROT_LOCATIONS
        .iter()
        .find(|preset| same_name(preset.name, name))
}

/// Looks a Julia constant up by name, ignoring case.
#[must_use]
pub fn find_julia_preset(name: &str) -> Option<&'static JuliaPreset> {
    JULIA_PRESETS.iter().find(|preset| same_name(preset.name, name))
}
