use crate::core::data::complex::Complex;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia {
        c: Complex,
    },
}

impl FractalKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    #[must_use]
    pub const fn is_julia(self) -> bool {
        matches!(self, Self::Julia { .. })
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandelbrot => f.write_str("Mandelbrot"),
            Self::Julia { c } => write!(f, "Julia (c = {})", c),
        }
    }
}
