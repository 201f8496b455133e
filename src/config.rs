/// Call-time probabilities for the noise and subchapter toggles.
///
/// All fields are probabilities in `[0, 1]`; out-of-range values are clamped
/// when drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Chance that one subchapter line is followed by a noise fragment.
    ///
    /// Defaults to `0.2`.
    pub subchapter_random_noise: f64,
    /// Chance that one chapter line is followed by a noise fragment.
    ///
    /// Defaults to `0.3`.
    pub chapter_random_noise: f64,
    /// Chance that a book renders recurring fake back-matter sections
    /// ("References", "Exercises", …) after every chapter line.
    ///
    /// Defaults to `0.2`.
    pub chapter_systemic_noise: f64,
    /// Chance that a book renders subchapter lines at all.
    ///
    /// Defaults to `0.3`.
    pub add_subchapter: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            subchapter_random_noise: 0.2,
            chapter_random_noise: 0.3,
            chapter_systemic_noise: 0.2,
            add_subchapter: 0.3,
        }
    }
}

impl GeneratorConfig {
    /// A configuration with every probability at zero: plain chapter lines
    /// and labels, no noise, no subchapters. Useful for tests and baselines.
    pub fn silent() -> Self {
        Self {
            subchapter_random_noise: 0.0,
            chapter_random_noise: 0.0,
            chapter_systemic_noise: 0.0,
            add_subchapter: 0.0,
        }
    }
}
