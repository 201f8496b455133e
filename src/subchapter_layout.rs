//! Subchapter line formatting.

use rand::Rng;

use crate::error::GenError;
use crate::sampling::random_spacing;

/// Renders one subchapter line in one of four mutually exclusive modes,
/// selected by the two book-level toggles: title only, numbered title,
/// title with page, or numbered title with page. Each mode keeps its own
/// spacer width distribution.
pub fn format_subchapter<R: Rng + ?Sized>(
    rng: &mut R,
    title: &str,
    sub_number: &str,
    sub_page: u32,
    use_numbers: bool,
    use_pages: bool,
) -> Result<String, GenError> {
    let line = match (use_numbers, use_pages) {
        (false, false) => {
            format!(
                "{}{title}\n",
                random_spacing(rng, &[0, 1, 2], &[0.7, 0.2, 0.1])?
            )
        }
        (true, false) => {
            format!(
                "{}{sub_number} {title}\n",
                random_spacing(rng, &[0, 1, 2], &[0.7, 0.2, 0.1])?
            )
        }
        (false, true) => {
            format!(
                "{title}{}{sub_page}\n",
                random_spacing(rng, &[1, 2, 3], &[0.6, 0.2, 0.6])?
            )
        }
        (true, true) => {
            format!(
                "{}{sub_number} {title}{}{sub_page}\n",
                random_spacing(rng, &[0, 1, 2], &[0.85, 0.1, 0.05])?,
                random_spacing(rng, &[1, 2, 3], &[0.7, 0.2, 0.1])?
            )
        }
    };
    Ok(line)
}
