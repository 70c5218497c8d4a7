//! Parallel buffer grading using Rayon.
//!
//! Pixels are independent, so the buffer is split into row-sized chunks and
//! graded on the current Rayon pool. Results are identical to
//! [`apply_rgba`](crate::apply_rgba).
//!
//! # Example
//!
//! ```rust
//! use okgrade_ops::{GradeParams, OklchGrade, parallel};
//!
//! let grade = OklchGrade::new(&GradeParams::default(), None);
//! let mut buf = vec![0.5f32; 64 * 64 * 4];
//! parallel::par_apply_rgba(&grade, &mut buf).unwrap();
//! ```

use okgrade_core::Rgba;
use rayon::prelude::*;
use tracing::debug;

use crate::error::check_rgba_len;
use crate::{OklchGrade, OpsResult};

/// Pixels handed to one Rayon task.
const PIXELS_PER_CHUNK: usize = 1024;

/// Grades an interleaved RGBA buffer in place across the Rayon pool.
pub fn par_apply_rgba(grade: &OklchGrade<'_>, data: &mut [f32]) -> OpsResult<()> {
    check_rgba_len(data.len())?;
    debug!(
        pixels = data.len() / 4,
        threads = rayon::current_num_threads(),
        "grading RGBA buffer in parallel"
    );

    data.par_chunks_mut(PIXELS_PER_CHUNK * 4).for_each(|chunk| {
        for px in chunk.chunks_exact_mut(4) {
            let out = grade.process(Rgba::new(px[0], px[1], px[2], px[3]));
            px.copy_from_slice(&out.to_array());
        }
    });

    Ok(())
}

/// Grades a slice of pixels in place across the Rayon pool.
pub fn par_apply_pixels(grade: &OklchGrade<'_>, pixels: &mut [Rgba]) {
    debug!(pixels = pixels.len(), "grading pixels in parallel");
    pixels
        .par_iter_mut()
        .for_each(|px| *px = grade.process(*px));
}
