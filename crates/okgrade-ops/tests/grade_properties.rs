//! End-to-end behaviour of the OKLCH grade.

use approx::assert_abs_diff_eq;
use okgrade_color::{linear_srgb_to_oklch, oklch_to_linear_srgb};
use okgrade_core::Rgba;
use okgrade_lut::{HueCurveLut, HueLutView};
use okgrade_math::Vec3;
use okgrade_ops::hue::HueBand;
use okgrade_ops::{DebugMode, GradeParams, OklchGrade};

const SAMPLES: &[f32] = &[-0.2, 0.0, 0.03, 0.18, 0.5, 0.9, 1.0, 3.0];

fn sample_pixels() -> Vec<Rgba> {
    let mut out = Vec::new();
    for &r in SAMPLES {
        for &g in SAMPLES {
            for &b in SAMPLES {
                out.push(Rgba::new(r, g, b, 1.0));
            }
        }
    }
    out
}

/// Samples whose lightness is not negative; negative L is floored by the
/// tone stage, so only these can come back unchanged.
fn gradable_pixels() -> Vec<Rgba> {
    sample_pixels()
        .into_iter()
        .filter(|px| lch_of(*px).l >= 0.0)
        .collect()
}

fn lch_of(px: Rgba) -> okgrade_color::Oklch {
    linear_srgb_to_oklch(Vec3::from_f32(px.rgb()))
}

fn curve_params() -> GradeParams {
    let mut params = GradeParams::default();
    params.curve.enabled = true;
    params.curve.connected = true;
    params.curve.width = 360;
    params
}

fn assert_rgb_close(a: Rgba, b: Rgba, eps: f32) {
    for (x, y) in a.rgb().iter().zip(b.rgb()) {
        assert!((x - y).abs() <= eps, "{} vs {}", a, b);
    }
}

#[test]
fn conversion_round_trip() {
    for px in sample_pixels() {
        let rgb = Vec3::from_f32(px.rgb());
        let back = oklch_to_linear_srgb(linear_srgb_to_oklch(rgb));
        assert!((back - rgb).max_abs() < 1e-5, "{:?} -> {:?}", rgb, back);
    }
}

#[test]
fn neutral_grade_is_identity() {
    let grade = OklchGrade::new(&GradeParams::default(), None);
    for px in gradable_pixels() {
        assert_rgb_close(grade.process(px), px, 1e-5);
    }
}

#[test]
fn flat_curve_is_identity() {
    let lut = HueCurveLut::identity(360).unwrap();
    let params = curve_params();
    let grade = OklchGrade::new(&params, Some(lut.entries()));
    assert!(grade.curve_status().is_ready());
    for px in gradable_pixels() {
        assert_rgb_close(grade.process(px), px, 1e-5);
    }
}

#[test]
fn hue_shift_wraps() {
    let mut p90 = GradeParams::default();
    p90.hue.shift_deg = 90.0;
    let mut p450 = p90.clone();
    p450.hue.shift_deg = 450.0;

    let g90 = OklchGrade::new(&p90, None);
    let g450 = OklchGrade::new(&p450, None);
    for px in sample_pixels() {
        // Partially faded pixels rotate by a fraction of the shift, which
        // does not wrap to the same angle.
        let w = g90.trace(px.rgb()).chroma_weight;
        if w != 0.0 && w != 1.0 {
            continue;
        }
        assert_rgb_close(g90.process(px), g450.process(px), 1e-5);
    }
}

#[test]
fn negative_chroma_floors_to_zero() {
    let mut params = GradeParams::default();
    params.chroma.offset = -5.0;

    params.debug_mode = DebugMode::Chroma;
    let debug = OklchGrade::new(&params, None);
    params.debug_mode = DebugMode::Off;
    let graded = OklchGrade::new(&params, None);

    for px in sample_pixels() {
        assert_eq!(debug.process(px).rgb(), [0.0; 3]);

        let out = graded.process(px);
        assert!(out.is_finite(), "{}", out);
        assert!(lch_of(out).c < 1e-4, "{}", out);
    }
}

#[test]
fn chroma_offset_floors_per_pixel() {
    let mut params = GradeParams::default();
    params.chroma.offset = -0.5;
    params.debug_mode = DebugMode::Chroma;
    let debug = OklchGrade::new(&params, None);

    let mut floored = 0;
    let mut kept = 0;
    for px in sample_pixels() {
        let expected = (lch_of(px).c - 0.5).max(0.0);
        let shown = debug.process(px).rgb();
        if expected == 0.0 {
            assert_eq!(shown, [0.0; 3], "{}", px);
            floored += 1;
        } else {
            for v in shown {
                assert_abs_diff_eq!(v as f64, expected, epsilon = 1e-6);
            }
            kept += 1;
        }
    }
    // HDR samples such as (3, -0.2, -0.2) keep chroma above the offset
    assert!(floored > 0 && kept > 0);
}

#[test]
fn lut_bilinear_continuity() {
    let lut = HueCurveLut::from_fn(17, |t| [t * t, 1.0 - t, (t * 5.0).sin().abs()]).unwrap();
    let view = lut.view();
    for k in 0..16 {
        let a = view.sample_at(k as f64);
        let b = view.sample_at(k as f64 + 1.0);
        let mid = view.sample_at(k as f64 + 0.5);
        for c in 0..3 {
            assert_abs_diff_eq!(a[c], lut.entries()[k][c] as f64, epsilon = 1e-7);
            assert_abs_diff_eq!(mid[c], 0.5 * (a[c] + b[c]), epsilon = 1e-7);
        }
    }
}

#[test]
fn curve_disabled_equals_disconnected() {
    let lut = HueCurveLut::from_fn(360, |t| [t, (t * 3.0).fract(), 1.0 - t]).unwrap();

    let mut disabled = curve_params();
    disabled.curve.enabled = false;
    let mut disconnected = curve_params();
    disconnected.curve.connected = false;

    let a = OklchGrade::new(&disabled, Some(lut.entries()));
    let b = OklchGrade::new(&disconnected, Some(lut.entries()));
    let plain = OklchGrade::new(&GradeParams::default(), None);
    for px in sample_pixels() {
        assert_eq!(a.process(px), b.process(px));
        assert_eq!(a.process(px), plain.process(px));
    }
}

#[test]
fn curve_gate_never_reads_past_buffer() {
    let lut = HueCurveLut::from_fn(4, |t| [0.5, t, 0.5]).unwrap();
    let mut params = curve_params();
    params.curve.width = 100_000;
    let grade = OklchGrade::new(&params, Some(lut.entries()));
    assert_eq!(grade.curve().map(|v| v.width()), Some(4));
    for px in sample_pixels() {
        assert!(grade.process(px).is_finite());
    }

    params.curve.width = 1;
    assert!(OklchGrade::new(&params, Some(lut.entries())).curve().is_none());
    let empty: [[f32; 4]; 0] = [];
    assert!(HueLutView::resolve(true, true, 360, Some(&empty[..])).1.is_none());
}

#[test]
fn alpha_passes_through_every_mode() {
    let lut = HueCurveLut::from_fn(360, |t| [1.0 - t, 0.3, 0.8]).unwrap();
    let mut configs = Vec::new();
    for mode in DebugMode::ALL {
        let mut p = curve_params();
        p.debug_mode = mode;
        p.hue.bands.magenta = 60.0;
        p.lightness.contrast = 1.4;
        configs.push(p.clone());
        p.clamp_output = true;
        p.mix = 0.3;
        configs.push(p.clone());
        p.bypass = true;
        configs.push(p);
    }

    for params in &configs {
        let grade = OklchGrade::new(params, Some(lut.entries()));
        for alpha in [0.0, 0.37, 1.0, 2.5, -0.1] {
            for px in sample_pixels() {
                let px = Rgba { a: alpha, ..px };
                assert_eq!(grade.process(px).a.to_bits(), alpha.to_bits());
            }
        }
    }
}

#[test]
fn mix_boundaries() {
    let mut params = GradeParams::default();
    params.hue.shift_deg = 75.0;
    params.lightness.gain = 1.2;

    params.mix = 0.0;
    let none = OklchGrade::new(&params, None);
    params.mix = -3.0;
    let below = OklchGrade::new(&params, None);
    params.mix = 1.0;
    let full = OklchGrade::new(&params, None);
    params.mix = 7.0;
    let above = OklchGrade::new(&params, None);

    for px in sample_pixels() {
        assert_eq!(none.process(px), px);
        assert_eq!(below.process(px), px);

        let graded = oklch_to_linear_srgb(full.trace(px.rgb()).graded).to_f32();
        assert_rgb_close(full.process(px), px.with_rgb(graded), 1e-5);
        assert_eq!(above.process(px), full.process(px));
    }
}

#[test]
fn red_band_shift_on_linear_red() {
    let mut params = GradeParams::default();
    params.hue.bands.red = 90.0;
    let grade = OklchGrade::new(&params, None);

    let px = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let before = lch_of(px);
    let out = grade.process(px);
    let after = lch_of(out);

    // Both red lobes see the same distance from the seam.
    let expected = before.h + 2.0 * 90.0 * HueBand::RED.weight(before.h);
    assert_abs_diff_eq!(before.h, 29.2338802796, epsilon = 1e-6);
    assert_abs_diff_eq!(after.h, expected, epsilon = 1e-3);
    assert!((110.0..130.0).contains(&after.h), "hue {}", after.h);
    assert_abs_diff_eq!(after.c, before.c, epsilon = 1e-4);
    assert_abs_diff_eq!(after.l, before.l, epsilon = 1e-4);
    assert!(out.is_finite());
    assert_eq!(out.a, 1.0);
}

#[test]
fn zero_green_curve_desaturates_red() {
    let lut = HueCurveLut::from_fn(360, |t| {
        let deg = t * 360.0;
        let near_red = deg < 60.0 || deg > 330.0;
        [0.5, if near_red { 0.0 } else { 0.5 }, 0.5]
    })
    .unwrap();
    let grade = OklchGrade::new(&curve_params(), Some(lut.entries()));

    let px = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let before = lch_of(px);
    let out = grade.process(px);
    let after = lch_of(out);

    assert!(out.is_finite());
    assert!(after.c < 1e-4, "chroma {}", after.c);
    assert_abs_diff_eq!(after.l, before.l, epsilon = 1e-4);
    assert_rgb_close(out, Rgba::gray(out.g, 1.0), 1e-4);
}

#[test]
fn debug_views_use_graded_values() {
    let mut params = GradeParams::default();
    params.lightness.gain = 0.5;
    params.hue.shift_deg = 180.0;

    let px = Rgba::new(0.9, 0.3, 0.1, 1.0);
    let base = lch_of(px);

    params.debug_mode = DebugMode::Lightness;
    let l = OklchGrade::new(&params, None).process(px).r as f64;
    assert_abs_diff_eq!(l, (base.l * 0.5 - 0.18) + 0.18, epsilon = 1e-6);

    params.debug_mode = DebugMode::Hue;
    let h = OklchGrade::new(&params, None).process(px).r as f64;
    let expected = okgrade_math::wrap_degrees(base.h + 180.0) / 360.0;
    assert_abs_diff_eq!(h, expected, epsilon = 1e-6);
}

#[test]
fn curve_hue_shift_follows_original_hue() {
    // Curve shifts every hue by +90 but only where the ORIGINAL hue is below 180
    let lut = HueCurveLut::from_fn(361, |t| [if t < 0.5 { 0.75 } else { 0.5 }, 0.5, 0.5]).unwrap();
    let grade = OklchGrade::new(&curve_params(), Some(lut.entries()));

    let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
    let t = grade.trace(red.rgb());
    assert_abs_diff_eq!(t.hue_shift_deg, 90.0, epsilon = 1e-6);
    assert_abs_diff_eq!(t.graded.h, t.input.h + 90.0, epsilon = 1e-6);
}
