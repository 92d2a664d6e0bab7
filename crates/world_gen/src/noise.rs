//! Seeded two-dimensional coherent noise.
//!
//! [`OpenSimplexNoise`] is a gradient noise evaluated on a skewed triangular
//! lattice. Unlike classic Perlin noise it shows no axis-aligned artifacts at
//! integer coordinates, which matters here because the height field samples the
//! noise on an integer grid scaled by a power-of-two frequency.

const STRETCH_2D: f64 = -0.211_324_865_405_187; // (1 / sqrt(2 + 1) - 1) / 2
const SQUISH_2D: f64 = 0.366_025_403_784_439; // (sqrt(2 + 1) - 1) / 2
const NORM_2D: f64 = 47.0;

const LCG_MUL: i64 = 6_364_136_223_846_793_005;
const LCG_INC: i64 = 1_442_695_040_888_963_407;

/// Gradients for the 2D lattice: eight directions, stored as `(x, y)` pairs.
const GRADIENTS_2D: [i8; 16] = [5, 2, 2, 5, -5, 2, -2, 5, 5, -2, 2, -5, -5, -2, -2, -5];

/// A scalar field over the plane.
pub trait Noise2D: Send + Sync {
    /// Evaluate the field at `(x, y)`.
    fn eval(&self, x: f64, y: f64) -> f64;
}

/// OpenSimplex noise in two dimensions.
///
/// Values stay within `[-1, 1]`. The permutation table is built once from the
/// seed; evaluation is a pure function of `(seed, x, y)`.
#[derive(Clone)]
pub struct OpenSimplexNoise {
    seed: i64,
    perm: [u8; 256],
}

impl std::fmt::Debug for OpenSimplexNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSimplexNoise")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl OpenSimplexNoise {
    /// Build the permutation table for `seed`.
    pub fn new(seed: i64) -> Self {
        let mut source = [0u8; 256];
        for (i, s) in source.iter_mut().enumerate() {
            *s = i as u8;
        }

        let mut state = seed;
        for _ in 0..3 {
            state = state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
        }

        let mut perm = [0u8; 256];
        for i in (0..256usize).rev() {
            state = state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
            let r = state.wrapping_add(31).rem_euclid(i as i64 + 1) as usize;
            perm[i] = source[r];
            source[r] = source[i];
        }

        Self { seed, perm }
    }

    /// The seed this instance was built from.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    #[inline]
    fn extrapolate(&self, xsb: i64, ysb: i64, dx: f64, dy: f64) -> f64 {
        let a = self.perm[(xsb & 0xFF) as usize] as i64;
        let index = (self.perm[((a + ysb) & 0xFF) as usize] & 0x0E) as usize;
        GRADIENTS_2D[index] as f64 * dx + GRADIENTS_2D[index + 1] as f64 * dy
    }

    #[inline]
    fn contribution(&self, xsb: i64, ysb: i64, dx: f64, dy: f64) -> f64 {
        let attn = 2.0 - dx * dx - dy * dy;
        if attn > 0.0 {
            let attn2 = attn * attn;
            attn2 * attn2 * self.extrapolate(xsb, ysb, dx, dy)
        } else {
            0.0
        }
    }
}

impl Noise2D for OpenSimplexNoise {
    fn eval(&self, x: f64, y: f64) -> f64 {
        // Place the input on the stretched lattice.
        let stretch_offset = (x + y) * STRETCH_2D;
        let xs = x + stretch_offset;
        let ys = y + stretch_offset;

        let mut xsb = xs.floor() as i64;
        let mut ysb = ys.floor() as i64;

        // Skew the cell origin back to input space.
        let squish_offset = (xsb + ysb) as f64 * SQUISH_2D;
        let xb = xsb as f64 + squish_offset;
        let yb = ysb as f64 + squish_offset;

        let xins = xs - xsb as f64;
        let yins = ys - ysb as f64;
        let in_sum = xins + yins;

        let mut dx0 = x - xb;
        let mut dy0 = y - yb;

        let mut value = 0.0;

        // (1, 0)
        let dx1 = dx0 - 1.0 - SQUISH_2D;
        let dy1 = dy0 - SQUISH_2D;
        value += self.contribution(xsb + 1, ysb, dx1, dy1);

        // (0, 1)
        let dx2 = dx0 - SQUISH_2D;
        let dy2 = dy0 - 1.0 - SQUISH_2D;
        value += self.contribution(xsb, ysb + 1, dx2, dy2);

        let xsv_ext;
        let ysv_ext;
        let dx_ext;
        let dy_ext;
        if in_sum <= 1.0 {
            // Triangle at (0, 0).
            let zins = 1.0 - in_sum;
            if zins > xins || zins > yins {
                if xins > yins {
                    xsv_ext = xsb + 1;
                    ysv_ext = ysb - 1;
                    dx_ext = dx0 - 1.0;
                    dy_ext = dy0 + 1.0;
                } else {
                    xsv_ext = xsb - 1;
                    ysv_ext = ysb + 1;
                    dx_ext = dx0 + 1.0;
                    dy_ext = dy0 - 1.0;
                }
            } else {
                xsv_ext = xsb + 1;
                ysv_ext = ysb + 1;
                dx_ext = dx0 - 1.0 - 2.0 * SQUISH_2D;
                dy_ext = dy0 - 1.0 - 2.0 * SQUISH_2D;
            }
        } else {
            // Triangle at (1, 1).
            let zins = 2.0 - in_sum;
            if zins < xins || zins < yins {
                if xins > yins {
                    xsv_ext = xsb + 2;
                    ysv_ext = ysb;
                    dx_ext = dx0 - 2.0 - 2.0 * SQUISH_2D;
                    dy_ext = dy0 - 2.0 * SQUISH_2D;
                } else {
                    xsv_ext = xsb;
                    ysv_ext = ysb + 2;
                    dx_ext = dx0 - 2.0 * SQUISH_2D;
                    dy_ext = dy0 - 2.0 - 2.0 * SQUISH_2D;
                }
            } else {
                xsv_ext = xsb;
                ysv_ext = ysb;
                dx_ext = dx0;
                dy_ext = dy0;
            }
            xsb += 1;
            ysb += 1;
            dx0 = dx0 - 1.0 - 2.0 * SQUISH_2D;
            dy0 = dy0 - 1.0 - 2.0 * SQUISH_2D;
        }

        // (0, 0) or (1, 1)
        value += self.contribution(xsb, ysb, dx0, dy0);
        // Extra vertex
        value += self.contribution(xsv_ext, ysv_ext, dx_ext, dy_ext);

        value / NORM_2D
    }
}

impl<N: Noise2D + ?Sized> Noise2D for &N {
    #[inline]
    fn eval(&self, x: f64, y: f64) -> f64 {
        (**self).eval(x, y)
    }
}

impl<N: Noise2D + ?Sized> Noise2D for Box<N> {
    #[inline]
    fn eval(&self, x: f64, y: f64) -> f64 {
        (**self).eval(x, y)
    }
}

/// A noise source returning the same value everywhere.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ConstantNoise(pub(crate) f64);

#[cfg(test)]
impl Noise2D for ConstantNoise {
    #[inline]
    fn eval(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}
