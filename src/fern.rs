// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The chaotic walk that draws the fern.  Barnsley's game is simple:
//! start at a seed point, and at every step pick one of four affine
//! maps at random, weighted so that the main frond is chosen the
//! overwhelming majority of the time.  Apply it, note which pixel the
//! point landed on, repeat.  The density grid built up this way *is*
//! the fern; everything downstream is just coloring.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::FernError;
use crate::plane::FernPlane;

/// Where the walk starts.  Any point on the fern works; the attractor
/// swallows the seed within a few steps.
pub const X_START: f64 = 0.0;
/// See [`X_START`](constant.X_START.html).
pub const Y_START: f64 = 1.0;

/// Default walk budget per pixel of output.
pub const DEFAULT_MAX_ITERS: usize = 64;
/// Default output size along each axis.
pub const DEFAULT_SIZE: usize = 1024;
/// Default growth factor, the x-stretch of the main frond.  Barnsley's
/// published value is 0.85; 0.8 gives a slightly tighter plant.
pub const DEFAULT_GROWTH_FACTOR: f64 = 0.8;

// Cumulative selection cutoffs, out of 100.  The stem is rare, the
// main frond dominates, and the two leaflets split the remainder.
const STEM_CUTOFF: f64 = 1.0;
const FROND_CUTOFF: f64 = 86.0;
const LEFT_CUTOFF: f64 = 93.0;

/// One affine map of the plane, applied as
/// `(x, y) -> (a*x + b*y + e, c*x + d*y + f)`.
///
/// Both output components are computed from the same input pair.
/// Barnsley's own listing of the frond map reads its y variable after
/// x has been overwritten but before y has, which is the same value
/// as the saved old y, so applying from a snapshot reproduces the
/// published walk exactly.
#[derive(Copy, Clone, Debug)]
pub struct Affine {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Affine {
    fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Affine {
        Affine { a, b, c, d, e, f }
    }

    /// Applies the map to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.e,
            self.c * x + self.d * y + self.f,
        )
    }
}

/// Holds the plane, the walk budget, and the four transforms, and
/// runs the chaos game over them.  Immutable once built, so a single
/// renderer can be shared freely across threads.
pub struct FernRenderer {
    /// The pixel grid the walk accumulates into.
    pub plane: FernPlane,
    max_iters: usize,
    transforms: [Affine; 4],
}

impl FernRenderer {
    /// Constructor.  Requires the width and height of the image, the
    /// per-pixel iteration budget, and the growth factor of the main
    /// frond.  The growth factor is validated here so a bad
    /// configuration fails before any work is done.
    pub fn new(
        width: usize,
        height: usize,
        max_iters: usize,
        growth_factor: f64,
    ) -> Result<Self, FernError> {
        if !growth_factor.is_finite() || growth_factor < 0.0 || growth_factor > 1.0 {
            return Err(FernError::BadGrowthFactor(growth_factor));
        }

        let plane = FernPlane::new(width, height)?;
        Ok(FernRenderer {
            plane,
            max_iters,
            transforms: [
                // Contraction onto the stem.
                Affine::new(0.0, 0.0, 0.0, 0.16, 0.0, 0.0),
                // The main frond, stretched by the growth factor.
                Affine::new(growth_factor, 0.04, -0.04, 0.85, 0.0, 1.6),
                // Left leaflet.
                Affine::new(0.20, -0.26, 0.23, 0.22, 0.0, 1.6),
                // Right leaflet.
                Affine::new(-0.15, 0.28, 0.26, 0.24, 0.0, 0.44),
            ],
        })
    }

    /// The total number of steps a full walk takes: one budget's
    /// worth of iterations for every pixel of output.
    pub fn total(&self) -> usize {
        self.plane.len() * self.max_iters
    }

    /// Picks a transform by cumulative cutoff and applies it.  The
    /// selector is expected to be uniform in [0, 100); the cutoffs
    /// tile that range with no gaps or overlaps.
    fn step(&self, x: f64, y: f64, selector: f64) -> (f64, f64) {
        let map = if selector < STEM_CUTOFF {
            &self.transforms[0]
        } else if selector < FROND_CUTOFF {
            &self.transforms[1]
        } else if selector < LEFT_CUTOFF {
            &self.transforms[2]
        } else {
            &self.transforms[3]
        };
        map.apply(x, y)
    }

    /// The inner loop: walks `steps` steps from the seed, bumping the
    /// density cell under every visit that lands inside the window.
    /// Out-of-window visits are dropped silently; nothing in here
    /// allocates or fails.
    fn walk<R: Rng>(&self, data: &mut [f64], steps: usize, rng: &mut R) {
        let selector = Uniform::new(0.0_f64, 100.0);
        let mut x = X_START;
        let mut y = Y_START;

        for _ in 0..steps {
            let r = selector.sample(rng);
            let (nx, ny) = self.step(x, y, r);
            x = nx;
            y = ny;
            if let Some(offset) = self.plane.point_to_offset(x, y) {
                data[offset] += 1.0;
            }
        }
    }

    /// Runs a single full-length walk into the given density buffer.
    /// With a fixed generator the resulting grid is bit-identical
    /// from run to run, which is the correctness baseline the tests
    /// lean on.
    pub fn generate<R: Rng>(&self, data: &mut [f64], rng: &mut R) {
        self.walk(data, self.total(), rng);
    }

    /// Shards the walk across threads: each thread runs its share of
    /// the step budget from the seed into its own grid, and the grids
    /// are summed in a fixed order afterward.  Requires at least one
    /// thread.
    pub fn generate_threaded(&self, threads: usize) -> Vec<f64> {
        let share = self.total() / threads + 1;
        let mut allocation = vec![0.0_f64; self.plane.len() * threads];
        crossbeam::scope(|spawner| {
            for region in allocation.chunks_mut(self.plane.len()) {
                spawner.spawn(move |_| {
                    let mut rng = rand::thread_rng();
                    self.walk(region, share, &mut rng);
                });
            }
        })
        .unwrap();
        self.merge(&allocation)
    }

    /// Given the per-thread grids in one contiguous block, sum them
    /// into a single grid.  Chunk order is fixed, so the merge is
    /// deterministic given the inputs.
    fn merge(&self, regions: &[f64]) -> Vec<f64> {
        let mut ret = vec![0.0_f64; self.plane.len()];
        let regions: Vec<&[f64]> = regions.chunks(self.plane.len()).collect();
        for i in 0..ret.len() {
            for region in &regions {
                ret[i] += region[i];
            }
        }
        ret
    }
}
