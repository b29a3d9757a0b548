//! Uniform sampling from style pools.
//!
//! [`StyleSampler`] binds a component id to its [`StyleSpec`] so an empty pool is reported
//! against the component that declared it.
use rand::RngCore;

use crate::error::{Error, Result};
use crate::spec::StyleSpec;

/// Pick one element of `pool` uniformly at random, or `None` when the pool is empty.
pub fn pick<'a, T>(pool: &'a [T], rng: &mut dyn RngCore) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    // Multiply-shift maps a 32-bit draw onto [0, len).
    let idx = ((rng.next_u32() as u64 * pool.len() as u64) >> 32) as usize;
    pool.get(idx)
}

/// Like [`pick`], failing with [`Error::EmptyPool`] for component `id`.
pub fn pick_required<'a, T>(
    id: &str,
    pool_name: &'static str,
    pool: &'a [T],
    rng: &mut dyn RngCore,
) -> Result<&'a T> {
    pick(pool, rng).ok_or_else(|| Error::EmptyPool {
        id: id.to_owned(),
        pool: pool_name,
    })
}

/// Stroke color and width applied to an element outline.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// Draw-time sampler over one component's style pools.
#[derive(Clone, Copy, Debug)]
pub struct StyleSampler<'a> {
    pub id: &'a str,
    pub style: &'a StyleSpec,
}

impl<'a> StyleSampler<'a> {
    pub fn new(id: &'a str, style: &'a StyleSpec) -> Self {
        Self { id, style }
    }

    pub fn fill(&self, rng: &mut dyn RngCore) -> Result<String> {
        let pool = &self.style.fill_options;
        Ok(pick_required(self.id, "fill_options", pool, rng)?.clone())
    }

    pub fn opacity(&self, rng: &mut dyn RngCore) -> Result<f64> {
        let pool = &self.style.opacity_options;
        Ok(*pick_required(self.id, "opacity_options", pool, rng)?)
    }

    pub fn size(&self, rng: &mut dyn RngCore) -> Result<f64> {
        let pool = &self.style.size_options;
        Ok(*pick_required(self.id, "size_options", pool, rng)?)
    }

    pub fn rotation(&self, rng: &mut dyn RngCore) -> Result<f64> {
        let pool = &self.style.rotation_options;
        Ok(*pick_required(self.id, "rotation_options", pool, rng)?)
    }

    /// Sample a stroke color, then a stroke width.
    pub fn stroke(&self, rng: &mut dyn RngCore) -> Result<Stroke> {
        let color = pick_required(self.id, "stroke", &self.style.stroke, rng)?;
        let width = pick_required(self.id, "stroke_width", &self.style.stroke_width, rng)?;
        Ok(Stroke {
            color: color.clone(),
            width: *width,
        })
    }

    /// Check the pools every shape samples at draw time.
    pub fn validate_fill(&self) -> Result<()> {
        self.require("fill_options", self.style.fill_options.is_empty())?;
        self.require("opacity_options", self.style.opacity_options.is_empty())?;
        self.require("size_options", self.style.size_options.is_empty())?;
        self.require("rotation_options", self.style.rotation_options.is_empty())?;

        if let Some(o) = self
            .style
            .opacity_options
            .iter()
            .find(|o| !(0.0..=1.0).contains(*o))
        {
            return Err(Error::InvalidParameter(format!(
                "component '{}': opacity {o} is outside [0, 1]",
                self.id
            )));
        }
        if let Some(s) = self
            .style
            .size_options
            .iter()
            .find(|s| !(s.is_finite() && **s > 0.0))
        {
            return Err(Error::InvalidParameter(format!(
                "component '{}': size {s} must be positive",
                self.id
            )));
        }
        if let Some(r) = self.style.rotation_options.iter().find(|r| !r.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "component '{}': rotation {r} must be finite",
                self.id
            )));
        }
        Ok(())
    }

    /// Check the pools stroked shapes sample in addition to the fill pools.
    pub fn validate_stroke(&self) -> Result<()> {
        self.require("stroke", self.style.stroke.is_empty())?;
        self.require("stroke_width", self.style.stroke_width.is_empty())?;

        if let Some(w) = self
            .style
            .stroke_width
            .iter()
            .find(|w| !(w.is_finite() && **w >= 0.0))
        {
            return Err(Error::InvalidParameter(format!(
                "component '{}': stroke width {w} must be finite and non-negative",
                self.id
            )));
        }
        Ok(())
    }

    fn require(&self, pool: &'static str, empty: bool) -> Result<()> {
        if empty {
            return Err(Error::EmptyPool {
                id: self.id.to_owned(),
                pool,
            });
        }
        Ok(())
    }
}
