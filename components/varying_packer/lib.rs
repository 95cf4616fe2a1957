/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Assigns the varyings of a linked shader program to interpolation
//! registers.
//!
//! The registers form a grid of four columns, one row per vector the
//! hardware can interpolate. Every varying takes a contiguous rectangle of
//! that grid, following the packing rules of GLSL ES 1.00 Appendix A
//! section 7.

#![deny(unsafe_code)]

#[macro_use]
extern crate log;

mod packing;
mod shader_variable;

pub use crate::packing::{
    MergedVarying, PackMode, PackedVaryingRegister, PackingError, RegisterMap, VaryingPacking,
};
pub use crate::shader_variable::{GlslType, Interpolation, PackedVarying, ShaderStage, ShaderVariable};
