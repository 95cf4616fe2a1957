/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The shader interface variables handed to the packer.

use std::fmt;

use strum::{Display, EnumString, IntoStaticStr};

/// The type of a shader variable, named as in GLSL.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum GlslType {
    Float,
    Vec2,
    Vec3,
    Vec4,
    Int,
    IVec2,
    IVec3,
    IVec4,
    Uint,
    UVec2,
    UVec3,
    UVec4,
    Bool,
    BVec2,
    BVec3,
    BVec4,
    Mat2,
    Mat3,
    Mat4,
    Mat2x3,
    Mat2x4,
    Mat3x2,
    Mat3x4,
    Mat4x2,
    Mat4x3,
    /// A structure; its members are in [`ShaderVariable::fields`].
    Struct,
}

impl GlslType {
    /// The registers one value of the type takes, as (rows, columns).
    ///
    /// Matrices are stored transposed: each column of a `matCxR` takes one
    /// register row of `R` components, so `mat2x3` takes two rows of three.
    pub fn register_size(self) -> (u32, u32) {
        use self::GlslType::*;
        match self {
            Float | Int | Uint | Bool => (1, 1),
            Vec2 | IVec2 | UVec2 | BVec2 => (1, 2),
            Vec3 | IVec3 | UVec3 | BVec3 => (1, 3),
            Vec4 | IVec4 | UVec4 | BVec4 => (1, 4),
            Mat2 => (2, 2),
            Mat3 => (3, 3),
            Mat4 => (4, 4),
            Mat2x3 => (2, 3),
            Mat2x4 => (2, 4),
            Mat3x2 => (3, 2),
            Mat3x4 => (3, 4),
            Mat4x2 => (4, 2),
            Mat4x3 => (4, 3),
            Struct => (0, 0),
        }
    }

    /// Where the type goes when varyings are sorted largest first.
    ///
    /// Non-square matrices count as the square matrix of their largest
    /// dimension; `mat2` comes early because it takes full rows under the
    /// strict rules.
    pub fn sort_order(self) -> u8 {
        use self::GlslType::*;
        match self {
            Mat4 | Mat2x4 | Mat3x4 | Mat4x2 | Mat4x3 => 0,
            Mat2 => 1,
            Vec4 | IVec4 | UVec4 | BVec4 => 2,
            Mat3 | Mat2x3 | Mat3x2 => 3,
            Vec3 | IVec3 | UVec3 | BVec3 => 4,
            Vec2 | IVec2 | UVec2 | BVec2 => 5,
            Float | Int | Uint | Bool => 6,
            Struct => 7,
        }
    }
}

/// An interpolation qualifier.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Smooth,
    Centroid,
    Flat,
}

/// A shader stage.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// A variable of a shader's interface, as reflected by the compiler.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderVariable {
    pub name: String,
    pub ty: GlslType,
    /// The number of array elements, or 0 when the variable isn't an array.
    pub array_size: u32,
    /// The members of a structure.
    pub fields: Vec<ShaderVariable>,
    pub interpolation: Interpolation,
    pub static_use: bool,
}

impl ShaderVariable {
    /// A statically used, smoothly interpolated variable.
    pub fn new(name: &str, ty: GlslType) -> Self {
        ShaderVariable {
            name: name.to_owned(),
            ty,
            array_size: 0,
            fields: vec![],
            interpolation: Interpolation::Smooth,
            static_use: true,
        }
    }

    /// An array of `array_size` elements of `ty`.
    pub fn array(name: &str, ty: GlslType, array_size: u32) -> Self {
        ShaderVariable {
            array_size,
            ..ShaderVariable::new(name, ty)
        }
    }

    /// A structure made of `fields`.
    pub fn structure(name: &str, fields: Vec<ShaderVariable>) -> Self {
        ShaderVariable {
            fields,
            ..ShaderVariable::new(name, GlslType::Struct)
        }
    }

    pub fn is_struct(&self) -> bool {
        self.ty == GlslType::Struct
    }

    pub fn is_array(&self) -> bool {
        self.array_size > 0
    }

    /// Variables of the `gl_` namespace are provided by the implementation.
    pub fn is_built_in(&self) -> bool {
        self.name.starts_with("gl_")
    }

    /// The number of elements; 1 for a variable that isn't an array.
    pub fn element_count(&self) -> u32 {
        self.array_size.max(1)
    }
}

/// A variable to be packed: a whole varying, one of its array elements, or
/// one field of a structure varying.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedVarying {
    pub varying: ShaderVariable,
    pub interpolation: Interpolation,
    /// The name of the structure this is a field of.
    pub parent_struct_name: Option<String>,
    /// The element packed, when only one element of an array is.
    pub array_index: Option<u32>,
    /// Whether the fragment shader doesn't read the varying, which is only
    /// packed for transform feedback.
    pub vertex_only: bool,
}

impl PackedVarying {
    pub fn new(varying: ShaderVariable, interpolation: Interpolation) -> Self {
        PackedVarying {
            varying,
            interpolation,
            parent_struct_name: None,
            array_index: None,
            vertex_only: false,
        }
    }

    /// A field of the structure varying `parent_struct_name`.
    pub fn struct_field(field: ShaderVariable, interpolation: Interpolation, parent_struct_name: &str) -> Self {
        PackedVarying {
            parent_struct_name: Some(parent_struct_name.to_owned()),
            ..PackedVarying::new(field, interpolation)
        }
    }

    pub fn is_array_element(&self) -> bool {
        self.array_index.is_some()
    }

    pub fn is_struct_field(&self) -> bool {
        self.parent_struct_name.is_some()
    }

    /// The name, with the array subscript when a single element is packed.
    pub fn name_with_array_index(&self) -> String {
        match self.array_index {
            Some(index) => format!("{}[{}]", self.varying.name, index),
            None => self.varying.name.clone(),
        }
    }

    /// The name as written in the shader, prefixed by the structure's name
    /// for struct fields.
    pub fn full_name(&self) -> String {
        match self.parent_struct_name {
            Some(ref parent) => format!("{}.{}", parent, self.name_with_array_index()),
            None => self.name_with_array_index(),
        }
    }

    /// The stage whose declaration describes the variable.
    pub fn stage(&self) -> ShaderStage {
        if self.vertex_only {
            ShaderStage::Vertex
        } else {
            ShaderStage::Fragment
        }
    }
}

impl fmt::Display for PackedVarying {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.varying.ty, self.full_name())
    }
}
