/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The packing algorithm of GLSL ES 1.00 Appendix A section 7.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use smallvec::SmallVec;

use crate::shader_variable::{GlslType, PackedVarying, ShaderStage, ShaderVariable};

/// The number of components of a register.
const REGISTER_COLUMNS: u32 = 4;

/// Which packing rules apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PackMode {
    /// The rules of the GLSL ES appendix, with `mat2` taking only two
    /// columns of its rows.
    AngleRelaxed,
    /// The rules of the GLSL ES appendix, to the letter.
    WebGlStrict,
    /// Every varying takes whole registers. `gl_PointSize` is handled by
    /// the backend rather than packed.
    AngleNonConformantD3D9,
}

/// The occupied cells of the register grid, one row per register.
pub type RegisterMap = Vec<[bool; REGISTER_COLUMNS as usize]>;

/// A varying seen from both stages of a program. Either side is missing
/// when only one stage declares it.
#[derive(Clone, Debug, Default)]
pub struct MergedVarying {
    pub vertex: Option<ShaderVariable>,
    pub fragment: Option<ShaderVariable>,
}

/// One register row assigned to a packed varying.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackedVaryingRegister {
    /// The full name of the packed varying.
    pub name: String,
    pub register_row: u32,
    pub register_column: u32,
    /// The array element stored in this row.
    pub varying_array_index: u32,
    /// The row of the element stored in this row, for matrices.
    pub varying_row_index: u32,
    /// The position of the register in the sorted register list.
    pub semantic_index: u32,
}

impl PackedVaryingRegister {
    fn sort_order(&self) -> u32 {
        self.register_row * REGISTER_COLUMNS + self.register_column
    }
}

/// Why a program's varyings could not be packed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PackingError {
    /// There is no room left for a varying.
    CouldNotPack {
        /// The full name of the varying.
        name: String,
        /// The stage whose declaration was packed.
        stage: ShaderStage,
        /// Whether the non-conformant D3D9 rules were in effect.
        non_conformant_d3d9: bool,
    },
}

impl fmt::Display for PackingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PackingError::CouldNotPack {
                ref name,
                stage,
                non_conformant_d3d9,
            } => {
                write!(f, "Could not pack varying {} ({} shader)", name, stage)?;
                if non_conformant_d3d9 {
                    write!(
                        f,
                        "\nNote: Additional non-conformance limitations are in place when using D3D9."
                    )?;
                }
                Ok(())
            },
        }
    }
}

impl Error for PackingError {}

/// Splits `a[2]` into `a` and its subscripts. Names without subscripts are
/// returned as is.
fn parse_resource_name(name: &str) -> (&str, SmallVec<[u32; 2]>) {
    let mut subscripts = SmallVec::new();
    let mut base = name;
    while let Some(stripped) = base.strip_suffix(']') {
        let Some(open) = stripped.rfind('[') else {
            break;
        };
        match stripped[open + 1..].parse() {
            Ok(index) => subscripts.insert(0, index),
            Err(..) => break,
        }
        base = &stripped[..open];
    }
    (base, subscripts)
}

/// Packs the varyings of one program link.
///
/// The grid has `max_vectors` rows. It must be reset before packing the
/// varyings of another link.
pub struct VaryingPacking {
    register_map: RegisterMap,
    register_list: Vec<PackedVaryingRegister>,
    packed_varyings: Vec<PackedVarying>,
    inactive_varying_names: Vec<String>,
    mode: PackMode,
}

impl VaryingPacking {
    pub fn new(max_vectors: u32, mode: PackMode) -> Self {
        VaryingPacking {
            register_map: vec![[false; REGISTER_COLUMNS as usize]; max_vectors as usize],
            register_list: vec![],
            packed_varyings: vec![],
            inactive_varying_names: vec![],
            mode,
        }
    }

    /// Forgets everything about the previous link.
    pub fn reset(&mut self) {
        self.clear_register_map();
        self.packed_varyings.clear();
        self.inactive_varying_names.clear();
    }

    /// Frees every register.
    pub fn clear_register_map(&mut self) {
        for row in self.register_map.iter_mut() {
            *row = [false; REGISTER_COLUMNS as usize];
        }
        self.register_list.clear();
    }

    pub fn register_map(&self) -> &RegisterMap {
        &self.register_map
    }

    /// The registers assigned to user varyings, sorted by row then column.
    pub fn register_list(&self) -> &[PackedVaryingRegister] {
        &self.register_list
    }

    /// The varyings collected by the last call to
    /// [`VaryingPacking::collect_and_pack_user_varyings`], largest first.
    pub fn packed_varyings(&self) -> &[PackedVarying] {
        &self.packed_varyings
    }

    /// The vertex outputs that no later stage reads.
    pub fn inactive_varying_names(&self) -> &[String] {
        &self.inactive_varying_names
    }

    /// The number of rows of the grid.
    pub fn max_vectors(&self) -> u32 {
        self.register_map.len() as u32
    }

    /// The rows and columns `varying` needs.
    fn required_rows_and_columns(&self, packed: &PackedVarying) -> (u32, u32) {
        let varying = &packed.varying;
        let (mut rows, mut columns) = varying.ty.register_size();

        if self.mode == PackMode::AngleNonConformantD3D9 {
            columns = REGISTER_COLUMNS;
        } else if self.mode == PackMode::WebGlStrict && varying.ty == GlslType::Mat2 {
            // "Variables of type mat2 occupies 2 complete rows."
            columns = REGISTER_COLUMNS;
        }

        // "Arrays of size N are assumed to take N times the size of the base
        // type."
        if !packed.is_array_element() {
            rows *= varying.element_count();
        }
        (rows, columns)
    }

    fn is_free(&self, row: u32, column: u32, rows: u32, columns: u32) -> bool {
        debug_assert!(row + rows <= self.max_vectors());
        debug_assert!(column + columns <= REGISTER_COLUMNS);
        (row..row + rows).all(|r| {
            (column..column + columns).all(|c| !self.register_map[r as usize][c as usize])
        })
    }

    /// Marks the rectangle at (`row`, `column`) as taken by `packed`, and
    /// records its rows in the register list unless it is a built-in.
    fn insert(&mut self, row: u32, column: u32, columns: u32, packed: &PackedVarying) {
        let (element_rows, _) = packed.varying.ty.register_size();
        let elements: SmallVec<[u32; 4]> = match packed.array_index {
            Some(index) => SmallVec::from_elem(index, 1),
            None => (0..packed.varying.element_count()).collect(),
        };
        let name = packed.full_name();

        for (offset, element) in elements.into_iter().enumerate() {
            for element_row in 0..element_rows {
                let register_row = row + offset as u32 * element_rows + element_row;
                if !packed.varying.is_built_in() {
                    self.register_list.push(PackedVaryingRegister {
                        name: name.clone(),
                        register_row,
                        register_column: column,
                        varying_array_index: element,
                        varying_row_index: element_row,
                        semantic_index: 0,
                    });
                }
                for c in column..column + columns {
                    self.register_map[register_row as usize][c as usize] = true;
                }
            }
        }
    }

    /// Places one varying in the grid. Returns false, leaving the grid as it
    /// was, when there is no room for it.
    ///
    /// One-component varyings go to the column they fit tightest in, so
    /// they pack best when larger ones are packed first.
    pub fn pack_varying(&mut self, packed: &PackedVarying) -> bool {
        debug_assert!(!packed.varying.is_struct());
        let (rows, columns) = self.required_rows_and_columns(packed);
        let max_vectors = self.max_vectors();

        if rows > max_vectors || rows == 0 {
            return false;
        }

        // "For 2, 3 and 4 component variables packing is started using the
        // 1st column of the 1st row. Variables are then allocated to
        // successive rows, aligning them to the 1st column."
        if (2..=REGISTER_COLUMNS).contains(&columns) {
            if let Some(row) = (0..=max_vectors - rows).find(|&row| self.is_free(row, 0, rows, columns)) {
                self.insert(row, 0, columns, packed);
                return true;
            }

            // "For 2 component variables, when there are no spare rows, the
            // strategy is switched to using the highest numbered row and the
            // lowest numbered column where the variable will fit."
            if columns == 2 {
                if let Some(row) = (0..=max_vectors - rows).rev().find(|&row| self.is_free(row, 2, rows, 2)) {
                    self.insert(row, 2, columns, packed);
                    return true;
                }
            }
            return false;
        }

        // "1 component variables have their own packing rule. They are
        // packed in order of size, largest first. Each variable is placed in
        // the column that leaves the least amount of space in the column and
        // aligned to the lowest available rows within that column."
        debug_assert_eq!(columns, 1);
        let mut contiguous_space = [0u32; REGISTER_COLUMNS as usize];
        let mut best_contiguous_space = [0u32; REGISTER_COLUMNS as usize];
        let mut total_space = [0u32; REGISTER_COLUMNS as usize];
        for row in &self.register_map {
            for (column, &taken) in row.iter().enumerate() {
                if taken {
                    contiguous_space[column] = 0;
                } else {
                    contiguous_space[column] += 1;
                    total_space[column] += 1;
                    best_contiguous_space[column] =
                        best_contiguous_space[column].max(contiguous_space[column]);
                }
            }
        }

        let mut best_column = 0;
        for column in 1..REGISTER_COLUMNS as usize {
            if best_contiguous_space[column] >= rows &&
                (best_contiguous_space[best_column] < rows ||
                    total_space[column] < total_space[best_column])
            {
                best_column = column;
            }
        }

        if best_contiguous_space[best_column] < rows {
            return false;
        }

        let column = best_column as u32;
        match (0..=max_vectors - rows).find(|&row| self.is_free(row, column, rows, 1)) {
            Some(row) => {
                self.insert(row, column, 1, packed);
                true
            },
            None => false,
        }
    }

    /// Whether a varying takes no register at all under the current mode.
    fn is_unpacked_built_in(&self, name: &str) -> bool {
        name == "gl_Position" ||
            (self.mode == PackMode::AngleNonConformantD3D9 && name == "gl_PointSize")
    }

    /// Collects the varyings of a program from its merged vertex and
    /// fragment declarations, then packs them all, largest first.
    ///
    /// Varyings read by both stages are packed, structures field by field.
    /// Vertex outputs that only transform feedback captures, as listed in
    /// `transform_feedback_names`, are packed too; names may select a single
    /// array element, as in `a[2]`.
    ///
    /// On failure the grid is cleared, and the link must be abandoned.
    pub fn collect_and_pack_user_varyings(
        &mut self,
        merged: &[MergedVarying],
        transform_feedback_names: &[String],
    ) -> Result<(), PackingError> {
        let mut unique_full_names = HashSet::new();
        self.packed_varyings.clear();
        self.inactive_varying_names.clear();

        for varying in merged {
            let (input, output) = (varying.vertex.as_ref(), varying.fragment.as_ref());
            let name = match input.or(output) {
                Some(declaration) => &declaration.name,
                None => continue,
            };
            if self.is_unpacked_built_in(name) {
                continue;
            }

            if let (Some(input), Some(output)) = (input, output) {
                // The vertex shader decides the interpolation, the fragment
                // shader the rest.
                let interpolation = input.interpolation;
                if output.is_struct() {
                    for field in &output.fields {
                        let packed = PackedVarying::struct_field(field.clone(), interpolation, &output.name);
                        unique_full_names.insert(packed.full_name());
                        self.packed_varyings.push(packed);
                    }
                } else {
                    let packed = PackedVarying::new(output.clone(), interpolation);
                    unique_full_names.insert(packed.name_with_array_index());
                    self.packed_varyings.push(packed);
                }
                continue;
            }

            let Some(input) = input else {
                continue;
            };

            let mut captured = false;
            for tf_name in transform_feedback_names {
                let (base_name, subscripts) = parse_resource_name(tf_name);
                if unique_full_names.contains(tf_name.as_str()) || unique_full_names.contains(base_name) {
                    continue;
                }
                if base_name != input.name {
                    continue;
                }
                captured = true;
                let subscript = subscripts.last().copied();
                // Capturing structures is not supported.
                if !input.is_struct() {
                    let mut packed = PackedVarying::new(input.clone(), input.interpolation);
                    packed.vertex_only = true;
                    packed.array_index = subscript;
                    self.packed_varyings.push(packed);
                    unique_full_names.insert(tf_name.clone());
                }
                // Other elements of the same array may be captured too.
                if subscript.is_none() {
                    break;
                }
            }

            if !captured && !input.is_built_in() {
                self.inactive_varying_names.push(input.name.clone());
            }
        }

        self.packed_varyings.sort_by_key(|packed| {
            (
                packed.varying.ty.sort_order(),
                Reverse(packed.varying.element_count()),
            )
        });

        let packed_varyings = std::mem::take(&mut self.packed_varyings);
        let result = self.pack_user_varyings(&packed_varyings);
        self.packed_varyings = packed_varyings;
        result
    }

    /// "Variables are packed into the registers one at a time so that they
    /// each occupy a contiguous subrectangle. No splitting of variables is
    /// permitted."
    fn pack_user_varyings(&mut self, packed_varyings: &[PackedVarying]) -> Result<(), PackingError> {
        for packed in packed_varyings {
            if !self.pack_varying(packed) {
                debug!("Could not pack varying {} in {} registers", packed, self.max_vectors());
                self.clear_register_map();
                return Err(PackingError::CouldNotPack {
                    name: packed.full_name(),
                    stage: packed.stage(),
                    non_conformant_d3d9: self.mode == PackMode::AngleNonConformantD3D9,
                });
            }
            trace!("Packed varying {}", packed);
        }

        // Stable, so that rows shared by several varyings keep their
        // insertion order.
        self.register_list.sort_by_key(PackedVaryingRegister::sort_order);
        for (semantic_index, register) in self.register_list.iter_mut().enumerate() {
            register.semantic_index = semantic_index as u32;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::parse_resource_name;

    #[test]
    fn resource_names() {
        assert_eq!(parse_resource_name("a").0, "a");
        assert!(parse_resource_name("a").1.is_empty());

        let (base, subscripts) = parse_resource_name("a[2]");
        assert_eq!(base, "a");
        assert_eq!(&*subscripts, &[2]);

        let (base, subscripts) = parse_resource_name("a[x]");
        assert_eq!(base, "a[x]");
        assert!(subscripts.is_empty());
    }
}
