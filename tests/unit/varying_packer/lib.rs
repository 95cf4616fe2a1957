/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![cfg(test)]

use varying_packer::{
    GlslType, Interpolation, MergedVarying, PackMode, PackedVarying, PackingError, ShaderStage,
    ShaderVariable, VaryingPacking,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A varying declared the same way by both stages.
fn linked(variable: ShaderVariable) -> MergedVarying {
    MergedVarying {
        vertex: Some(variable.clone()),
        fragment: Some(variable),
    }
}

/// A vertex output no fragment shader reads.
fn vertex_only(variable: ShaderVariable) -> MergedVarying {
    MergedVarying {
        vertex: Some(variable),
        fragment: None,
    }
}

fn packed(name: &str, ty: GlslType) -> PackedVarying {
    PackedVarying::new(ShaderVariable::new(name, ty), Interpolation::Smooth)
}

fn taken_cells(packing: &VaryingPacking) -> usize {
    packing.register_map().iter().flatten().filter(|&&taken| taken).count()
}

#[test]
fn type_names_and_sizes() {
    assert_eq!("mat2x3".parse::<GlslType>(), Ok(GlslType::Mat2x3));
    assert_eq!("ivec4".parse::<GlslType>(), Ok(GlslType::IVec4));
    assert!("vec5".parse::<GlslType>().is_err());
    assert_eq!(GlslType::UVec3.to_string(), "uvec3");

    assert_eq!(GlslType::Float.register_size(), (1, 1));
    assert_eq!(GlslType::BVec3.register_size(), (1, 3));
    assert_eq!(GlslType::Mat2x3.register_size(), (2, 3));
    assert_eq!(GlslType::Mat4x2.register_size(), (4, 2));
    assert!(GlslType::Mat4x2.sort_order() < GlslType::Mat2.sort_order());
    assert!(GlslType::Vec4.sort_order() < GlslType::Mat3.sort_order());
    assert!(GlslType::Vec2.sort_order() < GlslType::Int.sort_order());
}

#[test]
fn names_of_packed_varyings() {
    let mut element = PackedVarying::new(ShaderVariable::array("a", GlslType::Vec2, 4), Interpolation::Flat);
    assert_eq!(element.full_name(), "a");
    element.array_index = Some(2);
    assert!(element.is_array_element());
    assert_eq!(element.full_name(), "a[2]");
    assert_eq!(element.to_string(), "vec2 a[2]");

    let field = PackedVarying::struct_field(ShaderVariable::new("f", GlslType::Float), Interpolation::Smooth, "s");
    assert!(field.is_struct_field());
    assert_eq!(field.full_name(), "s.f");
    assert_eq!(field.stage(), ShaderStage::Fragment);
}

#[test]
fn sixty_four_floats_fill_sixteen_registers() {
    init_logger();
    let mut packing = VaryingPacking::new(16, PackMode::AngleRelaxed);
    let varyings: Vec<MergedVarying> = (0..64)
        .map(|i| linked(ShaderVariable::new(&format!("f{}", i), GlslType::Float)))
        .collect();

    assert_eq!(packing.collect_and_pack_user_varyings(&varyings, &[]), Ok(()));
    assert_eq!(packing.register_list().len(), 64);
    assert_eq!(taken_cells(&packing), 64);

    // The first column fills up before the next one is used.
    let first = &packing.register_list()[0];
    assert_eq!((first.register_row, first.register_column), (0, 0));
    assert!(packing
        .register_list()
        .iter()
        .filter(|register| register.register_column == 0)
        .all(|register| register.name[1..].parse::<u32>().unwrap() < 16));
}

#[test]
fn varyings_taller_than_the_grid_fail_without_side_effects() {
    let mut packing = VaryingPacking::new(16, PackMode::AngleRelaxed);
    assert!(packing.pack_varying(&packed("v", GlslType::Vec4)));

    let tall = PackedVarying::new(ShaderVariable::array("a", GlslType::Float, 17), Interpolation::Smooth);
    assert!(!packing.pack_varying(&tall));
    assert_eq!(taken_cells(&packing), 4);
    assert_eq!(packing.register_list().len(), 1);

    let fits = PackedVarying::new(ShaderVariable::array("b", GlslType::Float, 15), Interpolation::Smooth);
    assert!(packing.pack_varying(&fits));
    assert_eq!(packing.register_list().len(), 16);
}

#[test]
fn vectors_take_successive_rows() {
    let mut packing = VaryingPacking::new(2, PackMode::AngleRelaxed);
    assert!(packing.pack_varying(&packed("a", GlslType::Vec4)));
    assert!(packing.pack_varying(&packed("b", GlslType::Vec4)));
    assert!(!packing.pack_varying(&packed("c", GlslType::Vec4)));

    let rows: Vec<(String, u32)> = packing
        .register_list()
        .iter()
        .map(|register| (register.name.clone(), register.register_row))
        .collect();
    assert_eq!(rows, vec![("a".to_owned(), 0), ("b".to_owned(), 1)]);
}

#[test]
fn two_component_varyings_fall_back_to_the_right_half() {
    let mut packing = VaryingPacking::new(2, PackMode::AngleRelaxed);
    assert!(packing.pack_varying(&packed("a", GlslType::Vec3)));
    assert!(packing.pack_varying(&packed("b", GlslType::Vec2)));
    assert!(packing.pack_varying(&packed("c", GlslType::Vec2)));

    let c = &packing.register_list()[2];
    assert_eq!((c.register_row, c.register_column), (1, 2));
    assert!(!packing.pack_varying(&packed("d", GlslType::Vec2)));
}

#[test]
fn built_ins_are_not_registered() {
    let mut packing = VaryingPacking::new(4, PackMode::AngleRelaxed);
    let varyings = vec![
        linked(ShaderVariable::new("gl_Position", GlslType::Vec4)),
        linked(ShaderVariable::new("gl_PointSize", GlslType::Float)),
        linked(ShaderVariable::new("v", GlslType::Vec4)),
    ];
    assert_eq!(packing.collect_and_pack_user_varyings(&varyings, &[]), Ok(()));

    let names: Vec<String> = packing.packed_varyings().iter().map(PackedVarying::full_name).collect();
    assert_eq!(names, vec!["v", "gl_PointSize"]);
    assert!(packing.register_list().iter().all(|register| register.name == "v"));
    // The point size still takes its cell.
    assert_eq!(taken_cells(&packing), 5);

    let mut d3d9 = VaryingPacking::new(4, PackMode::AngleNonConformantD3D9);
    assert_eq!(d3d9.collect_and_pack_user_varyings(&varyings, &[]), Ok(()));
    assert_eq!(d3d9.packed_varyings().len(), 1);
    assert_eq!(taken_cells(&d3d9), 4);
}

#[test]
fn structures_are_packed_field_by_field() {
    let fields = vec![
        ShaderVariable::new("b", GlslType::Float),
        ShaderVariable::new("a", GlslType::Vec2),
    ];
    let mut vertex = ShaderVariable::structure("s", fields.clone());
    vertex.interpolation = Interpolation::Flat;
    let fragment = ShaderVariable::structure("s", fields);

    let mut packing = VaryingPacking::new(16, PackMode::AngleRelaxed);
    let varyings = vec![MergedVarying {
        vertex: Some(vertex),
        fragment: Some(fragment),
    }];
    assert_eq!(packing.collect_and_pack_user_varyings(&varyings, &[]), Ok(()));

    let packed = packing.packed_varyings();
    assert_eq!(packed.len(), 2);
    assert_eq!(packed[0].full_name(), "s.a");
    assert_eq!(packed[1].full_name(), "s.b");
    assert!(packed.iter().all(|field| field.interpolation == Interpolation::Flat));

    let registers: Vec<(&str, u32, u32)> = packing
        .register_list()
        .iter()
        .map(|register| (register.name.as_str(), register.register_row, register.register_column))
        .collect();
    assert_eq!(registers, vec![("s.a", 0, 0), ("s.b", 1, 0)]);
}

#[test]
fn transform_feedback_keeps_vertex_outputs() {
    let varyings = vec![
        vertex_only(ShaderVariable::array("a", GlslType::Float, 4)),
        vertex_only(ShaderVariable::array("b", GlslType::Vec2, 3)),
        vertex_only(ShaderVariable::new("unused", GlslType::Vec4)),
        vertex_only(ShaderVariable::new("gl_PointSize", GlslType::Float)),
        linked(ShaderVariable::new("v", GlslType::Vec4)),
    ];
    let captured = vec!["a[2]".to_owned(), "b".to_owned()];

    let mut packing = VaryingPacking::new(8, PackMode::AngleRelaxed);
    assert_eq!(packing.collect_and_pack_user_varyings(&varyings, &captured), Ok(()));
    assert_eq!(packing.inactive_varying_names(), &["unused".to_owned()]);

    let element = packing
        .packed_varyings()
        .iter()
        .find(|packed| packed.varying.name == "a")
        .unwrap();
    assert!(element.vertex_only);
    assert_eq!(element.array_index, Some(2));
    assert_eq!(element.stage(), ShaderStage::Vertex);

    let a_registers: Vec<_> = packing.register_list().iter().filter(|register| register.name == "a[2]").collect();
    assert_eq!(a_registers.len(), 1);
    assert_eq!(a_registers[0].varying_array_index, 2);

    let b_registers = packing.register_list().iter().filter(|register| register.name == "b").count();
    assert_eq!(b_registers, 3);
}

#[test]
fn strict_mat2_takes_whole_rows() {
    let mut relaxed = VaryingPacking::new(2, PackMode::AngleRelaxed);
    assert!(relaxed.pack_varying(&packed("m", GlslType::Mat2)));
    assert!(relaxed.pack_varying(&packed("v", GlslType::Vec2)));
    let v = relaxed.register_list().last().unwrap();
    assert_eq!((v.register_row, v.register_column), (1, 2));

    let mut strict = VaryingPacking::new(2, PackMode::WebGlStrict);
    assert!(strict.pack_varying(&packed("m", GlslType::Mat2)));
    assert_eq!(taken_cells(&strict), 8);
    assert!(!strict.pack_varying(&packed("v", GlslType::Vec2)));
}

#[test]
fn failures_name_the_varying() {
    let varyings = vec![
        linked(ShaderVariable::new("a", GlslType::Float)),
        linked(ShaderVariable::new("b", GlslType::Float)),
    ];

    let mut d3d9 = VaryingPacking::new(1, PackMode::AngleNonConformantD3D9);
    let error = d3d9.collect_and_pack_user_varyings(&varyings, &[]).unwrap_err();
    assert_eq!(
        error,
        PackingError::CouldNotPack {
            name: "b".to_owned(),
            stage: ShaderStage::Fragment,
            non_conformant_d3d9: true,
        }
    );
    assert_eq!(
        error.to_string(),
        "Could not pack varying b (fragment shader)\n\
         Note: Additional non-conformance limitations are in place when using D3D9."
    );
    assert_eq!(taken_cells(&d3d9), 0);
    assert!(d3d9.register_list().is_empty());

    let mut relaxed = VaryingPacking::new(1, PackMode::AngleRelaxed);
    assert_eq!(relaxed.collect_and_pack_user_varyings(&varyings, &[]), Ok(()));

    relaxed.reset();
    let tall = vec![vertex_only(ShaderVariable::array("t", GlslType::Vec4, 2))];
    let error = relaxed
        .collect_and_pack_user_varyings(&tall, &["t".to_owned()])
        .unwrap_err();
    assert_eq!(error.to_string(), "Could not pack varying t (vertex shader)");
}

#[test]
fn register_list_is_sorted_by_position() {
    let varyings = vec![
        linked(ShaderVariable::new("w", GlslType::Vec2)),
        linked(ShaderVariable::new("v", GlslType::Vec4)),
        linked(ShaderVariable::new("m", GlslType::Mat2)),
    ];
    let mut packing = VaryingPacking::new(3, PackMode::AngleRelaxed);
    assert_eq!(packing.collect_and_pack_user_varyings(&varyings, &[]), Ok(()));

    let order: Vec<(&str, u32, u32, u32, u32)> = packing
        .register_list()
        .iter()
        .map(|register| {
            (
                register.name.as_str(),
                register.register_row,
                register.register_column,
                register.varying_row_index,
                register.semantic_index,
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![("m", 0, 0, 0, 0), ("m", 1, 0, 1, 1), ("w", 1, 2, 0, 2), ("v", 2, 0, 0, 3)]
    );
}

#[test]
fn reset_forgets_the_previous_link() {
    let mut packing = VaryingPacking::new(4, PackMode::AngleRelaxed);
    let varyings = vec![
        linked(ShaderVariable::new("v", GlslType::Vec4)),
        vertex_only(ShaderVariable::new("unused", GlslType::Float)),
    ];
    assert_eq!(packing.collect_and_pack_user_varyings(&varyings, &[]), Ok(()));
    assert!(!packing.inactive_varying_names().is_empty());

    packing.reset();
    assert_eq!(taken_cells(&packing), 0);
    assert!(packing.register_list().is_empty());
    assert!(packing.packed_varyings().is_empty());
    assert!(packing.inactive_varying_names().is_empty());
    assert_eq!(packing.max_vectors(), 4);
}
