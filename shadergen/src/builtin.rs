//! Shader programs of the game client
//!
//! Paths are relative to the client's shader directory and are resolved by
//! the program-building function at runtime.
use crate::{Catalog, Error, ShaderBuilder, ShaderDescriptor};

fn shader(name: &str, vertex: &str, fragment: &str) -> ShaderBuilder {
    ShaderDescriptor::builder(name, vertex, fragment)
}

/// Builds the built-in catalog
pub fn catalog() -> Result<Catalog, Error> {
    Catalog::new([
        shader("circle", "circle.vert", "circle.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color", "radius"])
            .build()?,
        shader("circle_filled", "circle.vert", "circle_filled.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color", "radius"])
            .build()?,
        shader("circle_partial", "circle.vert", "circle_partial.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color", "radius", "angle1", "angle2"])
            .build()?,
        shader("solid", "project.vert", "solid.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color"])
            .build()?,
        shader("trail", "project_pos.vert", "trail.frag")
            .attributes(["vertex"])
            .uniforms([
                "projection",
                "c1",
                "c2",
                "t1",
                "t2",
                "dt",
                "pos1",
                "pos2",
                "r",
                "nebu_col",
            ])
            .subroutine(
                "trail_func",
                [
                    "trail_default",
                    "trail_pulse",
                    "trail_wave",
                    "trail_flame",
                    "trail_nebula",
                    "trail_arc",
                    "trail_bubbles",
                ],
            )
            .build()?,
        shader("smooth", "smooth.vert", "smooth.frag")
            .attributes(["vertex", "vertex_color"])
            .uniforms(["projection"])
            .build()?,
        shader("texture", "texture.vert", "texture.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color", "tex_mat"])
            .build()?,
        shader(
            "texture_interpolate",
            "texture.vert",
            "texture_interpolate.frag",
        )
        .attributes(["vertex"])
        .uniforms([
            "projection",
            "color",
            "tex_mat",
            "sampler1",
            "sampler2",
            "inter",
        ])
        .build()?,
        shader("nebula", "nebula.vert", "nebula_overlay.frag")
            .attributes(["vertex"])
            .uniforms([
                "projection",
                "hue",
                "brightness",
                "horizon",
                "eddy_scale",
                "time",
            ])
            .build()?,
        shader("nebula_background", "nebula.vert", "nebula_background.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "hue", "brightness", "eddy_scale", "time"])
            .build()?,
        shader("nebula_map", "nebula_map.vert", "nebula_map.frag")
            .attributes(["vertex"])
            .uniforms([
                "projection",
                "hue",
                "eddy_scale",
                "time",
                "globalpos",
                "alpha",
            ])
            .build()?,
        shader("stars", "stars.vert", "stars.frag")
            .attributes(["vertex", "brightness"])
            .uniforms(["projection", "star_xy", "wh", "xy", "scale"])
            .build()?,
        shader("font", "font.vert", "font.frag")
            .attributes(["vertex", "tex_coord"])
            .uniforms(["projection", "color", "outline_color"])
            .build()?,
        shader("safelanes", "project_pos.vert", "safelanes.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color", "dimensions"])
            .build()?,
        shader("beam", "project_pos.vert", "beam.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color", "dt", "r", "dimensions"])
            .subroutine(
                "beam_func",
                [
                    "beam_default",
                    "beam_wave",
                    "beam_arc",
                    "beam_helix",
                    "beam_organic",
                    "beam_unstable",
                    "beam_fuzzy",
                ],
            )
            .build()?,
        shader("tk", "tk.vert", "tk.frag")
            .attributes(["vertex"])
            .uniforms([
                "projection",
                "c",
                "dc",
                "lc",
                "oc",
                "wh",
                "corner_radius",
            ])
            .build()?,
        shader("jump", "project_pos.vert", "jump.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "progress", "direction", "dimensions"])
            .subroutine(
                "jump_func",
                [
                    "jump_default",
                    "jump_nebula",
                    "jump_organic",
                    "jump_circular",
                    "jump_wind",
                ],
            )
            .build()?,
        shader("colorblind", "postprocess.vert", "colorblind.frag")
            .attributes(["VertexPosition"])
            .uniforms(["ClipSpaceFromLocal", "MainTex"])
            .build()?,
        shader("shake", "postprocess.vert", "shake.frag")
            .attributes(["VertexPosition"])
            .uniforms([
                "ClipSpaceFromLocal",
                "MainTex",
                "shake_pos",
                "shake_vel",
                "shake_force",
            ])
            .build()?,
        shader("damage", "postprocess.vert", "damage.frag")
            .attributes(["VertexPosition"])
            .uniforms([
                "ClipSpaceFromLocal",
                "MainTex",
                "damage_strength",
                "love_ScreenSize",
            ])
            .build()?,
        shader("gamma_correction", "postprocess.vert", "gamma_correction.frag")
            .attributes(["VertexPosition"])
            .uniforms(["ClipSpaceFromLocal", "MainTex", "gamma"])
            .build()?,
        shader("status", "project_pos.vert", "status.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "ok"])
            .build()?,
        shader("progressbar", "project_pos.vert", "progressbar.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "dimensions", "progress"])
            .build()?,
    ])
}
