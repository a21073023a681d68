//! Names used in the generated C code
use heck::ToShoutySnakeCase;

/// Functions and types of the OpenGL layer which the generated code calls
///
/// None of these are implemented here; they must exist in the program which
/// compiles the generated files.
#[derive(Clone, Debug)]
pub struct GlApi {
    /// Type of every handle field
    pub handle_type: &'static str,

    /// Compiles and links a program from vertex and fragment source paths
    pub build_program: &'static str,

    /// Resolves an attribute location: `(program, name)`
    pub attrib_location: &'static str,

    /// Resolves a uniform location: `(program, name)`
    pub uniform_location: &'static str,

    /// Resolves a subroutine uniform location: `(program, stage, name)`
    pub subroutine_uniform_location: &'static str,

    /// Resolves a subroutine index: `(program, stage, name)`
    pub subroutine_index: &'static str,

    /// Capability predicate, called with [`subroutine_feature`]
    ///
    /// [`subroutine_feature`]: GlApi::subroutine_feature
    pub has_feature: &'static str,

    /// Capability flag guarding subroutine lookups
    pub subroutine_feature: &'static str,

    /// Deletes a linked program
    pub delete_program: &'static str,
}

impl Default for GlApi {
    fn default() -> Self {
        Self {
            handle_type: "GLuint",
            build_program: "gl_program_vert_frag",
            attrib_location: "glGetAttribLocation",
            uniform_location: "glGetUniformLocation",
            subroutine_uniform_location: "glGetSubroutineUniformLocation",
            subroutine_index: "glGetSubroutineIndex",
            has_feature: "gl_has",
            subroutine_feature: "OPENGL_SUBROUTINES",
            delete_program: "glDeleteProgram",
        }
    }
}

/// Settings for header and source generation
///
/// The defaults produce `shaders.gen.h` and `shaders.gen.c`, declaring a
/// global `Shaders shaders` with `shaders_load` and `shaders_unload`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Generator name, written into the banner of each file
    pub generator: &'static str,

    /// File name of the declaration (header) file
    pub header_name: &'static str,

    /// File name of the definition (source) file
    pub source_name: &'static str,

    /// Name of the aggregate struct type
    pub type_name: &'static str,

    /// Name of the global instance of the aggregate struct
    pub instance_name: &'static str,

    /// Name of the function which builds programs and resolves handles
    pub load_fn: &'static str,

    /// Name of the function which deletes programs and clears the instance
    pub unload_fn: &'static str,

    /// Local headers included by the declaration file
    pub header_includes: Vec<&'static str>,

    /// Local headers included by the definition file, after its own header
    pub source_includes: Vec<&'static str>,

    /// OpenGL layer called by the generated code
    pub api: GlApi,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: env!("CARGO_PKG_NAME"),
            header_name: "shaders.gen.h",
            source_name: "shaders.gen.c",
            type_name: "Shaders",
            instance_name: "shaders",
            load_fn: "shaders_load",
            unload_fn: "shaders_unload",
            header_includes: vec!["opengl.h"],
            source_includes: vec!["opengl_shader.h"],
            api: GlApi::default(),
        }
    }
}

impl Config {
    /// Include guard for the header, derived from its file name
    pub fn include_guard(&self) -> String {
        self.header_name.to_shouty_snake_case()
    }
}
