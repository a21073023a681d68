//! Shader descriptors and their per-entry emission
use std::collections::BTreeSet;

use crate::{
    Error,
    config::Config,
    emit::{Arg, CodeWriter},
};

/// Name of the field holding the linked program handle
pub const PROGRAM_FIELD: &str = "program";

/// Name of the field holding a subroutine group's uniform location
pub const GROUP_UNIFORM_FIELD: &str = "uniform";

/// Stage in which subroutine uniforms and indices are looked up
///
/// Every subroutine in the catalog lives in the fragment shader; this is a
/// catalog-wide policy rather than a per-shader option.
pub const SUBROUTINE_STAGE: ShaderStage = ShaderStage::Fragment;

/// Programmable pipeline stage, displayed as its OpenGL enum name
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum ShaderStage {
    /// Vertex stage
    #[strum(serialize = "GL_VERTEX_SHADER")]
    Vertex,
    /// Fragment stage
    #[strum(serialize = "GL_FRAGMENT_SHADER")]
    Fragment,
}

/// A named family of swappable subroutine implementations
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubroutineGroup {
    name: String,
    variants: Vec<String>,
}

impl SubroutineGroup {
    /// Name of the subroutine uniform
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subroutine implementations, in declaration order
    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

/// Immutable description of a single shader program
///
/// Built with [`ShaderDescriptor::builder`], which validates every name
/// before handing back a descriptor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShaderDescriptor {
    name: String,
    vertex_path: String,
    fragment_path: String,
    attributes: Vec<String>,
    uniforms: Vec<String>,
    subroutines: Vec<SubroutineGroup>,
}

impl ShaderDescriptor {
    /// Starts building a descriptor for a vertex + fragment program
    pub fn builder(
        name: impl Into<String>,
        vertex_path: impl Into<String>,
        fragment_path: impl Into<String>,
    ) -> ShaderBuilder {
        ShaderBuilder {
            name: name.into(),
            vertex_path: vertex_path.into(),
            fragment_path: fragment_path.into(),
            attributes: vec![],
            uniforms: vec![],
            subroutines: vec![],
        }
    }

    /// Field name of this shader within the aggregate struct
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the vertex shader source, passed through verbatim
    pub fn vertex_path(&self) -> &str {
        &self.vertex_path
    }

    /// Path of the fragment shader source, passed through verbatim
    pub fn fragment_path(&self) -> &str {
        &self.fragment_path
    }

    /// Vertex attributes, in declaration order
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Uniforms, in declaration order
    pub fn uniforms(&self) -> &[String] {
        &self.uniforms
    }

    /// Subroutine groups, in declaration order
    pub fn subroutines(&self) -> &[SubroutineGroup] {
        &self.subroutines
    }

    /// Renders this shader's block of the aggregate struct
    ///
    /// The block is indented one level, as it appears in the header.
    pub fn render_declaration(&self, config: &Config) -> String {
        let mut w = CodeWriter::with_depth(1);
        self.write_declaration(&mut w, config);
        w.finish()
    }

    /// Renders the statements which build this program and resolve its
    /// handles, indented one level as they appear in the load function
    pub fn render_definition(&self, config: &Config) -> String {
        let mut w = CodeWriter::with_depth(1);
        self.write_definition(&mut w, config);
        w.finish()
    }

    pub(crate) fn write_declaration(
        &self,
        w: &mut CodeWriter,
        config: &Config,
    ) {
        let ty = config.api.handle_type;
        w.open_struct("struct");
        w.decl(ty, PROGRAM_FIELD);
        for a in &self.attributes {
            w.decl(ty, a);
        }
        for u in &self.uniforms {
            w.decl(ty, u);
        }
        for g in &self.subroutines {
            w.open_struct("struct");
            w.decl(ty, GROUP_UNIFORM_FIELD);
            for v in &g.variants {
                w.decl(ty, v);
            }
            w.close_struct(&g.name);
        }
        w.close_struct(&self.name);
    }

    pub(crate) fn write_definition(
        &self,
        w: &mut CodeWriter,
        config: &Config,
    ) {
        let api = &config.api;
        let base = format!("{}.{}", config.instance_name, self.name);
        let program = format!("{base}.{PROGRAM_FIELD}");

        w.assign_call(
            &program,
            api.build_program,
            &[Arg::Str(&self.vertex_path), Arg::Str(&self.fragment_path)],
        );
        for a in &self.attributes {
            w.assign_call(
                &format!("{base}.{a}"),
                api.attrib_location,
                &[Arg::Expr(&program), Arg::Str(a)],
            );
        }
        for u in &self.uniforms {
            w.assign_call(
                &format!("{base}.{u}"),
                api.uniform_location,
                &[Arg::Expr(&program), Arg::Str(u)],
            );
        }

        if self.subroutines.is_empty() {
            return;
        }
        let stage: &'static str = SUBROUTINE_STAGE.into();
        let cond = CodeWriter::call_expr(
            api.has_feature,
            &[Arg::Expr(api.subroutine_feature)],
        );
        w.guarded(&cond, |w| {
            for g in &self.subroutines {
                let group = format!("{base}.{}", g.name);
                w.assign_call(
                    &format!("{group}.{GROUP_UNIFORM_FIELD}"),
                    api.subroutine_uniform_location,
                    &[Arg::Expr(&program), Arg::Expr(stage), Arg::Str(&g.name)],
                );
                for v in &g.variants {
                    w.assign_call(
                        &format!("{group}.{v}"),
                        api.subroutine_index,
                        &[Arg::Expr(&program), Arg::Expr(stage), Arg::Str(v)],
                    );
                }
            }
        });
    }
}

/// Builder for a [`ShaderDescriptor`]
#[derive(Clone, Debug)]
pub struct ShaderBuilder {
    name: String,
    vertex_path: String,
    fragment_path: String,
    attributes: Vec<String>,
    uniforms: Vec<String>,
    subroutines: Vec<SubroutineGroup>,
}

impl ShaderBuilder {
    /// Appends vertex attributes
    pub fn attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(names.into_iter().map(Into::into));
        self
    }

    /// Appends uniforms
    pub fn uniforms<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uniforms.extend(names.into_iter().map(Into::into));
        self
    }

    /// Appends a subroutine group with the given implementations
    pub fn subroutine<I, S>(
        mut self,
        name: impl Into<String>,
        variants: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subroutines.push(SubroutineGroup {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Validates every name and returns the finished descriptor
    ///
    /// All handles of one shader share a single C struct, so the program
    /// handle, attributes, uniforms, and subroutine groups must have distinct
    /// names; within a group, the same holds for the group uniform and its
    /// variants.
    pub fn build(self) -> Result<ShaderDescriptor, Error> {
        let shader = &self.name;
        check_identifier(shader, "shader name", shader)?;
        for (stage, path) in
            [("vertex", &self.vertex_path), ("fragment", &self.fragment_path)]
        {
            if path.is_empty() {
                return Err(Error::EmptyPath {
                    shader: shader.clone(),
                    stage,
                });
            }
        }

        let mut fields = BTreeSet::from([PROGRAM_FIELD]);
        let named = self
            .attributes
            .iter()
            .map(|a| ("attribute", a))
            .chain(self.uniforms.iter().map(|u| ("uniform", u)))
            .chain(
                self.subroutines
                    .iter()
                    .map(|g| ("subroutine group", &g.name)),
            );
        for (kind, field) in named {
            check_identifier(shader, kind, field)?;
            if !fields.insert(field.as_str()) {
                return Err(Error::DuplicateField {
                    shader: shader.clone(),
                    field: field.clone(),
                });
            }
        }

        for g in &self.subroutines {
            let mut variants = BTreeSet::from([GROUP_UNIFORM_FIELD]);
            for v in &g.variants {
                check_identifier(shader, "subroutine", v)?;
                if !variants.insert(v.as_str()) {
                    return Err(Error::DuplicateVariant {
                        shader: shader.clone(),
                        group: g.name.clone(),
                        variant: v.clone(),
                    });
                }
            }
        }

        Ok(ShaderDescriptor {
            name: self.name,
            vertex_path: self.vertex_path,
            fragment_path: self.fragment_path,
            attributes: self.attributes,
            uniforms: self.uniforms,
            subroutines: self.subroutines,
        })
    }
}

/// C keywords, which are never valid field names
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if", "inline",
    "int", "long", "register", "restrict", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

/// Checks whether the string is usable as a C identifier
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !C_KEYWORDS.contains(&s)
}

fn check_identifier(
    shader: &str,
    kind: &'static str,
    name: &str,
) -> Result<(), Error> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Error::BadIdentifier {
            shader: shader.to_owned(),
            kind,
            name: name.to_owned(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn solid() -> ShaderDescriptor {
        ShaderDescriptor::builder("solid", "project.vert", "solid.frag")
            .attributes(["vertex"])
            .uniforms(["projection", "color"])
            .build()
            .unwrap()
    }

    fn trail() -> ShaderDescriptor {
        ShaderDescriptor::builder("trail", "project_pos.vert", "trail.frag")
            .attributes(["vertex"])
            .uniforms(["projection"])
            .subroutine("trail_func", ["trail_default", "trail_pulse"])
            .build()
            .unwrap()
    }

    #[test]
    fn identifiers() {
        for s in ["vertex", "_x", "tex_mat", "ClipSpaceFromLocal", "a1"] {
            assert!(is_identifier(s), "{s} should be an identifier");
        }
        for s in ["", "1a", "a-b", "a b", "pos.x", "int", "struct", "é"] {
            assert!(!is_identifier(s), "{s} should not be an identifier");
        }
    }

    #[test]
    fn solid_declaration() {
        let out = solid().render_declaration(&Config::default());
        assert_eq!(
            out,
            "   struct {\n\
             \x20     GLuint program;\n\
             \x20     GLuint vertex;\n\
             \x20     GLuint projection;\n\
             \x20     GLuint color;\n\
             \x20  } solid;\n"
        );
    }

    #[test]
    fn solid_definition() {
        let out = solid().render_definition(&Config::default());
        let lines: Vec<&str> = out.lines().map(str::trim).collect();
        assert_eq!(
            lines,
            [
                r#"shaders.solid.program = gl_program_vert_frag("project.vert", "solid.frag");"#,
                r#"shaders.solid.vertex = glGetAttribLocation(shaders.solid.program, "vertex");"#,
                r#"shaders.solid.projection = glGetUniformLocation(shaders.solid.program, "projection");"#,
                r#"shaders.solid.color = glGetUniformLocation(shaders.solid.program, "color");"#,
            ]
        );
        assert!(!out.contains("if ("));
    }

    #[test]
    fn trail_declaration() {
        let out = trail().render_declaration(&Config::default());
        let lines: Vec<&str> = out.lines().map(str::trim).collect();
        assert_eq!(
            lines,
            [
                "struct {",
                "GLuint program;",
                "GLuint vertex;",
                "GLuint projection;",
                "struct {",
                "GLuint uniform;",
                "GLuint trail_default;",
                "GLuint trail_pulse;",
                "} trail_func;",
                "} trail;",
            ]
        );
        // The group block is nested one level deeper than the shader fields
        assert!(out.contains("\n         GLuint trail_pulse;\n"));
    }

    #[test]
    fn trail_definition() {
        let out = trail().render_definition(&Config::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            &lines[3..],
            [
                "   if (gl_has(OPENGL_SUBROUTINES)) {",
                r#"      shaders.trail.trail_func.uniform = glGetSubroutineUniformLocation(shaders.trail.program, GL_FRAGMENT_SHADER, "trail_func");"#,
                r#"      shaders.trail.trail_func.trail_default = glGetSubroutineIndex(shaders.trail.program, GL_FRAGMENT_SHADER, "trail_default");"#,
                r#"      shaders.trail.trail_func.trail_pulse = glGetSubroutineIndex(shaders.trail.program, GL_FRAGMENT_SHADER, "trail_pulse");"#,
                "   }",
            ]
        );
    }

    #[test]
    fn empty_group() {
        let s = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .subroutine("func", Vec::<String>::new())
            .build()
            .unwrap();
        let decl = s.render_declaration(&Config::default());
        assert!(decl.contains("GLuint uniform;\n      } func;"));
        let def = s.render_definition(&Config::default());
        assert_eq!(def.matches("glGetSubroutineUniformLocation").count(), 1);
        assert_eq!(def.matches("glGetSubroutineIndex").count(), 0);
    }

    #[test]
    fn paths_are_escaped() {
        let s = ShaderDescriptor::builder("s", r#"dir\"a".vert"#, "b.frag")
            .build()
            .unwrap();
        let def = s.render_definition(&Config::default());
        assert!(def.contains(r#"gl_program_vert_frag("dir\\\"a\".vert", "b.frag")"#));
    }

    #[test]
    fn bad_names() {
        let r = ShaderDescriptor::builder("bad name", "a.vert", "a.frag").build();
        assert!(matches!(
            r,
            Err(Error::BadIdentifier { kind: "shader name", .. })
        ));

        let r = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .uniforms(["color", "tex-mat"])
            .build();
        match r {
            Err(Error::BadIdentifier { shader, kind, name }) => {
                assert_eq!(shader, "s");
                assert_eq!(kind, "uniform");
                assert_eq!(name, "tex-mat");
            }
            r => panic!("unexpected result {r:?}"),
        }

        let r = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .subroutine("func", ["ok", "double"])
            .build();
        assert!(matches!(
            r,
            Err(Error::BadIdentifier { kind: "subroutine", .. })
        ));
    }

    #[test]
    fn empty_paths() {
        let r = ShaderDescriptor::builder("s", "", "a.frag").build();
        assert!(matches!(r, Err(Error::EmptyPath { stage: "vertex", .. })));
        let r = ShaderDescriptor::builder("s", "a.vert", "").build();
        assert!(matches!(r, Err(Error::EmptyPath { stage: "fragment", .. })));
    }

    #[test]
    fn duplicate_fields() {
        // Attributes and uniforms share the struct namespace
        let r = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .attributes(["vertex"])
            .uniforms(["vertex"])
            .build();
        match r {
            Err(Error::DuplicateField { shader, field }) => {
                assert_eq!(shader, "s");
                assert_eq!(field, "vertex");
            }
            r => panic!("unexpected result {r:?}"),
        }

        // So does the implicit program handle
        let r = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .uniforms(["program"])
            .build();
        assert!(matches!(r, Err(Error::DuplicateField { .. })));

        let r = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .uniforms(["func"])
            .subroutine("func", ["a"])
            .build();
        assert!(matches!(r, Err(Error::DuplicateField { .. })));
    }

    #[test]
    fn duplicate_variants() {
        let r = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .subroutine("func", ["a", "b", "a"])
            .build();
        match r {
            Err(Error::DuplicateVariant {
                shader,
                group,
                variant,
            }) => {
                assert_eq!(shader, "s");
                assert_eq!(group, "func");
                assert_eq!(variant, "a");
            }
            r => panic!("unexpected result {r:?}"),
        }

        let r = ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .subroutine("func", ["uniform"])
            .build();
        assert!(matches!(r, Err(Error::DuplicateVariant { .. })));

        // Variants live in their group's struct, so they may reuse names
        // from the outer shader struct or from other groups
        ShaderDescriptor::builder("s", "a.vert", "a.frag")
            .uniforms(["a"])
            .subroutine("f", ["a"])
            .subroutine("g", ["a"])
            .build()
            .unwrap();
    }

    #[test]
    fn stage_names() {
        use strum::IntoEnumIterator;
        let names: Vec<String> =
            ShaderStage::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["GL_VERTEX_SHADER", "GL_FRAGMENT_SHADER"]);
        assert_eq!(SUBROUTINE_STAGE.to_string(), "GL_FRAGMENT_SHADER");
    }
}
