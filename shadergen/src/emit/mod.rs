//! Header and source generation
//!
//! Generation is split in two steps: [`Generator::generate`] computes both
//! files as strings, and [`GeneratedFiles::write_to`] writes them to disk.
use std::path::Path;

use log::{debug, info};

use crate::{Catalog, Error, config::Config};

mod code;
pub(crate) use code::{Arg, CodeWriter};

/// A generated file, not yet written
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    /// File name, relative to the output directory
    pub name: String,

    /// File contents
    pub contents: String,
}

/// The declaration (header) and definition (source) files
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFiles {
    /// Header declaring the aggregate struct, its instance, and the
    /// load / unload functions
    pub header: GeneratedFile,

    /// Source defining the instance and the load / unload functions
    pub source: GeneratedFile,
}

impl GeneratedFiles {
    /// Iterates over the header, then the source
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        [&self.header, &self.source].into_iter()
    }

    /// Writes both files into the given directory, header first
    ///
    /// Existing files are overwritten.  Writing stops at the first error, in
    /// which case the output may be incomplete.
    pub fn write_to(&self, dir: &Path) -> Result<(), Error> {
        for f in self.iter() {
            let path = dir.join(&f.name);
            std::fs::write(&path, &f.contents)?;
            info!("wrote {} ({} bytes)", path.display(), f.contents.len());
        }
        Ok(())
    }
}

/// Generates C bindings for a [`Catalog`]
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Builds a new generator with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates both files
    pub fn generate(&self, catalog: &Catalog) -> GeneratedFiles {
        GeneratedFiles {
            header: GeneratedFile {
                name: self.config.header_name.to_owned(),
                contents: self.declaration(catalog),
            },
            source: GeneratedFile {
                name: self.config.source_name.to_owned(),
                contents: self.definition(catalog),
            },
        }
    }

    fn banner(&self, w: &mut CodeWriter) {
        w.comment(&format!("FILE GENERATED BY {}", self.config.generator));
        w.blank();
    }

    /// Generates the declaration file
    pub fn declaration(&self, catalog: &Catalog) -> String {
        let cfg = &self.config;
        let mut w = CodeWriter::new();
        self.banner(&mut w);

        let guard = cfg.include_guard();
        w.guard_open(&guard);
        for h in &cfg.header_includes {
            w.include_local(h);
        }
        w.blank();

        w.open_struct(&format!("typedef struct {}_", cfg.type_name));
        for shader in catalog {
            debug!("declaring `{}`", shader.name());
            shader.write_declaration(&mut w, cfg);
        }
        w.close_struct(cfg.type_name);
        w.blank();

        w.extern_decl(cfg.type_name, cfg.instance_name);
        w.blank();

        w.prototype(cfg.load_fn);
        w.prototype(cfg.unload_fn);
        w.guard_close();
        w.finish()
    }

    /// Generates the definition file
    pub fn definition(&self, catalog: &Catalog) -> String {
        let cfg = &self.config;
        let mut w = CodeWriter::new();
        self.banner(&mut w);

        // memset, used to clear the instance on unload
        w.include_system("string.h");
        w.include_local(cfg.header_name);
        for h in &cfg.source_includes {
            w.include_local(h);
        }
        w.blank();

        w.decl(cfg.type_name, cfg.instance_name);
        w.blank();

        w.function(cfg.load_fn, |w| {
            for (i, shader) in catalog.iter().enumerate() {
                if i > 0 {
                    w.blank();
                }
                debug!("loading `{}`", shader.name());
                shader.write_definition(w, cfg);
            }
        });
        w.blank();

        let instance = cfg.instance_name;
        w.function(cfg.unload_fn, |w| {
            for shader in catalog {
                let program = format!(
                    "{instance}.{}.{}",
                    shader.name(),
                    crate::PROGRAM_FIELD
                );
                w.call(cfg.api.delete_program, &[Arg::Expr(&program)]);
            }
            let size = format!("sizeof({instance})");
            w.call(
                "memset",
                &[
                    Arg::Expr(&format!("&{instance}")),
                    Arg::Expr("0"),
                    Arg::Expr(&size),
                ],
            );
        });
        w.finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ShaderDescriptor;

    fn solid_catalog() -> Catalog {
        Catalog::new([ShaderDescriptor::builder(
            "solid",
            "project.vert",
            "solid.frag",
        )
        .attributes(["vertex"])
        .uniforms(["projection", "color"])
        .build()
        .unwrap()])
        .unwrap()
    }

    #[test]
    fn solid_header() {
        let out = Generator::default().declaration(&solid_catalog());
        assert_eq!(
            out,
            "/* FILE GENERATED BY shadergen */

#ifndef SHADERS_GEN_H
#define SHADERS_GEN_H
#include \"opengl.h\"

typedef struct Shaders_ {
   struct {
      GLuint program;
      GLuint vertex;
      GLuint projection;
      GLuint color;
   } solid;
} Shaders;

extern Shaders shaders;

void shaders_load (void);
void shaders_unload (void);
#endif
"
        );
    }

    #[test]
    fn solid_source() {
        let out = Generator::default().definition(&solid_catalog());
        assert_eq!(
            out,
            r#"/* FILE GENERATED BY shadergen */

#include <string.h>
#include "shaders.gen.h"
#include "opengl_shader.h"

Shaders shaders;

void shaders_load (void) {
   shaders.solid.program = gl_program_vert_frag("project.vert", "solid.frag");
   shaders.solid.vertex = glGetAttribLocation(shaders.solid.program, "vertex");
   shaders.solid.projection = glGetUniformLocation(shaders.solid.program, "projection");
   shaders.solid.color = glGetUniformLocation(shaders.solid.program, "color");
}

void shaders_unload (void) {
   glDeleteProgram(shaders.solid.program);
   memset(&shaders, 0, sizeof(shaders));
}
"#
        );
    }

    #[test]
    fn separators() {
        let catalog = Catalog::new(["a", "b", "c"].map(|name| {
            ShaderDescriptor::builder(name, "x.vert", "x.frag")
                .build()
                .unwrap()
        }))
        .unwrap();
        let out = Generator::default().definition(&catalog);
        let load = out
            .split("void shaders_load (void) {\n")
            .nth(1)
            .and_then(|s| s.split("\n}\n").next())
            .unwrap();
        assert_eq!(
            load,
            r#"   shaders.a.program = gl_program_vert_frag("x.vert", "x.frag");

   shaders.b.program = gl_program_vert_frag("x.vert", "x.frag");

   shaders.c.program = gl_program_vert_frag("x.vert", "x.frag");"#
        );
    }

    #[test]
    fn custom_names() {
        let cfg = Config {
            header_name: "programs.h",
            source_name: "programs.c",
            type_name: "Programs",
            instance_name: "programs",
            load_fn: "programs_load",
            unload_fn: "programs_unload",
            ..Config::default()
        };
        let files = Generator::new(cfg).generate(&solid_catalog());
        assert_eq!(files.header.name, "programs.h");
        assert_eq!(files.source.name, "programs.c");
        assert!(files.header.contents.contains("#ifndef PROGRAMS_H\n"));
        assert!(files.header.contents.contains("} Programs;\n"));
        assert!(files.header.contents.contains("extern Programs programs;\n"));
        assert!(files.source.contents.contains("#include \"programs.h\"\n"));
        assert!(files.source.contents.contains("programs.solid.program = "));
        assert!(files.source.contents.contains("void programs_unload (void) {"));
        assert!(!files.source.contents.contains("shaders"));
    }
}
