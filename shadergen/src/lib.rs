//! `shadergen` writes the C glue which loads a fixed set of GLSL programs.
//!
//! A program is described by a [`ShaderDescriptor`]: its name, the paths of
//! its vertex and fragment sources, and the names of its vertex attributes,
//! uniforms, and subroutine groups.  Descriptors are collected into a
//! [`Catalog`], and a [`Generator`] turns the catalog into two files:
//!
//! - A header (`shaders.gen.h`) declaring a `Shaders` struct with one member
//!   per program.  Each member holds a handle for the linked program and one
//!   handle per attribute, uniform, and subroutine.
//! - A source file (`shaders.gen.c`) defining the global `shaders` instance,
//!   `shaders_load()`, which links every program and looks up its handles,
//!   and `shaders_unload()`, which deletes every program and zeroes the
//!   instance.
//!
//! Generation is a pure function of the catalog; writing to disk is a
//! separate step.
//!
//! ```
//! use shadergen::{Catalog, Generator, ShaderDescriptor};
//!
//! let solid = ShaderDescriptor::builder("solid", "project.vert", "solid.frag")
//!     .attributes(["vertex"])
//!     .uniforms(["projection", "color"])
//!     .build()?;
//! let catalog = Catalog::new([solid])?;
//! let files = Generator::default().generate(&catalog);
//! assert!(files.header.contents.contains("GLuint projection;"));
//! assert!(files.source.contents.contains("glDeleteProgram(shaders.solid.program);"));
//! # Ok::<(), shadergen::Error>(())
//! ```
//!
//! Names are validated when descriptors and catalogs are built, so a bad
//! entry is reported here rather than by the C compiler.
//!
//! ```
//! use shadergen::{Error, ShaderDescriptor};
//!
//! let r = ShaderDescriptor::builder("solid", "project.vert", "solid.frag")
//!     .attributes(["vertex"])
//!     .uniforms(["vertex"])
//!     .build();
//! assert!(matches!(r, Err(Error::DuplicateField { .. })));
//! ```
#![warn(missing_docs)]

pub mod builtin;
mod catalog;
mod config;
mod emit;
mod error;
mod shader;

pub use catalog::Catalog;
pub use config::{Config, GlApi};
pub use emit::{GeneratedFile, GeneratedFiles, Generator};
pub use error::Error;
pub use shader::{
    GROUP_UNIFORM_FIELD, PROGRAM_FIELD, SUBROUTINE_STAGE, ShaderBuilder,
    ShaderDescriptor, ShaderStage, SubroutineGroup, is_identifier,
};

/// Generates both files for a catalog using the default [`Config`]
pub fn generate(catalog: &Catalog) -> GeneratedFiles {
    Generator::default().generate(catalog)
}
