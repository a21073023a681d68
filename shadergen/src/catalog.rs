//! Ordered, validated collection of shader descriptors
use std::collections::BTreeSet;

use crate::{Error, ShaderDescriptor};

/// Ordered set of shaders with distinct names
///
/// Catalog order determines the order of fields and statements in the
/// generated files.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Catalog {
    shaders: Vec<ShaderDescriptor>,
}

impl Catalog {
    /// Builds a catalog, checking that it is non-empty and that shader names
    /// are unique
    pub fn new(
        shaders: impl IntoIterator<Item = ShaderDescriptor>,
    ) -> Result<Self, Error> {
        let shaders: Vec<ShaderDescriptor> = shaders.into_iter().collect();
        if shaders.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        let mut seen = BTreeSet::new();
        for s in &shaders {
            if !seen.insert(s.name()) {
                return Err(Error::DuplicateShader(s.name().to_owned()));
            }
        }
        Ok(Self { shaders })
    }

    /// Number of shaders in the catalog
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    /// Always `false`, since empty catalogs are rejected at construction
    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }

    /// Looks up a shader by name
    pub fn get(&self, name: &str) -> Option<&ShaderDescriptor> {
        self.shaders.iter().find(|s| s.name() == name)
    }

    /// Iterates over shaders in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, ShaderDescriptor> {
        self.shaders.iter()
    }

    /// Checks whether any shader declares subroutine groups
    pub fn uses_subroutines(&self) -> bool {
        self.shaders.iter().any(|s| !s.subroutines().is_empty())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ShaderDescriptor;
    type IntoIter = std::slice::Iter<'a, ShaderDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
