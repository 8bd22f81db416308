use std::collections::HashMap;
use std::fs::File;

use bevy::prelude::*;
use ron::de::from_reader;
use serde::{Deserialize, Serialize};

use crate::core::alignment_error::{AlignmentError, AlignmentResult};
use crate::core::components::BuildableCategory;

/// How a recipe's hologram behaves under scroll rotation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeSpec {
    pub category: BuildableCategory,
    pub degrees_per_scroll: i32,
    /// Some holograms only know their step once a concrete build mode is
    /// active and report 0 until then; alignment measures those with a probe
    /// scroll.
    pub reports_rotation_step: bool,
}

/// Recipe name -> hologram scroll behavior, importable from a RON file.
#[derive(Resource, Debug, Default)]
pub struct RecipeLibrary {
    recipes: HashMap<String, RecipeSpec>,
}

impl RecipeLibrary {
    pub fn new() -> Self {
        RecipeLibrary {
            recipes: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: RecipeSpec) {
        self.recipes.insert(name.into(), spec);
    }

    pub fn get(&self, name: &str) -> Option<&RecipeSpec> {
        self.recipes.get(name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn import_from_file(path: &str) -> AlignmentResult<Self> {
        let file = File::open(path).map_err(|e| AlignmentError::RecipeImport(e.to_string()))?;
        let recipes: HashMap<String, RecipeSpec> =
            from_reader(file).map_err(|e| AlignmentError::RecipeImport(e.to_string()))?;
        Ok(RecipeLibrary { recipes })
    }

    pub fn import_from_str(source: &str) -> AlignmentResult<Self> {
        let recipes: HashMap<String, RecipeSpec> =
            ron::from_str(source).map_err(|e| AlignmentError::RecipeImport(e.to_string()))?;
        Ok(RecipeLibrary { recipes })
    }
}
