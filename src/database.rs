//! Catalogo de panes e ingredientes disponibles
use std::{fs::File, io::{BufReader, Read}, path::Path, rc::Rc};

use log::{debug, info};
use serde::Deserialize;

use crate::{
    bun::{Bun, StandardBun},
    errors::BurgerError,
    ingredient::{Ingredient, IngredientType, StandardIngredient},
};

#[derive(Deserialize)]
struct JsonCatalog {
    buns: Vec<StandardBun>,
    ingredients: Vec<StandardIngredient>,
}

/// Panes e ingredientes con los que se pueden armar hamburguesas.
/// Los elementos se comparten con las hamburguesas que los usan.
pub struct Database {
    buns: Vec<Rc<StandardBun>>,
    ingredients: Vec<Rc<StandardIngredient>>,
}

impl Default for Database {
    fn default() -> Database {
        let buns = vec![
            StandardBun::new("black bun", 100.0),
            StandardBun::new("white bun", 200.0),
            StandardBun::new("red bun", 300.0),
        ];
        let ingredients = vec![
            StandardIngredient::new(IngredientType::Sauce, "hot sauce", 100.0),
            StandardIngredient::new(IngredientType::Sauce, "sour cream", 200.0),
            StandardIngredient::new(IngredientType::Sauce, "chili sauce", 300.0),
            StandardIngredient::new(IngredientType::Filling, "cutlet", 100.0),
            StandardIngredient::new(IngredientType::Filling, "dinosaur", 200.0),
            StandardIngredient::new(IngredientType::Filling, "sausage", 300.0),
        ];
        Database::new(buns, ingredients)
    }
}

impl Database {
    pub fn new(buns: Vec<StandardBun>, ingredients: Vec<StandardIngredient>) -> Database {
        Database {
            buns: buns.into_iter().map(Rc::new).collect(),
            ingredients: ingredients.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Database, BurgerError> {
        let catalog: JsonCatalog = serde_json::from_reader(reader)?;
        debug!(
            "[DATABASE] Loaded {} buns and {} ingredients",
            catalog.buns.len(),
            catalog.ingredients.len()
        );
        Ok(Database::new(catalog.buns, catalog.ingredients))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Database, BurgerError> {
        let file = File::open(path.as_ref())?;
        info!("[DATABASE] Reading menu from {}", path.as_ref().display());
        Database::from_reader(BufReader::new(file))
    }

    pub fn available_buns(&self) -> &[Rc<StandardBun>] {
        &self.buns
    }

    pub fn available_ingredients(&self) -> &[Rc<StandardIngredient>] {
        &self.ingredients
    }

    pub fn find_bun(&self, name: &str) -> Result<Rc<StandardBun>, BurgerError> {
        self.buns
            .iter()
            .find(|bun| bun.name() == name)
            .cloned()
            .ok_or_else(|| BurgerError::UnknownBun(name.to_string()))
    }

    pub fn find_ingredient(&self, name: &str) -> Result<Rc<StandardIngredient>, BurgerError> {
        self.ingredients
            .iter()
            .find(|ingredient| ingredient.name() == name)
            .cloned()
            .ok_or_else(|| BurgerError::UnknownIngredient(name.to_string()))
    }
}
