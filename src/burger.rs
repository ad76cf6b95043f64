//! Representacion de una hamburguesa: un pan y una lista ordenada de ingredientes
use std::rc::Rc;

use log::debug;

use crate::{
    bun::Bun,
    constants::{BUN_BORDER, PRICE_LABEL},
    errors::BurgerError,
    ingredient::Ingredient,
};

/// Hamburguesa armada a partir de un pan y de ingredientes.
/// No es duenia de sus componentes, solo guarda referencias compartidas a ellos.
#[derive(Default)]
pub struct Burger {
    bun: Option<Rc<dyn Bun>>,
    ingredients: Vec<Rc<dyn Ingredient>>,
}

impl Burger {
    pub fn new() -> Burger {
        Burger {
            bun: None,
            ingredients: Vec::new(),
        }
    }

    pub fn bun(&self) -> Option<&Rc<dyn Bun>> {
        self.bun.as_ref()
    }

    pub fn ingredients(&self) -> &[Rc<dyn Ingredient>] {
        &self.ingredients
    }

    pub fn set_bun(&mut self, bun: Rc<dyn Bun>) {
        debug!("[BURGER] Bun set to {}", bun.name());
        self.bun = Some(bun);
    }

    pub fn add_ingredient(&mut self, ingredient: Rc<dyn Ingredient>) {
        debug!("[BURGER] Added ingredient {}", ingredient.name());
        self.ingredients.push(ingredient);
    }

    /// Quita el ingrediente en `index`, corriendo los siguientes una posicion.
    pub fn remove_ingredient(&mut self, index: usize) -> Result<Rc<dyn Ingredient>, BurgerError> {
        self.check_index(index)?;
        let removed = self.ingredients.remove(index);
        debug!("[BURGER] Removed ingredient {} at {}", removed.name(), index);
        Ok(removed)
    }

    /// Saca el ingrediente en `index` y lo vuelve a insertar en `new_index`
    /// de la lista resultante (no es un intercambio).
    pub fn move_ingredient(&mut self, index: usize, new_index: usize) -> Result<(), BurgerError> {
        self.check_index(index)?;
        self.check_index(new_index)?;
        let ingredient = self.ingredients.remove(index);
        self.ingredients.insert(new_index, ingredient);
        debug!("[BURGER] Moved ingredient from {} to {}", index, new_index);
        Ok(())
    }

    /// Precio del pan mas el de cada ingrediente. Cada componente se consulta una sola vez.
    pub fn price(&self) -> Result<f64, BurgerError> {
        let bun = self.bun.as_ref().ok_or(BurgerError::MissingBun)?;
        let ingredients_price: f64 = self
            .ingredients
            .iter()
            .map(|ingredient| ingredient.price())
            .sum();
        Ok(bun.price() + ingredients_price)
    }

    pub fn receipt(&self) -> Result<String, BurgerError> {
        let bun = self.bun.as_ref().ok_or(BurgerError::MissingBun)?;
        let mut receipt = format!("({} {} {})\n", BUN_BORDER, bun.name(), BUN_BORDER);
        for ingredient in self.ingredients.iter() {
            receipt.push_str(&format!(
                "= {} {} =\n",
                ingredient.ingredient_type().label(),
                ingredient.name()
            ));
        }
        receipt.push_str(&format!("({} {} {})\n\n", BUN_BORDER, bun.name(), BUN_BORDER));
        receipt.push_str(&format!("{} {}", PRICE_LABEL, format_price(self.price()?)));
        Ok(receipt)
    }

    fn check_index(&self, index: usize) -> Result<(), BurgerError> {
        if index >= self.ingredients.len() {
            return Err(BurgerError::IndexOutOfRange {
                index,
                len: self.ingredients.len(),
            });
        }
        Ok(())
    }
}

// Debug de f64 siempre deja un decimal: 130.0 y no 130
fn format_price(price: f64) -> String {
    format!("{:?}", price)
}
