//! Ingredientes que se le pueden agregar a una hamburguesa
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum IngredientType {
    Sauce,
    Filling,
}

impl IngredientType {
    /// Nombre del tipo tal como aparece en el ticket
    pub fn label(&self) -> &'static str {
        match self {
            IngredientType::Sauce => "sauce",
            IngredientType::Filling => "filling",
        }
    }
}

pub trait Ingredient {
    fn ingredient_type(&self) -> IngredientType;
    fn name(&self) -> &str;
    fn price(&self) -> f64;
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StandardIngredient {
    #[serde(rename = "type")]
    ingredient_type: IngredientType,
    name: String,
    price: f64,
}

impl StandardIngredient {
    pub fn new(ingredient_type: IngredientType, name: &str, price: f64) -> StandardIngredient {
        StandardIngredient {
            ingredient_type,
            name: name.to_string(),
            price,
        }
    }
}

impl Ingredient for StandardIngredient {
    fn ingredient_type(&self) -> IngredientType {
        self.ingredient_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_types_in_lowercase() {
        assert_eq!("sauce", IngredientType::Sauce.label());
        assert_eq!("filling", IngredientType::Filling.label());
    }

    #[test]
    fn should_deserialize_an_ingredient_with_uppercase_type() {
        let ingredient: StandardIngredient =
            serde_json::from_str(r#"{"type": "FILLING", "name": "cutlet", "price": 100.0}"#)
                .expect("valid ingredient");
        assert_eq!(IngredientType::Filling, ingredient.ingredient_type());
        assert_eq!("cutlet", ingredient.name());
        assert_eq!(100.0, ingredient.price());
    }

    #[test]
    fn should_reject_an_unknown_type() {
        let result = serde_json::from_str::<StandardIngredient>(
            r#"{"type": "TOPPING", "name": "cheese", "price": 50.0}"#,
        );
        assert!(result.is_err());
    }
}
