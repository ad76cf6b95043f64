use log::{debug, error, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{burger::Burger, database::Database, errors::BurgerError};

/// Pedido tal como viene en el archivo: nombres del pan y de los ingredientes, en orden.
#[derive(Deserialize, Debug, PartialEq)]
pub struct JsonOrder {
    pub bun: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

pub fn read_orders<R: Read>(reader: R) -> Result<Vec<JsonOrder>, BurgerError> {
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

pub fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, BurgerError> {
    let file = File::open(path.as_ref()).map_err(|err| {
        error!("[READER] Could not open {}: {}", path.as_ref().display(), err);
        BurgerError::FileReaderError
    })?;
    let orders = read_orders(BufReader::new(file))?;
    info!("[READER] Read {} orders", orders.len());
    Ok(orders)
}

/// Arma la hamburguesa de un pedido buscando cada nombre en el catalogo.
pub fn assemble_burger(order: &JsonOrder, database: &Database) -> Result<Burger, BurgerError> {
    let mut burger = Burger::new();
    burger.set_bun(database.find_bun(&order.bun)?);
    for name in order.ingredients.iter() {
        burger.add_ingredient(database.find_ingredient(name)?);
    }
    debug!(
        "[READER] Assembled burger with {} and {} ingredients",
        order.bun,
        order.ingredients.len()
    );
    Ok(burger)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: &str = r#"{
        "orders": [
            {"bun": "black bun", "ingredients": ["hot sauce", "cutlet"]},
            {"bun": "red bun"}
        ]
    }"#;

    #[test]
    fn should_read_orders_in_file_order() {
        let orders = read_orders(ORDERS.as_bytes()).expect("valid orders");
        assert_eq!(2, orders.len());
        assert_eq!(
            JsonOrder {
                bun: "black bun".to_string(),
                ingredients: vec!["hot sauce".to_string(), "cutlet".to_string()],
            },
            orders[0]
        );
        assert!(orders[1].ingredients.is_empty());
    }

    #[test]
    fn should_fail_with_malformed_orders() {
        let result = read_orders(r#"{"orders": [{"ingredients": []}]}"#.as_bytes());
        assert_eq!(Some(BurgerError::FileReaderError), result.err());
    }

    #[test]
    fn should_fail_with_a_missing_file() {
        let result = read_orders_from_file("there/are/no/orders.json");
        assert_eq!(Some(BurgerError::FileReaderError), result.err());
    }

    #[test]
    fn should_assemble_a_burger_from_an_order() {
        let orders = read_orders(ORDERS.as_bytes()).expect("valid orders");
        let burger = assemble_burger(&orders[0], &Database::default()).expect("known items");
        assert_eq!(2, burger.ingredients().len());
        assert_eq!(Ok(300.0), burger.price());
        assert_eq!(
            "(==== black bun ====)\n\
             = sauce hot sauce =\n\
             = filling cutlet =\n\
             (==== black bun ====)\n\
             \n\
             Price: 300.0",
            burger.receipt().expect("bun set")
        );
    }

    #[test]
    fn should_fail_to_assemble_with_an_unknown_ingredient() {
        let order = JsonOrder {
            bun: "white bun".to_string(),
            ingredients: vec!["pickles".to_string()],
        };
        let result = assemble_burger(&order, &Database::default());
        assert_eq!(
            Some(BurgerError::UnknownIngredient("pickles".to_string())),
            result.err()
        );
    }
}
