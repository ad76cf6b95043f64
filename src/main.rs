pub mod bun;
pub mod burger;
pub mod constants;
pub mod database;
pub mod errors;
pub mod ingredient;
pub mod orders_reader;

use std::{env, path::Path};

use log::{error, info};
use simple_logger::SimpleLogger;

use burger::Burger;
use constants::{DEFAULT_ORDERS_FILE, LOG_LEVEL};
use database::Database;
use errors::BurgerError;
use orders_reader::{assemble_burger, read_orders_from_file};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LOG_LEVEL).init() {
        println!("[ERROR] Could not start the logger: {}", err);
    }

    let args: Vec<String> = env::args().collect();
    let database = match args.get(2) {
        Some(menu_path) => match Database::from_file(menu_path) {
            Ok(database) => database,
            Err(err) => {
                error!("[MAIN] Could not load menu {}: {}", menu_path, err);
                return;
            }
        },
        None => Database::default(),
    };

    let result = match args.get(1) {
        Some(orders_path) => print_orders(orders_path, &database),
        None if Path::new(DEFAULT_ORDERS_FILE).exists() => {
            print_orders(DEFAULT_ORDERS_FILE, &database)
        }
        None => print_demo_burger(&database),
    };
    if let Err(err) = result {
        error!("[MAIN] {}", err);
    }
}

fn print_orders(orders_path: &str, database: &Database) -> Result<(), BurgerError> {
    let orders = read_orders_from_file(orders_path)?;
    for (id, order) in orders.iter().enumerate() {
        let receipt = assemble_burger(order, database).and_then(|burger| burger.receipt());
        match receipt {
            Ok(receipt) => println!("{}\n", receipt),
            Err(err) => error!("[MAIN] Skipped order {}: {}", id, err),
        }
    }
    info!("[MAIN] No more orders left");
    Ok(())
}

fn print_demo_burger(database: &Database) -> Result<(), BurgerError> {
    info!("[MAIN] No orders file found, printing the demo burger");
    let burger = demo_burger(database)?;
    println!("{}", burger.receipt()?);
    Ok(())
}

fn demo_burger(database: &Database) -> Result<Burger, BurgerError> {
    let mut burger = Burger::new();
    burger.set_bun(database.find_bun("black bun")?);
    for name in ["sour cream", "cutlet", "chili sauce", "sausage"] {
        burger.add_ingredient(database.find_ingredient(name)?);
    }
    burger.move_ingredient(2, 1)?;
    burger.remove_ingredient(3)?;
    Ok(burger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assemble_the_demo_burger() {
        let burger = demo_burger(&Database::default()).expect("stock menu");
        let receipt = burger.receipt().expect("bun set");
        assert_eq!(
            "(==== black bun ====)\n\
             = sauce sour cream =\n\
             = sauce chili sauce =\n\
             = filling cutlet =\n\
             (==== black bun ====)\n\
             \n\
             Price: 700.0",
            receipt
        );
    }
}
