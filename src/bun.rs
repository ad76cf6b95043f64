//! Pan de la hamburguesa
use serde::Deserialize;

/// Lo que una hamburguesa necesita saber de su pan.
pub trait Bun {
    fn name(&self) -> &str;
    fn price(&self) -> f64;
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StandardBun {
    name: String,
    price: f64,
}

impl StandardBun {
    pub fn new(name: &str, price: f64) -> StandardBun {
        StandardBun {
            name: name.to_string(),
            price,
        }
    }
}

impl Bun for StandardBun {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> f64 {
        self.price
    }
}
