//! Parametros de configuracion de la hamburgueseria

use log::LevelFilter;

/// Archivo de pedidos por defecto
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";

/// Nivel de log con el que arranca el programa
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Borde superior e inferior del ticket
pub const BUN_BORDER: &str = "====";

/// Prefijo de la linea del precio en el ticket
pub const PRICE_LABEL: &str = "Price:";
