//! Demo floor plan and a pre-loaded order
//!
//! One table ships with an open order so the payment flows can be exercised
//! immediately; the rest of the floor starts empty.

use shared::models::DiningTable;
use shared::order::{Order, OrderItem};

/// Table id of the pre-loaded order.
pub const SEEDED_TABLE_ID: &str = "MESA-18";

pub fn tables() -> Vec<DiningTable> {
    vec![
        DiningTable::new(SEEDED_TABLE_ID, "Terraza Norte").with_server("Lucía"),
        DiningTable::new("MESA-1", "Barra 1"),
        DiningTable::new("MESA-2", "Barra 2"),
        DiningTable::new("MESA-3", "Salón 1"),
        DiningTable::new("MESA-4", "Salón 2"),
        DiningTable::new("MESA-6", "Terraza Sur"),
    ]
}

/// The open order on Terraza Norte. Twelve lines, 109.50 EUR.
pub fn initial_order() -> Order {
    let table = DiningTable::new(SEEDED_TABLE_ID, "Terraza Norte").with_server("Lucía");
    Order::new(
        &table,
        "EUR",
        vec![
            item("I1", "Entrante - Pan con tomate", 2, 4.00)
                .with_note("Compartido para la mesa"),
            item("I2", "Jamón ibérico", 1, 18.50).with_note("Ración completa"),
            item("I3", "Pizza Prosciutto e Funghi", 1, 12.50),
            item("I4", "Pasta Pesto Genovese", 1, 13.00),
            item("I5", "Ensalada Caprese", 1, 10.50),
            item("I6", "Risotto de setas", 1, 14.50),
            item("I7", "Agua con gas 1L", 2, 3.00),
            item("I8", "Cerveza artesanal IPA", 3, 4.80),
            item("I9", "Copa de vino tinto Rioja", 3, 5.50),
            item("I10", "Tiramisú", 2, 6.00),
            item("I11", "Helado de pistacho", 1, 5.50),
            item("I12", "Café espresso", 4, 2.20),
        ],
    )
}

fn item(id: &str, name: &str, quantity: i32, unit_price: f64) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        unit_price,
        note: None,
    }
}
