//! Part entity type - one inventory record for a replacement component

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::identity::PartId;

/// A replacement part held in inventory.
///
/// `id` and `registration_date` are assigned by the store when the record
/// is inserted and are never mutated afterwards; every other field is
/// mutable via update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Unique identifier (store-assigned)
    pub id: PartId,

    /// Part name
    pub name: String,

    /// Part code; matched exactly (see export filter semantics)
    pub code: String,

    /// Manufacturer name
    pub manufacturer: String,

    /// Vehicle this part fits
    pub compatible_vehicle: String,

    /// Units currently in stock
    pub stock_quantity: u32,

    /// Unit price as an exact decimal currency amount
    pub unit_price: Decimal,

    /// Free-text category (e.g. "Motor", "Freio")
    pub category: String,

    /// Date the record was registered (store-assigned, immutable)
    pub registration_date: NaiveDate,
}

impl Part {
    /// Build a part from caller-supplied fields plus store-assigned identity
    pub fn from_draft(draft: PartDraft, id: PartId, registration_date: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            code: draft.code,
            manufacturer: draft.manufacturer,
            compatible_vehicle: draft.compatible_vehicle,
            stock_quantity: draft.stock_quantity,
            unit_price: draft.unit_price,
            category: draft.category,
            registration_date,
        }
    }
}

/// The caller-supplied fields of a part: everything except the
/// store-assigned id and registration date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartDraft {
    pub name: String,
    pub code: String,
    pub manufacturer: String,
    pub compatible_vehicle: String,
    pub stock_quantity: u32,
    pub unit_price: Decimal,
    pub category: String,
}

impl PartDraft {
    /// Sample catalog used by `partstock init --seed`
    pub fn seed_catalog() -> Vec<PartDraft> {
        let draft = |name: &str, code: &str, maker: &str, vehicle: &str, stock, price: &str, cat: &str| {
            PartDraft {
                name: name.to_string(),
                code: code.to_string(),
                manufacturer: maker.to_string(),
                compatible_vehicle: vehicle.to_string(),
                stock_quantity: stock,
                unit_price: price.parse().expect("seed price is a valid decimal"),
                category: cat.to_string(),
            }
        };

        vec![
            draft("Filtro de Óleo", "FO123", "Bosch", "Fiat Uno", 50, "25.90", "Motor"),
            draft("Filtro de Óleo", "FO124", "Bosch", "Fiat Uno", 40, "27.90", "Motor"),
            draft("Pastilha de Freio", "PF456", "Cobreq", "Volkswagen Gol", 30, "89.90", "Freio"),
            draft("Pastilha de Freio", "PF457", "Cobreq", "Volkswagen Gol", 25, "87.00", "Freio"),
            draft("Amortecedor Dianteiro", "AD789", "Monroe", "Chevrolet Onix", 20, "320.00", "Suspensão"),
            draft("Amortecedor Traseiro", "AT788", "Monroe", "Chevrolet Onix", 18, "310.00", "Suspensão"),
            draft("Correia Dentada", "CD321", "Gates", "Ford Ka", 15, "75.50", "Motor"),
            draft("Correia Dentada", "CD322", "Gates", "Ford Ka", 10, "78.00", "Motor"),
            draft("Vela de Ignição", "VI654", "NGK", "Fiat Uno", 40, "19.90", "Ignição"),
            draft("Vela de Ignição", "VI655", "NGK", "Fiat Uno", 35, "21.00", "Ignição"),
        ]
    }
}
