//! # Catalog
//!
//! The live catalog of materials and clients with their per-material rates.
//!
//! ## Rate-Table Propagation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Mutations                                    │
//! │                                                                         │
//! │  add_material("cement")    ──► every client gains { cement, €0 }       │
//! │  rename_material(old, new) ──► material list + every rate table        │
//! │  delete_material("sand")   ──► removed from list + every rate table    │
//! │  add_client(name, rates)   ──► one MaterialRate per catalog material   │
//! │                                (missing rates default to €0)           │
//! │                                                                         │
//! │  NONE of these touch the ledger: saved ShipmentDays carry snapshots    │
//! │  and history is never rewritten retroactively.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Duplicate material names are rejected before any collection mutation,
//! so a failed operation is always a no-op.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use cartage_core::money::Money;
use cartage_core::types::{Client, MaterialRate};
use cartage_core::validation::{validate_client_name, validate_material_name, validate_rate};

use crate::error::{LedgerError, LedgerResult};

// =============================================================================
// Catalog
// =============================================================================

/// The live catalog: material names plus clients with their rate tables.
///
/// ## Ownership
/// The catalog owns both collections exclusively. The pricing and ledger
/// layers consume it read-only; mutation goes through the methods below,
/// all of which validate first and mutate second.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    materials: Vec<String>,
    clients: Vec<Client>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Creates a catalog from existing collections (e.g. loaded by the
    /// embedding application's persistence layer).
    pub fn from_parts(materials: Vec<String>, clients: Vec<Client>) -> Self {
        Catalog { materials, clients }
    }

    /// Material names in catalog order.
    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    /// All clients.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Looks up a client by id.
    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    // =========================================================================
    // Material Operations
    // =========================================================================

    /// Adds a material and appends a zero-price rate to every client.
    ///
    /// ## Errors
    /// - [`LedgerError::DuplicateMaterial`] if the name already exists
    /// - [`LedgerError::Validation`] for empty/overlong names
    pub fn add_material(&mut self, name: &str) -> LedgerResult<()> {
        let name = validate_material_name(name)?;
        if self.materials.iter().any(|m| *m == name) {
            return Err(LedgerError::DuplicateMaterial(name));
        }

        debug!(material = %name, "Adding material");
        for client in &mut self.clients {
            client.rates.push(MaterialRate {
                material: name.clone(),
                price: Money::zero(),
            });
        }
        self.materials.push(name);
        Ok(())
    }

    /// Renames a material in the material list and every client's rate
    /// table.
    ///
    /// Historical ledger records keep the old name: snapshots are immutable
    /// and renames never rewrite history.
    ///
    /// ## Errors
    /// - [`LedgerError::MaterialNotFound`] if `old` is not in the catalog
    /// - [`LedgerError::DuplicateMaterial`] if `new` already exists
    pub fn rename_material(&mut self, old: &str, new: &str) -> LedgerResult<()> {
        let new = validate_material_name(new)?;
        if !self.materials.iter().any(|m| m == old) {
            return Err(LedgerError::MaterialNotFound(old.to_string()));
        }
        if self.materials.iter().any(|m| *m == new) {
            return Err(LedgerError::DuplicateMaterial(new));
        }

        debug!(old = %old, new = %new, "Renaming material");
        for material in &mut self.materials {
            if material == old {
                *material = new.clone();
            }
        }
        for client in &mut self.clients {
            for rate in &mut client.rates {
                if rate.material == old {
                    rate.material = new.clone();
                }
            }
        }
        Ok(())
    }

    /// Deletes a material from the list and from every client's rate table.
    ///
    /// Previously saved shipment days referencing the material by name keep
    /// their historical line items unchanged.
    pub fn delete_material(&mut self, name: &str) -> LedgerResult<()> {
        if !self.materials.iter().any(|m| m == name) {
            return Err(LedgerError::MaterialNotFound(name.to_string()));
        }

        debug!(material = %name, "Deleting material");
        self.materials.retain(|m| m != name);
        for client in &mut self.clients {
            client.rates.retain(|r| r.material != name);
        }
        Ok(())
    }

    // =========================================================================
    // Client Operations
    // =========================================================================

    /// Adds a client with one rate per catalog material.
    ///
    /// Rates missing from `rates` default to zero, so every client's rate
    /// table is always complete and in catalog material order.
    ///
    /// ## Returns
    /// The created client (owned clone with generated id).
    pub fn add_client(&mut self, name: &str, rates: &[MaterialRate]) -> LedgerResult<Client> {
        let name = validate_client_name(name)?;
        for rate in rates {
            validate_rate(rate.price)?;
        }

        let client = Client {
            id: Uuid::new_v4().to_string(),
            name,
            rates: self.full_rate_table(rates),
        };
        debug!(id = %client.id, name = %client.name, "Adding client");
        self.clients.push(client.clone());
        Ok(client)
    }

    /// Replaces a client's name and rate table.
    ///
    /// The rate table is re-aligned to the catalog material list the same
    /// way as [`Catalog::add_client`]. Ledger history keeps the old name
    /// snapshots.
    pub fn update_client(
        &mut self,
        id: &str,
        name: &str,
        rates: &[MaterialRate],
    ) -> LedgerResult<Client> {
        let name = validate_client_name(name)?;
        for rate in rates {
            validate_rate(rate.price)?;
        }
        let full_rates = self.full_rate_table(rates);

        let client = self
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LedgerError::ClientNotFound(id.to_string()))?;

        debug!(id = %id, name = %name, "Updating client");
        client.name = name;
        client.rates = full_rates;
        Ok(client.clone())
    }

    /// Deletes a client. Historical ledger records are unaffected.
    pub fn delete_client(&mut self, id: &str) -> LedgerResult<()> {
        if !self.clients.iter().any(|c| c.id == id) {
            return Err(LedgerError::ClientNotFound(id.to_string()));
        }

        debug!(id = %id, "Deleting client");
        self.clients.retain(|c| c.id != id);
        Ok(())
    }

    /// Builds a complete rate table in catalog material order, taking the
    /// supplied price where present and zero otherwise.
    fn full_rate_table(&self, supplied: &[MaterialRate]) -> Vec<MaterialRate> {
        self.materials
            .iter()
            .map(|material| MaterialRate {
                material: material.clone(),
                price: supplied
                    .iter()
                    .find(|r| r.material == *material)
                    .map(|r| r.price)
                    .unwrap_or_else(Money::zero),
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
