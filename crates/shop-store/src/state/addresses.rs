//! # Address Book
//!
//! Saved delivery addresses, keyed by id.
//!
//! ## Id Assignment
//! Ids are the creation time in milliseconds. Two addresses created within
//! the same millisecond would collide, so the id is bumped forward until it
//! is free.

use serde::{Deserialize, Serialize};
use shop_core::{Address, AddressDraft, AddressUpdate};
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddressBook {
    addresses: Vec<Address>,
}

impl AddressBook {
    /// The address book a new session starts with.
    pub fn seeded() -> Self {
        AddressBook {
            addresses: vec![Address::from_draft(
                "1",
                AddressDraft::new("123 Tech Park", "Mumbai", "400708"),
            )],
        }
    }

    /// First unused id at or after `now_millis`.
    pub(crate) fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        loop {
            let id = candidate.to_string();
            if !self.contains(&id) {
                return id;
            }
            candidate += 1;
        }
    }

    pub(crate) fn push(&mut self, address: Address) {
        self.addresses.push(address);
    }

    /// Merges `update` into the address with this id. Returns the merged
    /// address, or `None` if no address has the id.
    pub(crate) fn update(&mut self, id: &str, update: AddressUpdate) -> Option<&Address> {
        let address = self.addresses.iter_mut().find(|a| a.id == id)?;
        address.apply(update);
        Some(address)
    }

    /// Removes the address with this id. Returns whether one was removed.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.addresses.len();
        self.addresses.retain(|a| a.id != id);
        self.addresses.len() != before
    }

    #[inline]
    pub fn all(&self) -> &[Address] {
        &self.addresses
    }

    pub fn get(&self, id: &str) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
