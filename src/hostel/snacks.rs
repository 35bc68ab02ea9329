use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::parser::Snack;

/// One completed sale: snack name and the profit it brought in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub name: String,
    pub profit: u32,
}

/// The snack cart: current stock plus the running sales history
#[derive(Debug)]
pub struct SnackCart {
    stock: HashMap<String, Snack>,
    sales: Vec<Sale>,
}

impl SnackCart {
    pub fn new(snacks: Vec<Snack>) -> Self {
        let stock = snacks.into_iter().map(|s| (s.name.clone(), s)).collect();
        SnackCart {
            stock,
            sales: Vec::new(),
        }
    }

    /// Returns the stock ordered by expiry ascending (earliest expiry first),
    /// ties broken by name. Drains a min-heap keyed on expiry.
    pub fn rank(&self) -> Vec<&Snack> {
        let mut heap: BinaryHeap<Reverse<(NaiveDate, &str)>> = self
            .stock
            .values()
            .map(|s| Reverse((s.expiry, s.name.as_str())))
            .collect();

        let mut ranked = Vec::with_capacity(self.stock.len());
        while let Some(Reverse((_, name))) = heap.pop() {
            ranked.push(&self.stock[name]);
        }
        ranked
    }

    /// Buys `qty` units of a snack. On success the quantity drops by exactly
    /// `qty` and one sale (profit = qty x price) is recorded; on failure the
    /// cart is untouched.
    pub fn purchase(&mut self, name: &str, qty: u32) -> Result<u32> {
        let snack = self
            .stock
            .get_mut(name)
            .ok_or_else(|| Error::UnknownSnack(name.to_string()))?;

        if qty > snack.quantity {
            return Err(Error::OutOfStock {
                name: name.to_string(),
                requested: qty,
                available: snack.quantity,
            });
        }

        snack.quantity -= qty;
        let profit = qty * snack.price;
        self.sales.push(Sale {
            name: name.to_string(),
            profit,
        });
        Ok(profit)
    }

    /// Returns the sales history ordered by profit descending, plus the total.
    pub fn profit_report(&self) -> (Vec<Sale>, u32) {
        let mut history = self.sales.clone();
        history.sort_by(|a, b| b.profit.cmp(&a.profit));
        let total = history.iter().map(|s| s.profit).sum();
        (history, total)
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.stock.get(name).map(|s| s.quantity)
    }
}
