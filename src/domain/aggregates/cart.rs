//! Cart Aggregate

use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::catalog::Flower;
use crate::domain::value_objects::{Quantity, Rupees};

/// The shopper's bag for the current session. Lines keep the order they were
/// first added in; quantity changes never move a line.
#[derive(Clone, Debug)]
pub struct Cart {
    id: String,
    lines: Vec<CartLine>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// One selected flower together with how many of it. At most one line per
/// flower id exists in a cart.
#[derive(Clone, Debug)]
pub struct CartLine {
    pub flower_id: String,
    pub name: String,
    pub unit_price: Rupees,
    pub quantity: Quantity,
}

impl CartLine {
    pub fn line_total(&self) -> Rupees { self.unit_price.times(self.quantity.value()) }
}

impl Cart {
    pub fn new() -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4().to_string(), lines: vec![], created_at: now, updated_at: now }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn lines(&self) -> &[CartLine] { &self.lines }
    pub fn len(&self) -> usize { self.lines.len() }
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// Grand total across all lines, recomputed on every read.
    pub fn total(&self) -> Rupees {
        self.lines.iter().fold(Rupees::zero(), |acc, l| acc.add(l.line_total()))
    }

    /// How many stems and pots are in the bag, not how many distinct lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity.value()).sum()
    }

    /// Puts one of the given flower in the bag. A flower already present gets
    /// its quantity incremented in place.
    pub fn add(&mut self, flower: &Flower) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.flower_id == flower.id) {
            line.quantity = line.quantity.increment();
        } else {
            self.lines.push(CartLine {
                flower_id: flower.id.clone(),
                name: flower.name.clone(),
                unit_price: flower.price,
                quantity: Quantity::ONE,
            });
        }
        self.touch();
    }

    /// Drops the line for `flower_id`. Unknown ids are ignored.
    pub fn remove(&mut self, flower_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.flower_id != flower_id);
        if self.lines.len() != before {
            self.touch();
        }
    }

    /// Adjusts a line's quantity by `delta`, flooring at 1. Taking a line out
    /// of the bag is `remove`'s job; unknown ids are ignored.
    pub fn update_quantity(&mut self, flower_id: &str, delta: i32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.flower_id == flower_id) {
            line.quantity = line.quantity.bump(delta);
            self.touch();
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.touch();
    }

    fn touch(&mut self) { self.updated_at = Utc::now(); }
}

impl Default for Cart {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn flower(id: &str, name: &str, price: u64) -> Flower {
        Flower {
            id: id.into(),
            name: name.into(),
            price: Rupees::new(price),
            description: String::new(),
            image_url: String::new(),
            category: Category::Single,
        }
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::new();
        let gajra = flower("3", "Mogra Gajra", 150);
        cart.add(&gajra);
        cart.add(&gajra);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity.value(), 2);
        assert_eq!(cart.total().value(), 300);
    }

    #[test]
    fn test_totals_track_lines() {
        let mut cart = Cart::new();
        cart.add(&flower("1", "Marigold (Genda)", 350));
        cart.add(&flower("2", "Classic Red Roses", 850));
        cart.update_quantity("1", 2);
        assert_eq!(cart.total().value(), 3 * 350 + 850);
        assert_eq!(cart.count(), 4);
        cart.remove("2");
        assert_eq!(cart.total().value(), 3 * 350);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(&flower("3", "Mogra Gajra", 150));
        cart.update_quantity("3", -1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity.value(), 1);
        cart.update_quantity("3", -999);
        assert_eq!(cart.lines()[0].quantity.value(), 1);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut cart = Cart::new();
        cart.add(&flower("1", "Marigold (Genda)", 350));
        cart.remove("42");
        cart.update_quantity("42", 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_insertion_order_survives_updates() {
        let mut cart = Cart::new();
        cart.add(&flower("1", "Marigold (Genda)", 350));
        cart.add(&flower("2", "Classic Red Roses", 850));
        cart.update_quantity("1", 3);
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.flower_id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_clear_empties_the_bag() {
        let mut cart = Cart::new();
        cart.add(&flower("1", "Marigold (Genda)", 350));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total().value(), 0);
        assert_eq!(cart.count(), 0);
    }
}
