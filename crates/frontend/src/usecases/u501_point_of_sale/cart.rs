//! Sale cart for the point of sale screen.
//!
//! Pure state: the UI keeps one `Cart` in a signal and calls these methods
//! through `update`. Totals use the same rounding as the server.

use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a009_order::aggregate::{OrderDto, OrderKind, OrderLine, PaymentMethod};
use contracts::domain::common::money::sum_money;
use contracts::domain::common::validation::parse_optional_amount;
use contracts::domain::common::{line_total, round_money};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: i64,
    pub sku: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: i64,
    /// Stock when the product was added; the quantity never goes above it
    pub stock: i64,
}

impl CartLine {
    pub fn total(&self) -> f64 {
        line_total(self.quantity as f64, self.unit_price)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub discount: f64,
    pub customer_id: Option<i64>,
    pub payment_method: PaymentMethod,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        sum_money(self.lines.iter().map(CartLine::total))
    }

    pub fn total(&self) -> f64 {
        round_money((self.subtotal() - self.discount).max(0.0))
    }

    /// Adds one unit. A product already in the cart gets its quantity
    /// bumped instead of a second line.
    pub fn add(&mut self, product: &Product) -> Result<(), String> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            if line.quantity >= line.stock {
                return Err(format!("Only {} of \"{}\" in stock", line.stock, line.name));
            }
            line.quantity += 1;
            return Ok(());
        }
        if product.stock_qty <= 0 {
            return Err(format!("\"{}\" is out of stock", product.name));
        }
        self.lines.push(CartLine {
            product_id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            stock: product.stock_qty,
        });
        Ok(())
    }

    /// Sets a line's quantity, capped at stock. Zero or less removes the line.
    pub fn set_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity.min(line.stock);
        }
        self.clamp_discount();
    }

    pub fn remove(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product_id != product_id);
        self.clamp_discount();
    }

    /// Discount is kept within `0..=subtotal`.
    pub fn set_discount(&mut self, discount: f64) {
        self.discount = if discount.is_finite() { round_money(discount) } else { 0.0 };
        self.clamp_discount();
    }

    fn clamp_discount(&mut self) {
        self.discount = self.discount.clamp(0.0, self.subtotal());
    }

    pub fn clear(&mut self) {
        *self = Cart::default();
    }

    pub fn to_order_dto(&self, location_id: Option<i64>, shift_id: Option<i64>) -> Result<OrderDto, String> {
        let dto = OrderDto {
            kind: OrderKind::Sale,
            customer_id: self.customer_id,
            location_id: location_id.unwrap_or(0),
            shift_id,
            lines: self
                .lines
                .iter()
                .map(|l| OrderLine {
                    product_id: Some(l.product_id),
                    description: l.name.clone(),
                    quantity: l.quantity,
                    unit_price: l.unit_price,
                })
                .collect(),
            discount: self.discount,
            payment_method: Some(self.payment_method),
            device_description: None,
            problem_description: None,
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}

/// Text the discount input should show once the cart has clamped the
/// discount, or `None` when what the user typed already matches.
pub fn discount_input_text(typed: &str, discount: f64) -> Option<String> {
    let typed_amount = parse_optional_amount(typed, "Discount").ok().flatten().unwrap_or(0.0);
    if round_money(typed_amount) == discount {
        None
    } else if discount == 0.0 {
        Some(String::new())
    } else {
        Some(format!("{:.2}", discount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, stock: i64) -> Product {
        Product {
            id,
            sku: format!("SKU-{}", id),
            name: format!("Item {}", id),
            description: None,
            category: None,
            price,
            cost: 0.0,
            stock_qty: stock,
            reorder_level: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::default();
        let p = product(1, 2.5, 10);
        cart.add(&p).unwrap();
        cart.add(&p).unwrap();
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.subtotal(), 5.0);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_respects_stock() {
        let mut cart = Cart::default();
        let p = product(1, 1.0, 1);
        cart.add(&p).unwrap();
        assert!(cart.add(&p).is_err());
        assert_eq!(cart.lines[0].quantity, 1);
        assert!(cart.add(&product(2, 1.0, 0)).is_err());
        assert_eq!(cart.lines.len(), 1);
    }

    #[test]
    fn test_set_quantity_caps_and_removes() {
        let mut cart = Cart::default();
        cart.add(&product(1, 3.0, 5)).unwrap();
        cart.set_quantity(1, 9);
        assert_eq!(cart.lines[0].quantity, 5);
        cart.set_quantity(1, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_discount_clamped_to_subtotal() {
        let mut cart = Cart::default();
        cart.add(&product(1, 10.0, 5)).unwrap();
        cart.add(&product(2, 5.0, 5)).unwrap();
        cart.set_discount(-3.0);
        assert_eq!(cart.discount, 0.0);
        cart.set_discount(4.999);
        assert_eq!(cart.discount, 5.0);
        assert_eq!(cart.total(), 10.0);
        cart.set_discount(100.0);
        assert_eq!(cart.discount, 15.0);
        assert_eq!(cart.total(), 0.0);
        // Removing a line lowers the ceiling
        cart.remove(1);
        assert_eq!(cart.discount, 5.0);
    }

    #[test]
    fn test_discount_input_follows_clamp() {
        let mut cart = Cart::default();
        cart.add(&product(1, 10.0, 5)).unwrap();
        cart.set_discount(100.0);
        assert_eq!(discount_input_text("100", cart.discount), Some("10.00".to_string()));
        cart.remove(1);
        assert_eq!(discount_input_text("10.00", cart.discount), Some(String::new()));
        assert_eq!(discount_input_text("", cart.discount), None);
        // Partial input that already matches is left alone
        assert_eq!(discount_input_text("4.", 4.0), None);
        assert_eq!(discount_input_text("4,999", 5.0), None);
    }

    #[test]
    fn test_to_order_dto() {
        let mut cart = Cart::default();
        cart.add(&product(7, 19.99, 3)).unwrap();
        cart.set_quantity(7, 2);
        cart.set_discount(0.98);
        cart.payment_method = PaymentMethod::Card;
        cart.customer_id = Some(4);

        let dto = cart.to_order_dto(Some(2), Some(11)).unwrap();
        assert_eq!(dto.kind, OrderKind::Sale);
        assert_eq!(dto.location_id, 2);
        assert_eq!(dto.shift_id, Some(11));
        assert_eq!(dto.payment_method, Some(PaymentMethod::Card));
        assert_eq!(dto.lines[0].product_id, Some(7));
        assert_eq!(dto.lines[0].quantity, 2);
        assert_eq!(dto.total(), 39.0);
    }

    #[test]
    fn test_to_order_dto_rejects_empty_cart_and_missing_shift() {
        let cart = Cart::default();
        assert_eq!(cart.to_order_dto(Some(1), None).unwrap_err(), "The cart is empty");

        let mut cart = Cart::default();
        cart.add(&product(1, 1.0, 1)).unwrap();
        assert_eq!(cart.to_order_dto(None, None).unwrap_err(), "An active shift is required");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut cart = Cart::default();
        cart.add(&product(1, 1.0, 1)).unwrap();
        cart.customer_id = Some(3);
        cart.payment_method = PaymentMethod::Transfer;
        cart.clear();
        assert_eq!(cart, Cart::default());
    }
}
