use crate::domain::a002_cart::{CartItem, CartLedger};
use crate::domain::common::{AggregateId, Price};
use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Checkout form
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Loose shape check: something before `@`, and a dot somewhere after it.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    phone.chars().all(allowed) && (7..=15).contains(&digits)
}

impl CheckoutForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(FieldError::new("full_name", "Please enter your name"));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Please enter a valid email address"));
        }
        if !is_valid_phone(self.phone.trim()) {
            errors.push(FieldError::new("phone", "Please enter a valid phone number"));
        }
        if self.address.trim().is_empty() {
            errors.push(FieldError::new("address", "Please enter a delivery address"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Order
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub customer: CheckoutForm,
    pub lines: Vec<CartItem>,
    pub total_quantity: u32,
    pub total: Price,
}

impl Order {
    /// Snapshot the cart into an order. The cart itself is left untouched.
    pub fn place(
        cart: &CartLedger,
        form: CheckoutForm,
        placed_at: DateTime<Utc>,
        id: OrderId,
    ) -> anyhow::Result<Self> {
        if cart.is_empty() {
            bail!("cannot place an order with an empty cart");
        }
        if let Err(errors) = form.validate() {
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            return Err(anyhow::anyhow!("invalid fields: {}", fields.join(", "))
                .context("checkout form is incomplete"));
        }

        Ok(Self {
            id,
            placed_at,
            customer: form,
            lines: cart.items().cloned().collect(),
            total_quantity: cart.total_quantity(),
            total: cart.subtotal(),
        })
    }

    /// Short reference shown to the customer, e.g. `BH-1A2B3C4D`
    pub fn reference(&self) -> String {
        let simple = self.id.0.simple().to_string();
        format!("BH-{}", simple[..8].to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::find;
    use crate::domain::a001_product::{Category, ProductId, ProductKey};
    use chrono::TimeZone;

    fn form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "+44 (20) 7946-0958".into(),
            address: "12 Analytical Row, London".into(),
            note: String::new(),
        }
    }

    fn cart() -> CartLedger {
        let mut cart = CartLedger::new();
        let latte = find(ProductKey::new(Category::Coffee, ProductId(3))).unwrap();
        let cake = find(ProductKey::new(Category::Cake, ProductId(2))).unwrap();
        cart.set_quantity(latte, 2);
        cart.add(cake);
        cart
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_invalid_form_reports_every_field() {
        let errors = CheckoutForm {
            phone: "12ab".into(),
            email: "no-at-sign".into(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["full_name", "email", "phone", "address"]);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("  a@b.co "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn test_phone_digit_count() {
        assert!(is_valid_phone("5550123"));
        assert!(!is_valid_phone("555012"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn test_place_order_snapshots_cart() {
        let cart = cart();
        let placed_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        let id = OrderId::from_string("1a2b3c4d-0000-4000-8000-000000000000").unwrap();

        let order = Order::place(&cart, form(), placed_at, id).unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total_quantity, 3);
        assert_eq!(order.total, Price(400 * 2 + 500));
        assert_eq!(order.placed_at, placed_at);
        assert_eq!(order.reference(), "BH-1A2B3C4D");
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_place_rejects_empty_cart() {
        let err = Order::place(&CartLedger::new(), form(), Utc::now(), OrderId::new_v4())
            .unwrap_err();
        assert!(err.to_string().contains("empty cart"));
    }

    #[test]
    fn test_place_rejects_invalid_form() {
        let bad = CheckoutForm {
            address: "   ".into(),
            ..form()
        };
        let err = Order::place(&cart(), bad, Utc::now(), OrderId::new_v4()).unwrap_err();
        assert!(format!("{:#}", err).contains("address"));
    }
}
