use serde::Serialize;

use amazonia_core::{Entity, ProductId};

use crate::value::{Price, Quantity};

/// Category assigned to records that were stored without one.
pub const UNCATEGORIZED: &str = "Sin categoría";

/// One inventory line item.
///
/// A passive value holder: every field can be read and replaced, and there
/// are no cross-field rules at this level. Quantity and price are value
/// objects, so whatever is stored here is already valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    quantity: Quantity,
    price: Price,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        quantity: Quantity,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            price,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn set_id(&mut self, id: impl Into<ProductId>) {
        self.id = id.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    /// Stock value of this line: quantity × unit price.
    pub fn value(&self) -> f64 {
        self.quantity.get() as f64 * self.price.get()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ID: {} | Nombre: {} | Categoría: {} | Cantidad: {} | Precio: {}",
            self.id, self.name, self.category, self.quantity, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cacao() -> Product {
        Product::new(
            "CAC-01",
            "Cacao",
            Quantity::new(10).unwrap(),
            Price::new(4.5).unwrap(),
            "Semillas",
        )
    }

    #[test]
    fn new_product_exposes_all_fields() {
        let product = cacao();
        assert_eq!(product.id().as_str(), "CAC-01");
        assert_eq!(product.name(), "Cacao");
        assert_eq!(product.category(), "Semillas");
        assert_eq!(product.quantity().get(), 10);
        assert_eq!(product.price().get(), 4.5);
    }

    #[test]
    fn setters_replace_fields_independently() {
        let mut product = cacao();
        product.set_name("Cacao fino");
        product.set_category("Frutos");
        product.set_quantity(Quantity::new(3).unwrap());
        product.set_price(Price::new(9.0).unwrap());
        product.set_id("CAC-02");

        assert_eq!(product.id().as_str(), "CAC-02");
        assert_eq!(product.name(), "Cacao fino");
        assert_eq!(product.category(), "Frutos");
        assert_eq!(product.quantity().get(), 3);
        assert_eq!(product.price().get(), 9.0);
    }

    #[test]
    fn display_is_the_operator_line() {
        assert_eq!(
            cacao().to_string(),
            "ID: CAC-01 | Nombre: Cacao | Categoría: Semillas | Cantidad: 10 | Precio: 4.50"
        );
    }

    #[test]
    fn value_is_quantity_times_price() {
        assert_eq!(cacao().value(), 45.0);

        let empty = Product::new("X", "Aguaje", Quantity::ZERO, Price::new(7.0).unwrap(), UNCATEGORIZED);
        assert_eq!(empty.value(), 0.0);
    }

    #[test]
    fn entity_identity_is_the_product_id() {
        fn identity<E: Entity>(entity: &E) -> &E::Id {
            entity.id()
        }

        let mut product = cacao();
        product.set_quantity(Quantity::ZERO);
        assert_eq!(identity(&product), &ProductId::from("CAC-01"));
    }

    #[test]
    fn serializes_flat_fields() {
        let json = serde_json::to_value(cacao()).unwrap();
        assert_eq!(json["id"], "CAC-01");
        assert_eq!(json["quantity"], 10);
        assert_eq!(json["price"], 4.5);
        assert_eq!(json["category"], "Semillas");
    }
}
