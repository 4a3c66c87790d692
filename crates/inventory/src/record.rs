//! Line codec for the backing file.
//!
//! Current lines carry five fields: `id,name,category,quantity,price`.
//! Legacy lines carry four (`id,name,quantity,price`) and get the
//! [`UNCATEGORIZED`] category. Fields are not escaped, so a comma inside a
//! name or category breaks the line on the next load.

use thiserror::Error;

use amazonia_products::{Price, Product, Quantity, UNCATEGORIZED};

pub const FIELD_SEPARATOR: char = ',';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected 4 or 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid quantity {0:?}")]
    Quantity(String),

    #[error("invalid price {0:?}")]
    Price(String),
}

/// Parse one line of the backing file. Surrounding whitespace is ignored.
pub fn parse_line(line: &str) -> Result<Product, RecordError> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    let (id, name, category, quantity, price) = match fields.as_slice() {
        [id, name, category, quantity, price] => (*id, *name, *category, *quantity, *price),
        [id, name, quantity, price] => (*id, *name, UNCATEGORIZED, *quantity, *price),
        other => return Err(RecordError::FieldCount(other.len())),
    };

    let quantity: Quantity = quantity
        .parse()
        .map_err(|_| RecordError::Quantity(quantity.to_string()))?;
    let price: Price = price
        .parse()
        .map_err(|_| RecordError::Price(price.to_string()))?;

    Ok(Product::new(id, name, quantity, price, category))
}

/// Render a product as a five-field line (no trailing newline).
pub fn format_line(product: &Product) -> String {
    format!(
        "{id},{name},{category},{quantity},{price}",
        id = product.id(),
        name = product.name(),
        category = product.category(),
        quantity = product.quantity(),
        price = product.price().to_plain_string(),
    )
}

/// True when a value would not survive a save/load cycle unchanged.
pub(crate) fn breaks_line(value: &str) -> bool {
    value.contains(FIELD_SEPARATOR) || value.contains('\n') || value.contains('\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_five_field_line() {
        let product = parse_line("AGU-01,Aguaje,Frutas,12,3.5").unwrap();
        assert_eq!(product.id().as_str(), "AGU-01");
        assert_eq!(product.name(), "Aguaje");
        assert_eq!(product.category(), "Frutas");
        assert_eq!(product.quantity().get(), 12);
        assert_eq!(product.price().get(), 3.5);
    }

    #[test]
    fn legacy_four_field_line_gets_sentinel_category() {
        let product = parse_line("CAM-02,Camu camu,4,10.0").unwrap();
        assert_eq!(product.category(), UNCATEGORIZED);
        assert_eq!(product.quantity().get(), 4);
        assert_eq!(product.price().get(), 10.0);
    }

    #[test]
    fn rejects_other_field_counts() {
        assert_eq!(parse_line("a,b,c"), Err(RecordError::FieldCount(3)));
        assert_eq!(parse_line("a,b,c,d,1,2"), Err(RecordError::FieldCount(6)));
        // A comma inside the name shifts every field.
        assert_eq!(
            parse_line("X,Cacao, en polvo,Semillas,1,2.0"),
            Err(RecordError::FieldCount(6))
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(
            parse_line("A,Cacao,Semillas,muchos,2.0"),
            Err(RecordError::Quantity("muchos".to_string()))
        );
        assert_eq!(
            parse_line("A,Cacao,Semillas,-1,2.0"),
            Err(RecordError::Quantity("-1".to_string()))
        );
        assert_eq!(
            parse_line("A,Cacao,Semillas,1,caro"),
            Err(RecordError::Price("caro".to_string()))
        );
    }

    #[test]
    fn numeric_fields_tolerate_padding() {
        let product = parse_line("  A,Cacao,Semillas, 3 , 2.25\r").unwrap();
        assert_eq!(product.id().as_str(), "A");
        assert_eq!(product.quantity().get(), 3);
        assert_eq!(product.price().get(), 2.25);
    }

    #[test]
    fn format_line_writes_five_fields_with_natural_price() {
        let product = parse_line("CAC-01,Cacao,Semillas,2,5").unwrap();
        assert_eq!(format_line(&product), "CAC-01,Cacao,Semillas,2,5.0");
    }

    #[test]
    fn legacy_line_is_rewritten_in_current_form() {
        let product = parse_line("CAM-02,Camu camu,4,10.25").unwrap();
        assert_eq!(format_line(&product), "CAM-02,Camu camu,Sin categoría,4,10.25");
    }

    #[test]
    fn separator_detection() {
        assert!(breaks_line("Cacao, crudo"));
        assert!(breaks_line("dos\nlineas"));
        assert!(!breaks_line("Cacao en polvo"));
    }
}
