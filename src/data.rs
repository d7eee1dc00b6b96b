use chrono::NaiveDate;
use indexmap::IndexMap;
use std::fmt;

use crate::constants::schema::ISO_DATE_FORMAT;
use crate::types::{Cell, OrderId};

/// Named column of the sales schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// 1-based sequence number of the logical record.
    OrderId,
    /// Commerce product name.
    Product,
    /// One of the fixed product categories.
    Category,
    /// Unit price in dollars.
    Price,
    /// Units ordered.
    Quantity,
    /// Day the order was placed.
    OrderDate,
    /// `CUS` followed by four digits.
    CustomerId,
    /// Country name, with casing and alias variants.
    Country,
    /// Sales region.
    Region,
    /// Person credited with the sale.
    Salesperson,
}

impl Field {
    /// Every field in header order.
    pub const ALL: [Field; 10] = [
        Field::OrderId,
        Field::Product,
        Field::Category,
        Field::Price,
        Field::Quantity,
        Field::OrderDate,
        Field::CustomerId,
        Field::Country,
        Field::Region,
        Field::Salesperson,
    ];

    /// Header name as written to the CSV sink.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::OrderId => "OrderID",
            Field::Product => "Product",
            Field::Category => "Category",
            Field::Price => "Price",
            Field::Quantity => "Quantity",
            Field::OrderDate => "OrderDate",
            Field::CustomerId => "CustomerID",
            Field::Country => "Country",
            Field::Region => "Region",
            Field::Salesperson => "Salesperson",
        }
    }

    /// Header row in schema order.
    pub fn header() -> [&'static str; 10] {
        Field::ALL.map(|field| field.as_str())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell value, clean or corrupted.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Whole number such as an order id or quantity.
    Integer(u64),
    /// Number with a fractional part; integral values keep a trailing `.0`.
    Decimal(f64),
    /// A date not yet serialized; rendered as ISO.
    Date(NaiveDate),
    /// Free text, including sentinels and reformatted dates.
    Text(String),
    /// Missing value, written as an empty cell.
    Empty,
}

impl FieldValue {
    /// Render the value as CSV cell text.
    pub fn render(&self) -> Cell {
        match self {
            FieldValue::Integer(value) => value.to_string(),
            FieldValue::Decimal(value) => format!("{value:?}"),
            FieldValue::Date(date) => date.format(ISO_DATE_FORMAT).to_string(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Empty => String::new(),
        }
    }

    /// True for `Empty` and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// One sales row: an ordered mapping of fields to values.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesRecord {
    fields: IndexMap<Field, FieldValue>,
}

impl SalesRecord {
    /// Build a record from values given in schema order.
    pub fn from_values(values: [FieldValue; 10]) -> Self {
        let fields = Field::ALL.into_iter().zip(values).collect();
        Self { fields }
    }

    /// Value currently held by `field`.
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Mutable access used by corruption functions to replace a value in place.
    pub fn get_mut(&mut self, field: Field) -> Option<&mut FieldValue> {
        self.fields.get_mut(&field)
    }

    /// Overwrite `field`, keeping its schema position.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        if let Some(slot) = self.fields.get_mut(&field) {
            *slot = value;
        }
    }

    /// The `OrderID` when it is still an integer (a blank-out may have erased it).
    pub fn order_id(&self) -> Option<OrderId> {
        match self.get(Field::OrderId) {
            Some(FieldValue::Integer(id)) => Some(*id),
            _ => None,
        }
    }

    /// Field and value pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    /// Render every cell in schema order.
    pub fn cells(&self) -> Vec<Cell> {
        self.fields.values().map(FieldValue::render).collect()
    }
}
