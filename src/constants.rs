/// Constants describing the fixed record schema and its clean-stage vocabularies.
pub mod schema {
    /// Categories drawn uniformly for every clean record.
    pub const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Books", "Home Goods", "Sports"];
    /// Regions drawn uniformly for every clean record.
    pub const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];
    /// Country spellings drawn uniformly for every clean record.
    ///
    /// Casing and naming inconsistencies are part of the clean stage, not corruption.
    pub const COUNTRIES: [&str; 7] = [
        "USA",
        "usa",
        "United States",
        "UK",
        "United Kingdom",
        "Canada",
        "canada",
    ];
    /// Prefix prepended to the numeric customer identifier (for example `CUS4821`).
    pub const CUSTOMER_ID_PREFIX: &str = "CUS";
    /// Inclusive bounds for the numeric part of customer identifiers.
    pub const CUSTOMER_ID_RANGE: (u32, u32) = (1000, 9999);
    /// Inclusive bounds for clean unit prices.
    pub const PRICE_RANGE: (f64, f64) = (10.0, 500.0);
    /// Inclusive bounds for clean quantities.
    pub const QUANTITY_RANGE: (u64, u64) = (1, 10);
    /// Size of the order-date window, counted back from the anchor date.
    pub const ORDER_DATE_WINDOW_DAYS: i64 = 730;
    /// Canonical serialization for dates that were never reformatted.
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Constants used by the field corruption policy table.
pub mod corruption {
    /// Chance that `Product` is wrapped in padding whitespace.
    pub const PRODUCT_WHITESPACE_RATE: f64 = 0.10;
    /// Chance that `Price` is replaced with a sentinel.
    pub const PRICE_SENTINEL_RATE: f64 = 0.10;
    /// Chance that `Quantity` is replaced with a sentinel.
    pub const QUANTITY_SENTINEL_RATE: f64 = 0.10;
    /// Chance that `Quantity` is replaced with an outlier (drawn after the sentinel check).
    pub const QUANTITY_OUTLIER_RATE: f64 = 0.05;
    /// Chance that `Country` is wrapped in padding whitespace.
    pub const COUNTRY_WHITESPACE_RATE: f64 = 0.10;

    /// Literal price sentinels; the fourth option is a dollar-prefixed fresh price.
    pub const PRICE_SENTINELS: [&str; 3] = ["", "N/A", "Error"];
    /// Number of price corruption options (the literal sentinels plus the dollar form).
    pub const PRICE_OPTION_COUNT: usize = PRICE_SENTINELS.len() + 1;
    /// Quantity sentinels chosen uniformly.
    pub const QUANTITY_SENTINELS: [&str; 4] = ["", "-", "one", "two"];
    /// Inclusive bounds for quantity outliers.
    pub const QUANTITY_OUTLIER_RANGE: (u64, u64) = (100, 200);
    /// Padding placed on both sides of whitespace-corrupted strings.
    pub const WHITESPACE_PADDING: &str = "  ";
    /// Date formats chosen uniformly for every emitted `OrderDate`.
    pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%y"];

    /// Report label for `Product` whitespace padding.
    pub const LABEL_PRODUCT_WHITESPACE: &str = "product_whitespace";
    /// Report label for `Price` sentinels.
    pub const LABEL_PRICE_SENTINEL: &str = "price_sentinel";
    /// Report label for `Quantity` sentinels.
    pub const LABEL_QUANTITY_SENTINEL: &str = "quantity_sentinel";
    /// Report label for `Quantity` outliers.
    pub const LABEL_QUANTITY_OUTLIER: &str = "quantity_outlier";
    /// Report label for `OrderDate` reformatting.
    pub const LABEL_DATE_FORMAT: &str = "date_format";
    /// Report label for `Country` whitespace padding.
    pub const LABEL_COUNTRY_WHITESPACE: &str = "country_whitespace";
}

/// Constants used by the row-level defect injector.
pub mod defects {
    /// Chance that one uniformly chosen field is blanked.
    pub const BLANK_FIELD_RATE: f64 = 0.05;
    /// Chance that a record is emitted twice in a row.
    pub const DUPLICATE_ROW_RATE: f64 = 0.05;
}

/// Defaults for synthesizer configuration and the CLI.
pub mod config {
    /// Number of logical records generated when not overridden.
    pub const DEFAULT_RECORDS: usize = 5000;
    /// Output path used when not overridden.
    pub const DEFAULT_OUTPUT_PATH: &str = "sales_data.csv";
    /// Records built per parallel batch in per-record RNG mode.
    pub const DEFAULT_BATCH_SIZE: usize = 1024;
}

/// Word lists used to compose commerce product names.
pub mod provider {
    /// Leading adjectives (for example `Ergonomic`).
    pub const PRODUCT_ADJECTIVES: [&str; 20] = [
        "Small",
        "Ergonomic",
        "Rustic",
        "Intelligent",
        "Gorgeous",
        "Incredible",
        "Fantastic",
        "Practical",
        "Sleek",
        "Awesome",
        "Generic",
        "Handcrafted",
        "Handmade",
        "Licensed",
        "Refined",
        "Unbranded",
        "Tasty",
        "Durable",
        "Lightweight",
        "Heavy Duty",
    ];
    /// Materials placed between adjective and product (for example `Steel`).
    pub const PRODUCT_MATERIALS: [&str; 16] = [
        "Steel",
        "Wooden",
        "Concrete",
        "Plastic",
        "Cotton",
        "Granite",
        "Rubber",
        "Metal",
        "Soft",
        "Fresh",
        "Frozen",
        "Marble",
        "Leather",
        "Silk",
        "Wool",
        "Linen",
    ];
    /// Trailing product nouns (for example `Chair`).
    pub const PRODUCT_NOUNS: [&str; 24] = [
        "Chair",
        "Car",
        "Computer",
        "Keyboard",
        "Mouse",
        "Bike",
        "Ball",
        "Gloves",
        "Pants",
        "Shirt",
        "Table",
        "Shoes",
        "Hat",
        "Towels",
        "Soap",
        "Tuna",
        "Chicken",
        "Fish",
        "Cheese",
        "Bacon",
        "Pizza",
        "Salad",
        "Sausages",
        "Chips",
    ];
}
