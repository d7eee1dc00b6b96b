/// Sequential order identifier, starting at 1.
/// Example: `42`
pub type OrderId = u64;
/// Seed driving every random draw of a run.
/// Example: `0xB4C3_5EED`
pub type Seed = u64;
/// Stable name of a corruption policy entry, used as a report key.
/// Examples: `price_sentinel`, `quantity_outlier`, `date_format`
pub type PolicyLabel = &'static str;
/// Rendered CSV cell text.
/// Examples: `249.1`, `N/A`, `  Ergonomic Steel Chair  `, `03/14/2025`
pub type Cell = String;
