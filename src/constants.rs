// Referenced government data source (external, not fetched by this crate)
pub const SEACE_PORTAL: &str = "https://prod2.seace.gob.pe";

// Fixed cyclic palette for sector aggregates, indexed by sort position
pub const SECTOR_PALETTE: &[&str] = &[
    "#8884d8", "#82ca9d", "#ffc658", "#ff7300", "#8dd1e1", "#ff6b6b",
];

// Paging defaults for list queries
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

// Export file naming
pub const EXPORT_FILE_PREFIX: &str = "procuraperu-export";
