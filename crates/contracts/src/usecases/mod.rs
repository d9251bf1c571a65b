pub mod common;
pub mod u501_bulk_import;
pub mod u502_scrape_url;
pub mod u503_suggest_fields;
