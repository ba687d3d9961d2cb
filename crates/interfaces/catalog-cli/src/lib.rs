pub mod commands;
pub mod table;

use catalog_app_core::SortOrder;
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum CliSort {
    #[default]
    Arrival,
    Name,
    NameDesc,
    Price,
    PriceDesc,
}

impl From<CliSort> for SortOrder {
    fn from(s: CliSort) -> Self {
        match s {
            CliSort::Arrival => SortOrder::Arrival,
            CliSort::Name => SortOrder::NameAsc,
            CliSort::NameDesc => SortOrder::NameDesc,
            CliSort::Price => SortOrder::PriceAsc,
            CliSort::PriceDesc => SortOrder::PriceDesc,
        }
    }
}
