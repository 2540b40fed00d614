pub mod chart;
pub mod clock;
pub mod cost_card;
pub mod load_card;
pub mod status;

pub use chart::CostChart;
pub use clock::Clock;
pub use status::StatusPanel;
