//! Terminal output formatting
//!
//! Colored printing for the line-mode game and the CLI commands.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{
    print_activation, print_character, print_inventory, print_purchase, print_quest_log,
    print_round, print_round_report, print_shop, print_simulation_result, print_stats,
};
