//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod menu;

use clap::{Args, Subcommand};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add an item, or more of an item already in the cart.
    Add {
        /// Item name.
        name: String,

        /// Unit price such as "₹250". Defaults to the menu price.
        #[arg(short, long)]
        price: Option<String>,

        /// Image URI shown in the cart.
        #[arg(short, long)]
        image: Option<String>,

        /// Number of units to add.
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove an item.
    Remove {
        /// Item name.
        name: String,
    },
    /// Set an item's quantity; zero or less removes it.
    Set {
        /// Item name.
        name: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Add one unit of an item.
    Inc {
        /// Item name.
        name: String,
    },
    /// Take one unit of an item away.
    Dec {
        /// Item name.
        name: String,
    },
    /// Show the cart.
    Show {
        /// Print the rendered sidebar and badge markup.
        #[arg(long)]
        html: bool,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Start checkout.
    Checkout,
}

/// Arguments for the menu command.
#[derive(Args)]
pub struct MenuArgs {
    /// Only show this category ("all" shows everything).
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Print the rendered menu markup.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
