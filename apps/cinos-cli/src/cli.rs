use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Order calculator and receipt printer for the Cinos stand.
#[derive(Parser, Debug)]
#[command(name = "cinos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the stand config file (stand.toml).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the food, topping and flavor price lists.
    Menu,

    /// Price an order file and print its receipt.
    Receipt {
        /// TOML file with one [[items]] entry per menu item.
        order: PathBuf,

        /// Print the order summary as JSON instead of a receipt.
        #[arg(long)]
        json: bool,
    },

    /// Print the receipt of the sample order.
    Demo {
        /// Print the order summary as JSON instead of a receipt.
        #[arg(long)]
        json: bool,
    },
}
