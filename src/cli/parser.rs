use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rcashlog
#[derive(Parser)]
#[command(
    name = "rcashlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log expenses, close the cash drawer and track staff punctuality (SQLite-backed)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record an expense (stamped with the current date and time)
    Add {
        /// Expense category (e.g. food, fuel)
        #[arg(long = "type", short = 't', value_name = "CATEGORY")]
        category: String,

        /// Amount; negative values record an inflow
        #[arg(long, short = 'a', allow_hyphen_values = true)]
        amount: String,

        /// Free-text description
        #[arg(long = "desc", short = 'd', default_value = "")]
        description: String,
    },

    /// List recorded expenses
    List,

    /// Show expenses per category and the last cash closing as text charts
    Chart,

    /// Register the cash closing and export the closing report
    Close {
        #[arg(long, allow_hyphen_values = true, help = "Cash handed out for deliveries")]
        distributed: String,

        #[arg(long, allow_hyphen_values = true, help = "Cash in the drawer")]
        drawer: String,

        #[arg(long, allow_hyphen_values = true, help = "Cash left over")]
        remaining: String,

        #[arg(long, allow_hyphen_values = true, help = "Total of bank transfers")]
        transfers: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file (default: <export_dir>/gastos_<today>.<ext>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the closing report again using the stored cash closing
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Output file (default: <export_dir>/gastos_<today>.<ext>)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Staff attendance
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
}

#[derive(Subcommand)]
pub enum StaffAction {
    /// Record a check-in/check-out; late arrivals are noted automatically
    Add {
        #[arg(long)]
        name: String,

        /// Check-in time (HH:MM)
        #[arg(long = "in")]
        check_in: String,

        /// Check-out time (HH:MM)
        #[arg(long = "out")]
        check_out: String,

        #[arg(long, default_value = "")]
        note: String,
    },

    /// List attendance entries
    List,
}
