use clap::{Parser, Subcommand};

/// Command-line interface definition for rFinDash
/// Personal finance and scheduling dashboard on SQLite
#[derive(Parser)]
#[command(
    name = "rfindash",
    version = env!("CARGO_PKG_VERSION"),
    about = "A finance dashboard CLI: clients, budgets, transactions, investments and a reservation calendar on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

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
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the month grid with reservation markers
    Calendar {
        #[arg(long = "month", help = "Month to show (YYYY-MM, default: current month)")]
        month: Option<String>,

        #[arg(long = "day", help = "Select a day of the month and list its reservations")]
        day: Option<u32>,

        #[arg(long = "json", help = "Print the grid and reservations as JSON")]
        json: bool,
    },

    /// Schedule and manage reservations
    #[command(alias = "res")]
    Reservation {
        #[command(subcommand)]
        action: ReservationCmd,
    },

    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientCmd,
    },

    /// Manage budgets (quotes sent to clients)
    Budget {
        #[command(subcommand)]
        action: BudgetCmd,
    },

    /// Manage income and expense transactions
    #[command(name = "tx")]
    Transaction {
        #[command(subcommand)]
        action: TransactionCmd,
    },

    /// Manage credit cards
    Card {
        #[command(subcommand)]
        action: CardCmd,
    },

    /// Manage installment purchases
    Installment {
        #[command(subcommand)]
        action: InstallmentCmd,
    },

    /// Manage investments
    Investment {
        #[command(subcommand)]
        action: InvestmentCmd,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectCmd,
    },

    /// Show totals, upcoming reservations and recent transactions
    Dashboard,
}

#[derive(Subcommand)]
pub enum ReservationCmd {
    /// Schedule a new reservation
    Add {
        title: String,

        #[arg(long = "date", help = "Date (YYYY-MM-DD)")]
        date: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "status", help = "scheduled, confirmed, completed or cancelled")]
        status: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,

        #[arg(long = "client", help = "Client id")]
        client: Option<i64>,
    },

    /// List reservations ordered by date and start time
    List {
        #[arg(long = "date", help = "Only this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "from", help = "From date, inclusive (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", help = "To date, inclusive (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "client", help = "Client id")]
        client: Option<i64>,

        #[arg(long = "status")]
        status: Option<String>,

        #[arg(long = "limit")]
        limit: Option<u32>,
    },

    /// Change fields of a reservation; an empty value clears an optional field
    Edit {
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "end")]
        end: Option<String>,

        #[arg(long = "status")]
        status: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,

        #[arg(long = "client", help = "Client id, 0 to unlink")]
        client: Option<i64>,
    },

    /// Set the status of a reservation
    Status { id: i64, status: String },

    /// Delete a reservation
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Reservations of today
    Today,

    /// Non-cancelled reservations of the coming days
    Upcoming {
        #[arg(long = "days", help = "Days ahead (default from config)")]
        days: Option<u32>,
    },

    /// Number of reservations per status
    Count,
}

#[derive(Subcommand)]
pub enum ClientCmd {
    Add {
        name: String,

        #[arg(long = "email")]
        email: String,

        #[arg(long = "phone")]
        phone: Option<String>,

        #[arg(long = "document", help = "Tax id or registration number")]
        document: Option<String>,

        #[arg(long = "address")]
        address: Option<String>,
    },

    List,

    Edit {
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        #[arg(long = "phone")]
        phone: Option<String>,

        #[arg(long = "document")]
        document: Option<String>,

        #[arg(long = "address")]
        address: Option<String>,
    },

    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum BudgetCmd {
    Add {
        title: String,

        #[arg(long = "amount")]
        amount: f64,

        #[arg(long = "client", help = "Client id")]
        client: Option<i64>,

        #[arg(long = "status", help = "pending, approved, rejected or completed")]
        status: Option<String>,

        #[arg(long = "valid-until", help = "Expiry date (YYYY-MM-DD)")]
        valid_until: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,
    },

    List,

    Edit {
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "amount")]
        amount: Option<f64>,

        #[arg(long = "client", help = "Client id, 0 to unlink")]
        client: Option<i64>,

        #[arg(long = "status")]
        status: Option<String>,

        #[arg(long = "valid-until")]
        valid_until: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,
    },

    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TransactionCmd {
    Add {
        #[arg(long = "type", help = "income or expense")]
        kind: String,

        #[arg(long = "category")]
        category: String,

        #[arg(long = "description")]
        description: String,

        #[arg(long = "amount")]
        amount: f64,

        #[arg(long = "date", help = "Date (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long = "payment-method")]
        payment_method: Option<String>,

        #[arg(long = "card", help = "Card id")]
        card: Option<i64>,

        #[arg(long = "status", help = "pending, completed or cancelled")]
        status: Option<String>,
    },

    List,

    Edit {
        id: i64,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long = "category")]
        category: Option<String>,

        #[arg(long = "description")]
        description: Option<String>,

        #[arg(long = "amount")]
        amount: Option<f64>,

        #[arg(long = "date")]
        date: Option<String>,

        #[arg(long = "payment-method")]
        payment_method: Option<String>,

        #[arg(long = "card", help = "Card id, 0 to unlink")]
        card: Option<i64>,

        #[arg(long = "status")]
        status: Option<String>,
    },

    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum CardCmd {
    Add {
        name: String,

        #[arg(long = "digits", help = "Last four digits")]
        last_digits: String,

        #[arg(long = "brand", help = "visa, mastercard, elo, amex or other")]
        brand: Option<String>,

        #[arg(long = "limit")]
        limit: f64,

        #[arg(long = "closing", help = "Statement closing day (1-31)")]
        closing_day: u32,

        #[arg(long = "due", help = "Payment due day (1-31)")]
        due_day: u32,
    },

    List,

    Edit {
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "digits")]
        last_digits: Option<String>,

        #[arg(long = "brand")]
        brand: Option<String>,

        #[arg(long = "limit")]
        limit: Option<f64>,

        #[arg(long = "closing")]
        closing_day: Option<u32>,

        #[arg(long = "due")]
        due_day: Option<u32>,
    },

    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum InstallmentCmd {
    Add {
        description: String,

        #[arg(long = "total")]
        total: f64,

        #[arg(long = "count", help = "Number of installments")]
        count: u32,

        #[arg(long = "start", help = "First installment date (YYYY-MM-DD, default: today)")]
        start: Option<String>,
    },

    List,

    Edit {
        id: i64,

        #[arg(long = "description")]
        description: Option<String>,

        #[arg(long = "total")]
        total: Option<f64>,

        #[arg(long = "count")]
        count: Option<u32>,

        #[arg(long = "start")]
        start: Option<String>,
    },

    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum InvestmentCmd {
    Add {
        name: String,

        #[arg(long = "type", help = "fixed_income, stocks, funds, crypto or other")]
        kind: Option<String>,

        #[arg(long = "initial")]
        initial: f64,

        #[arg(long = "current", help = "Current value (default: the initial amount)")]
        current: Option<f64>,

        #[arg(long = "expected-return", help = "Expected yearly return in percent")]
        expected_return: Option<f64>,

        #[arg(long = "start", help = "Start date (YYYY-MM-DD, default: today)")]
        start: Option<String>,
    },

    List,

    Edit {
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long = "initial")]
        initial: Option<f64>,

        #[arg(long = "current")]
        current: Option<f64>,

        #[arg(long = "expected-return")]
        expected_return: Option<f64>,

        #[arg(long = "start")]
        start: Option<String>,
    },

    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectCmd {
    Add {
        name: String,

        #[arg(long = "client", help = "Client id")]
        client: Option<i64>,

        #[arg(long = "description")]
        description: Option<String>,

        #[arg(
            long = "status",
            help = "planning, in_progress, completed, on_hold or cancelled"
        )]
        status: Option<String>,

        #[arg(long = "budget")]
        budget: Option<f64>,

        #[arg(long = "start", help = "Start date (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "End date (YYYY-MM-DD)")]
        end: Option<String>,
    },

    List,

    Edit {
        id: i64,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "client", help = "Client id, 0 to unlink")]
        client: Option<i64>,

        #[arg(long = "description")]
        description: Option<String>,

        #[arg(long = "status")]
        status: Option<String>,

        #[arg(long = "budget")]
        budget: Option<f64>,

        #[arg(long = "no-budget", conflicts_with = "budget", help = "Remove the budget")]
        no_budget: bool,

        #[arg(long = "start")]
        start: Option<String>,

        #[arg(long = "end")]
        end: Option<String>,
    },

    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
