use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
	name = "bc-depot",
	about = "Submit and query depository records on a Bestchains gateway.",
	version
)]
pub struct Cli {
	/// Gateway host URL (overrides config).
	#[arg(long, short = 'o', global = true)]
	pub host: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
	/// Create and query depository records.
	Depository {
		#[command(subcommand)]
		command: DepositoryCommand,
	},

	/// Manage persistent CLI configuration.
	Config {
		#[command(subcommand)]
		command: ConfigCommand,
	},
}

// -- Depository subcommands --

#[derive(Subcommand)]
pub enum DepositoryCommand {
	/// Put a depository value, signed by a wallet account unless untrusted.
	Create(CreateArgs),

	/// Fetch a single depository by key.
	Get {
		/// Depository key.
		key: String,
	},

	/// List depositories.
	List,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
	/// Wallet directory (default ~/.bestchains/wallet).
	#[arg(long, short = 'w')]
	pub wallet: Option<String>,

	/// Account to sign with.
	#[arg(long, short = 'a')]
	pub account: Option<String>,

	/// Depot name.
	#[arg(long, short = 'n', default_value = "")]
	pub name: String,

	/// Depot file type.
	#[arg(long = "contentType", short = 't', default_value = "")]
	pub content_type: String,

	/// Depot file ID.
	#[arg(long = "contentID", short = 'i', default_value = "")]
	pub content_id: String,

	/// Depot source platform.
	#[arg(long, short = 'p', default_value = "")]
	pub platform: String,

	/// Put an untrusted value. Pass --untrusted=false to sign with the account.
	#[arg(
		long,
		action = ArgAction::Set,
		default_value_t = true,
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true"
	)]
	pub untrusted: bool,
}

// -- Config subcommands --

#[derive(Subcommand)]
pub enum ConfigCommand {
	/// Persist default values. The global --host is stored as the default host.
	Set {
		/// Wallet directory.
		#[arg(long)]
		wallet: Option<String>,

		/// Default account.
		#[arg(long)]
		account: Option<String>,
	},

	/// Show the effective configuration.
	Show,
}
