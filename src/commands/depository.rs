use std::io::Write;

use anyhow::Result;

use crate::cli::{Cli, CreateArgs, DepositoryCommand};
use crate::commands::{resolve_host, resolve_trust};
use crate::config::Config;
use crate::http::HttpTransport;
use crate::query;
use crate::submission::{DepositoryParams, SubmissionBuilder, Trust};

pub async fn run(cli: &Cli, cmd: &DepositoryCommand) -> Result<()> {
	let config = Config::load()?;
	let host = resolve_host(cli, &config)?;
	let transport = HttpTransport::new();

	let body = match cmd {
		DepositoryCommand::Create(args) => create(&transport, &config, &host, args).await?,
		DepositoryCommand::Get { key } => query::get(&transport, &host, key).await?,
		DepositoryCommand::List => query::list(&transport, &host).await?,
	};

	// The gateway's answer goes to stdout untouched.
	let mut out = std::io::stdout().lock();
	out.write_all(&body)?;
	out.flush()?;
	Ok(())
}

async fn create(
	transport: &HttpTransport,
	config: &Config,
	host: &str,
	args: &CreateArgs,
) -> Result<Vec<u8>> {
	let builder = SubmissionBuilder::new(transport, host)?;
	let trust = resolve_trust(args, config)?;
	let params = DepositoryParams {
		name: args.name.clone(),
		content_type: args.content_type.clone(),
		content_id: args.content_id.clone(),
		platform: args.platform.clone(),
	};

	match &trust {
		Trust::Untrusted => eprintln!("putting untrusted value..."),
		Trust::Trusted { account, .. } => eprintln!("putting value signed by {account}..."),
	}

	Ok(builder.submit(&params, &trust).await?)
}
