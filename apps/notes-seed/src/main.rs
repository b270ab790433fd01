use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = notes_seed::Args::parse();
	notes_seed::run(args).await
}
