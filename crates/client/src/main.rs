use clap::Parser;
use signing_authority_client::run;

#[derive(Parser)]
struct Args {
    #[clap(long, default_value = "127.0.0.1")]
    host: Option<String>,
    #[clap(long, default_value = "3000")]
    port: Option<u16>,
    /// 0x-prefixed 64-hex-digit transaction id to sign.
    #[clap(long)]
    tx_id: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    match run(args.host.unwrap(), args.port.unwrap(), args.tx_id).await {
        Ok(signature) => println!("{signature}"),
        Err(error) => {
            eprintln!("{error:#}");
            std::process::exit(1);
        }
    }
}
