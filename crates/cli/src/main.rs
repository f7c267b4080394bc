use clap::Parser;

use techhub_cli::cli::Cli;
use techhub_store::Storefront;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    techhub_observability::init(cli.log_format);

    let seed = cli.seed.unwrap_or_else(|| {
        let seed: u64 = rand::random();
        tracing::info!(seed, "TECHHUB_SEED not set; drew a random catalog seed");
        seed
    });

    let mut store = Storefront::with_sample_catalog(seed);
    tracing::info!(products = store.products().len(), seed, "storefront ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    techhub_cli::run(cli, &mut store, &mut out)
}
