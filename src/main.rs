use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts = fio_bridge::Opts::parse();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(fio_bridge::run(opts))
}
