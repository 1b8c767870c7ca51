//! Fix up compiler-generated dependency files.

use clap::Parser;
use depfix::{fixup, Error, Opt};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn run(opt: &Opt) -> Result<(), Error> {
    let output = opt.output_path();
    fixup(&opt.file, &output)?;

    // an in-place run must not delete the file it just wrote
    if opt.clean && opt.file != output {
        log::info!("Remove {}", opt.file.display());
        std::fs::remove_file(&opt.file)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();
    if let Err(e) = run(&opt) {
        eprintln!("{}: {}", env!("CARGO_PKG_NAME"), e);
        std::process::exit(1);
    }
}
