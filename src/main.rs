use anyhow::Error;
use tokio::runtime::Builder;

use canvas::Options;
use structopt::StructOpt;

fn main() -> Result<(), Error> {
    let options = Options::from_args();

    canvas::Logger::init("CANVAS_LOG", options.log_file.as_deref())?;

    let runtime = Builder::new_current_thread().build()?;

    runtime.block_on(canvas::run(options))
}
