// Build an index from the integer keys given on the command line,
// validate it and print its Graphviz rendering on stdout:
//
//   rbtree-index 50 30 70 20 40 | dot -Tpng -o graph.png

use std::{env, error, io};

use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use rbtree_index::Rbtree;

fn main() -> Result<(), Box<dyn error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut index: Rbtree<i64, i64> = Rbtree::new("cmdline");
    for arg in env::args().skip(1) {
        let key: i64 = arg.parse()?;
        if !index.insert(key, key).1 {
            info!("skipping duplicate key {}", key);
        }
    }

    let stats = index.validate()?;
    info!(
        "{}: {} entries, {} blacks per path",
        index.id(),
        stats.entries(),
        stats.blacks().unwrap_or(0)
    );
    if let Some(depths) = stats.depths() {
        depths.log_summary("  ");
    }

    index.write_dot(&mut io::stdout())?;
    Ok(())
}
