use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds an Eulerian path in a directed multigraph read from an edge-list file.", long_about = None)]
pub struct Cli {
    /// Edge-list file: node count on the first line, then one `from to` pair per line
    pub graph_file: PathBuf,

    /// Suppress verbose output, only printing the path or 'No Eulerian path.'
    #[clap(short, long)]
    pub quiet: bool,

    /// Check that the path found uses every edge exactly once
    #[clap(long)]
    pub verify: bool,

    /// File that receives the verbose log
    #[clap(long, default_value = "eulerian.log")]
    pub log_file: PathBuf,
}
