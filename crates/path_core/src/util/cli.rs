use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to a nodes .csv file with the columns id,x,y. Without it the
    /// built-in sample graph is used
    #[arg(long, value_name = "csv", requires = "edges")]
    nodes: Option<PathBuf>,

    /// Path to an edges .csv file with the columns source,target[,weight]
    #[arg(long, value_name = "csv", requires = "nodes")]
    edges: Option<PathBuf>,

    /// Id of the start node
    #[arg(short, long, default_value = "A")]
    source: String,

    /// Id of the destination node
    #[arg(short, long, default_value = "E")]
    target: String,

    /// Use A* with the straight line heuristic instead of Dijkstra
    #[arg(long, default_value = "false")]
    astar: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    /// Nodes and edges .csv files
    pub input: Option<(PathBuf, PathBuf)>,
    pub source: String,
    pub target: String,
    pub algorithm: Algorithm,
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cfg::from)
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        let input = match (cli.nodes, cli.edges) {
            (Some(nodes), Some(edges)) => Some((nodes, edges)),
            _ => None,
        };

        let algorithm = if cli.astar {
            Algorithm::AStar
        } else {
            Algorithm::Dijkstra
        };

        Cfg {
            input,
            source: cli.source,
            target: cli.target,
            algorithm,
        }
    }
}
