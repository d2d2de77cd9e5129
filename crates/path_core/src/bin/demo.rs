use path_core::prelude::*;
use path_core::util::cli::{self, Algorithm};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();

    let g: Graph = match &cfg.input {
        Some((nodes, edges)) => Graph::from_csv(nodes, edges)?,
        None => generate_sample_graph()?,
    };
    g.print_info();

    let (shortest_path, stats) = match cfg.algorithm {
        Algorithm::Dijkstra => {
            let mut dijkstra = Dijkstra::new(&g);
            let sp = dijkstra.search(cfg.source.as_str(), cfg.target.as_str())?;
            (sp, dijkstra.stats)
        }
        Algorithm::AStar => {
            let mut astar = AStar::new(&g);
            let sp = astar.search(cfg.source.as_str(), cfg.target.as_str(), straight_line)?;
            (sp, astar.stats)
        }
    };

    println!("start: {}", cfg.source);
    println!("end: {}", cfg.target);
    if shortest_path.is_found() {
        println!("Shortest Path: {:?}", shortest_path.nodes);
    } else {
        println!("Shortest Path: no path found");
    }
    println!("Distance: {}", shortest_path.weight);
    println!("{}", stats);

    Ok(())
}
