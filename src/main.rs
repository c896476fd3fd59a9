use clap::{App, Arg};
use gandaci::batch;
use itertools::Itertools;
use log::info;
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("gandaci")
        .about("Pairs researchers with bugs: maximum bipartite matching for every test")
        .arg(Arg::with_name("INPUT").help("Tests to solve (default: java.in)"))
        .arg(Arg::with_name("OUTPUT").help("Where to write the solutions (default: java.out)"))
        .arg(
            Arg::with_name("jobs")
                .short("j")
                .long("jobs")
                .takes_value(true)
                .help("Number of threads solving tests"),
        )
        .arg(
            Arg::with_name("print-pairs")
                .short("p")
                .long("print-pairs")
                .help("Prints the researcher-bug pairs of every test, one test per line"),
        )
        .get_matches();
    let input = matches.value_of("INPUT").unwrap_or("java.in");
    let output = matches.value_of("OUTPUT").unwrap_or("java.out");
    if let Some(jobs) = matches.value_of("jobs") {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs.parse::<usize>()?)
            .build_global()?;
    }

    let start = Instant::now();
    let tests = batch::load_tests(input)?;
    let pairings = batch::solve_pairings(&tests);
    info!("solved {} tests in {} ms", tests.len(), start.elapsed().as_millis());
    if matches.is_present("print-pairs") {
        for pairing in &pairings {
            // 1-indexed, as in the input
            println!("{}", pairing.pairs().map(|(l, r)| format!("{}-{}", l + 1, r + 1)).join(" "));
        }
    }
    let solutions = pairings.iter().map(|p| p.size()).collect_vec();
    batch::write_solutions(output, &solutions)?;
    info!("wrote {} solutions to {}", solutions.len(), output);
    Ok(())
}
