use clap::{value_t, App, Arg};

use anyhow::Error;
use env_logger::Builder;
use log::{info, warn, LevelFilter};

use searcher::{SearchOptions, SearchReport};
use taskalloc::input::parse_list;
use taskalloc::render::describe;
use taskalloc::{ResourceAllocation, Strategy};

fn main() {
    match driver() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn driver() -> Result<(), Error> {
    let matches = App::new("Task Allocation")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Assign tasks to servers with uniform-cost and A* search")
        .arg(
            Arg::with_name("servers")
                .short("s")
                .long("servers")
                .value_name("CAPACITIES")
                .default_value("10,25,20,10,20,10")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("tasks")
                .short("t")
                .long("tasks")
                .value_name("REQUIREMENTS")
                .default_value("15,5,6,4,25,15,3,2,5")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .value_name("STRATEGY")
                .possible_values(Strategy::NAMES)
                .default_value("both")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("EXPANSIONS")
                .help("Give up after this many expansions")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("POPS")
                .help("Log progress every POPS frontier pops (needs -vv)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    Builder::new().filter_level(level).init();

    let servers = parse_list(matches.value_of("servers").unwrap_or_default())?;
    let tasks = parse_list(matches.value_of("tasks").unwrap_or_default())?;
    let strategy: Strategy = value_t!(matches, "strategy", Strategy)?;

    let options = {
        let mut o = SearchOptions::default();
        if matches.is_present("limit") {
            o.step_limit = Some(value_t!(matches, "limit", usize)?);
        }
        if matches.is_present("progress") {
            o.verbose = Some(value_t!(matches, "progress", usize)?);
        }
        o
    };

    let problem = ResourceAllocation::new(&servers, &tasks)?;
    if !problem.capacity_feasible() {
        warn!("Some tasks can never fit, the search will exhaust every state");
    }

    println!("=== Problem Summary ===");
    println!("Servers (capacities): {:?}", problem.servers());
    println!("Tasks (requirements): {:?}\n", problem.tasks());

    if strategy.uniform_cost() {
        println!("Running Uniform Cost Search (UCS)...");
        info!("Starting uniform-cost search");
        let report = searcher::ucs::build(&problem)
            .with_options(options.clone())
            .run()?;
        show(&problem, &report, "UCS");
    }

    if strategy.astar() {
        println!("Running A* Search...");
        info!("Starting A* search");
        let report = searcher::astar::build(&problem)
            .with_options(options)
            .run()?;
        show(&problem, &report, "A*");
    }

    Ok(())
}

fn show(problem: &ResourceAllocation, report: &SearchReport<ResourceAllocation>, label: &str) {
    println!("{}", describe(problem, report, label));
    println!("{}", "=".repeat(40));
}
