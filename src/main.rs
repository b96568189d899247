use std::process;

use clap::{App, AppSettings, Arg, ArgGroup, ArgMatches, SubCommand};
use log::debug;

use sokosearch::config::STRATEGY_TAGS;
use sokosearch::level::Level;
use sokosearch::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokosearch")
        .version("0.1.0")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("info")
                .about("print the level's dimensions, walls, targets, player and boxes")
                .args(&level_args())
                .group(level_group()),
        )
        .subcommand(
            SubCommand::with_name("successors")
                .about("print the level id and all states reachable with one action")
                .args(&level_args())
                .group(level_group()),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("print TRUE if every box is on a target, FALSE otherwise")
                .args(&level_args())
                .group(level_group()),
        )
        .subcommand(
            SubCommand::with_name("solve")
                .about("search for a solution and print the path of node records")
                .args(&level_args())
                .group(level_group())
                .arg(
                    Arg::with_name("strategy")
                        .short("-s")
                        .long("--strategy")
                        .takes_value(true)
                        .required(true)
                        .possible_values(&STRATEGY_TAGS)
                        .case_insensitive(true)
                        .help("search strategy"),
                )
                .arg(
                    Arg::with_name("max-depth")
                        .short("-d")
                        .long("--max-depth")
                        .takes_value(true)
                        .required(true)
                        .validator(validate_max_depth)
                        .help("don't expand nodes at this depth"),
                )
                .arg(
                    Arg::with_name("stats")
                        .long("--stats")
                        .help("print search statistics after the solution"),
                )
                .arg(
                    Arg::with_name("status")
                        .long("--status")
                        .help("print statistics whenever the search reaches a new depth"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        ("info", Some(matches)) => {
            let level = read_level(matches);
            print!("{}", level.info());
        }
        ("successors", Some(matches)) => {
            let level = read_level(matches);
            print!("{}", level.successor_list());
        }
        ("check", Some(matches)) => {
            let level = read_level(matches);
            if level.board.is_goal(&level.state) {
                println!("TRUE");
            } else {
                println!("FALSE");
            }
        }
        ("solve", Some(matches)) => {
            let level = read_level(matches);
            let strategy = matches.value_of("strategy").unwrap().parse().unwrap();
            let max_depth = matches.value_of("max-depth").unwrap().parse().unwrap();
            let solution = level.solve(strategy, max_depth, matches.is_present("status"));
            print!("{}", solution.listing());
            if matches.is_present("stats") {
                print!("{}", solution.stats);
            }
        }
        _ => unreachable!(),
    }
}

fn level_args() -> [Arg<'static, 'static>; 2] {
    [
        Arg::with_name("level")
            .short("-l")
            .long("--level")
            .takes_value(true)
            .help(r"level as text, \n separates rows"),
        Arg::with_name("file")
            .short("-f")
            .long("--file")
            .takes_value(true)
            .help("path of a level file"),
    ]
}

fn level_group() -> ArgGroup<'static> {
    ArgGroup::with_name("source")
        .arg("level")
        .arg("file")
        .required(true)
}

fn validate_max_depth(value: String) -> Result<(), String> {
    value.parse::<u32>().map(|_| ()).map_err(|err| err.to_string())
}

fn read_level(matches: &ArgMatches<'_>) -> Level {
    let level: Level = if let Some(text) = matches.value_of("level") {
        text.replace("\\n", "\n").parse().unwrap_or_else(|err| {
            println!("Can't parse level: {}", err);
            process::exit(1);
        })
    } else {
        let path = matches.value_of("file").unwrap();
        path.load_level().unwrap_or_else(|err| {
            println!("Can't load level {}: {}", path, err);
            process::exit(1);
        })
    };
    debug!("Loaded level:\n{}", level);
    level
}
