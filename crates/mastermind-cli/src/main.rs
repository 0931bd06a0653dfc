use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mastermind_cli::{
    init_tracing, load_mind_map, render_json, render_node, render_outline, render_schedule,
    render_titles, render_tree, webhook_config,
};
use mastermind_core::{clamp_learning_days, learning_schedule, NodeId, DEFAULT_LEARNING_DAYS};
use mastermind_webhook::{MindMapSource, StaticSource, WebhookClient};
use std::path::PathBuf;

fn input_arg() -> Arg {
    Arg::new("input")
        .long("input")
        .short('i')
        .value_parser(value_parser!(PathBuf))
        .help("Mind map JSON file (defaults to the built-in fallback map)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn webhook_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("Webhook configuration TOML file"),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .help("Webhook URL (overrides config and MASTERMIND_WEBHOOK_URL)"),
        )
}

fn cli() -> Command {
    Command::new("mastermind")
        .version(mastermind_core::VERSION)
        .about("Explore business ideas as mind maps and plan learning schedules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Print the mind map as a tree")
                .arg(input_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("find")
                .about("Look up a node by id")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_parser(value_parser!(u64))
                        .help("Node id to look up"),
                )
                .arg(input_arg()),
        )
        .subcommand(
            Command::new("flatten")
                .about("List all node titles in pre-order")
                .arg(input_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("outline")
                .about("Print parent, level and order for every node")
                .arg(input_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("schedule")
                .about("Split topics into a day-by-day learning plan")
                .arg(
                    Arg::new("days")
                        .long("days")
                        .short('d')
                        .default_value("7")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64))
                        .help("Number of learning days (1-30)"),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_parser(value_parser!(PathBuf))
                        .help("Mind map JSON file (defaults to the standard topic list)"),
                )
                .arg(json_arg()),
        )
        .subcommand(webhook_args(
            Command::new("generate")
                .about("Generate a mind map for an idea")
                .arg(
                    Arg::new("idea")
                        .long("idea")
                        .required(true)
                        .help("Business idea to explore"),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .action(ArgAction::SetTrue)
                        .help("Skip the webhook and use fallback data"),
                )
                .arg(json_arg()),
        ))
        .subcommand(webhook_args(
            Command::new("ping").about("Test the connection to the webhook"),
        ))
}

fn input_path(args: &ArgMatches) -> Option<&PathBuf> {
    args.get_one::<PathBuf>("input")
}

fn source_for(args: &ArgMatches, offline: bool) -> anyhow::Result<Box<dyn MindMapSource>> {
    if offline {
        return Ok(Box::new(StaticSource::new()));
    }
    let config = webhook_config(
        args.get_one::<PathBuf>("config").map(PathBuf::as_path),
        args.get_one::<String>("url").map(String::as_str),
    )?;
    tracing::debug!("Webhook config: {:?}", config);
    Ok(Box::new(WebhookClient::new(config)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("show", args)) => {
            let map = load_mind_map(input_path(args).map(PathBuf::as_path))?;
            if args.get_flag("json") {
                println!("{}", render_json(&map)?);
            } else {
                print!("{}", render_tree(&map));
            }
        }
        Some(("find", args)) => {
            let id = args.get_one::<u64>("id").copied().context("missing --id")?;
            let map = load_mind_map(input_path(args).map(PathBuf::as_path))?;
            match map.find(NodeId(id)) {
                Some(node) => print!("{}", render_node(node)),
                None => {
                    eprintln!("Node {id} not found");
                    std::process::exit(1);
                }
            }
        }
        Some(("flatten", args)) => {
            let map = load_mind_map(input_path(args).map(PathBuf::as_path))?;
            let titles = map.flatten();
            if args.get_flag("json") {
                println!("{}", render_json(&titles)?);
            } else {
                print!("{}", render_titles(&titles));
            }
        }
        Some(("outline", args)) => {
            let map = load_mind_map(input_path(args).map(PathBuf::as_path))?;
            let records = map.records();
            if args.get_flag("json") {
                println!("{}", render_json(&records)?);
            } else {
                print!("{}", render_outline(&records));
            }
        }
        Some(("schedule", args)) => {
            let requested = args
                .get_one::<i64>("days")
                .copied()
                .unwrap_or(DEFAULT_LEARNING_DAYS);
            let days = clamp_learning_days(requested);
            if days != requested {
                tracing::warn!("Day count {} out of range, using {}", requested, days);
            }

            let map = input_path(args)
                .map(|path| load_mind_map(Some(path.as_path())))
                .transpose()?;
            let plans = learning_schedule(map.as_ref(), days);

            if args.get_flag("json") {
                println!("{}", render_json(&plans)?);
            } else {
                print!("{}", render_schedule(&plans, days));
            }
        }
        Some(("generate", args)) => {
            let idea = args.get_one::<String>("idea").context("missing --idea")?;
            let source = source_for(args, args.get_flag("offline"))?;
            tracing::info!("Using {} source", source.name());

            let map = source.generate(idea).await;
            if args.get_flag("json") {
                println!("{}", render_json(&map)?);
            } else {
                print!("{}", render_tree(&map));
            }
        }
        Some(("ping", args)) => {
            let source = source_for(args, false)?;
            if source.test_connection().await {
                println!("Webhook available");
            } else {
                println!("Webhook not available");
                std::process::exit(1);
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn schedule_days_accepts_negative() {
        let matches = cli()
            .try_get_matches_from(["mastermind", "schedule", "--days", "-2"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(args.get_one::<i64>("days"), Some(&-2));
    }

    #[test]
    fn find_requires_id() {
        assert!(cli().try_get_matches_from(["mastermind", "find"]).is_err());
    }
}
