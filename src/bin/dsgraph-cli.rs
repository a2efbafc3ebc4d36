//! Thin CLI glue over [`dsgraph`]'s evaluator: prints one JSON evaluation record per
//! (algorithm, dataset) pair asked for, and nothing else.

use dsgraph::algorithms::Algorithm;
use dsgraph::core::io::read_edge_list;
use dsgraph::eval::Evaluator;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    match run(&args[1..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("dsgraph-cli: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    match args.first().map(String::as_str) {
        Some("eval") => run_eval(&args[1..]),
        Some("eval-all") => run_eval_all(&args[1..]),
        Some(other) => Err(format!("unknown subcommand {other:?}; expected eval or eval-all")),
        None => Err("usage: dsgraph-cli <eval|eval-all> ...".to_string()),
    }
}

fn run_eval(args: &[String]) -> Result<(), String> {
    let (algorithm_name, dataset_path, iterations) = parse_eval_args(args)?;
    let algorithm = Algorithm::parse(&algorithm_name, iterations)
        .ok_or_else(|| format!("unknown algorithm {algorithm_name:?}"))?;
    let (graph, _) = read_edge_list(&dataset_path).map_err(|e| e.to_string())?;
    let record = Evaluator::evaluate(algorithm, &graph);
    println!("{}", serde_json::to_string(&record).map_err(|e| e.to_string())?);
    Ok(())
}

fn run_eval_all(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("eval-all requires at least one dataset path".to_string());
    }
    for dataset_path in args {
        let (graph, _) = read_edge_list(dataset_path).map_err(|e| e.to_string())?;
        for algorithm in Algorithm::all() {
            let record = Evaluator::evaluate(algorithm, &graph);
            println!(
                "{}",
                serde_json::to_string(&record).map_err(|e| e.to_string())?
            );
        }
    }
    Ok(())
}

/// Parses `<algorithm> <dataset-path> [--iterations T]` into its three parts.
fn parse_eval_args(args: &[String]) -> Result<(String, String, Option<u32>), String> {
    if args.len() < 2 {
        return Err("usage: dsgraph-cli eval <algorithm> <dataset-path> [--iterations T]".to_string());
    }
    let algorithm_name = args[0].clone();
    let dataset_path = args[1].clone();
    let mut iterations = None;
    let mut rest = &args[2..];
    while let Some(flag) = rest.first() {
        match flag.as_str() {
            "--iterations" => {
                let value = rest
                    .get(1)
                    .ok_or_else(|| "--iterations requires a value".to_string())?;
                iterations = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("invalid --iterations value {value:?}"))?,
                );
                rest = &rest[2..];
            }
            other => return Err(format!("unknown flag {other:?}")),
        }
    }
    Ok((algorithm_name, dataset_path, iterations))
}
