//! Arguments shared by every subcommand.

use anyhow::Context;
use clap::*;
use swalign::libs::align::LocalAligner;
use swalign::libs::matrix::FillMode;
use swalign::libs::nt::Sequence;
use swalign::libs::score::ScoreParams;

pub fn sequence_args() -> Vec<Arg> {
    vec![
        Arg::new("seq_a")
            .index(1)
            .num_args(1)
            .default_value("TGTTACGG")
            .help("Sequence A, indexes the matrix rows"),
        Arg::new("seq_b")
            .index(2)
            .num_args(1)
            .default_value("GGTTGACTA")
            .help("Sequence B, indexes the matrix columns"),
    ]
}

pub fn scoring_args() -> Vec<Arg> {
    vec![
        Arg::new("match")
            .long("match")
            .short('m')
            .value_parser(value_parser!(i32))
            .default_value("4")
            .allow_negative_numbers(true)
            .help("Score for identical bases"),
        Arg::new("transition")
            .long("transition")
            .short('s')
            .value_parser(value_parser!(i32))
            .default_value("-2")
            .allow_negative_numbers(true)
            .help("Score for A<->G and C<->T substitutions"),
        Arg::new("transversion")
            .long("transversion")
            .short('t')
            .value_parser(value_parser!(i32))
            .default_value("-4")
            .allow_negative_numbers(true)
            .help("Score for purine<->pyrimidine substitutions"),
        Arg::new("gap")
            .long("gap")
            .short('g')
            .value_parser(value_parser!(i32))
            .default_value("-2")
            .allow_negative_numbers(true)
            .help("Linear gap penalty"),
        Arg::new("floor")
            .long("floor")
            .action(ArgAction::SetTrue)
            .help("Floor every cell at zero"),
    ]
}

pub fn outfile_arg() -> Arg {
    Arg::new("outfile")
        .long("outfile")
        .short('o')
        .num_args(1)
        .default_value("stdout")
        .help("Output filename. [stdout] for screen")
}

pub fn sequences(args: &ArgMatches) -> anyhow::Result<(Sequence, Sequence)> {
    let seq_a = args
        .get_one::<String>("seq_a")
        .unwrap()
        .parse::<Sequence>()
        .context("sequence A")?;
    let seq_b = args
        .get_one::<String>("seq_b")
        .unwrap()
        .parse::<Sequence>()
        .context("sequence B")?;

    Ok((seq_a, seq_b))
}

pub fn aligner(args: &ArgMatches) -> LocalAligner {
    let params = ScoreParams::new(
        *args.get_one::<i32>("match").unwrap(),
        *args.get_one::<i32>("transition").unwrap(),
        *args.get_one::<i32>("transversion").unwrap(),
        *args.get_one::<i32>("gap").unwrap(),
    );
    let mode = if args.get_flag("floor") {
        FillMode::Clamped
    } else {
        FillMode::Unclamped
    };

    LocalAligner::new(params, mode)
}
