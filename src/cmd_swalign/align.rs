use clap::*;
use std::io::Write;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("align")
        .about("Prints the local alignment of two sequences")
        .after_help(
            r###"
Prints three lines: sequence A, sequence B and an indicator line.

Notes:
* Unaligned residues before and after the local alignment are kept,
  padded with `-` so all three lines have the same length
* Indicator:
    * `*` - aligned identical bases
    * `.` - aligned different bases, or different bases facing each other in the flanks
    * ` ` - gaps and everything else
* `--stats` appends a TSV header and row:
    score, 0-based half-open ranges of A and B, and column counts

Examples:
1. The default pair:
   swalign align

2. With a zero floor and summary:
   swalign align TGTTACGG GGTTGACTA --floor --stats

"###,
        )
        .args(args::sequence_args())
        .args(args::scoring_args())
        .arg(
            Arg::new("stats")
                .long("stats")
                .action(ArgAction::SetTrue)
                .help("Append score, ranges and column counts"),
        )
        .arg(args::outfile_arg())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let (seq_a, seq_b) = args::sequences(args)?;
    let aligner = args::aligner(args);
    let is_stats = args.get_flag("stats");

    //----------------------------
    // Ops
    //----------------------------
    let result = aligner.align(&seq_a, &seq_b)?.result;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = swalign::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_fmt(format_args!("{}", result))?;

    if is_stats {
        let stats = result.stats();
        writer.write_fmt(format_args!(
            "{}\n",
            [
                "score",
                "a_start",
                "a_end",
                "b_start",
                "b_end",
                "matches",
                "transitions",
                "transversions",
                "insertions",
                "deletions",
                "columns",
            ]
            .join("\t")
        ))?;
        writer.write_fmt(format_args!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            result.score,
            result.range_a.start,
            result.range_a.end,
            result.range_b.start,
            result.range_b.end,
            stats.matches,
            stats.transitions,
            stats.transversions,
            stats.insertions,
            stats.deletions,
            stats.columns(),
        ))?;
    }
    writer.flush()?;

    Ok(())
}
