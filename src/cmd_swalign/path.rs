use clap::*;
use std::io::Write;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("path")
        .about("Prints the traceback path")
        .after_help(
            r###"
Prints the cells visited while tracing back from the best cell to a zero cell.

Output is one `row<TAB>col<TAB>score` line per cell, best cell first.
Rows index sequence A and columns index sequence B, both from 1; 0 is the boundary.

Notes:
* A diagonal step that loses exactly the match score is always preferred
* Otherwise the highest predecessor wins; ties go diagonal, up, left
  (up, diagonal, left at cell (1, 1))
* `--arrow` prints the path on one line: (6, 7) -> (5, 6) -> ...

Examples:
1. The default pair:
   swalign path

2. Single line:
   swalign path ACCGT ACGT --arrow

"###,
        )
        .args(args::sequence_args())
        .args(args::scoring_args())
        .arg(
            Arg::new("arrow")
                .long("arrow")
                .action(ArgAction::SetTrue)
                .help("Print the path as a single arrow-joined line"),
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
    let is_arrow = args.get_flag("arrow");

    //----------------------------
    // Ops
    //----------------------------
    let alignment = aligner.align(&seq_a, &seq_b)?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = swalign::writer(args.get_one::<String>("outfile").unwrap())?;
    if is_arrow {
        writer.write_fmt(format_args!("{}\n", alignment.path.to_arrow_string()))?;
    } else {
        for &(row, col) in alignment.path.cells() {
            writer.write_fmt(format_args!(
                "{}\t{}\t{}\n",
                row,
                col,
                alignment.matrix.get(row, col)
            ))?;
        }
    }
    writer.flush()?;

    Ok(())
}
