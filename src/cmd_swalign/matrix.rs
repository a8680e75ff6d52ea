use clap::*;
use std::io::Write;
use swalign::libs::matrix::MatrixBuilder;

use super::args;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("matrix")
        .about("Prints the local alignment score matrix")
        .after_help(
            r###"
Prints the filled score matrix as TSV.

Notes:
* Rows follow sequence A and columns follow sequence B
* The first row and column are the zero boundary, labelled `-`
* `--transpose` puts sequence B down the rows instead
* Without `--floor` cells may be negative
* Fails if no cell scores above zero

Examples:
1. The default pair:
   swalign matrix

2. Floor scores at zero, B down the rows:
   swalign matrix TGTTACGG GGTTGACTA --floor --transpose

"###,
        )
        .args(args::sequence_args())
        .args(args::scoring_args())
        .arg(
            Arg::new("transpose")
                .long("transpose")
                .action(ArgAction::SetTrue)
                .help("Print sequence B down the rows"),
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
    let is_transpose = args.get_flag("transpose");

    //----------------------------
    // Ops
    //----------------------------
    let (matrix, _) = MatrixBuilder::new(aligner.params, aligner.mode).build(&seq_a, &seq_b)?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = swalign::writer(args.get_one::<String>("outfile").unwrap())?;
    writer.write_all(matrix.to_tsv(&seq_a, &seq_b, is_transpose).as_bytes())?;
    writer.flush()?;

    Ok(())
}
