extern crate clap;
use clap::*;

mod cmd_swalign;

fn main() -> anyhow::Result<()> {
    let app = Command::new("swalign")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`swalign` - Local alignment with transition/transversion scoring")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log pipeline progress to stderr"),
        )
        .subcommand(cmd_swalign::matrix::make_subcommand())
        .subcommand(cmd_swalign::path::make_subcommand())
        .subcommand(cmd_swalign::align::make_subcommand())
        .after_help(
            r###"Subcommands follow the alignment pipeline:

* matrix - the filled score matrix
* path   - the traceback from the best cell to a zero cell
* align  - the rendered alignment with flanks

Defaults: match 4, transition -2, transversion -4, gap -2, no zero floor.
RUST_LOG overrides the log level set by --verbose.

"###,
        );

    let matches = app.get_matches();

    let level = if matches.get_flag("verbose") {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Check which subcommand the user ran...
    match matches.subcommand() {
        Some(("matrix", sub_matches)) => cmd_swalign::matrix::execute(sub_matches),
        Some(("path", sub_matches)) => cmd_swalign::path::execute(sub_matches),
        Some(("align", sub_matches)) => cmd_swalign::align::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
