use super::*;

use clap::CommandFactory;

#[test]
fn command_is_named_after_the_program() {
    let cmd = Cli::command();
    assert_eq!(cmd.get_name(), PROGRAM_NAME);
    cmd.debug_assert();
}

#[test]
fn global_output_flags_follow_the_subcommand() {
    let cli = Cli::try_parse_from([PROGRAM_NAME, "ls", "/tmp", "--json"]).expect("parse");
    assert!(cli.output.json);
    assert!(matches!(cli.command, Command::Ls(_)));
}
