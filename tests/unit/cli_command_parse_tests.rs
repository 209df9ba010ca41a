use clap::Parser;

use everyday_winners::cli::{Cli, Commands, OutputFormat};

fn parse(args: &[&str]) -> Commands {
    let mut argv = vec!["ew"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv).command
}

#[test]
fn parse_complete_many_ids_with_times() {
    match parse(&["complete", "S1P1", "S1P2", "--times", "3"]) {
        Commands::Complete(args) => {
            assert_eq!(args.ids, vec!["S1P1".to_string(), "S1P2".to_string()]);
            assert_eq!(args.times, 3);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_complete_requires_an_id() {
    assert!(Cli::try_parse_from(["ew", "complete"]).is_err());
}

#[test]
fn parse_progress_steps_are_comma_delimited() {
    match parse(&["progress", "--steps", "S1P1,S1P1,S1Quiz"]) {
        Commands::Progress(args) => {
            assert_eq!(args.steps, vec!["S1P1", "S1P1", "S1Quiz"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_path_section() {
    match parse(&["path", "--section", "2"]) {
        Commands::Path(args) => assert_eq!(args.section, Some(2)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_catalog_check_with_file() {
    match parse(&["catalog", "--check", "lessons.toml"]) {
        Commands::Catalog(args) => {
            assert!(args.check);
            assert_eq!(
                args.file.as_deref(),
                Some(std::path::Path::new("lessons.toml"))
            );
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["ew", "leaderboard", "--format", "jsonl", "-v"]);
    assert_eq!(cli.output_format(), OutputFormat::Jsonl);
    assert_eq!(cli.verbose, 1);
    assert!(matches!(cli.command, Commands::Leaderboard(_)));
}
