use statsbatch::batch::Invocation;
use statsbatch::cli::CliArgs;
use statsbatch::config::BatchFile;
use statsbatch::types::IgnoreTag;
use statsbatch::{run, write_dry_run};
use statsbatch_test_utils::BatchBuilder;

fn render(batch: &BatchFile) -> String {
    let mut out = Vec::new();
    write_dry_run(batch, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn command_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|l| l.contains("python3 stats.py"))
        .collect()
}

#[test]
fn builtin_batch_lists_ten_command_lines() {
    let output = render(&BatchBuilder::builtin().build());

    assert!(output.contains("invocations (10 enabled of 10):"));
    assert!(output.contains("config.interpreter = python3"));

    let lines = command_lines(&output);
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|l| l.contains("python3 stats.py ./apilogs/ -pn")));
    assert!(lines[0].ends_with(" 1. python3 stats.py ./apilogs/ -pn"));
    assert!(lines[9].ends_with(
        "10. python3 stats.py ./apilogs/ -pn --ignore dotnet nonc dll packed empty --min_apis 2"
    ));
}

#[test]
fn disabled_entries_are_marked() {
    let batch = BatchBuilder::new()
        .with_invocation(Invocation::plot_normalized())
        .with_disabled(Invocation::plot_normalized().ignoring([IgnoreTag::Dll]))
        .build();

    let output = render(&batch);

    assert!(output.contains("invocations (1 enabled of 2):"));
    let lines = command_lines(&output);
    assert!(lines[0].starts_with("   1. "));
    assert!(lines[1].starts_with("#  2. "));
    assert!(lines[1].ends_with("--ignore dll"));
}

#[tokio::test]
async fn dry_run_executes_nothing() {
    // A program that cannot be spawned would fail the batch if anything ran.
    let args = CliArgs {
        dry_run: true,
        interpreter: Some("statsbatch-definitely-not-a-real-program".into()),
        ..CliArgs::default()
    };

    assert!(run(args).await.is_ok());
}
