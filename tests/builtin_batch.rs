mod common;

use statsbatch::run_batch;
use statsbatch_test_utils::BatchBuilder;

use common::{fake_executor, script_argvs};

const EXPECTED_FLAGS: [&str; 10] = [
    "-pn",
    "-pn --min_apis 2",
    "-pn --ignore empty",
    "-pn --ignore packed",
    "-pn --ignore dotnet nonc",
    "-pn --ignore dotnet nonc packed",
    "-pn --ignore dotnet nonc dll",
    "-pn --ignore dotnet nonc dll packed",
    "-pn --ignore dotnet nonc dll packed empty",
    "-pn --ignore dotnet nonc dll packed empty --min_apis 2",
];

#[tokio::test]
async fn builtin_batch_issues_ten_invocations_in_order() {
    let batch = BatchBuilder::builtin().build();
    let (executor, recorded) = fake_executor(vec![]);

    let report = run_batch(&batch, executor).await;

    assert!(report.is_success());
    assert_eq!(report.results.len(), 10);

    let argvs = script_argvs(&recorded);
    assert_eq!(argvs.len(), EXPECTED_FLAGS.len());

    for (argv, flags) in argvs.iter().zip(EXPECTED_FLAGS) {
        let mut expected = vec!["stats.py".to_string(), "./apilogs/".to_string()];
        expected.extend(flags.split(' ').map(str::to_string));
        assert_eq!(argv, &expected);
    }
}

#[tokio::test]
async fn builtin_batch_runs_through_python3() {
    let batch = BatchBuilder::builtin().build();
    let (executor, recorded) = fake_executor(vec![]);

    run_batch(&batch, executor).await;

    let recorded = recorded.lock().unwrap();
    assert!(recorded.iter().all(|c| c.program == "python3"));
    assert!(recorded.iter().all(|c| c.working_dir.is_none()));
}

#[tokio::test]
async fn report_indices_follow_batch_positions() {
    let batch = BatchBuilder::builtin().build();
    let (executor, _recorded) = fake_executor(vec![]);

    let report = run_batch(&batch, executor).await;

    let indices: Vec<usize> = report.results.iter().map(|r| r.index).collect();
    assert_eq!(indices, (0..10).collect::<Vec<_>>());
    assert_eq!(report.results[4].label, "-pn --ignore dotnet nonc");
}
