use proptest::prelude::*;

use statsbatch::batch::Invocation;
use statsbatch::types::IgnoreTag;

fn ignore_set() -> impl Strategy<Value = Vec<IgnoreTag>> {
    proptest::sample::subsequence(IgnoreTag::ALL.to_vec(), 0..=IgnoreTag::ALL.len())
        .prop_shuffle()
}

fn invocation() -> impl Strategy<Value = Invocation> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        ignore_set(),
        proptest::option::of(0u32..1000),
    )
        .prop_map(|(plot, normalize, apt_stats, ignore, min_apis)| Invocation {
            plot,
            normalize,
            apt_stats,
            ignore,
            min_apis,
            ..Invocation::default()
        })
}

proptest! {
    #[test]
    fn argv_starts_with_script_and_log_dir(inv in invocation()) {
        let argv = inv.argv("stats.py", "./apilogs/");
        prop_assert_eq!(&argv[0], "stats.py");
        prop_assert_eq!(&argv[1], "./apilogs/");
    }

    #[test]
    fn ignore_tags_follow_flag_in_listed_order(inv in invocation()) {
        let args = inv.flag_args();
        match args.iter().position(|a| a == "--ignore") {
            Some(pos) => {
                let rendered: Vec<&str> = args[pos + 1..pos + 1 + inv.ignore.len()]
                    .iter()
                    .map(String::as_str)
                    .collect();
                let expected: Vec<&str> = inv.ignore.iter().map(IgnoreTag::as_str).collect();
                prop_assert_eq!(rendered, expected);
            }
            None => prop_assert!(inv.ignore.is_empty()),
        }
    }

    #[test]
    fn min_apis_value_follows_its_flag(inv in invocation()) {
        let args = inv.flag_args();
        let pos = args.iter().position(|a| a == "--min_apis");
        match inv.min_apis {
            Some(min) => {
                let pos = pos.expect("--min_apis missing");
                prop_assert_eq!(&args[pos + 1], &min.to_string());
            }
            None => prop_assert!(pos.is_none()),
        }
    }

    #[test]
    fn at_most_one_short_flag_cluster(inv in invocation()) {
        let clusters = inv
            .flag_args()
            .iter()
            .filter(|a| a.starts_with('-') && !a.starts_with("--"))
            .count();
        let expected = usize::from(inv.plot || inv.normalize || inv.apt_stats);
        prop_assert_eq!(clusters, expected);
    }
}
