use apt_sources::{Repository, parse_line};
use proptest::prelude::*;

fn repository_strategy() -> impl Strategy<Value = Repository> {
    (
        any::<bool>(),
        any::<bool>(),
        proptest::option::of("[a-z]{1,6}=[a-z0-9,]{1,8}( [a-z]{1,6}=[a-z0-9/.]{1,8}){0,2}"),
        "(http|https|ftp)://[a-z]{1,10}(\\.[a-z]{2,5}){0,2}(/[a-z0-9_-]{1,8}){0,3}/?",
        "[a-z0-9./-]{1,12}",
        "([a-z-]{1,10}( [a-z-]{1,10}){0,3})?",
        "([A-Za-z0-9 #.,:-]{0,20}[A-Za-z0-9])?",
    )
        .prop_map(|(enabled, source_repo, options, uri, distribution, components, comment)| {
            let repo = if source_repo {
                Repository::source(uri, distribution, &components)
            } else {
                Repository::binary(uri, distribution, &components)
            };
            let repo = match options {
                Some(options) => repo.with_options(options),
                None => repo,
            };
            repo.with_comment(comment).with_enabled(enabled)
        })
}

proptest! {
    #[test]
    fn test_serialized_lines_parse_back(repo in repository_strategy()) {
        prop_assert!(repo.validate().is_ok());

        let line = repo.to_line();
        let parsed = parse_line(&line).unwrap().expect("declaration");

        prop_assert!(parsed.same_repository(&repo));
        prop_assert_eq!(&parsed, &repo);
        prop_assert_eq!(parsed.to_line(), line);
    }

    #[test]
    fn test_arbitrary_lines_never_panic(line in "\\PC{0,80}") {
        let _ = parse_line(&line);
    }
}
