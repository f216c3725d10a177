use std::{fs, path::Path};

use mscript::{Options, run};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs every `tests/scripts/*.ms` file and compares its output with the
/// sibling `.out` file. Error reports are appended to the output so expected
/// failures can be checked as well.
#[test]
fn scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "ms"))
    {
        let path = entry.path();
        count += 1;

        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(path);

        let mut output = Vec::new();
        let mut errors = Vec::new();
        // Failures are part of the expected output.
        let _ = run(&source, &Options::default(), &mut output, &mut errors);
        output.extend(errors);

        assert_eq!(String::from_utf8(output).unwrap(), expected, "script {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn read_expected(script: &Path) -> String {
    let path = script.with_extension("out");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
