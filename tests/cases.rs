use std::fs;

use walkdir::WalkDir;
use xcalc::calculate;

/// One line of a `.calc` file: `expression [| x=value] => expected`, where
/// `expected` is either a number or an error kind such as `DivisionByZero`.
struct Case {
    expression: String,
    x:          Option<f64>,
    expected:   String,
}

fn parse_case(line: &str) -> Option<Case> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (input, expected) = line.rsplit_once("=>")
                                .unwrap_or_else(|| panic!("Missing '=>' in case: {line}"));
    let (expression, x) = match input.split_once('|') {
        Some((expression, binding)) => {
            let value = binding.trim()
                               .strip_prefix("x=")
                               .unwrap_or_else(|| panic!("Bad binding in case: {line}"));
            (expression, Some(value.trim().parse().expect("x must be a number")))
        },
        None => (input, None),
    };

    Some(Case { expression: expression.trim().to_string(),
                x,
                expected: expected.trim().to_string() })
}

fn check(case: &Case) -> Result<(), String> {
    let outcome = calculate(&case.expression, case.x);

    match (case.expected.parse::<f64>(), outcome) {
        (Ok(expected), Ok(value)) if (value - expected).abs() < 1e-12 => Ok(()),
        (Err(_), Err(e)) if format!("{:?}", e.kind()) == case.expected => Ok(()),
        (_, outcome) => Err(format!("'{}' gave {:?}, expected {}",
                                    case.expression, outcome, case.expected)),
    }
}

#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for case in content.lines().filter_map(parse_case) {
            count += 1;
            if let Err(e) = check(&case) {
                panic!("Case in {path:?} failed: {e}");
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}
