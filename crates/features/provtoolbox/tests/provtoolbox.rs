use interop_domain::{CanonicalFormat, Token};
use interop_kernel::{Comparator, Component, ConfigError};
use interop_provtoolbox::{ProvToolboxComparator, ProvToolboxConverter};
use serde_json::json;

fn converter_config(arguments: serde_json::Value) -> serde_json::Value {
    json!({
        "executable": "provconvert",
        "arguments": arguments,
        "input-formats": ["provn", "ttl", "trig", "provx", "json"],
        "output-formats": ["provn", "ttl", "trig", "provx", "json"],
    })
}

#[test]
fn converter_needs_only_input_and_output() {
    let mut converter = ProvToolboxConverter::default();
    let err = converter
        .configure(&converter_config(json!(["-infile", "INPUT"])))
        .expect_err("OUTPUT missing");
    assert!(matches!(
        err,
        ConfigError::MissingTokens { ref tokens, .. } if tokens == &[Token::Output]
    ));

    converter
        .configure(&converter_config(json!("-infile INPUT -outfile OUTPUT")))
        .expect("configured");
    assert_eq!(converter.declared_formats().len(), 5);
}

#[test]
fn comparator_format_tokens_are_optional() {
    let mut comparator = ProvToolboxComparator::default();
    comparator
        .configure(&json!({
            "executable": "provconvert",
            "arguments": "-infile FILE1 -compare FILE2",
            "formats": ["provx", "json"],
        }))
        .expect("configured");
    assert!(comparator.formats().contains(CanonicalFormat::Provx));

    let err = comparator
        .configure(&json!({
            "executable": "provconvert",
            "arguments": "-infile FILE1",
            "formats": ["json"],
        }))
        .expect_err("FILE2 missing");
    assert!(matches!(
        err,
        ConfigError::MissingTokens { ref tokens, .. } if tokens == &[Token::File2]
    ));
}

#[cfg(unix)]
mod invocation {
    use super::*;
    use interop_kernel::{ComparisonError, Converter};
    use std::fs;

    #[test]
    fn converter_binds_canonical_format_and_real_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let record = dir.path().join("argv");
        let script = dir.path().join("provconvert.sh");
        let body = format!("printf '%s\\n' \"$@\" > '{}'\ncp \"$1\" \"$3\"\n", record.display());
        fs::write(&script, body).expect("script");
        let input = dir.path().join("a.provx");
        fs::write(&input, "<prov:document/>").expect("input");
        let output = dir.path().join("b.ttl");

        let mut converter = ProvToolboxConverter::default();
        converter
            .configure(&json!({
                "executable": "/bin/sh",
                "arguments": [script, "INPUT", "-outfile", "OUTPUT", "FORMAT"],
                "input-formats": ["provx"],
                "output-formats": ["ttl"],
            }))
            .expect("configured");

        converter.convert(&input, &output).expect("converted");

        let argv = fs::read_to_string(&record).expect("argv");
        let expected = format!("{}\n-outfile\n{}\nttl\n", input.display(), output.display());
        assert_eq!(argv, expected);
        assert_eq!(fs::read_to_string(&output).expect("output"), "<prov:document/>");
    }

    #[test]
    fn comparator_exit_codes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (a, b) = (dir.path().join("a.provx"), dir.path().join("b.json"));
        fs::write(&a, "x").expect("a");
        fs::write(&b, "y").expect("b");

        for (code, expected) in [(0, None), (1, Some(true)), (3, Some(false))] {
            let mut comparator = ProvToolboxComparator::default();
            comparator
                .configure(&json!({
                    "executable": "/bin/sh",
                    "arguments": ["-c", format!("exit {code}"), "provconvert", "FILE1", "FILE2"],
                    "formats": ["provx", "json"],
                }))
                .expect("configured");

            let outcome = comparator.compare(&a, &b, CanonicalFormat::Provx, CanonicalFormat::Json);
            match expected {
                None => outcome.expect("equivalent"),
                Some(not_equivalent) => {
                    let err: ComparisonError = outcome.expect_err("failure");
                    assert_eq!(err.is_not_equivalent(), not_equivalent);
                    assert_eq!(err.exit_code(), Some(code));
                },
            }
        }
    }
}
