use std::io;
use std::path::PathBuf;

use anyhow::Context;
use img3_core::img3::Img3Error;
use img3info::commands::{exit_status, status, InspectError};

#[test]
fn each_failure_kind_has_its_own_status() {
    let cases: Vec<(anyhow::Error, u8)> = vec![
        (InspectError::Usage.into(), status::USAGE),
        (
            InspectError::NotFound {
                path: PathBuf::from("x"),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .into(),
            status::IO,
        ),
        (
            InspectError::Open {
                path: PathBuf::from("x"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            }
            .into(),
            status::IO,
        ),
        (InspectError::from(Img3Error::InvalidMagic { found: 0 }).into(), status::INVALID_MAGIC),
        (
            InspectError::from(Img3Error::TruncatedInput { needed: 20, available: 3 }).into(),
            status::TRUNCATED_INPUT,
        ),
        (
            InspectError::from(Img3Error::TruncatedSection { offset: 0, needed: 12, available: 4 })
                .into(),
            status::TRUNCATED_SECTION,
        ),
        (
            InspectError::from(Img3Error::MalformedSection { offset: 0, full_size: 0, min: 12 })
                .into(),
            status::MALFORMED_SECTION,
        ),
    ];

    let mut seen = Vec::new();
    for (err, expected) in cases {
        assert_eq!(exit_status(&err), expected, "wrong status for: {err}");
        seen.push(expected);
    }
    seen.dedup();
    assert_eq!(seen.len(), 6, "statuses should be distinct per kind: {seen:?}");
}

#[test]
fn typed_cause_is_found_under_context() {
    let err = Err::<(), _>(Img3Error::InvalidMagic { found: 1 })
        .context("while inspecting fixture")
        .unwrap_err();
    assert_eq!(exit_status(&err), status::INVALID_MAGIC);
}

#[test]
fn untyped_errors_map_to_other() {
    let err = anyhow::anyhow!("stdout closed");
    assert_eq!(exit_status(&err), status::OTHER);
    assert_ne!(status::OTHER, status::SUCCESS);
}

#[test]
fn messages_keep_reference_wording() {
    let not_found = InspectError::NotFound {
        path: PathBuf::from("fw.img3"),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(not_found.to_string(), "Couldn't find file: fw.img3");
    assert_eq!(InspectError::Usage.to_string(), "Usage: img3info <file>");
}
