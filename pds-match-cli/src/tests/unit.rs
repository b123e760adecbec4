//! Focused unit tests covering argument conversion and input loading.

use super::helpers::{BoardFixture, reference_date, write_utf8};
use super::*;
use crate::inputs::{SharedConfig, load_match_config};
use crate::rank::{CandidatesArgs, CandidatesConfig, JobsArgs, JobsConfig};
use crate::recommend::{RecommendArgs, RecommendConfig};
use crate::score::{ScoreArgs, ScoreConfig, config_from_layers_for_test};
use camino::Utf8PathBuf;
use pds_match_scorer::{DEFAULT_RANK_LIMIT, RecommendationSettings};
use rstest::rstest;

#[rstest]
fn converting_score_without_board_errors() {
    let args = ScoreArgs {
        candidate: Some("applicant-1".to_owned()),
        job: Some("job-1".to_owned()),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("missing board should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_BOARD);
            assert_eq!(env, ENV_SCORE_BOARD);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::candidate(None, Some("job-1"), ARG_CANDIDATE, ENV_SCORE_CANDIDATE)]
#[case::job(Some("applicant-1"), None, ARG_JOB, ENV_SCORE_JOB)]
fn converting_score_without_identifier_errors(
    #[case] candidate: Option<&str>,
    #[case] job: Option<&str>,
    #[case] expected_field: &'static str,
    #[case] expected_env: &'static str,
) {
    let args = ScoreArgs {
        board: Some(Utf8PathBuf::from("board.json")),
        candidate: candidate.map(str::to_owned),
        job: job.map(str::to_owned),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("missing identifier should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_jobs_defaults_the_limit_and_parses_the_date() {
    let args = JobsArgs {
        board: Some(Utf8PathBuf::from("board.json")),
        candidate: Some("applicant-1".to_owned()),
        as_of: Some("2024-01-01".to_owned()),
        ..JobsArgs::default()
    };

    let config = JobsConfig::try_from(args).expect("config should build");
    assert_eq!(config.limit, DEFAULT_RANK_LIMIT);
    assert_eq!(config.shared.as_of, Some(reference_date()));
    assert_eq!(config.shared.board, Utf8PathBuf::from("board.json"));
}

#[rstest]
fn converting_candidates_requires_a_job() {
    let args = CandidatesArgs {
        board: Some(Utf8PathBuf::from("board.json")),
        limit: Some(3),
        ..CandidatesArgs::default()
    };

    let err = CandidatesConfig::try_from(args).expect_err("missing job should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_JOB);
            assert_eq!(env, ENV_CANDIDATES_JOB);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn invalid_reference_date_is_rejected() {
    let err = SharedConfig::resolve(
        Some(Utf8PathBuf::from("board.json")),
        ENV_JOBS_BOARD,
        None,
        Some("01/02/2024"),
        None,
    )
    .expect_err("malformed date should error");
    match err {
        CliError::InvalidDate { field, .. } => assert_eq!(field, ARG_AS_OF),
        other => panic!("expected InvalidDate, found {other:?}"),
    }
}

#[rstest]
fn recommend_settings_apply_only_valid_overrides() {
    let args = RecommendArgs {
        board: Some(Utf8PathBuf::from("board.json")),
        threshold: Some(1.5),
        max_recommendations: Some(2),
        pool_size: Some(0),
        ..RecommendArgs::default()
    };

    let config = RecommendConfig::try_from(args).expect("config should build");
    let defaults = RecommendationSettings::default();
    assert_eq!(config.settings.threshold, defaults.threshold);
    assert_eq!(config.settings.max_recommendations, 2);
    assert_eq!(config.settings.pool_size, defaults.pool_size);
    assert_eq!(config.candidate, None);
}

#[rstest]
fn validate_sources_reports_missing_board() {
    let fixture = BoardFixture::new();
    let shared = SharedConfig {
        board: fixture.root().join("absent.json"),
        ..fixture.shared()
    };

    let err = shared.validate_sources().expect_err("missing board should error");
    match err {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_BOARD);
            assert_eq!(path, fixture.root().join("absent.json"));
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let fixture = BoardFixture::new();
    let weights = fixture.root().join("weights");
    std::fs::create_dir(&weights).expect("weights directory");
    let shared = SharedConfig {
        weights: Some(weights.clone()),
        ..fixture.shared()
    };

    let err = shared
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_WEIGHTS);
            assert_eq!(path, weights);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_board_rejects_invalid_json() {
    let fixture = BoardFixture::new();
    write_utf8(fixture.board(), b"{ not valid json");

    let err = fixture
        .shared()
        .load_board()
        .expect_err("invalid json should error");
    match err {
        CliError::ParseBoard { path, .. } => assert_eq!(path, fixture.board()),
        other => panic!("expected ParseBoard, found {other:?}"),
    }
}

#[rstest]
fn load_match_config_fills_missing_fields_with_defaults() {
    let fixture = BoardFixture::new();
    let path = fixture.weights(r#"{ "weights": { "education": 0.25, "experience": 0.25, "skills": 0.25, "eligibility": 0.25 } }"#);

    let config = load_match_config(&path).expect("weights should decode");
    assert_eq!(config.weights.education, 0.25);
    assert_eq!(config.tiers, pds_match_scorer::ScoreTiers::default());
}

#[rstest]
fn unbalanced_weights_are_rejected() {
    let fixture = BoardFixture::new();
    let path = fixture.weights(r#"{ "weights": { "education": 0.5, "experience": 0.5, "skills": 0.5, "eligibility": 0.5 } }"#);
    let shared = SharedConfig {
        weights: Some(path.clone()),
        ..fixture.shared()
    };

    let err = shared.scorer().expect_err("weights summing to 2 should error");
    match err {
        CliError::InvalidWeights { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected InvalidWeights, found {other:?}"),
    }
}

#[rstest]
fn malformed_weights_are_rejected() {
    let fixture = BoardFixture::new();
    let path = fixture.weights("[1, 2, 3]");

    let err = load_match_config(&path).expect_err("array is not a config");
    match err {
        CliError::ParseWeights { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseWeights, found {other:?}"),
    }
}

#[rstest]
fn scorer_uses_the_reference_date() {
    let fixture = BoardFixture::new();
    let scorer = fixture.shared().scorer().expect("default scorer");
    assert_eq!(scorer.reference_date(), reference_date());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "board": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "board": "from-file.json",
            "candidate": "applicant-file",
            "job": "job-file",
        }),
        None,
    );
    composer.push_environment(json!({
        "board": "from-env.json",
        "candidate": "applicant-env",
    }));
    composer.push_cli(json!({ "candidate": "applicant-cli" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.shared.board, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.candidate, "applicant-cli");
    assert_eq!(config.job, "job-file");
}
