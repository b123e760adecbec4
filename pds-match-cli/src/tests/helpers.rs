//! Test helpers that lay out board and weights files in a temporary directory.

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use tempfile::TempDir;

use crate::inputs::SharedConfig;

/// A board with one fully qualified applicant, one unparsed applicant, two
/// open postings and one closed posting.
pub(super) const BOARD_JSON: &str = r#"{
  "jobs": [
    {
      "id": "job-1",
      "title": "Data Analyst",
      "status": "active",
      "educationLevel": "Bachelor",
      "experienceYearsMin": 2,
      "experienceYearsMax": 5,
      "skills": ["excel", "sql"],
      "eligibility": ["Career Service Professional"]
    },
    { "id": "job-2", "title": "Encoder", "status": "active", "skills": ["typing"] },
    {
      "id": "job-3",
      "title": "Records Officer",
      "status": "closed",
      "skills": ["excel"]
    }
  ],
  "candidates": [
    {
      "id": "applicant-1",
      "parsedData": {
        "education": [{ "degree": "Bachelor", "schoolName": "State University" }],
        "workExperience": [
          {
            "position": "Analyst",
            "company": "Provincial Office",
            "startDate": "2019-01-01",
            "endDate": "2023-01-01"
          }
        ],
        "skills": ["Excel", "SQL"],
        "eligibility": ["Career Service Professional"]
      }
    },
    { "id": "applicant-2" }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid reference date")
}

/// Temporary workspace holding a board file.
pub(super) struct BoardFixture {
    _dir: TempDir,
    root: Utf8PathBuf,
    board: Utf8PathBuf,
}

impl BoardFixture {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let board = root.join("board.json");
        write_utf8(&board, BOARD_JSON.as_bytes());
        Self {
            _dir: dir,
            root,
            board,
        }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn board(&self) -> &Utf8Path {
        &self.board
    }

    /// Write a weights file and return its path.
    pub(super) fn weights(&self, contents: &str) -> Utf8PathBuf {
        let path = self.root.join("weights.json");
        write_utf8(&path, contents.as_bytes());
        path
    }

    /// Shared configuration reading this board at the fixed reference date.
    pub(super) fn shared(&self) -> SharedConfig {
        SharedConfig {
            board: self.board.clone(),
            weights: None,
            as_of: Some(reference_date()),
            output: None,
        }
    }
}

/// Decode captured command output as JSON.
pub(super) fn output_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}
