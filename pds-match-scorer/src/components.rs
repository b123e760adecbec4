//! The four component scores.
//!
//! Each function is total: sparse or missing input degrades to `0.0` rather
//! than failing, and every result lies in `0.0..=1.0`.

use chrono::NaiveDate;
use pds_match_core::{EducationEntry, EducationLevel, WorkExperience};

use crate::ScoreTiers;
use crate::normalize::{fold_case, loosely_matches, ratio};

/// Score the candidate's highest degree against the required level.
///
/// Unrecognised degree text counts as ordinal `0`, so it still earns the
/// one-below tier against a High School requirement.
///
/// # Examples
/// ```
/// use pds_match_core::{EducationEntry, EducationLevel};
/// use pds_match_scorer::{ScoreTiers, components::education_score};
///
/// let tiers = ScoreTiers::default();
/// let education = [EducationEntry::with_degree("Master")];
/// assert_eq!(education_score(&education, Some(EducationLevel::Doctorate), &tiers), 0.7);
/// assert_eq!(education_score(&education, None, &tiers), 0.0);
/// ```
#[must_use]
pub fn education_score(
    education: &[EducationEntry],
    required: Option<EducationLevel>,
    tiers: &ScoreTiers,
) -> f64 {
    let Some(level) = required else {
        return 0.0;
    };
    let Some(highest) = education
        .iter()
        .map(|entry| EducationLevel::degree_ordinal(&entry.degree))
        .max()
    else {
        return 0.0;
    };
    let required_ordinal = level.ordinal();
    if highest >= required_ordinal {
        1.0
    } else if highest.saturating_add(1) == required_ordinal {
        tiers.education_one_below
    } else {
        tiers.education_floor
    }
}

/// Total years across all positions as of `today`, overlaps included.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "experience accumulates fractional years"
)]
pub fn total_experience_years(work: &[WorkExperience], today: NaiveDate) -> f64 {
    work.iter().map(|entry| entry.years_served(today)).sum()
}

/// Score accumulated experience against the desired range.
///
/// Without a maximum the full-credit tier is unreachable and the best result
/// is the within-range tier. A zero minimum met by zero experience earns
/// full credit.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "shortfall credit divides experience by the minimum"
)]
pub fn experience_score(
    work: &[WorkExperience],
    min_years: Option<f64>,
    max_years: Option<f64>,
    today: NaiveDate,
    tiers: &ScoreTiers,
) -> f64 {
    let Some(min) = min_years else {
        return 0.0;
    };
    if work.is_empty() {
        return 0.0;
    }
    let total = total_experience_years(work, today);
    if min <= 0.0 && total <= 0.0 {
        return 1.0;
    }
    if max_years.is_some_and(|max| total >= max) {
        return 1.0;
    }
    if total >= min {
        return tiers.experience_within_range;
    }
    (total / min).max(tiers.experience_floor).clamp(0.0, 1.0)
}

/// Share of required skills covered by the candidate's skills.
///
/// # Examples
/// ```
/// use pds_match_scorer::components::skills_score;
///
/// let offered = ["JavaScript".to_owned(), "React".to_owned()];
/// let required = ["javascript".to_owned(), "vue".to_owned()];
/// assert_eq!(skills_score(&offered, &required), 0.5);
/// ```
#[must_use]
pub fn skills_score(offered: &[String], required: &[String]) -> f64 {
    coverage(offered, required)
}

/// Share of required eligibilities covered by the candidate's eligibilities.
#[must_use]
pub fn eligibility_score(offered: &[String], required: &[String]) -> f64 {
    coverage(offered, required)
}

fn coverage(offered: &[String], required: &[String]) -> f64 {
    if offered.is_empty() || required.is_empty() {
        return 0.0;
    }
    let folded: Vec<String> = offered.iter().map(|item| fold_case(item)).collect();
    let matched = required
        .iter()
        .filter(|item| {
            let needle = fold_case(item);
            folded.iter().any(|candidate| loosely_matches(&needle, candidate))
        })
        .count();
    ratio(matched, required.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[fixture]
    fn tiers() -> ScoreTiers {
        ScoreTiers::default()
    }

    #[fixture]
    fn five_years() -> Vec<WorkExperience> {
        vec![WorkExperience::ended(ymd(2016, 1, 1), ymd(2021, 1, 1))]
    }

    #[rstest]
    #[case(&["Doctorate"], EducationLevel::Bachelor, 1.0)]
    #[case(&["Bachelor"], EducationLevel::Bachelor, 1.0)]
    #[case(&["Associate"], EducationLevel::Bachelor, 0.7)]
    #[case(&["High School"], EducationLevel::Bachelor, 0.3)]
    #[case(&["Underwater Basket Weaving"], EducationLevel::HighSchool, 0.7)]
    #[case(&["High School", "Master"], EducationLevel::Doctorate, 0.7)]
    fn education_tiers(
        tiers: ScoreTiers,
        #[case] degrees: &[&str],
        #[case] required: EducationLevel,
        #[case] expected: f64,
    ) {
        let education: Vec<_> = degrees
            .iter()
            .map(|degree| EducationEntry::with_degree(*degree))
            .collect();
        assert_eq!(education_score(&education, Some(required), &tiers), expected);
    }

    #[rstest]
    fn education_without_entries_is_zero(tiers: ScoreTiers) {
        assert_eq!(
            education_score(&[], Some(EducationLevel::HighSchool), &tiers),
            0.0
        );
    }

    #[rstest]
    #[case(Some(3.0), Some(5.0), 1.0)]
    #[case(Some(3.0), Some(10.0), 0.8)]
    #[case(Some(3.0), None, 0.8)]
    #[case(Some(20.0), Some(25.0), 0.3)]
    #[case(None, Some(5.0), 0.0)]
    fn experience_tiers(
        tiers: ScoreTiers,
        five_years: Vec<WorkExperience>,
        #[case] min: Option<f64>,
        #[case] max: Option<f64>,
        #[case] expected: f64,
    ) {
        let today = ymd(2024, 1, 1);
        assert_eq!(experience_score(&five_years, min, max, today, &tiers), expected);
    }

    #[rstest]
    fn five_calendar_years_with_one_leap_day_fall_short_of_five(tiers: ScoreTiers) {
        // 1826 days over a 365.25-day year is just under five years.
        let work = [WorkExperience::ended(ymd(2017, 1, 1), ymd(2022, 1, 1))];
        assert_eq!(
            experience_score(&work, Some(3.0), Some(5.0), ymd(2024, 1, 1), &tiers),
            0.8
        );
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn experience_shortfall_is_proportional(tiers: ScoreTiers, five_years: Vec<WorkExperience>) {
        let score = experience_score(&five_years, Some(6.0), Some(8.0), ymd(2024, 1, 1), &tiers);
        assert!((score - 1827.0 / 365.25 / 6.0).abs() < 1e-12);
        assert!((score - 0.83).abs() < 0.01);
    }

    #[rstest]
    fn zero_minimum_with_zero_experience_is_full_credit(tiers: ScoreTiers) {
        let day = ymd(2020, 1, 1);
        let work = [WorkExperience::ended(day, day)];
        assert_eq!(experience_score(&work, Some(0.0), None, day, &tiers), 1.0);
    }

    #[rstest]
    fn current_position_counts_until_reference_date(tiers: ScoreTiers) {
        let work = [WorkExperience::current(ymd(2020, 1, 1))];
        assert_eq!(
            experience_score(&work, Some(3.0), Some(4.0), ymd(2024, 1, 2), &tiers),
            1.0
        );
        assert_eq!(
            experience_score(&work, Some(3.0), Some(4.0), ymd(2023, 6, 1), &tiers),
            0.8
        );
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "tests compare floating point values"
    )]
    fn overlapping_positions_are_summed() {
        let work = [
            WorkExperience::ended(ymd(2020, 1, 1), ymd(2021, 1, 1)),
            WorkExperience::ended(ymd(2020, 1, 1), ymd(2021, 1, 1)),
        ];
        let total = total_experience_years(&work, ymd(2024, 1, 1));
        assert!((total - 2.0 * 366.0 / 365.25).abs() < 1e-12);
    }

    #[rstest]
    #[case(&["JavaScript", "React"], &["javascript", "vue"], 0.5)]
    #[case(&["Java"], &["JavaScript"], 1.0)]
    #[case(&["Project Management"], &["management"], 1.0)]
    #[case(&[], &["excel"], 0.0)]
    #[case(&["excel"], &[], 0.0)]
    #[case(&[""], &["excel"], 1.0)]
    #[case(&["excel"], &["excel", ""], 1.0)]
    #[case(&[" "], &["project management"], 1.0)]
    #[case(&[" "], &["excel"], 0.0)]
    #[case(&["c "], &["c++"], 0.0)]
    fn skills_coverage(#[case] offered: &[&str], #[case] required: &[&str], #[case] expected: f64) {
        assert_eq!(skills_score(&strings(offered), &strings(required)), expected);
    }

    #[rstest]
    fn eligibility_without_candidate_entries_is_zero() {
        assert_eq!(
            eligibility_score(&[], &strings(&["Career Service Professional"])),
            0.0
        );
    }

    #[rstest]
    fn eligibility_matches_case_insensitively() {
        let offered = strings(&["CAREER SERVICE PROFESSIONAL", "RA 1080"]);
        let required = strings(&["career service professional", "Driver's License"]);
        assert_eq!(eligibility_score(&offered, &required), 0.5);
    }
}
